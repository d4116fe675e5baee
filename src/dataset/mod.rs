//! Dataset loading and column access
//!
//! One row per software repository, one named numeric column per variable.
//! Columns are materialized as `f64` vectors for the lifetime of a run;
//! cells that do not parse as numbers become NaN and are excluded pairwise
//! at correlation time.

pub mod loader;

pub use loader::load_dataset;

use crate::models::config::ColumnLabels;
use crate::models::report::{Metric, ResearchQuestion};
use std::path::PathBuf;

/// The seven columns of the repository dataset, as numeric vectors
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Path the dataset was loaded from
    pub path: PathBuf,
    /// Labels the columns were resolved under
    pub labels: ColumnLabels,
    pub avg_cbo: Vec<f64>,
    pub dit_max: Vec<f64>,
    pub avg_lcom: Vec<f64>,
    pub stars: Vec<f64>,
    pub years: Vec<f64>,
    pub releases: Vec<f64>,
    pub loc: Vec<f64>,
}

impl Dataset {
    /// Number of repositories (rows) in the dataset
    pub fn len(&self) -> usize {
        self.avg_cbo.len()
    }

    /// Whether the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.avg_cbo.is_empty()
    }

    /// The values of a design metric column
    pub fn metric(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::AvgCbo => &self.avg_cbo,
            Metric::MaxDit => &self.dit_max,
            Metric::AvgLcom => &self.avg_lcom,
        }
    }

    /// The dataset label of a design metric column
    pub fn metric_label(&self, metric: Metric) -> &str {
        match metric {
            Metric::AvgCbo => &self.labels.avg_cbo,
            Metric::MaxDit => &self.labels.dit_max,
            Metric::AvgLcom => &self.labels.avg_lcom,
        }
    }

    /// The outcome column of a research question
    pub fn outcome(&self, question: ResearchQuestion) -> &[f64] {
        match question {
            ResearchQuestion::Popularity => &self.stars,
            ResearchQuestion::Maturity => &self.years,
            ResearchQuestion::Activity => &self.releases,
            ResearchQuestion::Size => &self.loc,
        }
    }

    /// The dataset label of a research question's outcome column
    pub fn outcome_label(&self, question: ResearchQuestion) -> &str {
        match question {
            ResearchQuestion::Popularity => &self.labels.stars,
            ResearchQuestion::Maturity => &self.labels.years,
            ResearchQuestion::Activity => &self.labels.releases,
            ResearchQuestion::Size => &self.labels.loc,
        }
    }
}
