//! Correlation report structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// The research questions answered by one analysis run
///
/// Each question correlates the three design metrics against one outcome
/// variable of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchQuestion {
    /// Design metrics vs. star count
    Popularity,
    /// Design metrics vs. repository age in years
    Maturity,
    /// Design metrics vs. release count
    Activity,
    /// Design metrics vs. lines of code
    Size,
}

impl ResearchQuestion {
    /// All research questions in report order
    pub const ALL: [ResearchQuestion; 4] = [
        ResearchQuestion::Popularity,
        ResearchQuestion::Maturity,
        ResearchQuestion::Activity,
        ResearchQuestion::Size,
    ];

    /// Human-readable section title
    pub fn title(&self) -> &'static str {
        match self {
            ResearchQuestion::Popularity => "Popularity",
            ResearchQuestion::Maturity => "Maturity",
            ResearchQuestion::Activity => "Activity",
            ResearchQuestion::Size => "Size",
        }
    }

    /// Identifier used in file names and machine-readable output
    pub fn slug(&self) -> &'static str {
        match self {
            ResearchQuestion::Popularity => "popularity",
            ResearchQuestion::Maturity => "maturity",
            ResearchQuestion::Activity => "activity",
            ResearchQuestion::Size => "size",
        }
    }
}

impl std::str::FromStr for ResearchQuestion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "popularity" => Ok(ResearchQuestion::Popularity),
            "maturity" => Ok(ResearchQuestion::Maturity),
            "activity" => Ok(ResearchQuestion::Activity),
            "size" => Ok(ResearchQuestion::Size),
            _ => Err(format!("Invalid research question: {}", s)),
        }
    }
}

impl std::fmt::Display for ResearchQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// The object-oriented design metrics correlated against each outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Average Coupling Between Objects
    AvgCbo,
    /// Maximum Depth of Inheritance Tree
    MaxDit,
    /// Average Lack of Cohesion of Methods
    AvgLcom,
}

impl Metric {
    /// All metrics in report order
    pub const ALL: [Metric; 3] = [Metric::AvgCbo, Metric::MaxDit, Metric::AvgLcom];

    /// Identifier used in file names and machine-readable output
    pub fn slug(&self) -> &'static str {
        match self {
            Metric::AvgCbo => "avg_cbo",
            Metric::MaxDit => "dit_max",
            Metric::AvgLcom => "avg_lcom",
        }
    }
}

/// Spearman correlation between one metric and one outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationEntry {
    /// Which design metric this entry correlates
    pub metric: Metric,
    /// Dataset label of the metric column
    pub metric_label: String,
    /// Dataset label of the outcome column
    pub outcome_label: String,
    /// Number of finite pairs the coefficient was computed from
    pub samples: usize,
    /// Spearman's rank correlation coefficient (full precision)
    pub rho: f64,
    /// Two-sided p-value
    pub p_value: f64,
}

impl CorrelationEntry {
    /// Coefficient rounded to two decimal places, as reported to the analyst
    pub fn rho_display(&self) -> f64 {
        if self.rho.is_finite() {
            (self.rho * 100.0).round() / 100.0
        } else {
            self.rho
        }
    }

    /// Significance marker at the conventional 0.05 / 0.01 / 0.001 levels
    pub fn significance_marker(&self) -> &'static str {
        if !self.p_value.is_finite() {
            ""
        } else if self.p_value < 0.001 {
            "***"
        } else if self.p_value < 0.01 {
            "**"
        } else if self.p_value < 0.05 {
            "*"
        } else {
            ""
        }
    }

    /// Whether the correlation is significant at the 0.05 level
    pub fn is_significant(&self) -> bool {
        self.p_value.is_finite() && self.p_value < 0.05
    }
}

/// Pearson correlation matrix over a set of labelled columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Column labels, in row/column order
    pub labels: Vec<String>,
    /// values[i][j] is the Pearson coefficient between columns i and j
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Matrix dimension (number of columns)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the matrix has no columns
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Results for a single research question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionReport {
    pub question: ResearchQuestion,
    /// One Spearman entry per design metric
    pub entries: Vec<CorrelationEntry>,
    /// Pearson matrix over the three metrics plus the outcome
    pub matrix: CorrelationMatrix,
}

/// Complete report for one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationReport {
    /// Dataset the report was computed from
    pub dataset: PathBuf,
    /// Number of repositories (rows) in the dataset
    pub repository_count: usize,
    pub questions: Vec<QuestionReport>,
    pub summary: ReportSummary,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl CorrelationReport {
    /// Create a new empty report for the given dataset
    pub fn new(dataset: PathBuf, repository_count: usize) -> Self {
        Self {
            dataset,
            repository_count,
            questions: Vec::new(),
            summary: ReportSummary::default(),
            generated_at: chrono::Utc::now(),
        }
    }

    /// Add a question report and update the summary statistics
    pub fn add_question(&mut self, question: QuestionReport) {
        self.summary.questions_analyzed += 1;
        self.summary.pairs_computed += question.entries.len();
        self.summary.significant_pairs += question
            .entries
            .iter()
            .filter(|e| e.is_significant())
            .count();
        self.questions.push(question);
    }

    /// Entries across all questions, in report order
    pub fn all_entries(&self) -> impl Iterator<Item = &CorrelationEntry> + '_ {
        self.questions.iter().flat_map(|q| q.entries.iter())
    }
}

/// Summary statistics for a report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub questions_analyzed: usize,
    pub pairs_computed: usize,
    /// Pairs significant at the 0.05 level
    pub significant_pairs: usize,
    /// Plot files written (zero when plotting is disabled)
    pub plots_rendered: usize,
    pub analysis_duration: Duration,
}

impl ReportSummary {
    /// Format the analysis duration as a human-readable string
    pub fn format_duration(&self) -> String {
        let secs = self.analysis_duration.as_secs();
        let millis = self.analysis_duration.subsec_millis();

        if secs == 0 {
            format!("{}ms", millis)
        } else if secs < 60 {
            format!("{}.{:03}s", secs, millis)
        } else {
            let mins = secs / 60;
            let secs = secs % 60;
            format!("{}m {}s", mins, secs)
        }
    }
}
