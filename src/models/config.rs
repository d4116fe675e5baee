//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::report::ResearchQuestion;

/// Dataset column labels
///
/// Defaults match the reference dataset export, which carries
/// Portuguese-language headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLabels {
    /// Average Coupling Between Objects
    pub avg_cbo: String,
    /// Maximum Depth of Inheritance Tree
    pub dit_max: String,
    /// Average Lack of Cohesion of Methods
    pub avg_lcom: String,
    /// Star count
    pub stars: String,
    /// Repository age in years
    pub years: String,
    /// Number of releases
    pub releases: String,
    /// Lines of code
    pub loc: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            avg_cbo: "Média CBO".to_string(),
            dit_max: "DIT Max".to_string(),
            avg_lcom: "Média LCOM".to_string(),
            stars: "Estrelas".to_string(),
            years: "Anos".to_string(),
            releases: "Nº Releases".to_string(),
            loc: "LOC".to_string(),
        }
    }
}

impl ColumnLabels {
    /// All labels in dataset-validation order
    pub fn all(&self) -> [&str; 7] {
        [
            &self.avg_cbo,
            &self.dit_max,
            &self.avg_lcom,
            &self.stars,
            &self.years,
            &self.releases,
            &self.loc,
        ]
    }
}

/// Main configuration settings for metriscope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path of the dataset file to analyze
    pub data_path: PathBuf,

    /// Field delimiter of the dataset file
    pub delimiter: char,

    /// Dataset column labels
    pub columns: ColumnLabels,

    /// Research questions to analyze, in report order
    pub questions: Vec<ResearchQuestion>,

    /// Output format (text, json, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to render scatter and correlation-matrix plots
    pub generate_plots: bool,

    /// Directory plot files are written to
    pub plots_dir: PathBuf,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.csv"),
            delimiter: ',',
            columns: ColumnLabels::default(),
            questions: ResearchQuestion::ALL.to_vec(),
            output_format: OutputFormat::Text,
            output_file: None,
            generate_plots: true,
            plots_dir: PathBuf::from("plots"),
            quiet: false,
            verbose: false,
            use_colors: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSettings {
    pub data_path: Option<PathBuf>,
    pub delimiter: Option<char>,
    pub columns: Option<ColumnLabels>,
    pub questions: Option<Vec<ResearchQuestion>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub generate_plots: Option<bool>,
    pub plots_dir: Option<PathBuf>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.data_path.is_some() {
            self.data_path = other.data_path;
        }
        if other.delimiter.is_some() {
            self.delimiter = other.delimiter;
        }
        if other.columns.is_some() {
            self.columns = other.columns;
        }
        if other.questions.is_some() {
            self.questions = other.questions;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.generate_plots.is_some() {
            self.generate_plots = other.generate_plots;
        }
        if other.plots_dir.is_some() {
            self.plots_dir = other.plots_dir;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(data_path) = &self.data_path {
            settings.data_path = data_path.clone();
        }
        if let Some(delimiter) = self.delimiter {
            settings.delimiter = delimiter;
        }
        if let Some(columns) = &self.columns {
            settings.columns = columns.clone();
        }
        if let Some(questions) = &self.questions {
            settings.questions = questions.clone();
        }
        if let Some(output_format) = &self.output_format {
            settings.output_format = output_format.clone();
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(generate_plots) = self.generate_plots {
            settings.generate_plots = generate_plots;
        }
        if let Some(plots_dir) = &self.plots_dir {
            settings.plots_dir = plots_dir.clone();
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }

        settings
    }
}
