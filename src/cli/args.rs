//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// metriscope - correlation analysis between design metrics and repository outcomes
#[derive(Parser, Debug)]
#[command(name = "metriscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Correlate object-oriented design metrics with repository outcomes")]
#[command(long_about = "metriscope loads a dataset of software repositories (one row per repository) \
and correlates the object-oriented design metrics CBO, DIT and LCOM against four outcome variables: \
popularity (stars), maturity (age in years), activity (release count) and size (lines of code). \
For each research question it reports Spearman rank correlations with two-sided p-values and renders \
scatter plots plus a Pearson correlation-matrix heatmap.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Analyze data.csv in the current directory
    metriscope

    # Analyze a specific dataset
    metriscope --data ./dataset/repositories.csv

    # Analyze a single research question (can be specified multiple times)
    metriscope --question popularity --question size

Output Options:
    # Output in JSON format
    metriscope --output json

    # Output in CSV format for spreadsheet analysis
    metriscope --output csv

    # Save the report to a file
    metriscope --output-file report.txt

    # Disable colored output
    metriscope --no-colors

Plot Options:
    # Write plot files to a custom directory
    metriscope --plots-dir ./figures

    # Skip plot rendering entirely
    metriscope --no-plots

Dataset Options:
    # Read a semicolon-delimited export
    metriscope --data export.csv --delimiter ';'

Configuration:
    # Use a specific configuration file
    metriscope --config ./metriscope-config.toml

    # Create a default configuration file
    metriscope --init

Verbosity:
    # Quiet mode with minimal output
    metriscope --quiet

    # Verbose mode with correlation matrices in the report
    metriscope --verbose

Common Workflows:
    # Coefficients only, no figures
    metriscope --data repos.csv --no-plots --quiet

    # Full report with matrices, saved for later
    metriscope --data repos.csv --verbose --output-file report.txt

    # Machine-readable export of a single question
    metriscope --question popularity --output json --output-file popularity.json
")]
pub struct Args {
    /// Dataset file to analyze
    #[arg(short, long, value_name = "FILE", help = "Dataset file to analyze (defaults to data.csv in the current directory)")]
    pub data: Option<PathBuf>,

    /// Research questions to analyze
    #[arg(short = 'Q', long = "question", value_enum, value_name = "QUESTION", help = "Research question to analyze (can be specified multiple times, defaults to all four)")]
    pub question: Vec<Question>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, help = "Output format for the report: 'text' for human-readable output, 'json' for machine processing, 'csv' for spreadsheet analysis")]
    pub output: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the report to (uses stdout if not specified, e.g., --output-file ./report.txt)")]
    pub output_file: Option<PathBuf>,

    /// Directory for plot files
    #[arg(long, value_name = "DIR", help = "Directory scatter and correlation-matrix PNGs are written to (defaults to ./plots)")]
    pub plots_dir: Option<PathBuf>,

    /// Skip plot rendering
    #[arg(long, help = "Skip plot rendering (only compute and report the correlation coefficients)")]
    pub no_plots: bool,

    /// Dataset field delimiter
    #[arg(long, value_name = "CHAR", help = "Field delimiter of the dataset file (defaults to ',', use ';' for semicolon-delimited exports)")]
    pub delimiter: Option<char>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output (only show the coefficients, no preamble or summary information)")]
    pub quiet: bool,

    /// Show detailed output
    #[arg(short, long, help = "Show detailed output (includes the Pearson correlation matrices and configuration information)")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful for terminals that don't support ANSI colors or for piping output)")]
    pub no_colors: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .metriscope.toml in current directory if not specified)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.metriscope.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

/// Research question options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Question {
    /// Design metrics vs. star count
    Popularity,
    /// Design metrics vs. repository age in years
    Maturity,
    /// Design metrics vs. release count
    Activity,
    /// Design metrics vs. lines of code
    Size,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
