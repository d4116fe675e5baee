//! Output formatting and writing functionality

mod formatters;
mod writers;

pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::report::CorrelationReport;

/// Trait for different output formatters
pub trait Formatter {
    /// Format a correlation report into a string
    fn format(&self, report: &CorrelationReport) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &CorrelationReport) -> Result<String> {
        // In quiet mode, only output the coefficients themselves
        if self.quiet {
            let mut output = String::new();

            for entry in report.all_entries() {
                output.push_str(&format!(
                    "{} vs {}: rho = {:.2}, p = {:.4}\n",
                    entry.metric_label,
                    entry.outcome_label,
                    entry.rho_display(),
                    entry.p_value
                ));
            }

            return Ok(output);
        }

        Ok(formatters::format_report_text(
            report,
            self.use_colors,
            self.verbose,
        ))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &CorrelationReport) -> Result<String> {
        if self.pretty {
            formatters::format_report_json(report)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

/// CSV formatter for spreadsheet analysis
pub struct CsvFormatter;

impl CsvFormatter {
    /// Create a new CSV formatter
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn format(&self, report: &CorrelationReport) -> Result<String> {
        formatters::format_report_csv(report)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(
    format: &crate::models::config::OutputFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        crate::models::config::OutputFormat::Text => {
            Box::new(TextFormatter::new(use_colors, verbose, quiet))
        }
        crate::models::config::OutputFormat::Json => {
            Box::new(JsonFormatter::new(true)) // Use pretty printing by default
        }
        crate::models::config::OutputFormat::Csv => Box::new(CsvFormatter::new()),
    }
}
