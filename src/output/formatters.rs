//! Output formatting functionality
//!
//! This module provides formatters for different output formats.

use crate::error::{MetriscopeError, Result};
use crate::models::report::{CorrelationEntry, CorrelationReport, QuestionReport};
use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;

/// Interpretation guide shown ahead of the per-question sections
const INTERPRETATION_GUIDE: &str = "\
A value close to 1 indicates a strong positive correlation (as one variable increases, the other increases as well)
A value close to -1 indicates a strong negative correlation (as one variable increases, the other decreases)
A value close to 0 indicates no correlation between the variables
";

/// Format the full report as text
pub fn format_report_text(report: &CorrelationReport, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    if use_colors {
        output.push_str(&format!("{}\n\n", Blue.bold().paint("Correlation Analysis")));
    } else {
        output.push_str("Correlation Analysis\n\n");
    }

    output.push_str(&format!(
        "Dataset: {} ({} repositories)\n\n",
        report.dataset.display(),
        report.repository_count
    ));
    output.push_str(INTERPRETATION_GUIDE);

    for question in &report.questions {
        output.push_str(&format_question_text(question, use_colors, verbose));
    }

    output.push_str(&format!(
        "\nQuestions analyzed: {}\n",
        report.summary.questions_analyzed
    ));
    output.push_str(&format!("Pairs computed: {}\n", report.summary.pairs_computed));
    output.push_str(&format!(
        "Significant at p < 0.05: {}\n",
        report.summary.significant_pairs
    ));
    if report.summary.plots_rendered > 0 {
        output.push_str(&format!("Plots rendered: {}\n", report.summary.plots_rendered));
    }
    output.push_str(&format!(
        "Analysis duration: {}\n",
        report.summary.format_duration()
    ));

    output
}

/// Format a single research question section as text
pub fn format_question_text(question: &QuestionReport, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    let title = question.question.title();
    if use_colors {
        output.push_str(&format!("\n{}\n", Blue.bold().paint(title)));
    } else {
        output.push_str(&format!("\n{}\n", title));
    }
    output.push_str(&format!("{}\n", "-".repeat(title.len())));

    for entry in &question.entries {
        output.push_str(&format_entry_text(entry, use_colors));
        output.push('\n');
    }

    if verbose {
        output.push('\n');
        output.push_str(&format_matrix_text(question, use_colors));
    }

    output
}

/// Format one Spearman entry as a report line
fn format_entry_text(entry: &CorrelationEntry, use_colors: bool) -> String {
    let rho = entry.rho_display();
    let marker = entry.significance_marker();

    if !entry.rho.is_finite() {
        let note = format!(
            "Spearman correlation between {} and {}: undefined ({} finite pairs)",
            entry.metric_label, entry.outcome_label, entry.samples
        );
        return if use_colors {
            Yellow.paint(note).to_string()
        } else {
            note
        };
    }

    let rho_text = format!("{:.2}", rho);
    let rho_text = if !use_colors {
        rho_text
    } else if entry.is_significant() && rho > 0.0 {
        Green.bold().paint(rho_text).to_string()
    } else if entry.is_significant() {
        Red.bold().paint(rho_text).to_string()
    } else {
        Style::new().bold().paint(rho_text).to_string()
    };

    let mut line = format!(
        "Spearman correlation between {} and {}: rho = {}, p-value = {:.4}",
        entry.metric_label, entry.outcome_label, rho_text, entry.p_value
    );
    if !marker.is_empty() {
        line.push(' ');
        if use_colors {
            line.push_str(&Yellow.paint(marker).to_string());
        } else {
            line.push_str(marker);
        }
    }

    line
}

/// Format the Pearson matrix of a question as an aligned text table
fn format_matrix_text(question: &QuestionReport, use_colors: bool) -> String {
    let matrix = &question.matrix;
    let mut output = String::new();

    let header = "Pearson correlation matrix:";
    if use_colors {
        output.push_str(&format!("{}\n", Style::new().bold().paint(header)));
    } else {
        output.push_str(&format!("{}\n", header));
    }

    let label_width = matrix
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    // Column header row
    output.push_str(&" ".repeat(label_width + 2));
    for label in &matrix.labels {
        output.push_str(&format!("{:>12}", truncate_label(label, 12)));
    }
    output.push('\n');

    for (label, row) in matrix.labels.iter().zip(matrix.values.iter()) {
        output.push_str(&format!("  {:<width$}", label, width = label_width));
        for value in row {
            if value.is_finite() {
                output.push_str(&format!("{:>12.2}", value));
            } else {
                output.push_str(&format!("{:>12}", "-"));
            }
        }
        output.push('\n');
    }

    output
}

/// Truncate a column label to fit the matrix table
fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        label.to_string()
    } else {
        label.chars().take(max - 1).chain(std::iter::once('…')).collect()
    }
}

/// Format the full report as pretty-printed JSON
pub fn format_report_json(report: &CorrelationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Format the full report as CSV, one row per metric/outcome pair
pub fn format_report_csv(report: &CorrelationReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "question",
            "metric",
            "metric_label",
            "outcome_label",
            "samples",
            "rho",
            "p_value",
        ])
        .map_err(|e| MetriscopeError::analysis_error(format!("CSV header: {}", e)))?;

    for question in &report.questions {
        for entry in &question.entries {
            let samples = entry.samples.to_string();
            let rho = entry.rho.to_string();
            let p_value = entry.p_value.to_string();
            writer
                .write_record([
                    question.question.slug(),
                    entry.metric.slug(),
                    entry.metric_label.as_str(),
                    entry.outcome_label.as_str(),
                    samples.as_str(),
                    rho.as_str(),
                    p_value.as_str(),
                ])
                .map_err(|e| MetriscopeError::analysis_error(format!("CSV row: {}", e)))?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| MetriscopeError::analysis_error(format!("CSV flush: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| MetriscopeError::CsvSerialize {
        source: e,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace::capture(),
    })
}
