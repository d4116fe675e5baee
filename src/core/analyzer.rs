//! Correlation analysis orchestration
//!
//! One `QuestionReport` per research question: a Spearman entry per design
//! metric, a Pearson matrix over the metrics plus the outcome, and the
//! associated scatter/heatmap figures.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::core::stats;
use crate::dataset::Dataset;
use crate::error::{try_with_recovery, Result};
use crate::models::config::Settings;
use crate::models::report::{
    CorrelationEntry, CorrelationReport, Metric, QuestionReport, ResearchQuestion,
};
use crate::plot::{render_heatmap, render_scatter};

/// Runs the correlation analysis described by the settings
pub struct Analyzer {
    settings: Settings,
}

impl Analyzer {
    /// Create a new analyzer with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Analyze the dataset and produce the full correlation report
    ///
    /// Plot rendering failures are warnings: they are logged and the report
    /// is produced without the affected figure.
    pub fn analyze(&self, dataset: &Dataset) -> Result<CorrelationReport> {
        let start_time = Instant::now();
        let mut report = CorrelationReport::new(dataset.path.clone(), dataset.len());

        if self.settings.generate_plots {
            fs::create_dir_all(&self.settings.plots_dir)?;
        }

        let mut plots_rendered = 0;
        for &question in &self.settings.questions {
            let question_report = self.analyze_question(dataset, question);

            if self.settings.generate_plots {
                plots_rendered += self.render_question_plots(dataset, &question_report)?;
            }

            report.add_question(question_report);
        }

        report.summary.plots_rendered = plots_rendered;
        report.summary.analysis_duration = start_time.elapsed();

        Ok(report)
    }

    /// Correlate every design metric against one outcome variable
    fn analyze_question(&self, dataset: &Dataset, question: ResearchQuestion) -> QuestionReport {
        let outcome = dataset.outcome(question);
        let outcome_label = dataset.outcome_label(question);

        let entries: Vec<CorrelationEntry> = Metric::ALL
            .iter()
            .map(|&metric| {
                let result = stats::spearman(dataset.metric(metric), outcome);
                CorrelationEntry {
                    metric,
                    metric_label: dataset.metric_label(metric).to_string(),
                    outcome_label: outcome_label.to_string(),
                    samples: result.samples,
                    rho: result.rho,
                    p_value: result.p_value,
                }
            })
            .collect();

        let mut columns: Vec<(String, &[f64])> = Metric::ALL
            .iter()
            .map(|&metric| {
                (
                    dataset.metric_label(metric).to_string(),
                    dataset.metric(metric),
                )
            })
            .collect();
        columns.push((outcome_label.to_string(), outcome));

        QuestionReport {
            question,
            entries,
            matrix: stats::correlation_matrix(&columns),
        }
    }

    /// Render the scatter plots and the heatmap for one question
    ///
    /// Returns the number of figures actually written.
    fn render_question_plots(
        &self,
        dataset: &Dataset,
        question_report: &QuestionReport,
    ) -> Result<usize> {
        let question = question_report.question;
        let mut rendered = 0;

        for &metric in Metric::ALL.iter() {
            let path = self.scatter_path(question, metric);
            let (x_limit, y_limit) = scatter_limits(metric, question);
            let outcome = render_scatter(
                &path,
                &scatter_title(metric, question),
                dataset.metric_label(metric),
                dataset.outcome_label(question),
                dataset.metric(metric),
                dataset.outcome(question),
                x_limit,
                y_limit,
            );
            if try_with_recovery(|| outcome)?.is_some() {
                rendered += 1;
            }
        }

        let path = self.heatmap_path(question);
        let title = format!("{} correlation matrix", question.title());
        let outcome = render_heatmap(&path, &title, &question_report.matrix);
        if try_with_recovery(|| outcome)?.is_some() {
            rendered += 1;
        }

        Ok(rendered)
    }

    fn scatter_path(&self, question: ResearchQuestion, metric: Metric) -> PathBuf {
        self.settings
            .plots_dir
            .join(format!("scatter_{}_{}.png", question.slug(), metric.slug()))
    }

    fn heatmap_path(&self, question: ResearchQuestion) -> PathBuf {
        self.settings
            .plots_dir
            .join(format!("correlation_matrix_{}.png", question.slug()))
    }
}

/// Scatter plot title for one metric/outcome pair
fn scatter_title(metric: Metric, question: ResearchQuestion) -> String {
    let metric_name = match metric {
        Metric::AvgCbo => "CBO",
        Metric::MaxDit => "DIT",
        Metric::AvgLcom => "LCOM",
    };
    let outcome_phrase = match question {
        ResearchQuestion::Popularity => "number of stars",
        ResearchQuestion::Maturity => "repository age",
        ResearchQuestion::Activity => "number of releases",
        ResearchQuestion::Size => "lines of code",
    };
    format!("Relationship between {} and {}", metric_name, outcome_phrase)
}

/// Axis limits for one metric/outcome pair, matching the reference analysis
#[allow(clippy::type_complexity)]
fn scatter_limits(
    metric: Metric,
    question: ResearchQuestion,
) -> (Option<(f64, f64)>, Option<(f64, f64)>) {
    use Metric::*;
    use ResearchQuestion::*;

    let x_limit = match (metric, question) {
        (AvgCbo, _) => Some((0.0, 14.0)),
        (MaxDit, _) => Some((0.0, 100.0)),
        (AvgLcom, Popularity) | (AvgLcom, Size) => Some((0.0, 200.0)),
        (AvgLcom, Maturity) | (AvgLcom, Activity) => Some((0.0, 100.0)),
    };

    // LOC scales dwarf the bulk of the data without a cap
    let y_limit = match (metric, question) {
        (MaxDit, Size) => Some((0.0, 1_000_000.0)),
        (AvgLcom, Size) => Some((0.0, 2_500_000.0)),
        _ => None,
    };

    (x_limit, y_limit)
}
