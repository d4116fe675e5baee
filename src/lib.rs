#![feature(error_generic_member_access)]
//! metriscope - correlation analysis between object-oriented design metrics
//! and repository outcomes
//!
//! This library loads a tabular dataset of software repositories and
//! correlates the design metrics CBO, DIT and LCOM against popularity,
//! maturity, activity and size, reporting Spearman coefficients with
//! p-values and rendering scatter/heatmap figures.

pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod error;
pub mod models;
pub mod output;
pub mod plot;

// Re-export commonly used types
pub use crate::core::Analyzer;
pub use dataset::{load_dataset, Dataset};
pub use error::{
    handle_error, try_with_recovery, ErrorSeverity, MetriscopeError, OptionExt, Result, ResultExt,
};
pub use models::{
    config::{ColumnLabels, Settings},
    report::{CorrelationEntry, CorrelationReport, Metric, QuestionReport, ResearchQuestion},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
