//! Core analysis functionality

pub mod analyzer;
pub mod stats;

pub use analyzer::Analyzer;
pub use stats::{correlation_matrix, filter_finite_pairs, pearson, spearman, SpearmanResult};
