//! Error handling for the metriscope application
//!
//! This module provides the error handling system for the metriscope
//! application, including error types, result aliases, and error context
//! utilities.

pub mod context;
pub mod tests;
pub mod types;

pub use context::{handle_error, try_with_recovery, OptionExt, ResultExt};
pub use types::{ErrorSeverity, MetriscopeError, Result};
