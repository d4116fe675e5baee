//! Command-line interface

pub mod args;
pub mod commands;

pub use args::{Args, OutputFormat, Question};
pub use commands::Command;
