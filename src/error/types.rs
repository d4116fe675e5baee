//! Error types and definitions for metriscope
//!
//! This module provides the error handling system for the metriscope
//! application, including error types, result aliases, and severity grading.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for metriscope operations
#[derive(Debug, Error)]
pub enum MetriscopeError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// CSV reading errors with file context
    #[error("CSV error in {}: {}", .file.display(), .source)]
    DatasetRead {
        file: PathBuf,
        #[source]
        source: csv::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Dataset file does not exist
    #[error("Dataset file not found: {}", .path.display())]
    DataFileNotFound {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// A configured column is missing from the dataset header
    #[error("Column '{}' not found in {}", .column, .file.display())]
    MissingColumn {
        column: String,
        file: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Dataset contains a header but no data rows
    #[error("Dataset {} contains no rows", .file.display())]
    EmptyDataset {
        file: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    TomlParse {
        #[source]
        source: toml::de::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {}", .path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Configuration file read errors
    #[error("Error reading configuration file {}: {}", .path.display(), .source)]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {}: {}", .path.display(), .source)]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Invalid output format
    #[error("Invalid output format: {format}")]
    InvalidOutputFormat {
        format: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Output file write errors
    #[error("Error writing to output file {}: {}", .path.display(), .source)]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Plot rendering errors
    #[error("Error rendering plot {}: {}", .path.display(), .message)]
    PlotRender {
        path: PathBuf,
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Correlation analysis errors
    #[error("Analysis error: {message}")]
    Analysis {
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// CSV serialization error
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },
}

impl MetriscopeError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - the report is unaffected by a lost plot
            MetriscopeError::PlotRender { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            MetriscopeError::Config { .. } => ErrorSeverity::Critical,
            MetriscopeError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            MetriscopeError::ConfigRead { .. } => ErrorSeverity::Critical,
            MetriscopeError::ConfigParse { .. } => ErrorSeverity::Critical,
            MetriscopeError::TomlParse { .. } => ErrorSeverity::Critical,
            MetriscopeError::InvalidOutputFormat { .. } => ErrorSeverity::Critical,
            MetriscopeError::StdoutWrite { .. } => ErrorSeverity::Critical,
            MetriscopeError::DataFileNotFound { .. } => ErrorSeverity::Critical,

            // Regular errors - current operation fails but overall process can continue
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            MetriscopeError::DataFileNotFound { path, .. } => {
                format!("Dataset file '{}' does not exist. Check the --data path or the data_path setting.", path.display())
            }
            MetriscopeError::MissingColumn { column, file, .. } => {
                format!("Column '{}' was not found in '{}'. Check the dataset header or remap the column in the [columns] section of the configuration file.", column, file.display())
            }
            MetriscopeError::EmptyDataset { file, .. } => {
                format!("Dataset '{}' contains a header but no data rows. Nothing to analyze.", file.display())
            }
            MetriscopeError::DatasetRead { file, source, .. } => {
                format!("Could not read '{}' as delimited data: {}. Check the file format and the --delimiter option.", file.display(), source)
            }
            MetriscopeError::Io { source, .. } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            MetriscopeError::ConfigNotFound { path, .. } => {
                format!("Configuration file not found at '{}'. Create a config file with --init or use command line options.", path.display())
            }
            MetriscopeError::PlotRender { path, message, .. } => {
                format!("Could not render plot '{}': {}. The correlation report is unaffected.", path.display(), message)
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Get a recovery suggestion for this error, if one exists
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            MetriscopeError::DataFileNotFound { .. } => {
                Some("Pass the dataset location with --data or set data_path in .metriscope.toml")
            }
            MetriscopeError::MissingColumn { .. } => {
                Some("Remap column labels under [columns] in the configuration file")
            }
            MetriscopeError::ConfigNotFound { .. } => {
                Some("Run with --init to create a default configuration file")
            }
            MetriscopeError::DatasetRead { .. } => {
                Some("If the file uses ';' or tab separators, pass --delimiter accordingly")
            }
            _ => None,
        }
    }

    /// Get the captured backtrace for this error, if available
    #[cfg(not(tarpaulin_include))]
    pub fn backtrace(&self) -> Option<&std::backtrace::Backtrace> {
        match self {
            MetriscopeError::Io { backtrace, .. }
            | MetriscopeError::DatasetRead { backtrace, .. }
            | MetriscopeError::DataFileNotFound { backtrace, .. }
            | MetriscopeError::MissingColumn { backtrace, .. }
            | MetriscopeError::EmptyDataset { backtrace, .. }
            | MetriscopeError::Config { backtrace, .. }
            | MetriscopeError::TomlParse { backtrace, .. }
            | MetriscopeError::ConfigNotFound { backtrace, .. }
            | MetriscopeError::ConfigRead { backtrace, .. }
            | MetriscopeError::ConfigParse { backtrace, .. }
            | MetriscopeError::InvalidOutputFormat { backtrace, .. }
            | MetriscopeError::OutputWrite { backtrace, .. }
            | MetriscopeError::StdoutWrite { backtrace, .. }
            | MetriscopeError::PlotRender { backtrace, .. }
            | MetriscopeError::Analysis { backtrace, .. }
            | MetriscopeError::JsonSerialize { backtrace, .. }
            | MetriscopeError::CsvSerialize { backtrace, .. } => Some(backtrace),
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        MetriscopeError::Io {
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a dataset read error with file context
    pub fn dataset_read_error(file: impl Into<PathBuf>, source: csv::Error) -> Self {
        MetriscopeError::DatasetRead {
            file: file.into(),
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        MetriscopeError::MissingColumn {
            column: column.into(),
            file: file.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        MetriscopeError::Config {
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a plot rendering error
    pub fn plot_render(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        MetriscopeError::PlotRender {
            path: path.into(),
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a correlation analysis error
    pub fn analysis_error(message: impl Into<String>) -> Self {
        MetriscopeError::Analysis {
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for MetriscopeError {
    fn from(err: std::io::Error) -> Self {
        MetriscopeError::io_error(err)
    }
}

impl From<toml::de::Error> for MetriscopeError {
    fn from(err: toml::de::Error) -> Self {
        MetriscopeError::TomlParse {
            source: err,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

impl From<serde_json::Error> for MetriscopeError {
    fn from(err: serde_json::Error) -> Self {
        MetriscopeError::JsonSerialize {
            source: err,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

/// Result type alias for metriscope operations
pub type Result<T> = std::result::Result<T, MetriscopeError>;
