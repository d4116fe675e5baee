//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MetriscopeError, Result};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MetriscopeError::ConfigNotFound {
            path: path.to_path_buf(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| MetriscopeError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace::capture(),
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    // Parse the TOML content
    let settings: PartialSettings =
        toml::from_str(content).map_err(|e| MetriscopeError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        })?;

    // Validate the parsed settings
    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(
    settings: &PartialSettings,
    path: P,
) -> Result<()> {
    let path = path.as_ref();

    // Validate data path if specified
    if let Some(data_path) = &settings.data_path {
        if data_path.as_os_str().is_empty() {
            return Err(MetriscopeError::Config {
                message: format!("Invalid empty data_path in config file: {}", path.display()),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }
    }

    // Validate delimiter if specified
    if let Some(delimiter) = settings.delimiter {
        if !delimiter.is_ascii() {
            return Err(MetriscopeError::Config {
                message: format!(
                    "Invalid delimiter '{}' in config file: {}. Must be a single ASCII character.",
                    delimiter,
                    path.display()
                ),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }
    }

    // Validate column labels if specified
    if let Some(columns) = &settings.columns {
        for label in columns.all() {
            if label.is_empty() {
                return Err(MetriscopeError::Config {
                    message: format!("Empty column label in config file: {}", path.display()),
                    #[cfg(not(tarpaulin_include))]
                    backtrace: std::backtrace::Backtrace::capture(),
                });
            }
        }
    }

    // Validate questions if specified
    if let Some(questions) = &settings.questions {
        if questions.is_empty() {
            return Err(MetriscopeError::Config {
                message: format!(
                    "Empty questions list in config file: {}. Remove the key to analyze all questions.",
                    path.display()
                ),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }
    }

    // Validate output file if specified
    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(MetriscopeError::Config {
                message: format!(
                    "Invalid empty output_file in config file: {}",
                    path.display()
                ),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }
    }

    // Validate plots dir if specified
    if let Some(plots_dir) = &settings.plots_dir {
        if plots_dir.as_os_str().is_empty() {
            return Err(MetriscopeError::Config {
                message: format!("Invalid empty plots_dir in config file: {}", path.display()),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }
    }

    Ok(())
}

/// Find the default configuration file in the current directory
pub fn find_default_config() -> Option<PathBuf> {
    let path = PathBuf::from(super::file::DEFAULT_CONFIG_FILE);
    if path.exists() && path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Default configuration file content
const DEFAULT_CONFIG_CONTENT: &str = r#"# metriscope configuration file
#
# Settings given on the command line take precedence over this file.

# Dataset file to analyze
data_path = "data.csv"

# Field delimiter of the dataset file
delimiter = ","

# Research questions to analyze ("popularity", "maturity", "activity", "size")
questions = ["popularity", "maturity", "activity", "size"]

# Output format: "text", "json" or "csv"
output_format = "text"

# Uncomment to write the report to a file instead of stdout
# output_file = "report.txt"

# Whether to render scatter and correlation-matrix plots
generate_plots = true

# Directory the plot files are written to
plots_dir = "plots"

# Whether to use colors in text output
use_colors = true

# Dataset column labels. Remap these when your export uses different headers.
[columns]
avg_cbo = "Média CBO"
dit_max = "DIT Max"
avg_lcom = "Média LCOM"
stars = "Estrelas"
years = "Anos"
releases = "Nº Releases"
loc = "LOC"
"#;

/// Create a default configuration file at the given path
pub fn create_default_config(path: &Path) -> Result<()> {
    fs::write(path, DEFAULT_CONFIG_CONTENT).map_err(|e| MetriscopeError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace::capture(),
    })
}
