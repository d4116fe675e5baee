//! Configuration settings validation and building

use std::path::Path;

use crate::config::{parser, ConfigSource};
use crate::error::{MetriscopeError, Result};
use crate::models::config::{PartialSettings, Settings};

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        // Validate the dataset file exists
        if !settings.data_path.exists() {
            return Err(MetriscopeError::DataFileNotFound {
                path: settings.data_path.clone(),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }

        // The csv reader takes the delimiter as a single byte
        if !settings.delimiter.is_ascii() {
            return Err(MetriscopeError::Config {
                message: format!(
                    "Invalid delimiter '{}'. Must be a single ASCII character.",
                    settings.delimiter
                ),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }

        if settings.questions.is_empty() {
            return Err(MetriscopeError::Config {
                message: "No research questions selected".to_string(),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }

        for label in settings.columns.all() {
            if label.is_empty() {
                return Err(MetriscopeError::Config {
                    message: "Column labels must not be empty".to_string(),
                    #[cfg(not(tarpaulin_include))]
                    backtrace: std::backtrace::Backtrace::capture(),
                });
            }
        }

        // Validate output file path is writable if specified
        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        // The plots directory is created on demand, but a file in its place
        // cannot be
        if settings.generate_plots && settings.plots_dir.is_file() {
            return Err(MetriscopeError::Config {
                message: format!(
                    "Plots directory '{}' exists and is a file",
                    settings.plots_dir.display()
                ),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }

        Ok(())
    }

    /// Validate that an output path is writable
    fn validate_output_path(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(MetriscopeError::Config {
                    message: format!(
                        "Output directory '{}' does not exist",
                        parent.display()
                    ),
                    #[cfg(not(tarpaulin_include))]
                    backtrace: std::backtrace::Backtrace::capture(),
                });
            }
        }

        Ok(())
    }
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    /// Fields from the merged settings take precedence over existing fields
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            let partial = source.load()?;
            Ok(self.merge(partial))
        } else {
            Ok(self)
        }
    }

    /// Load and merge a configuration file
    pub fn add_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let partial = parser::parse_config_file(path)?;
        Ok(self.merge(partial))
    }

    /// Load the default configuration file if one exists
    pub fn try_add_default_config_file(self) -> Self {
        match parser::find_default_config() {
            Some(path) => match parser::parse_config_file(&path) {
                Ok(partial) => self.merge(partial),
                // A broken default config file is ignored; explicit --config
                // paths fail loudly instead
                Err(_) => self,
            },
            None => self,
        }
    }

    /// Build final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }

    /// Build final settings without validating the dataset path
    ///
    /// Used by tests and by callers that construct settings before the
    /// dataset exists.
    pub fn build_unvalidated(self) -> Settings {
        self.partial.to_settings()
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
