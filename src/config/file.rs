//! Configuration file handling

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::Result;
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".metriscope.toml";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20, // Higher priority than environment variables but lower than CLI
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(crate::error::MetriscopeError::ConfigNotFound {
                path: self.path.clone(),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.exists() && self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 10, // Lower priority than file config
        }
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Ok(path) = std::env::var(format!("{}_DATA_PATH", self.prefix)) {
            settings.data_path = Some(PathBuf::from(path));
        }

        if let Ok(delimiter) = std::env::var(format!("{}_DELIMITER", self.prefix)) {
            let mut chars = delimiter.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                settings.delimiter = Some(c);
            }
        }

        if let Ok(format) = std::env::var(format!("{}_OUTPUT_FORMAT", self.prefix)) {
            if let Ok(output_format) = format.parse() {
                settings.output_format = Some(output_format);
            }
        }

        if let Ok(plots_dir) = std::env::var(format!("{}_PLOTS_DIR", self.prefix)) {
            settings.plots_dir = Some(PathBuf::from(plots_dir));
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        // Check if any relevant environment variables exist
        std::env::var(format!("{}_DATA_PATH", self.prefix)).is_ok()
            || std::env::var(format!("{}_DELIMITER", self.prefix)).is_ok()
            || std::env::var(format!("{}_OUTPUT_FORMAT", self.prefix)).is_ok()
            || std::env::var(format!("{}_PLOTS_DIR", self.prefix)).is_ok()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
