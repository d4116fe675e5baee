//! Command implementations

use super::Args;
use crate::config::{cli::CliConfig, ConfigBuilder, ConfigSource, EnvConfig};
use crate::core::Analyzer;
use crate::dataset::load_dataset;
use crate::error::{MetriscopeError, Result};
use crate::output::{create_formatter, create_writer};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Run the correlation analysis
    Analyze(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Analyze(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Analyze(args) => {
                // Validate arguments
                self.validate()?;

                // Convert Args to CliConfig
                let cli_config = CliConfig::from_args(args);

                // Load settings from CLI config
                let partial_settings = cli_config.load()?;

                // Build final settings, merging lowest priority first so the
                // CLI wins over the config file and the environment
                let config_builder =
                    ConfigBuilder::new().load_from(&EnvConfig::new("METRISCOPE"))?;

                let config_builder = if let Some(config_path) = cli_config.config_path() {
                    config_builder.add_config_file(config_path)?
                } else {
                    config_builder.try_add_default_config_file()
                };

                let settings = config_builder.merge(partial_settings).build()?;

                // Display startup information
                if !settings.quiet {
                    println!(
                        "{} v{} - design metrics correlation analyzer",
                        crate::NAME,
                        crate::VERSION
                    );
                    println!("Dataset: {}", settings.data_path.display());
                    println!("Output format: {}", settings.output_format);

                    if settings.verbose {
                        println!("Settings: {:#?}", settings);
                    }
                }

                // Load the dataset
                let dataset = load_dataset(
                    &settings.data_path,
                    settings.delimiter,
                    &settings.columns,
                )?;

                if !settings.quiet {
                    println!("Loaded {} repositories\n", dataset.len());
                }

                // Run the analysis
                let analyzer = Analyzer::new(settings.clone());
                let report = analyzer.analyze(&dataset)?;

                // Format and write the report
                let formatter = create_formatter(
                    &settings.output_format,
                    settings.use_colors && settings.output_file.is_none(),
                    settings.verbose,
                    settings.quiet,
                );
                let content = formatter.format(&report)?;

                let writer = create_writer(settings.output_file.as_ref());
                writer.write(&content)?;

                if !settings.quiet {
                    if let Some(output_file) = &settings.output_file {
                        println!("Report written to {}", output_file.display());
                    }
                    if settings.generate_plots {
                        println!(
                            "Rendered {} plots to {}",
                            report.summary.plots_rendered,
                            settings.plots_dir.display()
                        );
                    }
                }

                Ok(())
            }
            Command::Init => {
                // Create a default configuration file in the current directory
                let config_path = std::path::PathBuf::from(crate::config::DEFAULT_CONFIG_FILE);

                // Check if the file already exists
                if config_path.exists() {
                    println!(
                        "Configuration file already exists at: {}",
                        config_path.display()
                    );
                    println!("To overwrite it, delete the file first and run this command again.");
                    return Ok(());
                }

                // Create the configuration file
                crate::config::parser::create_default_config(&config_path)?;

                println!(
                    "Created default configuration file at: {}",
                    config_path.display()
                );
                println!("\nThe configuration file contains default settings that you can customize.");
                println!("\nExample configuration options:");
                println!("  - data_path: Dataset file to analyze");
                println!("  - delimiter: Field delimiter of the dataset file");
                println!("  - questions: Research questions to analyze");
                println!("  - output_format: Output format (text, json, csv)");
                println!("  - plots_dir: Directory plot files are written to");
                println!("  - [columns]: Dataset column label remapping");

                Ok(())
            }
        }
    }

    /// Validate the command arguments
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Analyze(args) => {
                // Validate data path if provided
                if let Some(path) = &args.data {
                    if !path.exists() {
                        return Err(MetriscopeError::DataFileNotFound {
                            path: path.clone(),
                            #[cfg(not(tarpaulin_include))]
                            backtrace: std::backtrace::Backtrace::capture(),
                        });
                    }
                }

                // Validate config file if provided
                if let Some(config_path) = &args.config {
                    if !config_path.exists() {
                        return Err(MetriscopeError::ConfigNotFound {
                            path: config_path.clone(),
                            #[cfg(not(tarpaulin_include))]
                            backtrace: std::backtrace::Backtrace::capture(),
                        });
                    }
                }

                Ok(())
            }
            // No validation needed for these commands
            Command::Init => Ok(()),
        }
    }
}
