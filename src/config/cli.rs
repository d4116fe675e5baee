//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat, Question as CliQuestion};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};
use crate::models::report::ResearchQuestion;

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub data: Option<PathBuf>,
    pub questions: Option<Vec<ResearchQuestion>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub plots_dir: Option<PathBuf>,
    pub no_plots: bool,
    pub delimiter: Option<char>,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub config: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30, // Highest priority
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        let cli_args = CliArgs {
            data: args.data.clone(),
            questions: if args.question.is_empty() {
                None
            } else {
                Some(args.question.iter().map(|q| convert_question(*q)).collect())
            },
            output_format: Some(match args.output {
                CliOutputFormat::Text => OutputFormat::Text,
                CliOutputFormat::Json => OutputFormat::Json,
                CliOutputFormat::Csv => OutputFormat::Csv,
            }),
            output_file: args.output_file.clone(),
            plots_dir: args.plots_dir.clone(),
            no_plots: args.no_plots,
            delimiter: args.delimiter,
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            config: args.config.clone(),
        };

        Self::new(cli_args)
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            data_path: self.args.data.clone(),
            questions: self.args.questions.clone(),
            output_format: self.args.output_format.clone(),
            output_file: self.args.output_file.clone(),
            plots_dir: self.args.plots_dir.clone(),
            delimiter: self.args.delimiter,
            ..PartialSettings::default()
        };

        // Negative flags only override when actually given, so a config file
        // setting survives an unrelated invocation
        if self.args.no_plots {
            settings.generate_plots = Some(false);
        }
        if self.args.quiet {
            settings.quiet = Some(true);
        }
        if self.args.verbose {
            settings.verbose = Some(true);
        }
        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

/// Map a CLI question value to the models enum
fn convert_question(question: CliQuestion) -> ResearchQuestion {
    match question {
        CliQuestion::Popularity => ResearchQuestion::Popularity,
        CliQuestion::Maturity => ResearchQuestion::Maturity,
        CliQuestion::Activity => ResearchQuestion::Activity,
        CliQuestion::Size => ResearchQuestion::Size,
    }
}
