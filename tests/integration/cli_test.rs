use clap::Parser;
use metriscope::cli::args::{Args, OutputFormat, Question};
use std::path::PathBuf;

#[test]
fn test_cli_args_parsing() {
    // Test default values
    let args = Args::parse_from(["metriscope"]);
    assert_eq!(args.data, None);
    assert!(args.question.is_empty());
    assert!(matches!(args.output, OutputFormat::Text));
    assert_eq!(args.output_file, None);
    assert_eq!(args.plots_dir, None);
    assert!(!args.no_plots);
    assert_eq!(args.delimiter, None);
    assert!(!args.quiet);
    assert!(!args.verbose);
    assert!(!args.init);

    // Test with arguments
    let args = Args::parse_from([
        "metriscope",
        "--data",
        "/test/repos.csv",
        "--question",
        "popularity",
        "--question",
        "size",
        "--output",
        "json",
        "--output-file",
        "report.json",
        "--plots-dir",
        "figures",
        "--delimiter",
        ";",
        "--quiet",
        "--no-plots",
    ]);

    assert_eq!(args.data, Some(PathBuf::from("/test/repos.csv")));
    assert_eq!(args.question, vec![Question::Popularity, Question::Size]);
    assert!(matches!(args.output, OutputFormat::Json));
    assert_eq!(args.output_file, Some(PathBuf::from("report.json")));
    assert_eq!(args.plots_dir, Some(PathBuf::from("figures")));
    assert_eq!(args.delimiter, Some(';'));
    assert!(args.quiet);
    assert!(!args.verbose);
    assert!(args.no_plots);
}

#[test]
fn test_cli_config_option() {
    let args = Args::parse_from(["metriscope", "--config", "custom-config.toml"]);
    assert_eq!(args.config, Some(PathBuf::from("custom-config.toml")));
}

#[test]
fn test_cli_init_flag() {
    let args = Args::parse_from(["metriscope", "--init"]);
    assert!(args.init);
}

#[test]
fn test_cli_output_formats() {
    // Test text format
    let args = Args::parse_from(["metriscope", "--output", "text"]);
    assert!(matches!(args.output, OutputFormat::Text));

    // Test JSON format
    let args = Args::parse_from(["metriscope", "--output", "json"]);
    assert!(matches!(args.output, OutputFormat::Json));

    // Test CSV format
    let args = Args::parse_from(["metriscope", "--output", "csv"]);
    assert!(matches!(args.output, OutputFormat::Csv));
}

#[test]
fn test_cli_invalid_output_format() {
    assert!(Args::try_parse_from(["metriscope", "--output", "yaml"]).is_err());
}

#[test]
fn test_cli_invalid_question() {
    assert!(Args::try_parse_from(["metriscope", "--question", "velocity"]).is_err());
}

#[test]
fn test_cli_invalid_delimiter() {
    // Multi-character delimiters are rejected at parse time
    assert!(Args::try_parse_from(["metriscope", "--delimiter", "ab"]).is_err());
}
