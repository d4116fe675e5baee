use metriscope::{
    load_dataset, Analyzer, ResearchQuestion, Settings,
};
use metriscope::output::{create_formatter, Formatter};
use metriscope::models::config::OutputFormat;
use std::fs;
use tempfile::tempdir;

fn analyzed_report() -> metriscope::CorrelationReport {
    let dir = tempdir().unwrap();
    let path = dir.path().join("repos.csv");
    fs::write(
        &path,
        "Média CBO,DIT Max,Média LCOM,Estrelas,Anos,Nº Releases,LOC\n\
         1,2,50,10,1,1,1000\n2,4,40,20,2,3,2000\n3,6,30,30,3,2,3000\n\
         4,8,20,40,4,5,4000\n5,10,10,50,5,4,5000\n",
    )
    .unwrap();

    let settings = Settings {
        data_path: path.clone(),
        generate_plots: false,
        ..Settings::default()
    };
    let dataset = load_dataset(&path, settings.delimiter, &settings.columns).unwrap();
    Analyzer::new(settings).analyze(&dataset).unwrap()
}

#[test]
fn test_text_output_contains_every_pair() {
    let report = analyzed_report();
    let formatter = create_formatter(&OutputFormat::Text, false, false, false);
    let output = formatter.format(&report).unwrap();

    assert!(output.contains("Correlation Analysis"));
    for question in ResearchQuestion::ALL {
        assert!(output.contains(question.title()), "missing {}", question.title());
    }
    // Three metrics per question
    assert_eq!(output.matches("Spearman correlation between").count(), 12);
    assert!(output.contains("rho = 1.00"));
}

#[test]
fn test_json_output_parses_back() {
    let report = analyzed_report();
    let formatter = create_formatter(&OutputFormat::Json, false, false, false);
    let output = formatter.format(&report).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["questions"].as_array().unwrap().len(), 4);
    assert_eq!(parsed["summary"]["pairs_computed"], 12);
}

#[test]
fn test_csv_output_has_one_row_per_pair() {
    let report = analyzed_report();
    let formatter = create_formatter(&OutputFormat::Csv, false, false, false);
    let output = formatter.format(&report).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 13); // Header plus 4 questions x 3 metrics
    assert!(lines[0].starts_with("question,metric"));
    assert!(lines.iter().skip(1).all(|l| l.split(',').count() >= 7));
}

#[test]
fn test_quiet_text_output_is_compact() {
    let report = analyzed_report();
    let formatter = create_formatter(&OutputFormat::Text, false, false, true);
    let output = formatter.format(&report).unwrap();

    assert!(!output.contains("Correlation Analysis"));
    assert_eq!(output.lines().count(), 12);
}
