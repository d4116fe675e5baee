use metriscope::{
    load_dataset, Analyzer, ColumnLabels, Metric, ResearchQuestion, Settings,
};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const HEADER: &str = "Média CBO,DIT Max,Média LCOM,Estrelas,Anos,Nº Releases,LOC";

/// Write a small dataset with known monotonic relationships:
/// CBO rises with stars, LCOM falls with stars.
fn write_dataset(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("repos.csv");
    let mut content = String::from(HEADER);
    content.push('\n');
    for i in 1..=10 {
        let i = i as f64;
        content.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            i * 0.8,           // Média CBO
            i,                 // DIT Max
            200.0 - i * 10.0,  // Média LCOM
            i * 100.0,         // Estrelas
            i * 0.5,           // Anos
            i * 2.0,           // Nº Releases
            i * 10_000.0       // LOC
        ));
    }
    fs::write(&path, content).expect("write dataset");
    path
}

fn settings_for(data_path: PathBuf) -> Settings {
    Settings {
        data_path,
        generate_plots: false,
        quiet: true,
        ..Settings::default()
    }
}

#[test]
fn test_full_analysis_over_fixture_dataset() {
    let dir = tempdir().unwrap();
    let data_path = write_dataset(dir.path());

    let settings = settings_for(data_path.clone());
    let dataset = load_dataset(&data_path, settings.delimiter, &settings.columns).unwrap();
    assert_eq!(dataset.len(), 10);

    let report = Analyzer::new(settings).analyze(&dataset).unwrap();

    assert_eq!(report.repository_count, 10);
    assert_eq!(report.questions.len(), 4);
    assert_eq!(report.summary.pairs_computed, 12);
    assert_eq!(report.summary.plots_rendered, 0);

    // Every pair in this dataset is perfectly monotonic
    for entry in report.all_entries() {
        assert_eq!(entry.samples, 10);
        assert!((entry.rho.abs() - 1.0).abs() < 1e-12);
        assert_eq!(entry.p_value, 0.0);
    }

    // LCOM falls while every outcome rises
    let popularity = &report.questions[0];
    assert_eq!(popularity.question, ResearchQuestion::Popularity);
    let lcom = popularity
        .entries
        .iter()
        .find(|e| e.metric == Metric::AvgLcom)
        .unwrap();
    assert!((lcom.rho + 1.0).abs() < 1e-12);

    // The Pearson matrix covers the three metrics plus the outcome
    assert_eq!(popularity.matrix.len(), 4);
    assert_eq!(popularity.matrix.labels[3], "Estrelas");
}

#[test]
fn test_analysis_with_missing_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sparse.csv");
    fs::write(
        &path,
        format!(
            "{}\n1,2,30,100,1,2,1000\n2,n/a,25,200,2,4,2000\n3,6,20,300,3,6,3000\n4,8,15,400,4,8,4000\n5,10,10,500,5,10,5000\n",
            HEADER
        ),
    )
    .unwrap();

    let settings = settings_for(path.clone());
    let dataset = load_dataset(&path, settings.delimiter, &settings.columns).unwrap();
    let report = Analyzer::new(settings).analyze(&dataset).unwrap();

    let popularity = &report.questions[0];
    let dit = popularity
        .entries
        .iter()
        .find(|e| e.metric == Metric::MaxDit)
        .unwrap();

    // The unparseable DIT cell drops exactly one pair
    assert_eq!(dit.samples, 4);
    assert!((dit.rho - 1.0).abs() < 1e-12);

    // Other metrics keep all five pairs
    let cbo = popularity
        .entries
        .iter()
        .find(|e| e.metric == Metric::AvgCbo)
        .unwrap();
    assert_eq!(cbo.samples, 5);
}

#[test]
fn test_single_question_selection() {
    let dir = tempdir().unwrap();
    let data_path = write_dataset(dir.path());

    let settings = Settings {
        questions: vec![ResearchQuestion::Activity],
        ..settings_for(data_path.clone())
    };
    let dataset = load_dataset(&data_path, settings.delimiter, &settings.columns).unwrap();
    let report = Analyzer::new(settings).analyze(&dataset).unwrap();

    assert_eq!(report.questions.len(), 1);
    assert_eq!(report.questions[0].question, ResearchQuestion::Activity);
    assert_eq!(report.summary.pairs_computed, 3);
}

#[test]
fn test_remapped_columns_end_to_end() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("english.csv");
    fs::write(
        &path,
        "avg_cbo,max_dit,avg_lcom,stars,age_years,releases,lines\n\
         1,2,30,10,1,1,100\n2,4,20,20,2,2,200\n3,6,10,30,3,3,300\n",
    )
    .unwrap();

    let columns = ColumnLabels {
        avg_cbo: "avg_cbo".to_string(),
        dit_max: "max_dit".to_string(),
        avg_lcom: "avg_lcom".to_string(),
        stars: "stars".to_string(),
        years: "age_years".to_string(),
        releases: "releases".to_string(),
        loc: "lines".to_string(),
    };
    let settings = Settings {
        columns,
        ..settings_for(path.clone())
    };

    let dataset = load_dataset(&path, settings.delimiter, &settings.columns).unwrap();
    let report = Analyzer::new(settings).analyze(&dataset).unwrap();

    let entry = &report.questions[0].entries[0];
    assert_eq!(entry.metric_label, "avg_cbo");
    assert_eq!(entry.outcome_label, "stars");
}
