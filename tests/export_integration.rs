//! Integration tests for the full export run.

use std::path::Path;

use neet_quiz::storage::JsonExporter;
use neet_quiz::{Capabilities, ExportConfig, QuizExporter, bank, export_cmd};

fn config_for(dir: &Path, csv_enabled: bool) -> ExportConfig {
    ExportConfig { output_dir: dir.to_path_buf(), csv_enabled }
}

#[test]
fn test_json_matches_bank() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("quizzes"), false);

    export_cmd::run(bank::neet_quiz(), config.clone()).expect("export should succeed");

    let records = JsonExporter::new().read_all(&config.json_path()).unwrap();
    assert_eq!(records, bank::neet_quiz());
}

#[test]
fn test_first_record_and_count() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), false);

    export_cmd::run(bank::neet_quiz(), config.clone()).unwrap();

    let text = std::fs::read_to_string(config.json_path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let items = value.as_array().expect("top level should be an array");
    assert_eq!(items.len(), 9);
    assert_eq!(items[0]["question_id"], 6);
    assert_eq!(items[0]["answer"], 3);
}

#[test]
fn test_export_twice_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), false);

    export_cmd::run(bank::neet_quiz(), config.clone()).unwrap();
    let first = std::fs::read(config.json_path()).unwrap();

    let summary = export_cmd::run(bank::neet_quiz(), config.clone()).unwrap();
    let second = std::fs::read(config.json_path()).unwrap();

    assert!(!summary.created_dir);
    assert_eq!(first, second);
}

#[test]
fn test_missing_capability_skips_csv() {
    let dir = tempfile::tempdir().unwrap();
    let config = ExportConfig::new(dir.path().join("out"), Capabilities::none());

    let summary = QuizExporter::new(bank::neet_quiz(), config.clone())
        .run()
        .expect("missing CSV support must not be an error");

    assert!(summary.csv_path.is_none());
    assert!(!config.csv_path().exists());
    let records = JsonExporter::new().read_all(&summary.json_path).unwrap();
    assert_eq!(records.len(), 9);
}

#[test]
fn test_unwritable_output_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"file in the way").unwrap();

    let result = export_cmd::run(bank::neet_quiz(), config_for(&blocker.join("quizzes"), false));
    assert!(result.is_err());
}

#[test]
fn test_duplicate_ids_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let mut records = bank::neet_quiz();
    records.push(records[0].clone());
    let exporter = QuizExporter::new(records, config_for(dir.path(), false));

    let summary = exporter.run().unwrap();
    assert_eq!(summary.records, 10);

    let written = JsonExporter::new().read_all(&summary.json_path).unwrap();
    assert_eq!(written.as_slice(), exporter.records());
    assert_eq!(written[0].question_id, written[9].question_id);
}

#[cfg(feature = "csv")]
mod csv_output {
    use super::*;
    use neet_quiz::ExportError;

    #[test]
    fn test_csv_has_header_and_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), true);

        let summary = export_cmd::run(bank::neet_quiz(), config.clone()).unwrap();
        assert_eq!(summary.csv_path.as_deref(), Some(config.csv_path().as_path()));

        let mut reader = csv::Reader::from_path(config.csv_path()).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["question_id", "question", "options", "answer", "explanation"]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9);
        assert_eq!(&rows[0][0], "6");
        assert_eq!(&rows[0][3], "3");

        // options round-trip through their cell
        let options: Vec<String> = serde_json::from_str(&rows[4][2]).unwrap();
        assert_eq!(options, bank::neet_quiz()[4].options);
    }

    #[test]
    fn test_csv_write_failure_is_an_error_after_json() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), true);
        std::fs::create_dir(config.csv_path()).unwrap();

        let result = export_cmd::run(bank::neet_quiz(), config.clone());

        assert!(matches!(result, Err(ExportError::Io { .. })));
        assert!(config.json_path().exists());
        let records = JsonExporter::new().read_all(&config.json_path()).unwrap();
        assert_eq!(records.len(), 9);
    }

    #[test]
    fn test_csv_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), true);
        std::fs::write(config.csv_path(), "old,contents\n1,2\n".repeat(100)).unwrap();

        export_cmd::run(bank::neet_quiz(), config.clone()).unwrap();

        let mut reader = csv::Reader::from_path(config.csv_path()).unwrap();
        assert_eq!(reader.records().count(), 9);
    }
}
