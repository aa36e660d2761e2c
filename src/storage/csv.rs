//! CSV export for quiz records.

use std::io::Write;
use std::path::Path;

use crate::model::QuizRecord;
use crate::{ExportError, ExportResult};

/// CSV column headers, in `QuizRecord` field order.
pub const CSV_HEADERS: &[&str] = &["question_id", "question", "options", "answer", "explanation"];

/// CSV exporter for quiz records.
///
/// One row per record. The `options` list is flattened into a single cell
/// holding its compact JSON encoding.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter;

impl CsvExporter {
    /// Create a new CsvExporter.
    pub fn new() -> Self {
        CsvExporter
    }

    /// Export records to a CSV file, replacing any existing file.
    ///
    /// # Errors
    /// Returns an error if file operations or CSV writing fails.
    pub fn export(&self, records: &[QuizRecord], output: &Path) -> ExportResult<()> {
        let file = std::fs::File::create(output).map_err(|e| ExportError::io(output, e))?;
        self.export_to_writer(records, file)
    }

    /// Export records to stdout.
    pub fn export_to_stdout(&self, records: &[QuizRecord]) -> ExportResult<()> {
        let stdout = std::io::stdout();
        let handle = stdout.lock();
        self.export_to_writer(records, handle)
    }

    /// Export records to any writer implementing Write.
    pub fn export_to_writer<W: Write>(&self, records: &[QuizRecord], writer: W) -> ExportResult<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        csv_writer
            .write_record(CSV_HEADERS)
            .map_err(|e| ExportError::Message(format!("failed to write CSV headers: {e}")))?;

        for record in records {
            let row = self.record_to_row(record)?;
            csv_writer
                .write_record(&row)
                .map_err(|e| ExportError::Message(format!("failed to write CSV row: {e}")))?;
        }

        csv_writer
            .flush()
            .map_err(|e| ExportError::Message(format!("failed to flush CSV writer: {e}")))?;

        Ok(())
    }

    /// Convert a QuizRecord to a row of CSV values.
    fn record_to_row(&self, record: &QuizRecord) -> ExportResult<Vec<String>> {
        Ok(vec![
            record.question_id.to_string(),
            record.question.clone(),
            serde_json::to_string(&record.options)?,
            record.answer.to_string(),
            record.explanation.clone(),
        ])
    }
}
