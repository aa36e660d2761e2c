use clap::ValueEnum;
use tracing::debug;

use crate::model::{Capabilities, QuizRecord};
use crate::storage::JsonExporter;
use crate::{ExportError, ExportResult};

const CSV_UNAVAILABLE: &str = "CSV output is unavailable: rebuild with the `csv` feature";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Json,
    Csv,
}

/// Print `records` to stdout in the requested format.
pub fn run(records: &[QuizRecord], format: ShowFormat, capabilities: Capabilities) -> ExportResult<()> {
    debug!(?format, records = records.len(), "writing quiz bank to stdout");
    match format {
        ShowFormat::Json => JsonExporter::new().export_to_stdout(records),
        ShowFormat::Csv if !capabilities.csv => Err(ExportError::Message(CSV_UNAVAILABLE.into())),
        ShowFormat::Csv => write_csv(records),
    }
}

#[cfg(feature = "csv")]
fn write_csv(records: &[QuizRecord]) -> ExportResult<()> {
    crate::storage::CsvExporter::new().export_to_stdout(records)
}

#[cfg(not(feature = "csv"))]
fn write_csv(_records: &[QuizRecord]) -> ExportResult<()> {
    Err(ExportError::Message(CSV_UNAVAILABLE.into()))
}
