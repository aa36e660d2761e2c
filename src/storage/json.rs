//! Pretty-printed JSON export for quiz records.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::model::QuizRecord;
use crate::{ExportError, ExportResult};

const INDENT: &[u8] = b"    ";

/// JSON exporter for quiz records.
///
/// Writes the whole sequence as one top-level array with a fixed 4-space
/// indent, so the same records always produce the same bytes.
///
/// Non-ASCII characters are written as raw UTF-8, not as `\uXXXX` escapes.
/// Output for ASCII-only records is identical to an `ensure_ascii` encoder;
/// records with non-ASCII text differ from it byte-wise but parse the same.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        JsonExporter
    }

    /// Render records to the exact text `export` writes.
    pub fn to_pretty_string(&self, records: &[QuizRecord]) -> ExportResult<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        records.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| ExportError::Message(format!("non-UTF-8 JSON output: {e}")))
    }

    /// Export records to a JSON file, replacing any existing file.
    ///
    /// The parent directory must already exist.
    ///
    /// # Errors
    /// Returns an error if serialization or the file write fails.
    pub fn export(&self, records: &[QuizRecord], output: &Path) -> ExportResult<()> {
        let text = self.to_pretty_string(records)?;
        std::fs::write(output, text).map_err(|e| ExportError::io(output, e))
    }

    /// Export records to stdout.
    pub fn export_to_stdout(&self, records: &[QuizRecord]) -> ExportResult<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.export_to_writer(records, &mut handle)?;
        writeln!(handle).map_err(|e| ExportError::io("<stdout>", e))
    }

    /// Export records to any writer implementing Write.
    pub fn export_to_writer<W: Write>(&self, records: &[QuizRecord], mut writer: W) -> ExportResult<()> {
        let text = self.to_pretty_string(records)?;
        writer
            .write_all(text.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| ExportError::Message(format!("failed to write JSON: {e}")))
    }

    /// Read records back from a file written by `export`.
    ///
    /// # Errors
    /// Returns an error if the file doesn't exist or isn't a JSON array of records.
    pub fn read_all(&self, path: &Path) -> ExportResult<Vec<QuizRecord>> {
        if !path.exists() {
            return Err(ExportError::Message(format!("file not found: {}", path.display())));
        }
        let text = std::fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
        let records: Vec<QuizRecord> = serde_json::from_str(&text)?;
        Ok(records)
    }
}
