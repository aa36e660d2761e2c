use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span};

use crate::model::{Capabilities, QuizRecord};
use crate::storage::JsonExporter;
use crate::{CSV_FILE_NAME, DEFAULT_OUTPUT_DIR, ExportError, ExportResult, JSON_FILE_NAME};

/// Resolved settings for one export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    /// Whether to attempt the CSV step. Derived from `Capabilities` at startup.
    pub csv_enabled: bool,
}

impl ExportConfig {
    pub fn new(output_dir: impl Into<PathBuf>, capabilities: Capabilities) -> Self {
        ExportConfig { output_dir: output_dir.into(), csv_enabled: capabilities.csv }
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(JSON_FILE_NAME)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(CSV_FILE_NAME)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig::new(DEFAULT_OUTPUT_DIR, Capabilities::default())
    }
}

/// What a completed export produced.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub created_dir: bool,
    pub json_path: PathBuf,
    /// `None` when the CSV step was skipped.
    pub csv_path: Option<PathBuf>,
    pub records: usize,
}

/// Writes a fixed record sequence to the configured output directory.
#[derive(Debug, Clone)]
pub struct QuizExporter {
    records: Vec<QuizRecord>,
    config: ExportConfig,
}

impl QuizExporter {
    pub fn new(records: Vec<QuizRecord>, config: ExportConfig) -> Self {
        QuizExporter { records, config }
    }

    pub fn records(&self) -> &[QuizRecord] {
        &self.records
    }

    /// Create `path` and any missing parents. Returns whether anything was created.
    ///
    /// An existing directory is left alone.
    pub fn ensure_output_directory(path: &Path) -> ExportResult<bool> {
        if path.is_dir() {
            debug!(dir = %path.display(), "output directory exists");
            return Ok(false);
        }
        std::fs::create_dir_all(path).map_err(|e| ExportError::io(path, e))?;
        info!("Created directory: {}", path.display());
        Ok(true)
    }

    /// Write `records` as a pretty JSON array, replacing any existing file.
    pub fn write_json(records: &[QuizRecord], path: &Path) -> ExportResult<()> {
        JsonExporter::new().export(records, path)?;
        info!("Quiz file '{}' has been generated successfully.", path.display());
        Ok(())
    }

    /// Write `records` as CSV, one row per record, replacing any existing file.
    #[cfg(feature = "csv")]
    pub fn write_csv(records: &[QuizRecord], path: &Path) -> ExportResult<()> {
        crate::storage::CsvExporter::new().export(records, path)?;
        info!("Quiz file '{}' has been generated successfully.", path.display());
        Ok(())
    }

    /// Run the export: directory, then JSON, then CSV if enabled.
    pub fn run(&self) -> ExportResult<ExportSummary> {
        let created_dir = Self::ensure_output_directory(&self.config.output_dir)?;

        let json_path = self.config.json_path();
        Self::write_json(&self.records, &json_path)?;

        let csv_path = if self.config.csv_enabled {
            self.export_csv()?
        } else {
            info!("Skipped CSV generation: CSV output is not available in this run.");
            None
        };

        Ok(ExportSummary { created_dir, json_path, csv_path, records: self.records.len() })
    }

    #[cfg(feature = "csv")]
    fn export_csv(&self) -> ExportResult<Option<PathBuf>> {
        let path = self.config.csv_path();
        Self::write_csv(&self.records, &path)?;
        Ok(Some(path))
    }

    #[cfg(not(feature = "csv"))]
    fn export_csv(&self) -> ExportResult<Option<PathBuf>> {
        tracing::warn!("Skipped CSV generation: this build was compiled without the `csv` feature.");
        Ok(None)
    }
}

/// Export `records` with `config`, the entry point used by the CLI.
pub fn run(records: Vec<QuizRecord>, config: ExportConfig) -> ExportResult<ExportSummary> {
    let _span = info_span!("export", dir = %config.output_dir.display()).entered();
    debug!(output_dir = %config.output_dir.display(), csv = config.csv_enabled, "starting export");
    QuizExporter::new(records, config).run()
}
