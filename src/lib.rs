pub mod bank;
pub mod export_cmd;
pub mod model;
pub mod show_cmd;
pub mod storage;

use std::path::PathBuf;

use thiserror::Error;

pub use crate::model::{Capabilities, QuizRecord};
pub use export_cmd::{ExportConfig, ExportSummary, QuizExporter};

/// Directory the exporter writes into unless told otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "backend/data/quizzes";
pub const JSON_FILE_NAME: &str = "neet_quiz.json";
pub const CSV_FILE_NAME: &str = "neet_quiz.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Message(String),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io { path: path.into(), source }
    }
}

pub type ExportResult<T> = Result<T, ExportError>;
