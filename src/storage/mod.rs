//! Storage layer for quiz records.
//!
//! JSON is always available; CSV is compiled in with the `csv` feature.

#[cfg(feature = "csv")]
pub mod csv;
pub mod json;

// Re-export key types
#[cfg(feature = "csv")]
pub use self::csv::{CSV_HEADERS, CsvExporter};
pub use self::json::JsonExporter;
