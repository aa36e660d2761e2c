//! Data model for neet-quiz.
//!
//! This module contains the `QuizRecord` schema shared by every output format
//! and the startup capability probe.

pub mod capability;
pub mod schema;

// Re-export key types for convenience
pub use capability::Capabilities;
pub use schema::QuizRecord;
