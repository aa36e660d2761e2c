//! QuizRecord schema - one multiple-choice question as it appears in every export.

use serde::{Deserialize, Serialize};

/// A single quiz question.
///
/// Field declaration order is the serialization order, so reordering fields
/// changes the JSON output and the CSV column layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    /// Opaque identifier carried over from the source paper. Not unique.
    pub question_id: i64,
    pub question: String,
    /// Options in display order, each already carrying its "N. " label.
    pub options: Vec<String>,
    /// Reference to the correct option, stored exactly as given.
    ///
    /// Some records count from the option label, others do not; see the
    /// explanation of question 25. Nothing here tries to normalize it.
    pub answer: i64,
    pub explanation: String,
}

impl QuizRecord {
    pub fn new(
        question_id: i64,
        question: impl Into<String>,
        options: &[&str],
        answer: i64,
        explanation: impl Into<String>,
    ) -> Self {
        QuizRecord {
            question_id,
            question: question.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer,
            explanation: explanation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_in_json() {
        let record = QuizRecord::new(1, "q", &["1. a", "2. b"], 2, "e");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"question_id":1,"question":"q","options":["1. a","2. b"],"answer":2,"explanation":"e"}"#
        );
    }

    #[test]
    fn test_deserialize_preserves_answer_verbatim() {
        let json = r#"{"question_id":25,"question":"q","options":["1. a"],"answer":3,"explanation":"e"}"#;
        let record: QuizRecord = serde_json::from_str(json).unwrap();
        // answer points past the single option; it must survive untouched
        assert_eq!(record.answer, 3);
        assert_eq!(record.options.len(), 1);
    }
}
