use std::collections::HashMap;

use crate::{Answer, QuestionId};

/// Error type for typed answer access.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for question: {0}")]
    Missing(QuestionId),

    #[error("Type mismatch for question '{id}': expected {expected}, got {actual}")]
    TypeMismatch {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers collected so far, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSet {
    values: HashMap<QuestionId, Answer>,
}

impl AnswerSet {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer, replacing any previous one for the same question.
    pub fn insert(&mut self, id: impl Into<QuestionId>, answer: Answer) {
        self.values.insert(id.into(), answer);
    }

    /// Get the answer for a question.
    pub fn get(&self, id: &str) -> Option<&Answer> {
        self.values.get(id)
    }

    /// Check if a question has been answered.
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, id: &str) -> Option<Answer> {
        self.values.remove(id)
    }

    /// Add or remove one value of a multi-choice answer.
    ///
    /// Checking a value appends it unless already present; unchecking removes it.
    /// A non-multi answer for the same id is replaced.
    pub fn toggle(&mut self, id: impl Into<QuestionId>, value: &str, checked: bool) {
        let entry = self
            .values
            .entry(id.into())
            .or_insert_with(|| Answer::Multi(Vec::new()));
        if !matches!(entry, Answer::Multi(_)) {
            *entry = Answer::Multi(Vec::new());
        }
        if let Answer::Multi(values) = entry {
            if checked {
                if !values.iter().any(|v| v == value) {
                    values.push(value.to_string());
                }
            } else {
                values.retain(|v| v != value);
            }
        }
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get the chosen option of a single-choice question.
    pub fn get_single(&self, id: &str) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(Answer::Single(value)) => Ok(value),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.into(),
                expected: "Single",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.into())),
        }
    }

    /// Get the chosen options of a multi-choice question.
    pub fn get_multi(&self, id: &str) -> Result<&[String], AnswerError> {
        match self.get(id) {
            Some(Answer::Multi(values)) => Ok(values),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.into(),
                expected: "Multi",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.into())),
        }
    }

    /// Get the text of a free-text question.
    pub fn get_text(&self, id: &str) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(Answer::Text(text)) => Ok(text),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.into(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut answers = AnswerSet::new();
        answers.insert("ai_platform", Answer::Single("claude".into()));
        answers.insert("extra_preferences", Answer::Text("Python 3.8+".into()));

        assert_eq!(answers.get_single("ai_platform").unwrap(), "claude");
        assert_eq!(answers.get_text("extra_preferences").unwrap(), "Python 3.8+");
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut answers = AnswerSet::new();
        answers.toggle("output_format", "code_examples", true);
        answers.toggle("output_format", "bullet_points", true);
        answers.toggle("output_format", "code_examples", true);
        assert_eq!(
            answers.get_multi("output_format").unwrap(),
            ["code_examples", "bullet_points"]
        );

        answers.toggle("output_format", "code_examples", false);
        assert_eq!(answers.get_multi("output_format").unwrap(), ["bullet_points"]);
    }

    #[test]
    fn type_mismatch_error() {
        let mut answers = AnswerSet::new();
        answers.insert("complexity", Answer::Single("expert".into()));

        let result = answers.get_text("complexity");
        assert!(matches!(result, Err(AnswerError::TypeMismatch { .. })));
        assert!(matches!(
            answers.get_single("task_type"),
            Err(AnswerError::Missing(_))
        ));
    }

    #[test]
    fn blank_text_is_stored_but_blank() {
        let mut answers = AnswerSet::new();
        answers.insert("context_constraints", Answer::Text("  ".into()));
        assert!(answers.contains("context_constraints"));
        assert!(answers.get("context_constraints").unwrap().is_blank());
    }
}
