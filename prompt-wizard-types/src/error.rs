use crate::QuestionId;

/// Error type for running a wizard session.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// User cancelled the wizard (Ctrl+C)
    #[error("Wizard cancelled by user")]
    Cancelled,

    /// Frontend-specific failure (I/O, terminal trouble, etc.)
    #[error("Frontend error: {0}")]
    Frontend(#[from] anyhow::Error),
}

impl WizardError {
    /// Create a frontend error from any error type.
    pub fn frontend(err: impl Into<anyhow::Error>) -> Self {
        Self::Frontend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// The current question has no usable answer, so the wizard cannot advance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please answer the question: {title}")]
pub struct ValidationError {
    /// The unanswered question.
    pub id: QuestionId,

    /// Its title, as shown to the user.
    pub title: String,
}

/// An answer was rejected before being stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("No question '{0}' in the current sequence")]
    UnknownQuestion(QuestionId),

    #[error("Question '{id}' expects a {expected} answer, got {actual}")]
    KindMismatch {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Question '{id}' has no option '{value}'")]
    UnknownOption { id: QuestionId, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_question() {
        let err = ValidationError {
            id: "task_type".into(),
            title: "What type of task are you working on?".into(),
        };
        assert_eq!(
            err.to_string(),
            "Please answer the question: What type of task are you working on?"
        );
    }

    #[test]
    fn cancelled_is_detected() {
        assert!(WizardError::Cancelled.is_cancelled());
        assert!(!WizardError::frontend(anyhow::anyhow!("tty gone")).is_cancelled());
    }
}
