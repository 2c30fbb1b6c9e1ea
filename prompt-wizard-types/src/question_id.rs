use std::borrow::Borrow;
use std::fmt;

/// The key of a question, e.g. `"ai_platform"` or `"context_constraints"`.
///
/// Used as keys in `AnswerSet` and to locate questions in the live sequence.
/// Ids are flat strings; follow-up questions share the `context_` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create a new id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Check if the id is empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Returns the remainder of the id after `prefix`, if it starts with it.
    pub fn strip_prefix(&self, prefix: &str) -> Option<&str> {
        self.id.strip_prefix(prefix)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.id
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&QuestionId> for QuestionId {
    fn from(id: &QuestionId) -> Self {
        id.clone()
    }
}

impl PartialEq<str> for QuestionId {
    fn eq(&self, other: &str) -> bool {
        self.id == other
    }
}

impl PartialEq<&str> for QuestionId {
    fn eq(&self, other: &&str) -> bool {
        self.id == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let id = QuestionId::new("ai_platform");
        assert_eq!(id.as_str(), "ai_platform");
    }

    #[test]
    fn strip_prefix() {
        let id = QuestionId::new("context_constraints");
        assert_eq!(id.strip_prefix("context_"), Some("constraints"));
        assert_eq!(id.strip_prefix("other_"), None);
    }

    #[test]
    fn compares_with_str() {
        let id: QuestionId = "complexity".into();
        assert_eq!(id, "complexity");
        assert_ne!(id, "task_type");
    }

    #[test]
    fn display() {
        let id = QuestionId::new("extra_preferences");
        assert_eq!(format!("{id}"), "extra_preferences");
    }
}
