use crate::{Answer, QuestionId};

/// A single question in the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The key under which this question's answer is stored.
    id: QuestionId,

    /// The headline shown to the user.
    title: String,

    /// A sentence explaining why the question is asked.
    description: String,

    /// The kind of question (determines input type and options).
    kind: QuestionKind,
}

impl Question {
    /// Create a new question.
    pub fn new(
        id: impl Into<QuestionId>,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: QuestionKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            kind,
        }
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// The options offered by a choice question, empty for free text.
    pub fn options(&self) -> &[ChoiceOption] {
        match &self.kind {
            QuestionKind::SingleChoice(choice) | QuestionKind::MultiChoice(choice) => {
                &choice.options
            }
            QuestionKind::FreeText(_) => &[],
        }
    }

    /// Look up an offered option by its value.
    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        self.options().iter().find(|option| option.value == value)
    }

    /// Check whether an answer has the shape this question expects.
    pub fn accepts(&self, answer: &Answer) -> bool {
        matches!(
            (&self.kind, answer),
            (QuestionKind::SingleChoice(_), Answer::Single(_))
                | (QuestionKind::MultiChoice(_), Answer::Multi(_))
                | (QuestionKind::FreeText(_), Answer::Text(_))
        )
    }
}

/// The kind of question, determining input type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick exactly one option (radio buttons).
    SingleChoice(ChoiceQuestion),

    /// Pick any number of options, at least one to advance (checkboxes).
    MultiChoice(ChoiceQuestion),

    /// Free-form text.
    FreeText(TextQuestion),
}

impl QuestionKind {
    /// Single-choice question over the given options.
    pub fn single(options: Vec<ChoiceOption>) -> Self {
        Self::SingleChoice(ChoiceQuestion::new(options))
    }

    /// Multi-choice question over the given options.
    pub fn multi(options: Vec<ChoiceOption>) -> Self {
        Self::MultiChoice(ChoiceQuestion::new(options))
    }

    /// Free-text question with an example hint.
    pub fn text(placeholder: impl Into<String>) -> Self {
        Self::FreeText(TextQuestion::with_placeholder(placeholder))
    }

    /// The answer type name this kind expects, for error messages.
    pub fn expected_answer(&self) -> &'static str {
        match self {
            Self::SingleChoice(_) => "Single",
            Self::MultiChoice(_) => "Multi",
            Self::FreeText(_) => "Text",
        }
    }
}

/// One selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// The stored value, e.g. `"code_examples"`.
    pub value: String,

    /// Display label, e.g. `"Code examples"`.
    pub label: String,

    /// One-line explanation shown under the label.
    pub description: String,
}

impl ChoiceOption {
    pub fn new(
        value: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Configuration for a single- or multi-choice question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceQuestion {
    /// The options, in display order.
    pub options: Vec<ChoiceOption>,
}

impl ChoiceQuestion {
    /// Create a new choice question with the given options.
    pub fn new(options: Vec<ChoiceOption>) -> Self {
        Self { options }
    }
}

/// Configuration for a free-text question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuestion {
    /// Example input shown as a hint.
    pub placeholder: Option<String>,
}

impl TextQuestion {
    /// Create a new text question without a hint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an example hint.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complexity() -> Question {
        Question::new(
            "complexity",
            "How complex is your task?",
            "",
            QuestionKind::single(vec![
                ChoiceOption::new("simple", "Simple", ""),
                ChoiceOption::new("expert", "Expert Level", ""),
            ]),
        )
    }

    #[test]
    fn finds_options_by_value() {
        let question = complexity();
        assert_eq!(question.options().len(), 2);
        assert_eq!(question.option("expert").unwrap().label, "Expert Level");
        assert!(question.option("hard").is_none());
    }

    #[test]
    fn accepts_only_matching_answer_shape() {
        let question = complexity();
        assert!(question.accepts(&Answer::Single("simple".into())));
        assert!(!question.accepts(&Answer::Text("simple".into())));
        assert!(!question.accepts(&Answer::Multi(vec!["simple".into()])));
    }

    #[test]
    fn free_text_has_no_options() {
        let question = Question::new("extra_preferences", "Anything else?", "", QuestionKind::text("e.g."));
        assert!(question.options().is_empty());
        assert_eq!(question.kind().expected_answer(), "Text");
    }
}
