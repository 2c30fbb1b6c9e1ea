//! Scripted frontend for running the wizard without user interaction.
//!
//! `ScriptedFrontend` answers each question from a pre-defined script keyed by
//! question id. This is useful for testing whole sessions, including going
//! back and changing earlier answers.
//!
//! # Example
//!
//! ```rust
//! use prompt_wizard::{ScriptedFrontend, WizardEngine, run_session};
//!
//! let mut frontend = ScriptedFrontend::new()
//!     .with_single("ai_platform", "chatgpt")
//!     .with_single("task_type", "learning")
//!     .with_single("complexity", "simple")
//!     .with_multi("output_format", ["explanations"])
//!     .with_multi("context_details", ["target_audience"])
//!     .with_text("context_target_audience", "High school students")
//!     .with_text("extra_preferences", "Use analogies");
//!
//! let mut engine = WizardEngine::new();
//! let prompt = run_session(&mut engine, &mut frontend).unwrap();
//! assert!(prompt.contains("Target audience: High school students."));
//! ```

use std::collections::{HashMap, VecDeque};

use prompt_wizard_types::{
    Answer, Navigation, Progress, Question, QuestionId, ValidationError, WizardFrontend,
};

/// How many questions a script may be shown before it is considered stuck.
const DEFAULT_MAX_PRESENTATIONS: usize = 256;

/// A frontend that replays pre-configured answers.
///
/// Each question id has a queue of moves. Moves are consumed in order; the last
/// one is reused whenever the question comes up again.
#[derive(Debug, Clone)]
pub struct ScriptedFrontend {
    script: HashMap<QuestionId, VecDeque<Navigation>>,
    presented: Vec<QuestionId>,
    reports: Vec<ValidationError>,
    max_presentations: usize,
}

/// Error type for ScriptedFrontend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("No scripted answer for question: {0}")]
    MissingAnswer(QuestionId),

    #[error("Script did not finish after {0} questions")]
    Stuck(usize),
}

impl ScriptedFrontend {
    /// Create a new empty script.
    pub fn new() -> Self {
        Self {
            script: HashMap::new(),
            presented: Vec::new(),
            reports: Vec::new(),
            max_presentations: DEFAULT_MAX_PRESENTATIONS,
        }
    }

    /// Queue a move for a question.
    pub fn with_move(mut self, id: impl Into<QuestionId>, navigation: Navigation) -> Self {
        self.script.entry(id.into()).or_default().push_back(navigation);
        self
    }

    /// Queue an answer for a question.
    pub fn with_answer(self, id: impl Into<QuestionId>, answer: Answer) -> Self {
        self.with_move(id, Navigation::Submit(answer))
    }

    /// Queue a single-choice answer.
    pub fn with_single(self, id: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        self.with_answer(id, Answer::Single(value.into()))
    }

    /// Queue a multi-choice answer.
    pub fn with_multi<I, S>(self, id: impl Into<QuestionId>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_answer(id, Answer::multi(values))
    }

    /// Queue a free-text answer.
    pub fn with_text(self, id: impl Into<QuestionId>, text: impl Into<String>) -> Self {
        self.with_answer(id, Answer::Text(text.into()))
    }

    /// Queue a step back from a question.
    pub fn with_back(self, id: impl Into<QuestionId>) -> Self {
        self.with_move(id, Navigation::Back)
    }

    /// Give up after this many presented questions.
    pub fn with_max_presentations(mut self, max: usize) -> Self {
        self.max_presentations = max;
        self
    }

    /// Ids of the questions shown so far, in order.
    pub fn presented(&self) -> &[QuestionId] {
        &self.presented
    }

    /// Validation errors reported so far.
    pub fn reports(&self) -> &[ValidationError] {
        &self.reports
    }
}

impl Default for ScriptedFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardFrontend for ScriptedFrontend {
    type Error = ScriptError;

    fn present(
        &mut self,
        question: &Question,
        _progress: Progress,
        _current: Option<&Answer>,
    ) -> Result<Navigation, Self::Error> {
        if self.presented.len() >= self.max_presentations {
            return Err(ScriptError::Stuck(self.presented.len()));
        }
        self.presented.push(question.id().clone());

        let moves = self
            .script
            .get_mut(question.id())
            .ok_or_else(|| ScriptError::MissingAnswer(question.id().clone()))?;
        let navigation = if moves.len() > 1 {
            moves.pop_front()
        } else {
            moves.front().cloned()
        };
        navigation.ok_or_else(|| ScriptError::MissingAnswer(question.id().clone()))
    }

    fn report(&mut self, error: &ValidationError) -> Result<(), Self::Error> {
        self.reports.push(error.clone());
        Ok(())
    }
}
