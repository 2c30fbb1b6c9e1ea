//! The wizard state machine.

use prompt_wizard_types::{
    Answer, AnswerSet, Progress, Question, QuestionId, QuestionKind, SubmitError, ValidationError,
};
use tracing::{debug, info};

use crate::assembler::{self, PromptRequest};
use crate::catalog::{self, AI_PLATFORM, CONTEXT_DETAILS};
use crate::choices::{Choice, Platform};
use crate::expansion;
use crate::platform::PlatformProfile;

/// Where `advance` left the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Another question is waiting.
    Next,
    /// Every question is answered; the prompt can be assembled.
    Complete,
}

/// One wizard session: the live question sequence, the answers and the current step.
///
/// `step` stays within `0..questions.len()` while questions remain and equals
/// `questions.len()` once the wizard is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardEngine {
    questions: Vec<Question>,
    answers: AnswerSet,
    step: usize,
}

impl WizardEngine {
    /// Start a fresh session with the declared questions.
    pub fn new() -> Self {
        Self {
            questions: catalog::base_questions(),
            answers: AnswerSet::new(),
            step: 0,
        }
    }

    /// The question waiting for an answer, or `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.step)
    }

    /// Store an answer for a question in the live sequence.
    ///
    /// The answer must match the question kind and only name offered options.
    /// Repeated values in a multi-choice answer are collapsed. Blank answers are
    /// stored; `advance` is what rejects them.
    pub fn submit_answer(
        &mut self,
        id: impl Into<QuestionId>,
        answer: Answer,
    ) -> Result<(), SubmitError> {
        let id = id.into();
        let answer = match answer {
            Answer::Multi(values) => Answer::multi(values),
            other => other,
        };
        let question = self.find(&id)?;

        if !question.accepts(&answer) {
            return Err(SubmitError::KindMismatch {
                id,
                expected: question.kind().expected_answer(),
                actual: answer.type_name(),
            });
        }

        let unknown = match &answer {
            Answer::Single(value) => (question.option(value).is_none()).then(|| value.clone()),
            Answer::Multi(values) => values
                .iter()
                .find(|value| question.option(value).is_none())
                .cloned(),
            Answer::Text(_) => None,
        };
        if let Some(value) = unknown {
            return Err(SubmitError::UnknownOption { id, value });
        }

        debug!(question = %id, answer = ?answer, "answer submitted");
        self.answers.insert(id, answer);
        Ok(())
    }

    /// Check or uncheck one option of a multi-choice question.
    pub fn toggle_option(
        &mut self,
        id: impl Into<QuestionId>,
        value: &str,
        checked: bool,
    ) -> Result<(), SubmitError> {
        let id = id.into();
        let question = self.find(&id)?;

        if !matches!(question.kind(), QuestionKind::MultiChoice(_)) {
            return Err(SubmitError::KindMismatch {
                id,
                expected: question.kind().expected_answer(),
                actual: "Multi",
            });
        }
        if question.option(value).is_none() {
            return Err(SubmitError::UnknownOption {
                id,
                value: value.to_string(),
            });
        }

        self.answers.toggle(id, value, checked);
        Ok(())
    }

    /// Check that the current question has a usable answer.
    pub fn validate_current(&self) -> Result<(), ValidationError> {
        let Some(question) = self.current_question() else {
            return Ok(());
        };
        match self.answers.get(question.id().as_str()) {
            Some(answer) if question.accepts(answer) && !answer.is_blank() => Ok(()),
            _ => Err(ValidationError {
                id: question.id().clone(),
                title: question.title().to_string(),
            }),
        }
    }

    /// Move to the next question if the current one is answered.
    ///
    /// Leaving the context selection rebuilds the follow-up questions.
    /// On a validation failure the step is unchanged.
    pub fn advance(&mut self) -> Result<Advance, ValidationError> {
        let Some(question) = self.current_question() else {
            return Ok(Advance::Complete);
        };
        let leaving_context = question.id() == CONTEXT_DETAILS;

        if let Err(err) = self.validate_current() {
            debug!(question = %err.id, "advance rejected");
            return Err(err);
        }

        self.step += 1;
        if leaving_context {
            expansion::expand(&mut self.questions, &mut self.answers);
        }
        debug!(step = self.step, total = self.questions.len(), "advanced");

        if self.is_complete() {
            Ok(Advance::Complete)
        } else {
            Ok(Advance::Next)
        }
    }

    /// Go back one question. Returns whether the step moved.
    ///
    /// Arriving back at the context selection rebuilds the follow-ups from the
    /// current answers.
    pub fn retreat(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        if self
            .current_question()
            .is_some_and(|question| question.id() == CONTEXT_DETAILS)
        {
            expansion::expand(&mut self.questions, &mut self.answers);
        }
        debug!(step = self.step, "retreated");
        true
    }

    /// Whether every question in the sequence has been passed.
    pub fn is_complete(&self) -> bool {
        self.step >= self.questions.len()
    }

    /// The answers as input for prompt assembly.
    pub fn prompt_request(&self) -> PromptRequest {
        PromptRequest::from_answers(&self.answers)
    }

    /// Assemble the prompt from the answers given so far.
    pub fn assemble_prompt(&self) -> String {
        assembler::assemble_prompt(&self.prompt_request())
    }

    /// Throw away all answers and inserted questions and start over.
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("wizard reset");
    }

    /// The platform chosen on the first question, if it is a known one.
    pub fn platform(&self) -> Option<Platform> {
        self.answers
            .get_single(AI_PLATFORM)
            .ok()
            .and_then(Platform::from_key)
    }

    pub fn platform_profile(&self) -> Option<&'static PlatformProfile> {
        self.platform().map(Platform::profile)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            step: self.step,
            total: self.questions.len(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn step(&self) -> usize {
        self.step
    }

    fn find(&self, id: &QuestionId) -> Result<&Question, SubmitError> {
        self.questions
            .iter()
            .find(|question| question.id() == id)
            .ok_or_else(|| SubmitError::UnknownQuestion(id.clone()))
    }
}

impl Default for WizardEngine {
    fn default() -> Self {
        Self::new()
    }
}
