use std::fmt;

use crate::{Answer, Question, ValidationError};

/// What the user did with the question on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Store this answer and try to move forward.
    Submit(Answer),

    /// Go back to the previous question.
    Back,
}

/// Position within the live question sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Zero-based index of the current question.
    pub step: usize,

    /// Number of questions in the sequence right now. Grows when follow-ups are inserted.
    pub total: usize,
}

impl Progress {
    /// Whether going back is possible from here.
    pub fn can_go_back(&self) -> bool {
        self.step > 0
    }

    /// Completion in percent, capped at 100.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let percent = (self.step + 1) * 100 / self.total;
        percent.min(100) as u8
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}", self.step + 1, self.total)
    }
}

/// Trait for frontends that present wizard questions to a user.
///
/// Unlike a form, the question sequence changes while the wizard runs, so the
/// driver hands questions over one at a time and feeds the outcome back into
/// the engine.
pub trait WizardFrontend {
    /// The error type for this frontend.
    type Error: Into<anyhow::Error>;

    /// Present one question and wait for the user.
    ///
    /// # Arguments
    /// * `question` - The question to show
    /// * `progress` - Where the question sits in the live sequence
    /// * `current` - The answer given earlier, if the user came back to this question
    fn present(
        &mut self,
        question: &Question,
        progress: Progress,
        current: Option<&Answer>,
    ) -> Result<Navigation, Self::Error>;

    /// Tell the user why the wizard did not advance.
    ///
    /// The same question is presented again afterwards.
    fn report(&mut self, error: &ValidationError) -> Result<(), Self::Error>;

    /// Whether the frontend's error means the user walked away.
    ///
    /// The default treats every error as a frontend failure.
    fn is_cancellation(_error: &Self::Error) -> bool {
        false
    }
}
