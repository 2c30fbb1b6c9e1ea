//! Core types for the prompt-wizard crate.
//!
//! This crate provides the foundational types for defining wizards:
//! - `Question` and `QuestionKind` - Individual questions and their input types
//! - `Answer`, `AnswerSet` and `QuestionId` - Collected answers and their keys
//! - `WizardFrontend` - The seam for implementing frontends

mod question_id;
pub use question_id::QuestionId;

mod answer;
pub use answer::Answer;

mod answers;
pub use answers::{AnswerError, AnswerSet};

mod question;
pub use question::{ChoiceOption, ChoiceQuestion, Question, QuestionKind, TextQuestion};

mod error;
pub use error::{SubmitError, ValidationError, WizardError};

mod traits;
pub use traits::{Navigation, Progress, WizardFrontend};
