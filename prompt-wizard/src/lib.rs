//! # prompt-wizard
//!
//! A step-by-step questionnaire that turns answers about an intended AI
//! interaction into an optimized prompt. Frontend-agnostic.
//!
//! ## Usage
//!
//! ```rust
//! use prompt_wizard::{Advance, Answer, WizardEngine};
//!
//! let mut engine = WizardEngine::new();
//! engine.submit_answer("ai_platform", Answer::Single("claude".into())).unwrap();
//! assert_eq!(engine.advance(), Ok(Advance::Next));
//!
//! // Unanswered questions block the wizard
//! let err = engine.advance().unwrap_err();
//! assert_eq!(err.to_string(), "Please answer the question: What type of task are you working on?");
//! ```
//!
//! ## Flow
//!
//! The wizard asks for the platform, task type, complexity, output formats and
//! which kinds of context to give. Each selected context kind inserts a
//! follow-up question, and a final free-text question closes the sequence.
//! Going back to the context selection and changing it rebuilds the follow-ups.
//!
//! ## Frontends
//!
//! Frontends implement `WizardFrontend` and are driven by [`run_session`]:
//! - `prompt-wizard-dialoguer` - CLI prompts via dialoguer
//! - [`ScriptedFrontend`] - pre-configured answers, for tests

// Re-export all types from prompt-wizard-types
pub use prompt_wizard_types::*;

pub mod assembler;
pub mod catalog;
pub mod choices;
pub mod expansion;
pub mod platform;

mod engine;
pub use engine::{Advance, WizardEngine};

mod session;
pub use session::run_session;

// Scripted frontend for running sessions without user interaction
mod scripted;
pub use scripted::{ScriptError, ScriptedFrontend};

pub use assembler::{PromptRequest, assemble_prompt};
pub use choices::{Choice, Platform, Selection};
pub use platform::PlatformProfile;
