//! # prompt-wizard-dialoguer
//!
//! Dialoguer frontend for prompt-wizard.
//!
//! Questions are presented one at a time in a classic CLI wizard style.
//! Pressing Escape on a selection, or entering `:back` on a text question,
//! returns to the previous question.
//!
//! ## Example
//!
//! ```rust,no_run
//! use prompt_wizard::{WizardEngine, run_session};
//! use prompt_wizard_dialoguer::DialoguerFrontend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut frontend = DialoguerFrontend::new();
//!     let mut engine = WizardEngine::new();
//!     let prompt = run_session(&mut engine, &mut frontend)?;
//!     println!("{prompt}");
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{BACK_KEYWORD, DialoguerError, DialoguerFrontend};
