use prompt_wizard_types::{Navigation, WizardError, WizardFrontend};
use tracing::debug;

use crate::engine::WizardEngine;

/// Drive a frontend until the wizard is complete, then assemble the prompt.
///
/// Validation failures are reported to the frontend and the same question is
/// presented again. An answer the engine refuses to store is a frontend bug and
/// ends the session.
pub fn run_session<F: WizardFrontend>(
    engine: &mut WizardEngine,
    frontend: &mut F,
) -> Result<String, WizardError> {
    while let Some(question) = engine.current_question().cloned() {
        let progress = engine.progress();
        let current = engine.answers().get(question.id().as_str()).cloned();

        let navigation = frontend
            .present(&question, progress, current.as_ref())
            .map_err(lift::<F>)?;

        match navigation {
            Navigation::Back => {
                if !engine.retreat() {
                    debug!("already at the first question");
                }
            }
            Navigation::Submit(answer) => {
                engine
                    .submit_answer(question.id(), answer)
                    .map_err(WizardError::frontend)?;
                if let Err(err) = engine.advance() {
                    frontend.report(&err).map_err(lift::<F>)?;
                }
            }
        }
    }

    Ok(engine.assemble_prompt())
}

fn lift<F: WizardFrontend>(err: F::Error) -> WizardError {
    if F::is_cancellation(&err) {
        WizardError::Cancelled
    } else {
        WizardError::Frontend(err.into())
    }
}
