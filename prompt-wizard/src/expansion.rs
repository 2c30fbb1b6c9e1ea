//! Follow-up questions driven by the context selection.
//!
//! Selecting context tags on the `context_details` question inserts one
//! follow-up per tag right after it, then a closing free-text question. The
//! rebuild always starts from scratch, so it can run any number of times.

use prompt_wizard_types::{AnswerSet, Question};
use tracing::debug;

use crate::catalog::{self, CONTEXT_DETAILS};
use crate::choices::{Choice, ContextTag};

/// The context tags currently selected, in declaration order.
///
/// Unknown keys are ignored.
pub fn selected_tags(answers: &AnswerSet) -> Vec<ContextTag> {
    answers
        .get_multi(CONTEXT_DETAILS)
        .map(ContextTag::pick)
        .unwrap_or_default()
}

/// Rebuild the follow-up questions from the current context selection.
///
/// Previously inserted questions are removed first. Answers to follow-ups whose
/// tag is no longer selected are discarded; the closing free-text answer is kept.
pub fn expand(questions: &mut Vec<Question>, answers: &mut AnswerSet) {
    let tags = selected_tags(answers);

    questions.retain(|question| !catalog::is_inserted(question.id()));

    let anchor = questions
        .iter()
        .position(|question| question.id() == CONTEXT_DETAILS)
        .map_or(questions.len(), |index| index + 1);

    let inserted = tags
        .iter()
        .map(|tag| catalog::follow_up(*tag))
        .chain(std::iter::once(catalog::extra_preferences()));
    questions.splice(anchor..anchor, inserted);

    for tag in ContextTag::ALL {
        if !tags.contains(tag) {
            answers.remove(catalog::follow_up_id(*tag));
        }
    }

    debug!(
        sequence = ?questions.iter().map(|q| q.id().as_str()).collect::<Vec<_>>(),
        "rebuilt follow-up questions"
    );
}
