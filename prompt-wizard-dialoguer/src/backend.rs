//! Dialoguer implementation of the WizardFrontend trait.

use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};
use prompt_wizard::{
    Answer, ChoiceOption, Navigation, Progress, Question, QuestionKind, TextQuestion,
    ValidationError, WizardFrontend,
};
use thiserror::Error;
use tracing::debug;

/// Text answer that steps back instead of submitting.
pub const BACK_KEYWORD: &str = ":back";

/// Error type for the Dialoguer frontend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the wizard (e.g., pressed Ctrl+C).
    #[error("Wizard cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn lift(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// Dialoguer frontend for interactive CLI prompts.
///
/// Escape on a choice question goes back one step, as does typing
/// [`BACK_KEYWORD`] into a text question.
#[derive(Debug, Default, Clone)]
pub struct DialoguerFrontend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerFrontend {
    /// Create a new Dialoguer frontend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a frontend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    pub fn is_colorful(&self) -> bool {
        self.colorful
    }

    fn ask_single(
        &self,
        question: &Question,
        current: Option<&Answer>,
    ) -> Result<Navigation, DialoguerError> {
        let options = question.options();
        let items = option_items(options);

        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder
            .with_prompt(question.title())
            .items(&items)
            .default(selected_index(options, current).unwrap_or(0));

        let picked = builder.interact_opt().map_err(lift)?;
        Ok(match picked {
            Some(idx) => Navigation::Submit(Answer::Single(options[idx].value.clone())),
            None => Navigation::Back,
        })
    }

    fn ask_multi(
        &self,
        question: &Question,
        current: Option<&Answer>,
    ) -> Result<Navigation, DialoguerError> {
        let options = question.options();
        let items = option_items(options);
        let defaults = checked_defaults(options, current);

        let mut builder: MultiSelect;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = MultiSelect::with_theme(&_theme);
        } else {
            builder = MultiSelect::new();
        }

        builder = builder
            .with_prompt(question.title())
            .items(&items)
            .defaults(&defaults);

        let picked = builder.interact_opt().map_err(lift)?;
        Ok(match picked {
            Some(indices) => Navigation::Submit(Answer::multi(
                indices.into_iter().map(|idx| options[idx].value.clone()),
            )),
            None => Navigation::Back,
        })
    }

    fn ask_text(
        &self,
        question: &Question,
        text_q: &TextQuestion,
        current: Option<&Answer>,
    ) -> Result<Navigation, DialoguerError> {
        if let Some(placeholder) = &text_q.placeholder {
            println!("  {placeholder}");
        }
        println!("  (type {BACK_KEYWORD} to go back)");

        let _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        builder = builder.with_prompt(question.title()).allow_empty(true);
        if let Some(previous) = current.and_then(Answer::as_text) {
            builder = builder.with_initial_text(previous);
        }

        let text = builder.interact_text().map_err(lift)?;
        Ok(text_navigation(text))
    }
}

/// One line per option: label, then description.
fn option_items(options: &[ChoiceOption]) -> Vec<String> {
    options
        .iter()
        .map(|option| format!("{} - {}", option.label, option.description))
        .collect()
}

fn selected_index(options: &[ChoiceOption], current: Option<&Answer>) -> Option<usize> {
    let value = current?.as_single()?;
    options.iter().position(|option| option.value == value)
}

fn checked_defaults(options: &[ChoiceOption], current: Option<&Answer>) -> Vec<bool> {
    let checked = current.and_then(Answer::as_multi).unwrap_or_default();
    options
        .iter()
        .map(|option| checked.iter().any(|value| *value == option.value))
        .collect()
}

fn text_navigation(text: String) -> Navigation {
    if text.trim() == BACK_KEYWORD {
        Navigation::Back
    } else {
        Navigation::Submit(Answer::Text(text))
    }
}

impl WizardFrontend for DialoguerFrontend {
    type Error = DialoguerError;

    fn present(
        &mut self,
        question: &Question,
        progress: Progress,
        current: Option<&Answer>,
    ) -> Result<Navigation, Self::Error> {
        debug!(question = %question.id(), %progress, "presenting question");

        println!();
        println!("{progress} ({}%)", progress.percent());
        if !question.description().is_empty() {
            println!("{}", question.description());
        }

        let navigation = match question.kind() {
            QuestionKind::SingleChoice(_) => self.ask_single(question, current)?,
            QuestionKind::MultiChoice(_) => self.ask_multi(question, current)?,
            QuestionKind::FreeText(text_q) => self.ask_text(question, text_q, current)?,
        };

        if matches!(navigation, Navigation::Back) && !progress.can_go_back() {
            println!("Already at the first question.");
        }
        Ok(navigation)
    }

    fn report(&mut self, error: &ValidationError) -> Result<(), Self::Error> {
        println!("Error: {error}");
        Ok(())
    }

    fn is_cancellation(error: &Self::Error) -> bool {
        matches!(error, DialoguerError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<ChoiceOption> {
        vec![
            ChoiceOption::new("simple", "Simple", "Basic questions or straightforward tasks"),
            ChoiceOption::new("expert", "Expert Level", "Highly specialized or cutting-edge topics"),
        ]
    }

    #[test]
    fn frontend_creation() {
        assert!(DialoguerFrontend::new().is_colorful());
        assert!(!DialoguerFrontend::plain().is_colorful());
        assert!(!DialoguerFrontend::default().is_colorful());
    }

    #[test]
    fn error_types() {
        let err = DialoguerError::Cancelled;
        assert_eq!(err.to_string(), "Wizard cancelled by user");
        assert!(DialoguerFrontend::is_cancellation(&err));

        let io = std::io::Error::new(std::io::ErrorKind::Interrupted, "ctrl-c");
        assert!(matches!(
            lift(dialoguer::Error::IO(io)),
            DialoguerError::Cancelled
        ));

        let io = std::io::Error::other("broken pipe");
        let err = lift(dialoguer::Error::IO(io));
        assert!(!DialoguerFrontend::is_cancellation(&err));
    }

    #[test]
    fn items_show_label_and_description() {
        assert_eq!(
            option_items(&options()),
            [
                "Simple - Basic questions or straightforward tasks",
                "Expert Level - Highly specialized or cutting-edge topics",
            ]
        );
    }

    #[test]
    fn previous_answer_preselects() {
        let options = options();
        let current = Answer::Single("expert".into());
        assert_eq!(selected_index(&options, Some(&current)), Some(1));
        assert_eq!(selected_index(&options, None), None);

        let current = Answer::multi(["simple"]);
        assert_eq!(checked_defaults(&options, Some(&current)), [true, false]);
        assert_eq!(checked_defaults(&options, None), [false, false]);
    }

    #[test]
    fn back_keyword_navigates_back() {
        assert_eq!(text_navigation(" :back ".into()), Navigation::Back);
        assert_eq!(
            text_navigation("Python 3.8+".into()),
            Navigation::Submit(Answer::Text("Python 3.8+".into()))
        );
    }
}
