//! Fixed option sets offered by the wizard.
//!
//! Every set is an enum whose variants carry a stable key (the value stored in
//! answers), a display label and a short description. Keys coming back from a
//! frontend are parsed with `from_key`; anything else is kept as
//! [`Selection::Unrecognized`] so prompt assembly can fall back to generic text.

use std::fmt;
use std::str::FromStr;

use prompt_wizard_types::ChoiceOption;

/// A key that does not name any variant of the option set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{key}'")]
pub struct UnknownKey {
    pub kind: &'static str,
    pub key: String,
}

/// Common surface of the option-set enums.
pub trait Choice: Copy + Eq + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    fn key(self) -> &'static str;
    fn label(self) -> &'static str;
    fn description(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.key() == key)
    }

    /// This variant as a selectable option.
    fn option(self) -> ChoiceOption {
        ChoiceOption::new(self.key(), self.label(), self.description())
    }

    /// All variants as selectable options.
    fn options() -> Vec<ChoiceOption> {
        Self::ALL.iter().map(|choice| choice.option()).collect()
    }

    /// Keep the recognised keys, in declaration order, without duplicates.
    fn pick<S: AsRef<str>>(keys: &[S]) -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|choice| keys.iter().any(|key| key.as_ref() == choice.key()))
            .collect()
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $key:literal, $label:literal, $description:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn key(self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }

            fn description(self) -> &'static str {
                match self {
                    $( Self::$variant => $description, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = UnknownKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Choice>::from_key(s).ok_or_else(|| UnknownKey {
                    kind: stringify!($name),
                    key: s.to_string(),
                })
            }
        }
    };
}

choice_enum! {
    /// The AI assistant the prompt is written for.
    Platform {
        ChatGpt => "chatgpt", "ChatGPT (OpenAI)", "Most popular conversational AI";
        Claude => "claude", "Claude (Anthropic)", "Advanced reasoning and analysis";
        Gemini => "gemini", "Gemini (Google)", "Multimodal AI with strong reasoning";
        Copilot => "copilot", "GitHub Copilot", "AI pair programmer for developers";
        CopilotX => "copilot-x", "GitHub Copilot X", "Advanced AI coding assistant";
        Cursor => "cursor", "Cursor AI", "AI-powered code editor";
        Perplexity => "perplexity", "Perplexity AI", "Research-focused AI with citations";
        Bard => "bard", "Bard (Google)", "Google's conversational AI";
        ServiceNow => "servicenow", "ServiceNow AI", "Enterprise AI for ServiceNow platform";
    }
}

choice_enum! {
    TaskType {
        Coding => "coding", "Coding & Development", "Writing, debugging, or reviewing code";
        Analysis => "analysis", "Data Analysis & Research", "Analyzing data, research, or information";
        Creative => "creative", "Creative Writing", "Content creation, storytelling, or creative tasks";
        Business => "business", "Business & Strategy", "Business analysis, planning, or strategy";
        Learning => "learning", "Learning & Education", "Explaining concepts, tutoring, or teaching";
        ProblemSolving => "problem_solving", "Problem Solving", "Troubleshooting, optimization, or complex problem solving";
        Other => "other", "Other", "Specify your task type";
    }
}

choice_enum! {
    Complexity {
        Simple => "simple", "Simple", "Straightforward task with clear requirements";
        Moderate => "moderate", "Moderate", "Some complexity, may require multiple steps";
        Complex => "complex", "Complex", "Highly complex, requires detailed planning and execution";
        Expert => "expert", "Expert Level", "Advanced task requiring deep expertise and analysis";
    }
}

choice_enum! {
    OutputFormat {
        StepByStep => "step_by_step", "Step-by-step instructions", "Detailed, sequential guidance";
        CodeExamples => "code_examples", "Code examples", "Working code samples and snippets";
        Explanations => "explanations", "Detailed explanations", "In-depth explanations and reasoning";
        BulletPoints => "bullet_points", "Bullet points", "Concise, organized bullet points";
        StructuredData => "structured_data", "Structured data", "Tables, lists, or organized data";
        CreativeFormat => "creative_format", "Creative format", "Story, dialogue, or creative presentation";
    }
}

choice_enum! {
    /// Kinds of background the user can choose to describe. Each one adds a follow-up question.
    ContextTag {
        ExperienceLevel => "experience_level", "Your experience level", "Beginner, intermediate, or expert";
        ProjectContext => "project_context", "Project context", "Background about your project or work";
        Constraints => "constraints", "Constraints and limitations", "Time, budget, or technical constraints";
        Preferences => "preferences", "Style preferences", "Communication style or approach preferences";
        TargetAudience => "target_audience", "Target audience", "Who will use or see the output";
        SuccessCriteria => "success_criteria", "Success criteria", "How you'll measure success";
    }
}

choice_enum! {
    ExperienceLevel {
        Beginner => "beginner", "Beginner", "New to this topic, need basic explanations";
        Intermediate => "intermediate", "Intermediate", "Some experience, comfortable with moderate complexity";
        Advanced => "advanced", "Advanced", "Experienced, can handle complex concepts";
        Expert => "expert", "Expert", "Very experienced, looking for advanced insights";
    }
}

choice_enum! {
    StylePreference {
        DetailedExplanations => "detailed_explanations", "Detailed explanations", "Comprehensive, step-by-step explanations";
        ConciseResponses => "concise_responses", "Concise responses", "Brief, to-the-point answers";
        TechnicalJargon => "technical_jargon", "Technical jargon", "Use technical terminology and concepts";
        SimpleLanguage => "simple_language", "Simple language", "Avoid technical jargon, use plain language";
        ExamplesIncluded => "examples_included", "Examples included", "Always provide practical examples";
        VisualFormatting => "visual_formatting", "Visual formatting", "Use bullet points, tables, and clear structure";
    }
}

/// A stored option key, parsed against an option set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Known(T),

    /// A key outside the set. Kept verbatim so text that echoes the key still can.
    Unrecognized(String),
}

impl<T: Choice> Selection<T> {
    pub fn parse(key: &str) -> Self {
        match T::from_key(key) {
            Some(choice) => Self::Known(choice),
            None => Self::Unrecognized(key.to_string()),
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(choice) => Some(*choice),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Known(choice) => choice.key(),
            Self::Unrecognized(key) => key,
        }
    }
}

impl<T: Choice> From<T> for Selection<T> {
    fn from(choice: T) -> Self {
        Self::Known(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for platform in Platform::ALL {
            assert_eq!(platform.key().parse::<Platform>(), Ok(*platform));
        }
        assert_eq!(
            "copilot-x".parse::<Platform>().map(Platform::label),
            Ok("GitHub Copilot X")
        );
    }

    #[test]
    fn unknown_key_names_the_set() {
        let err = "grok".parse::<Platform>().unwrap_err();
        assert_eq!(err.to_string(), "unknown Platform 'grok'");
    }

    #[test]
    fn pick_uses_declaration_order() {
        let picked = OutputFormat::pick(&["bullet_points", "nonsense", "code_examples", "bullet_points"]);
        assert_eq!(picked, vec![OutputFormat::CodeExamples, OutputFormat::BulletPoints]);
    }

    #[test]
    fn selection_keeps_unrecognized_keys() {
        let selection = Selection::<TaskType>::parse("gardening");
        assert_eq!(selection.known(), None);
        assert_eq!(selection.key(), "gardening");

        let selection = Selection::<TaskType>::parse("coding");
        assert_eq!(selection.known(), Some(TaskType::Coding));
    }

    #[test]
    fn option_sets_have_expected_sizes() {
        assert_eq!(Platform::ALL.len(), 9);
        assert_eq!(TaskType::ALL.len(), 7);
        assert_eq!(Complexity::ALL.len(), 4);
        assert_eq!(OutputFormat::options().len(), 6);
        assert_eq!(ContextTag::ALL.len(), 6);
        assert_eq!(StylePreference::ALL.len(), 6);
    }
}
