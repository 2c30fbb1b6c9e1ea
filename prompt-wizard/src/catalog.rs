//! The questions the wizard asks.

use prompt_wizard_types::{Question, QuestionId, QuestionKind};

use crate::choices::{
    Choice, Complexity, ContextTag, ExperienceLevel, OutputFormat, Platform, StylePreference,
    TaskType,
};

pub const AI_PLATFORM: &str = "ai_platform";
pub const TASK_TYPE: &str = "task_type";
pub const COMPLEXITY: &str = "complexity";
pub const OUTPUT_FORMAT: &str = "output_format";
pub const CONTEXT_DETAILS: &str = "context_details";
pub const EXTRA_PREFERENCES: &str = "extra_preferences";

/// The questions every session starts with, in order.
pub fn base_questions() -> Vec<Question> {
    vec![
        Question::new(
            AI_PLATFORM,
            "Which AI platform are you using?",
            "Select the AI platform you want to optimize your prompt for. Each platform has unique strengths and best practices.",
            QuestionKind::single(Platform::options()),
        ),
        Question::new(
            TASK_TYPE,
            "What type of task are you working on?",
            "Understanding your task type helps us optimize the prompt structure and approach.",
            QuestionKind::single(TaskType::options()),
        ),
        Question::new(
            COMPLEXITY,
            "How complex is your task?",
            "The complexity level helps determine the level of detail needed in your prompt.",
            QuestionKind::single(Complexity::options()),
        ),
        Question::new(
            OUTPUT_FORMAT,
            "What format do you want for the output?",
            "Specifying the desired output format helps the AI provide more useful results.",
            QuestionKind::multi(OutputFormat::options()),
        ),
        Question::new(
            CONTEXT_DETAILS,
            "What context should the AI know about?",
            "Select the types of context you want to provide. We'll ask specific questions for each selected option.",
            QuestionKind::multi(ContextTag::options()),
        ),
    ]
}

/// Id of the follow-up question a context tag adds.
pub fn follow_up_id(tag: ContextTag) -> &'static str {
    match tag {
        ContextTag::ExperienceLevel => "context_experience_level",
        ContextTag::ProjectContext => "context_project_context",
        ContextTag::Constraints => "context_constraints",
        ContextTag::Preferences => "context_preferences",
        ContextTag::TargetAudience => "context_target_audience",
        ContextTag::SuccessCriteria => "context_success_criteria",
    }
}

/// The follow-up question a context tag adds.
pub fn follow_up(tag: ContextTag) -> Question {
    let id = follow_up_id(tag);
    match tag {
        ContextTag::ExperienceLevel => Question::new(
            id,
            "What is your experience level?",
            "This helps the AI tailor the response to your skill level.",
            QuestionKind::single(ExperienceLevel::options()),
        ),
        ContextTag::ProjectContext => Question::new(
            id,
            "Tell us about your project context",
            "Provide background information about your project or work environment.",
            QuestionKind::text(
                "e.g., Building a web application using React, Working on a data analysis project for a client, Creating content for a tech blog, etc.",
            ),
        ),
        ContextTag::Constraints => Question::new(
            id,
            "What are your constraints and limitations?",
            "Let us know about any time, budget, technical, or other constraints.",
            QuestionKind::text(
                "e.g., Must be completed by Friday, Limited to free tools only, Needs to work on mobile devices, Must follow company security policies, etc.",
            ),
        ),
        ContextTag::Preferences => Question::new(
            id,
            "What are your style preferences?",
            "How would you like the AI to communicate with you?",
            QuestionKind::multi(StylePreference::options()),
        ),
        ContextTag::TargetAudience => Question::new(
            id,
            "Who is your target audience?",
            "Who will be using or seeing the output from this AI interaction?",
            QuestionKind::text(
                "e.g., My development team, Clients who are non-technical, Students learning programming, General public, etc.",
            ),
        ),
        ContextTag::SuccessCriteria => Question::new(
            id,
            "How will you measure success?",
            "What would make this AI interaction successful for you?",
            QuestionKind::text(
                "e.g., Code that compiles without errors, Clear understanding of the concept, Actionable next steps, Time saved on research, etc.",
            ),
        ),
    }
}

/// The free-text question that closes every expanded sequence.
pub fn extra_preferences() -> Question {
    Question::new(
        EXTRA_PREFERENCES,
        "Any extra preferences or requirements?",
        "Add any additional preferences, requirements, or special considerations for your task.",
        QuestionKind::text(
            "e.g., Must use Python 3.8+, Should follow company coding standards, Need to be completed by Friday, Must be accessible to beginners, Prefer concise responses, etc.",
        ),
    )
}

/// Whether a question was inserted by expansion rather than declared up front.
pub fn is_inserted(id: &QuestionId) -> bool {
    id == EXTRA_PREFERENCES || ContextTag::ALL.iter().any(|tag| id == follow_up_id(*tag))
}
