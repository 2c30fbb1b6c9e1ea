//! Turns collected answers into the final prompt text.
//!
//! Everything here is pure: the same [`PromptRequest`] always yields the same
//! string. Keys outside the known option sets fall back to generic wording.

use prompt_wizard_types::AnswerSet;
use tracing::info;

use crate::catalog::{self, AI_PLATFORM, COMPLEXITY, EXTRA_PREFERENCES, OUTPUT_FORMAT, TASK_TYPE};
use crate::choices::{
    Choice, Complexity, ContextTag, ExperienceLevel, OutputFormat, Platform, Selection,
    StylePreference, TaskType,
};

/// Answers from the context follow-up questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextAnswers {
    pub experience_level: Option<Selection<ExperienceLevel>>,
    pub project_context: Option<String>,
    pub constraints: Option<String>,
    pub style_preferences: Vec<StylePreference>,
    pub target_audience: Option<String>,
    pub success_criteria: Option<String>,
}

/// Everything prompt assembly looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptRequest {
    pub platform: Option<Selection<Platform>>,
    pub task_type: Option<Selection<TaskType>>,
    pub complexity: Option<Selection<Complexity>>,
    pub output_formats: Vec<OutputFormat>,
    pub context: ContextAnswers,
    pub extra_preferences: Option<String>,
}

impl PromptRequest {
    /// Read a request out of collected answers. Missing or blank answers stay empty.
    pub fn from_answers(answers: &AnswerSet) -> Self {
        let single = |id: &str| answers.get_single(id).ok().filter(|key| !key.is_empty());
        let text = |id: &str| {
            answers
                .get_text(id)
                .ok()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };
        let follow_up = |tag: ContextTag| catalog::follow_up_id(tag);

        Self {
            platform: single(AI_PLATFORM).map(Selection::parse),
            task_type: single(TASK_TYPE).map(Selection::parse),
            complexity: single(COMPLEXITY).map(Selection::parse),
            output_formats: answers
                .get_multi(OUTPUT_FORMAT)
                .map(OutputFormat::pick)
                .unwrap_or_default(),
            context: ContextAnswers {
                experience_level: single(follow_up(ContextTag::ExperienceLevel))
                    .map(Selection::parse),
                project_context: text(follow_up(ContextTag::ProjectContext)),
                constraints: text(follow_up(ContextTag::Constraints)),
                style_preferences: answers
                    .get_multi(follow_up(ContextTag::Preferences))
                    .map(StylePreference::pick)
                    .unwrap_or_default(),
                target_audience: text(follow_up(ContextTag::TargetAudience)),
                success_criteria: text(follow_up(ContextTag::SuccessCriteria)),
            },
            extra_preferences: text(EXTRA_PREFERENCES),
        }
    }

    fn known_platform(&self) -> Option<Platform> {
        self.platform.as_ref().and_then(Selection::known)
    }
}

/// Build the prompt: role, task, context, output format, platform hint, closing.
pub fn assemble_prompt(request: &PromptRequest) -> String {
    let mut prompt = String::new();
    prompt.push_str(&role_statement(
        request.task_type.as_ref(),
        request.complexity.as_ref(),
    ));
    prompt.push_str(&task_statement(
        request.task_type.as_ref(),
        request.complexity.as_ref(),
    ));
    prompt.push_str(&context_clauses(
        &request.context,
        request.extra_preferences.as_deref(),
    ));
    prompt.push_str(&output_format_clauses(&request.output_formats));
    prompt.push_str(optimization_hint(request.known_platform()));
    prompt.push_str(closing_instruction(request.known_platform()));

    let prompt = prompt.trim().to_string();
    info!(chars = prompt.len(), "assembled prompt");
    prompt
}

/// `You are a {level} {role} with deep expertise in your field. `
pub fn role_statement(
    task_type: Option<&Selection<TaskType>>,
    complexity: Option<&Selection<Complexity>>,
) -> String {
    let role = match task_type.and_then(Selection::known) {
        Some(TaskType::Coding) => "expert software developer",
        Some(TaskType::Analysis) => "data analyst and research expert",
        Some(TaskType::Creative) => "creative writing specialist",
        Some(TaskType::Business) => "business strategy consultant",
        Some(TaskType::Learning) => "educational expert and tutor",
        Some(TaskType::ProblemSolving) => "problem-solving specialist",
        Some(TaskType::Other) => "expert in the relevant field",
        None => "expert",
    };
    let level = match complexity.and_then(Selection::known) {
        Some(Complexity::Simple) | None => "experienced",
        Some(Complexity::Moderate) => "highly experienced",
        Some(Complexity::Complex) => "expert-level",
        Some(Complexity::Expert) => "world-class expert",
    };
    format!("You are a {level} {role} with deep expertise in your field. ")
}

/// `Your task is to help with a {task} problem. {depth}. `
///
/// The task key is echoed as given, so unrecognized keys still read naturally.
pub fn task_statement(
    task_type: Option<&Selection<TaskType>>,
    complexity: Option<&Selection<Complexity>>,
) -> String {
    let task = task_type.map_or("general", Selection::key);
    let depth = match complexity.and_then(Selection::known) {
        Some(Complexity::Simple) => "Please provide a clear, straightforward solution",
        Some(Complexity::Moderate) | None => {
            "Please provide a detailed solution with multiple considerations"
        }
        Some(Complexity::Complex) => {
            "Please provide a comprehensive solution with thorough analysis"
        }
        Some(Complexity::Expert) => {
            "Please provide an expert-level solution with deep insights and advanced techniques"
        }
    };
    format!("Your task is to help with a {task} problem. {depth}. ")
}

/// One sentence per populated context answer, then the free-text extras.
pub fn context_clauses(context: &ContextAnswers, extra_preferences: Option<&str>) -> String {
    let mut clauses = String::new();

    if let Some(level) = &context.experience_level {
        let tailoring = match level.known() {
            Some(ExperienceLevel::Beginner) => {
                "tailor your response for a beginner level with clear, basic explanations"
            }
            Some(ExperienceLevel::Intermediate) | None => {
                "tailor your response for an intermediate level with moderate complexity"
            }
            Some(ExperienceLevel::Advanced) => {
                "tailor your response for an advanced level with sophisticated concepts"
            }
            Some(ExperienceLevel::Expert) => {
                "tailor your response for an expert level with deep, technical insights"
            }
        };
        clauses.push_str(&format!("Please {tailoring}. "));
    }

    if let Some(project) = &context.project_context {
        clauses.push_str(&format!("Project context: {project}. "));
    }

    if let Some(constraints) = &context.constraints {
        clauses.push_str(&format!("Constraints and limitations: {constraints}. "));
    }

    if !context.style_preferences.is_empty() {
        clauses.push_str("Please adapt your response style as follows: ");
        for preference in StylePreference::ALL {
            if context.style_preferences.contains(preference) {
                clauses.push_str(style_sentence(*preference));
            }
        }
    }

    if let Some(audience) = &context.target_audience {
        clauses.push_str(&format!("Target audience: {audience}. "));
    }

    if let Some(criteria) = &context.success_criteria {
        clauses.push_str(&format!("Success criteria: {criteria}. "));
    }

    if let Some(extra) = extra_preferences.map(str::trim).filter(|e| !e.is_empty()) {
        clauses.push_str(&format!(
            "Additional preferences and requirements: {extra}. "
        ));
    }

    clauses
}

fn style_sentence(preference: StylePreference) -> &'static str {
    match preference {
        StylePreference::DetailedExplanations => {
            "Provide comprehensive, step-by-step explanations. "
        }
        StylePreference::ConciseResponses => "Keep responses brief and to-the-point. ",
        StylePreference::TechnicalJargon => "Use appropriate technical terminology and concepts. ",
        StylePreference::SimpleLanguage => {
            "Use plain language and avoid unnecessary technical jargon. "
        }
        StylePreference::ExamplesIncluded => "Always include practical examples. ",
        StylePreference::VisualFormatting => {
            "Use clear structure with bullet points, tables, and formatting. "
        }
    }
}

/// `Please format your response as follows: ` plus one clause per format, or nothing.
pub fn output_format_clauses(formats: &[OutputFormat]) -> String {
    if formats.is_empty() {
        return String::new();
    }

    let mut clauses = String::from("Please format your response as follows: ");
    for format in OutputFormat::ALL {
        if formats.contains(format) {
            clauses.push_str(format_sentence(*format));
        }
    }
    clauses
}

fn format_sentence(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::StepByStep => "Provide step-by-step instructions. ",
        OutputFormat::CodeExamples => "Include working code examples with comments. ",
        OutputFormat::Explanations => "Provide detailed explanations and reasoning. ",
        OutputFormat::BulletPoints => "Use bullet points for clarity. ",
        OutputFormat::StructuredData => {
            "Present information in structured format (tables, lists). "
        }
        OutputFormat::CreativeFormat => "Use creative and engaging presentation style. ",
    }
}

/// Platform-specific steering, empty for unknown platforms.
pub fn optimization_hint(platform: Option<Platform>) -> &'static str {
    match platform {
        Some(Platform::ChatGpt) => {
            "Use clear, conversational language. Break down complex tasks into manageable steps. "
        }
        Some(Platform::Claude) => {
            "Provide detailed reasoning and analysis. Ask for step-by-step thought processes. "
        }
        Some(Platform::Gemini) => {
            "Leverage research capabilities and fact-checking. Request sources and citations. "
        }
        Some(Platform::Copilot) => {
            "Focus on code generation and programming tasks. Provide clear code context. "
        }
        Some(Platform::CopilotX) => {
            "Use advanced coding patterns and architectural considerations. "
        }
        Some(Platform::Cursor) => "Emphasize code quality, maintainability, and best practices. ",
        Some(Platform::Perplexity) => "Frame as research questions and request credible sources. ",
        Some(Platform::Bard) => "Use natural, conversational approach with creative solutions. ",
        Some(Platform::ServiceNow) => "Follow ServiceNow best practices and governance standards. ",
        None => "",
    }
}

/// The final request sentence, generic for unknown platforms.
pub fn closing_instruction(platform: Option<Platform>) -> &'static str {
    match platform {
        Some(Platform::ChatGpt) => {
            "Please provide a comprehensive response that addresses all aspects of the request."
        }
        Some(Platform::Claude) => {
            "Please provide a thorough analysis with detailed reasoning and explanations."
        }
        Some(Platform::Gemini) => {
            "Please provide a well-researched response with credible sources and citations."
        }
        Some(Platform::Copilot) => {
            "Please provide clean, well-documented code that follows best practices."
        }
        Some(Platform::CopilotX) => {
            "Please provide enterprise-grade code with proper architecture and testing."
        }
        Some(Platform::Cursor) => {
            "Please provide maintainable, efficient code with clear documentation."
        }
        Some(Platform::Perplexity) => {
            "Please provide a research-backed response with reliable sources."
        }
        Some(Platform::Bard) => {
            "Please provide a creative, engaging response with multiple perspectives."
        }
        Some(Platform::ServiceNow) => {
            "Please provide a solution that follows ServiceNow standards and best practices."
        }
        None => "Please provide a comprehensive and helpful response.",
    }
}

/// Text shown once every question is answered.
pub fn ready_summary(platform: Option<&Selection<Platform>>) -> String {
    let name = platform
        .and_then(Selection::known)
        .map_or("your chosen AI platform", |p| p.profile().name);
    format!(
        "You've completed all the questions. Generate your optimized prompt for {name}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt_wizard_types::Answer;

    fn request(platform: Platform, task: TaskType, complexity: Complexity) -> PromptRequest {
        PromptRequest {
            platform: Some(platform.into()),
            task_type: Some(task.into()),
            complexity: Some(complexity.into()),
            ..PromptRequest::default()
        }
    }

    #[test]
    fn coding_expert_role() {
        let role = role_statement(
            Some(&TaskType::Coding.into()),
            Some(&Complexity::Expert.into()),
        );
        assert_eq!(
            role,
            "You are a world-class expert expert software developer with deep expertise in your field. "
        );
    }

    #[test]
    fn unknown_keys_fall_back() {
        let task = Selection::<TaskType>::parse("gardening");
        let complexity = Selection::<Complexity>::parse("extreme");
        assert_eq!(
            role_statement(Some(&task), Some(&complexity)),
            "You are a experienced expert with deep expertise in your field. "
        );
        assert_eq!(
            task_statement(Some(&task), Some(&complexity)),
            "Your task is to help with a gardening problem. Please provide a detailed solution with multiple considerations. "
        );
    }

    #[test]
    fn two_formats_in_order() {
        let clauses =
            output_format_clauses(&[OutputFormat::CodeExamples, OutputFormat::BulletPoints]);
        assert_eq!(
            clauses,
            "Please format your response as follows: Include working code examples with comments. Use bullet points for clarity. "
        );
    }

    #[test]
    fn no_formats_no_clause() {
        assert_eq!(output_format_clauses(&[]), "");
    }

    #[test]
    fn every_platform_yields_trimmed_prompt() {
        for platform in Platform::ALL {
            for task in TaskType::ALL {
                for complexity in Complexity::ALL {
                    let mut req = request(*platform, *task, *complexity);
                    req.output_formats = vec![OutputFormat::StepByStep];
                    let prompt = assemble_prompt(&req);
                    assert!(!prompt.is_empty());
                    assert_eq!(prompt, prompt.trim_end());
                    assert!(prompt.ends_with(closing_instruction(Some(*platform))));
                }
            }
        }
    }

    #[test]
    fn unknown_platform_uses_generic_closing() {
        let req = PromptRequest {
            platform: Some(Selection::parse("clippy")),
            ..PromptRequest::default()
        };
        let prompt = assemble_prompt(&req);
        assert!(prompt.starts_with("You are a experienced expert"));
        assert!(prompt.contains("Your task is to help with a general problem."));
        assert!(prompt.ends_with("Please provide a comprehensive and helpful response."));
    }

    #[test]
    fn context_clauses_in_fixed_order() {
        let context = ContextAnswers {
            experience_level: Some(ExperienceLevel::Beginner.into()),
            project_context: Some("Building a React app".into()),
            constraints: None,
            style_preferences: vec![
                StylePreference::ExamplesIncluded,
                StylePreference::ConciseResponses,
            ],
            target_audience: Some("My team".into()),
            success_criteria: None,
        };
        assert_eq!(
            context_clauses(&context, Some("  Python 3.8+ ")),
            "Please tailor your response for a beginner level with clear, basic explanations. \
             Project context: Building a React app. \
             Please adapt your response style as follows: Keep responses brief and to-the-point. Always include practical examples. \
             Target audience: My team. \
             Additional preferences and requirements: Python 3.8+. "
        );
    }

    #[test]
    fn request_from_answers() {
        let mut answers = AnswerSet::new();
        answers.insert(AI_PLATFORM, Answer::Single("claude".into()));
        answers.insert(TASK_TYPE, Answer::Single("analysis".into()));
        answers.insert(COMPLEXITY, Answer::Single("complex".into()));
        answers.insert(
            OUTPUT_FORMAT,
            Answer::multi(["bullet_points", "step_by_step"]),
        );
        answers.insert(
            "context_constraints",
            Answer::Text(" Free tools only ".into()),
        );
        answers.insert("context_target_audience", Answer::Text("   ".into()));

        let req = PromptRequest::from_answers(&answers);
        assert_eq!(req.platform, Some(Selection::Known(Platform::Claude)));
        assert_eq!(
            req.output_formats,
            vec![OutputFormat::StepByStep, OutputFormat::BulletPoints]
        );
        assert_eq!(req.context.constraints.as_deref(), Some("Free tools only"));
        assert_eq!(req.context.target_audience, None);
        assert_eq!(req.extra_preferences, None);
    }

    #[test]
    fn ready_summary_names_platform() {
        assert_eq!(
            ready_summary(Some(&Platform::Cursor.into())),
            "You've completed all the questions. Generate your optimized prompt for Cursor AI."
        );
        assert!(ready_summary(None).ends_with("your chosen AI platform."));
    }
}
