//! Integration tests for prompt-wizard

use prompt_wizard::choices::{Complexity, OutputFormat, TaskType};
use prompt_wizard::{
    Answer, Choice, Platform, PromptRequest, ScriptError, ScriptedFrontend, WizardEngine,
    WizardError, assemble_prompt, run_session,
};

fn base_script() -> ScriptedFrontend {
    ScriptedFrontend::new()
        .with_single("ai_platform", "copilot")
        .with_single("task_type", "coding")
        .with_single("complexity", "expert")
        .with_multi("output_format", ["code_examples", "bullet_points"])
}

#[test]
fn test_full_session_with_scripted_frontend() -> anyhow::Result<()> {
    let mut frontend = base_script()
        .with_multi("context_details", ["experience_level", "preferences"])
        .with_single("context_experience_level", "advanced")
        .with_multi(
            "context_preferences",
            ["visual_formatting", "technical_jargon"],
        )
        .with_text("extra_preferences", "Must use Rust 2024 edition");

    let mut engine = WizardEngine::new();
    let prompt = run_session(&mut engine, &mut frontend)?;

    assert_eq!(
        prompt,
        "You are a world-class expert expert software developer with deep expertise in your field. \
         Your task is to help with a coding problem. Please provide an expert-level solution with deep insights and advanced techniques. \
         Please tailor your response for an advanced level with sophisticated concepts. \
         Please adapt your response style as follows: Use appropriate technical terminology and concepts. Use clear structure with bullet points, tables, and formatting. \
         Additional preferences and requirements: Must use Rust 2024 edition. \
         Please format your response as follows: Include working code examples with comments. Use bullet points for clarity. \
         Focus on code generation and programming tasks. Provide clear code context. \
         Please provide clean, well-documented code that follows best practices."
    );
    assert!(engine.is_complete());
    assert!(frontend.reports().is_empty());
    Ok(())
}

#[test]
fn test_blank_answer_is_reported_and_asked_again() -> anyhow::Result<()> {
    let mut frontend = base_script()
        .with_multi("context_details", ["constraints"])
        .with_text("context_constraints", "   ")
        .with_text("context_constraints", "Free tools only")
        .with_text("extra_preferences", "none");

    let mut engine = WizardEngine::new();
    let prompt = run_session(&mut engine, &mut frontend)?;

    assert_eq!(frontend.reports().len(), 1);
    assert_eq!(frontend.reports()[0].id, "context_constraints");
    assert_eq!(
        frontend.reports()[0].to_string(),
        "Please answer the question: What are your constraints and limitations?"
    );
    assert!(prompt.contains("Constraints and limitations: Free tools only. "));
    Ok(())
}

#[test]
fn test_going_back_and_changing_context() -> anyhow::Result<()> {
    // The user answers the experience level follow-up, backs up twice to the
    // context selection and swaps it for target audience.
    let mut frontend = base_script()
        .with_multi("context_details", ["experience_level"])
        .with_multi("context_details", ["target_audience"])
        .with_single("context_experience_level", "beginner")
        .with_back("context_experience_level")
        .with_back("extra_preferences")
        .with_text("extra_preferences", "Keep it friendly")
        .with_text("context_target_audience", "Non-technical clients");

    let mut engine = WizardEngine::new();
    let prompt = run_session(&mut engine, &mut frontend)?;

    let presented: Vec<_> = frontend
        .presented()
        .iter()
        .map(|id| id.as_str())
        .collect();
    assert_eq!(
        presented,
        [
            "ai_platform",
            "task_type",
            "complexity",
            "output_format",
            "context_details",
            "context_experience_level",
            "extra_preferences",
            "context_experience_level",
            "context_details",
            "context_target_audience",
            "extra_preferences",
        ]
    );
    assert!(!engine.answers().contains("context_experience_level"));
    assert!(!prompt.contains("beginner"));
    assert!(prompt.contains("Target audience: Non-technical clients. "));
    assert!(prompt.contains("Additional preferences and requirements: Keep it friendly. "));
    Ok(())
}

#[test]
fn test_missing_script_entry_is_a_frontend_error() {
    let mut frontend = base_script();
    let mut engine = WizardEngine::new();

    let err = run_session(&mut engine, &mut frontend).unwrap_err();
    match err {
        WizardError::Frontend(inner) => {
            let script_err = inner.downcast_ref::<ScriptError>().unwrap();
            assert!(matches!(script_err, ScriptError::MissingAnswer(id) if id == "context_details"));
        }
        other => panic!("Expected frontend error, got {other:?}"),
    }
    assert_eq!(engine.step(), 4);
}

#[test]
fn test_script_that_never_answers_gives_up() {
    let mut frontend = ScriptedFrontend::new()
        .with_single("ai_platform", "claude")
        .with_single("task_type", "coding")
        .with_single("complexity", "simple")
        .with_multi("output_format", Vec::<String>::new())
        .with_max_presentations(10);
    let mut engine = WizardEngine::new();

    let err = run_session(&mut engine, &mut frontend).unwrap_err();
    let WizardError::Frontend(inner) = err else {
        panic!("Expected frontend error");
    };
    assert!(matches!(
        inner.downcast_ref::<ScriptError>(),
        Some(ScriptError::Stuck(10))
    ));
    assert_eq!(frontend.reports().len(), 7);
    assert_eq!(engine.step(), 3);
}

#[test]
fn test_wrong_answer_shape_ends_session() {
    let mut frontend = ScriptedFrontend::new().with_text("ai_platform", "claude");
    let mut engine = WizardEngine::new();

    let err = run_session(&mut engine, &mut frontend).unwrap_err();
    assert!(matches!(err, WizardError::Frontend(_)));
    assert!(engine.answers().is_empty());
}

#[test]
fn test_every_platform_produces_trimmed_prompt() {
    for platform in Platform::ALL {
        for task in TaskType::ALL {
            for complexity in Complexity::ALL {
                let request = PromptRequest {
                    platform: Some((*platform).into()),
                    task_type: Some((*task).into()),
                    complexity: Some((*complexity).into()),
                    output_formats: OutputFormat::ALL.to_vec(),
                    ..PromptRequest::default()
                };
                let prompt = assemble_prompt(&request);
                assert!(!prompt.is_empty());
                assert!(!prompt.ends_with(char::is_whitespace));
                assert!(!prompt.starts_with(char::is_whitespace));
            }
        }
    }
}

#[test]
fn test_reset_after_expansion() -> anyhow::Result<()> {
    let mut frontend = base_script()
        .with_multi(
            "context_details",
            [
                "experience_level",
                "project_context",
                "constraints",
                "preferences",
                "target_audience",
                "success_criteria",
            ],
        )
        .with_single("context_experience_level", "intermediate")
        .with_text("context_project_context", "Internal dashboard")
        .with_text("context_constraints", "Two weeks")
        .with_multi("context_preferences", ["concise_responses"])
        .with_text("context_target_audience", "Ops team")
        .with_text("context_success_criteria", "Ships on time")
        .with_text("extra_preferences", "None");

    let mut engine = WizardEngine::new();
    run_session(&mut engine, &mut frontend)?;
    assert_eq!(engine.questions().len(), 12);

    engine.reset();
    assert_eq!(engine.questions().len(), 5);
    assert!(engine.answers().is_empty());
    assert_eq!(engine.current_question().map(|q| q.id().as_str()), Some("ai_platform"));
    Ok(())
}

#[test]
fn test_submit_answer_via_public_api() {
    let mut engine = WizardEngine::new();
    engine
        .submit_answer("ai_platform", Answer::Single("perplexity".into()))
        .unwrap();
    assert_eq!(engine.platform(), Some(Platform::Perplexity));
    assert_eq!(
        engine.platform_profile().map(|p| p.tips.len()),
        Some(6)
    );
}
