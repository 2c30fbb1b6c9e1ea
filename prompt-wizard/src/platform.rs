//! Reference data about each supported AI platform.

use crate::choices::Platform;

/// One piece of best-practice advice, e.g. "Reasoning: Ask for step-by-step reasoning".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestPractice {
    pub label: &'static str,
    pub advice: &'static str,
}

/// Static description of an AI platform, shown next to the generated prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub tips: &'static [&'static str],
    pub best_practices: &'static [BestPractice],
}

const fn practice(label: &'static str, advice: &'static str) -> BestPractice {
    BestPractice { label, advice }
}

static CHATGPT: PlatformProfile = PlatformProfile {
    name: "ChatGPT (OpenAI)",
    description: "Most popular conversational AI",
    tips: &[
        "Be specific and detailed in your requests",
        "Use clear role definitions (e.g., \"You are an expert...\")",
        "Break complex tasks into smaller steps",
        "Provide context and examples when possible",
        "Use structured formatting for better responses",
        "Ask for step-by-step explanations when needed",
    ],
    best_practices: &[
        practice("Role definition", "Always start with a clear role definition"),
        practice("Context", "Provide relevant background information"),
        practice("Examples", "Include specific examples when possible"),
        practice("Format", "Specify the desired output format"),
        practice("Constraints", "Mention any limitations or requirements"),
    ],
};

static CLAUDE: PlatformProfile = PlatformProfile {
    name: "Claude (Anthropic)",
    description: "Advanced reasoning and analysis",
    tips: &[
        "Claude excels at complex reasoning tasks",
        "Be explicit about your thought process requirements",
        "Use structured prompts with clear sections",
        "Ask for detailed explanations and justifications",
        "Leverage Claude's strength in analysis and synthesis",
        "Provide clear success criteria for your task",
    ],
    best_practices: &[
        practice("Role definition", "Define the expert role clearly"),
        practice("Reasoning", "Ask for step-by-step reasoning"),
        practice("Analysis", "Request detailed analysis and insights"),
        practice("Examples", "Provide concrete examples and use cases"),
        practice("Verification", "Ask for verification of key points"),
    ],
};

static GEMINI: PlatformProfile = PlatformProfile {
    name: "Gemini (Google)",
    description: "Multimodal AI with strong reasoning",
    tips: &[
        "Gemini works well with multimodal inputs",
        "Be specific about the type of analysis needed",
        "Use clear, structured prompts",
        "Leverage its strength in research and fact-checking",
        "Ask for multiple perspectives on complex topics",
        "Request citations and sources when relevant",
    ],
    best_practices: &[
        practice("Role definition", "Clearly define the expert role"),
        practice("Research", "Ask for research-backed responses"),
        practice("Sources", "Request citations and references"),
        practice("Analysis", "Specify the depth of analysis needed"),
        practice("Verification", "Ask for fact-checking and verification"),
    ],
};

static COPILOT: PlatformProfile = PlatformProfile {
    name: "GitHub Copilot",
    description: "AI pair programmer for developers",
    tips: &[
        "Be specific about programming language and framework",
        "Provide context about your codebase and architecture",
        "Use clear comments to guide the AI",
        "Break down complex functions into smaller parts",
        "Specify coding standards and conventions",
        "Ask for explanations of generated code",
    ],
    best_practices: &[
        practice("Language", "Specify programming language clearly"),
        practice("Context", "Provide relevant code context"),
        practice("Standards", "Mention coding standards and conventions"),
        practice("Testing", "Ask for test cases and validation"),
        practice("Documentation", "Request inline documentation"),
    ],
};

static COPILOT_X: PlatformProfile = PlatformProfile {
    name: "GitHub Copilot X",
    description: "Advanced AI coding assistant",
    tips: &[
        "Use natural language to describe complex requirements",
        "Provide architectural context and patterns",
        "Ask for code reviews and improvements",
        "Request explanations of complex algorithms",
        "Specify performance and security requirements",
        "Ask for alternative implementations",
    ],
    best_practices: &[
        practice("Architecture", "Describe system architecture clearly"),
        practice("Patterns", "Specify design patterns to use"),
        practice("Performance", "Mention performance requirements"),
        practice("Security", "Include security considerations"),
        practice("Testing", "Request comprehensive test coverage"),
    ],
};

static CURSOR: PlatformProfile = PlatformProfile {
    name: "Cursor AI",
    description: "AI-powered code editor",
    tips: &[
        "Use natural language for code generation",
        "Provide clear context about your project",
        "Ask for refactoring suggestions",
        "Request code optimization and improvements",
        "Specify coding patterns and conventions",
        "Ask for debugging help with specific errors",
    ],
    best_practices: &[
        practice("Context", "Provide comprehensive project context"),
        practice("Patterns", "Specify coding patterns and conventions"),
        practice("Optimization", "Ask for performance optimizations"),
        practice("Debugging", "Provide specific error messages"),
        practice("Refactoring", "Request clean, maintainable code"),
    ],
};

static PERPLEXITY: PlatformProfile = PlatformProfile {
    name: "Perplexity AI",
    description: "Research-focused AI with citations",
    tips: &[
        "Ask research-oriented questions",
        "Request specific sources and citations",
        "Use current events and recent information",
        "Ask for multiple perspectives on topics",
        "Request fact-checking and verification",
        "Specify the depth of research needed",
    ],
    best_practices: &[
        practice("Research", "Frame questions as research queries"),
        practice("Sources", "Ask for credible sources and citations"),
        practice("Current", "Request up-to-date information"),
        practice("Verification", "Ask for fact-checking and verification"),
        practice("Perspectives", "Request multiple viewpoints"),
    ],
};

static BARD: PlatformProfile = PlatformProfile {
    name: "Bard (Google)",
    description: "Google's conversational AI",
    tips: &[
        "Be conversational and natural in your prompts",
        "Ask follow-up questions for clarification",
        "Request creative and innovative solutions",
        "Use Bard's strength in creative writing",
        "Ask for multiple options and alternatives",
        "Request explanations in simple terms",
    ],
    best_practices: &[
        practice("Conversation", "Use natural, conversational language"),
        practice("Creativity", "Leverage creative problem-solving"),
        practice("Alternatives", "Ask for multiple solution options"),
        practice("Simplicity", "Request explanations in simple terms"),
        practice("Follow-up", "Plan for follow-up questions"),
    ],
};

static SERVICENOW: PlatformProfile = PlatformProfile {
    name: "ServiceNow AI",
    description: "Enterprise AI for ServiceNow platform",
    tips: &[
        "Be specific about ServiceNow modules and tables",
        "Include relevant business context and requirements",
        "Specify security and compliance requirements",
        "Ask for best practices and governance",
        "Request code that follows ServiceNow standards",
        "Include performance and scalability considerations",
    ],
    best_practices: &[
        practice("Modules", "Specify ServiceNow modules and tables"),
        practice("Business", "Include business context and requirements"),
        practice("Security", "Mention security and compliance needs"),
        practice("Governance", "Ask for governance best practices"),
        practice("Performance", "Consider performance and scalability"),
        practice("Standards", "Follow ServiceNow coding standards"),
    ],
};

impl Platform {
    /// The static profile for this platform.
    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Self::ChatGpt => &CHATGPT,
            Self::Claude => &CLAUDE,
            Self::Gemini => &GEMINI,
            Self::Copilot => &COPILOT,
            Self::CopilotX => &COPILOT_X,
            Self::Cursor => &CURSOR,
            Self::Perplexity => &PERPLEXITY,
            Self::Bard => &BARD,
            Self::ServiceNow => &SERVICENOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::Choice;

    #[test]
    fn profile_names_match_option_labels() {
        for platform in Platform::ALL {
            assert_eq!(platform.profile().name, platform.label());
            assert_eq!(platform.profile().description, platform.description());
        }
    }

    #[test]
    fn every_profile_has_six_tips() {
        for platform in Platform::ALL {
            assert_eq!(platform.profile().tips.len(), 6, "{platform}");
            assert!(platform.profile().best_practices.len() >= 5);
        }
    }
}
