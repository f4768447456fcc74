//! System templates and prompt assembly.
//!
//! Every turn produces exactly two role-tagged messages: one system message
//! selected per request kind with optional context lines appended, and one
//! user message. Building a prompt never fails and is deterministic.

use quill_core::{PromptMessage, RequestContext, RequestKind};

/// Shared preamble for every system template.
const BASE_SYSTEM: &str = "You are Grok, a helpful AI coding assistant built by xAI. \
     You are integrated into the Quill IDE, a professional code editor similar to Visual Studio Code.";

/// Returns the system template for a request kind.
fn system_template(kind: RequestKind) -> String {
    match kind {
        RequestKind::Generate => format!(
            "{BASE_SYSTEM} Your task is to generate high-quality, functional code based on the \
             user's request. Provide clean, well-documented code with proper error handling and \
             best practices."
        ),
        RequestKind::Explain => format!(
            "{BASE_SYSTEM} Your task is to explain code clearly and comprehensively. Break down \
             what the code does, how it works, and any important concepts or patterns used."
        ),
        RequestKind::Fix => format!(
            "{BASE_SYSTEM} Your task is to identify bugs, errors, or issues in the provided code \
             and suggest fixes. Be specific about what the problem is and how to resolve it."
        ),
        RequestKind::Refactor => format!(
            "{BASE_SYSTEM} Your task is to refactor and improve the provided code. Focus on \
             readability, performance, maintainability, and following best practices."
        ),
        RequestKind::General => BASE_SYSTEM.to_owned(),
    }
}

/// Builds the two-message prompt for a turn.
///
/// The system message is the per-kind template with up to three context
/// lines appended in fixed order: language, file name, project type.
pub fn build_prompt(
    kind: RequestKind,
    user_content: &str,
    context: &RequestContext,
) -> Vec<PromptMessage> {
    let mut system_content = system_template(kind);

    if let Some(language) = &context.language {
        system_content.push_str("\n\nProgramming Language: ");
        system_content.push_str(language);
    }
    if let Some(file_name) = &context.file_name {
        system_content.push_str("\n\nFile: ");
        system_content.push_str(file_name);
    }
    if let Some(project_type) = &context.project_type {
        system_content.push_str("\n\nProject Type: ");
        system_content.push_str(project_type);
    }

    vec![
        PromptMessage::system(system_content),
        PromptMessage::user(user_content),
    ]
}

/// Frames code for an explain request.
pub fn explain_prompt(code: &str) -> String {
    format!("Please explain what this code does:\n\n{code}")
}

/// Frames code for a fix request, with the error message when known.
pub fn fix_prompt(code: &str, error_message: Option<&str>) -> String {
    let mut prompt = format!("Please identify and fix any bugs in this code:\n\n{code}");
    if let Some(message) = error_message {
        prompt.push_str("\n\nError message: ");
        prompt.push_str(message);
    }
    prompt
}

/// Frames code for a refactor request, with instructions when given.
pub fn refactor_prompt(code: &str, instructions: Option<&str>) -> String {
    let mut prompt = format!("Please refactor and improve this code:\n\n{code}");
    if let Some(instructions) = instructions {
        prompt.push_str("\n\nSpecific instructions: ");
        prompt.push_str(instructions);
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_has_system_then_user() {
        let context = RequestContext::new();
        let messages = build_prompt(RequestKind::Generate, "write a sort", &context);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "write a sort");
    }

    #[test]
    fn context_lines_append_in_fixed_order() {
        let context = RequestContext::new()
            .with_language("rust")
            .with_file_name("lib.rs")
            .with_project_type("cargo");
        let messages = build_prompt(RequestKind::Fix, "fix it", &context);

        let system = &messages[0].content;
        let language_at = system
            .find("Programming Language: rust")
            .expect("language line should be present");
        let file_at = system.find("File: lib.rs").expect("file line should be present");
        let project_at = system
            .find("Project Type: cargo")
            .expect("project line should be present");

        assert!(language_at < file_at);
        assert!(file_at < project_at);
    }

    #[test]
    fn missing_context_appends_nothing() {
        let context = RequestContext::new();
        let messages = build_prompt(RequestKind::Explain, "explain", &context);

        let system = &messages[0].content;
        assert!(!system.contains("Programming Language:"));
        assert!(!system.contains("File:"));
        assert!(!system.contains("Project Type:"));
    }

    #[test]
    fn building_twice_is_identical() {
        let context = RequestContext::new().with_language("python");
        let first = build_prompt(RequestKind::Refactor, "tidy this up", &context);
        let second = build_prompt(RequestKind::Refactor, "tidy this up", &context);
        assert_eq!(first, second);
    }

    #[test]
    fn templates_differ_per_kind() {
        let context = RequestContext::new();
        let generate = build_prompt(RequestKind::Generate, "x", &context);
        let explain = build_prompt(RequestKind::Explain, "x", &context);
        let general = build_prompt(RequestKind::General, "x", &context);

        assert_ne!(generate[0].content, explain[0].content);
        assert!(general[0].content.starts_with("You are Grok"));
        assert!(!general[0].content.contains("Your task"));
    }

    #[test]
    fn fix_prompt_appends_error_message() {
        let with_error = fix_prompt("let x = ;", Some("expected expression"));
        assert!(with_error.ends_with("Error message: expected expression"));

        let without_error = fix_prompt("let x = 1;", None);
        assert!(!without_error.contains("Error message:"));
    }

    #[test]
    fn refactor_prompt_appends_instructions() {
        let framed = refactor_prompt("fn f() {}", Some("use iterators"));
        assert!(framed.contains("Specific instructions: use iterators"));
    }
}
