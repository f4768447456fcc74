//! Line-oriented chat REPL over the assistant session.

use anyhow::Result;
use console::{Term, style};
use quill_assistant::{Buffer, ChatSession, EditorSurface as _, apply_suggestion};
use quill_core::{Message, RequestContext, Suggestion};

/// Slash commands understood by the REPL.
const HELP: &str = "commands: /apply (write last suggestion to the buffer), \
     /buffer (show the buffer), /status (provider status), /quit";

/// Runs the chat loop until the user quits.
///
/// # Errors
/// Returns an error if terminal I/O fails.
pub async fn run_chat(
    mut session: ChatSession,
    mut buffer: Buffer,
    context: RequestContext,
) -> Result<()> {
    let term = Term::stdout();

    term.write_line(&format!(
        "{} {}",
        style("quill").cyan().bold(),
        style("- AI coding assistant").dim()
    ))?;
    if !session.is_configured().await {
        term.write_line(&format!(
            "{}",
            style("no xAI API key configured - replies will be canned fallbacks").yellow()
        ))?;
    }
    if let Some(message) = session.messages().first() {
        term.write_line(&message.content)?;
    }
    term.write_line(HELP)?;

    let mut last_suggestion: Option<Suggestion> = None;

    loop {
        term.write_str("you> ")?;
        let line = term.read_line()?;
        let input = line.trim();

        match input {
            "" => {}
            "/quit" | "/exit" => break,
            "/help" => term.write_line(HELP)?,
            "/status" => {
                let status = if session.is_configured().await {
                    "provider configured"
                } else {
                    "no provider - fallback replies only"
                };
                term.write_line(status)?;
            }
            "/buffer" => {
                term.write_line(&format!(
                    "[{} | {}]",
                    buffer.language(),
                    quill_text::format_file_size(buffer.get_value().len() as u64)
                ))?;
                term.write_line(&buffer.get_value())?;
            }
            "/apply" => match &last_suggestion {
                Some(suggestion) => {
                    apply_suggestion(&mut buffer, suggestion);
                    term.write_line(&format!(
                        "applied {} to the buffer",
                        style(&suggestion.title).green()
                    ))?;
                }
                None => term.write_line("nothing to apply yet")?,
            },
            _ => {
                let code = buffer.get_value();
                let code_arg = if code.is_empty() {
                    None
                } else {
                    Some(code.as_str())
                };

                match session.submit(input, code_arg, &context).await {
                    Ok(message) => {
                        last_suggestion = first_suggestion(message);
                        term.write_line(&render_reply(message))?;
                    }
                    Err(error) => {
                        term.write_line(&format!("{}", style(error).red()))?;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Clones the first suggestion off a reply, if any.
fn first_suggestion(message: &Message) -> Option<Suggestion> {
    message
        .suggestions
        .as_ref()
        .and_then(|suggestions| suggestions.first())
        .cloned()
}

/// Formats an assistant reply with its suggestion blocks.
fn render_reply(message: &Message) -> String {
    let mut rendered = message.content.clone();

    if let Some(suggestions) = &message.suggestions {
        for suggestion in suggestions {
            rendered.push_str("\n\n");
            rendered.push_str(&format_suggestion(suggestion));
        }
    }

    rendered
}

/// Formats one suggestion as a titled, indented block.
fn format_suggestion(suggestion: &Suggestion) -> String {
    let mut block = format!("--- {} ---\n", suggestion.title);
    for line in suggestion.content.lines() {
        block.push_str("    ");
        block.push_str(line);
        block.push('\n');
    }
    block.push_str("--- /apply writes this to the buffer ---");
    block
}
