//! Append-only chat log with single-turn gating.

use quill_core::{Error, Message, RequestContext, Result};

use crate::assistant::Assistant;

/// Text of the seeded welcome message.
const WELCOME: &str = "Hi! I'm your AI coding assistant. Ask me to generate code, \
     explain code, fix bugs, or refactor - I can also apply suggestions straight to the editor.";

/// One chat session: an assistant plus its append-only message log.
///
/// Only the turn that owns the session appends to the log, and a busy flag
/// rejects overlapping submissions, so no locking is needed.
pub struct ChatSession {
    /// The dispatcher answering turns.
    assistant: Assistant,
    /// Append-only message log for this session. In-memory only.
    messages: Vec<Message>,
    /// Set while a turn is in flight; overlapping submissions are rejected.
    busy: bool,
}

impl ChatSession {
    /// Creates a session seeded with the welcome message.
    pub fn new(assistant: Assistant) -> Self {
        Self {
            assistant,
            messages: vec![Message::assistant(WELCOME, Vec::new())],
            busy: false,
        }
    }

    /// Returns the message log, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether a turn is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the underlying assistant has a usable credential.
    pub async fn is_configured(&self) -> bool {
        self.assistant.is_configured().await
    }

    /// Submits one user turn and returns the resulting assistant message.
    ///
    /// Appends exactly two messages on success: the user message and the
    /// assistant reply. Whitespace-only input is rejected before it reaches
    /// the classifier and appends nothing.
    ///
    /// # Errors
    /// Returns [`Error::TurnRejected`] for empty input or when a turn is
    /// already in flight.
    pub async fn submit(
        &mut self,
        text: &str,
        code: Option<&str>,
        context: &RequestContext,
    ) -> Result<&Message> {
        if self.busy {
            return Err(Error::TurnRejected("a turn is already in flight".to_owned()));
        }
        if text.trim().is_empty() {
            return Err(Error::TurnRejected("empty input".to_owned()));
        }

        self.busy = true;
        self.messages.push(Message::user(text));

        let reply = self.assistant.respond(text, code, context).await;
        self.messages.push(reply);
        self.busy = false;

        self.messages
            .last()
            .ok_or_else(|| Error::Other("message log cannot be empty".to_owned()))
    }
}
