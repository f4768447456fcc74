//! Chat message types for the assistant panel.
//!
//! Messages are append-only: once a turn produces a message it is never
//! mutated, and the log lives only as long as the session.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random message ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Message typed by the user.
    User,
    /// Message produced by the assistant pipeline.
    Assistant,
}

/// What a suggestion attached to an assistant message contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionKind {
    /// Freshly generated code.
    Code,
    /// Prose explanation of existing code.
    Explanation,
    /// A proposed bug fix.
    Fix,
    /// A refactored version of existing code.
    Refactor,
}

/// A code or prose payload the user can apply to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// What this suggestion contains.
    pub kind: SuggestionKind,
    /// Short human-readable title shown above the payload.
    pub title: String,
    /// The payload itself, applied to the editor verbatim.
    pub content: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    pub fn new<T: Into<String>, C: Into<String>>(
        kind: SuggestionKind,
        title: T,
        content: C,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// One message in the chat log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message.
    pub id: MessageId,
    /// Who authored the message.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// When the message was appended to the log.
    pub timestamp: DateTime<Utc>,
    /// Suggestions attached to an assistant message.
    ///
    /// Either absent or non-empty; an empty extraction result is normalized
    /// to `None` before the message is built.
    pub suggestions: Option<Vec<Suggestion>>,
}

impl Message {
    /// Creates a user message.
    pub fn user<T: Into<String>>(content: T) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            suggestions: None,
        }
    }

    /// Creates an assistant message, normalizing empty suggestion lists away.
    pub fn assistant<T: Into<String>>(content: T, suggestions: Vec<Suggestion>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            suggestions: if suggestions.is_empty() {
                None
            } else {
                Some(suggestions)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_has_no_suggestions() {
        let message = Message::user("hello");
        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, "hello");
        assert!(message.suggestions.is_none());
    }

    #[test]
    fn test_assistant_message_normalizes_empty_suggestions() {
        let message = Message::assistant("no code here", Vec::new());
        assert_eq!(message.role, Role::Assistant);
        assert!(
            message.suggestions.is_none(),
            "empty suggestion list must normalize to None"
        );
    }

    #[test]
    fn test_assistant_message_keeps_suggestions() {
        let suggestion = Suggestion::new(SuggestionKind::Code, "Generated Code", "fn main() {}");
        let message = Message::assistant("here you go", vec![suggestion]);

        let suggestions = message.suggestions.expect("suggestions should be present");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::Code);
        assert_eq!(suggestions[0].content, "fn main() {}");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let first = Message::user("a");
        let second = Message::user("a");
        assert_ne!(first.id, second.id);
    }
}
