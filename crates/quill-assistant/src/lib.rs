//! The assistant request dispatcher.
//!
//! One shallow pipeline: classify the intent of a user turn, build a
//! role-tagged prompt, send it to a completion provider, parse fenced code
//! out of the markdown reply, and degrade to canned replies when no
//! credential is configured or the transport fails.

/// Turn orchestration: one user message in, one assistant message out.
pub mod assistant;
/// Editor collaborator trait and in-memory buffer.
pub mod editor;
/// Canned replies for the credential-free and failure paths.
pub mod fallback;
/// Keyword intent classification.
pub mod intent;
/// Markdown code-fence extraction.
pub mod parser;
/// System templates and prompt assembly.
pub mod prompt;
/// Append-only chat log with turn gating.
pub mod session;

pub use assistant::Assistant;
pub use editor::{Buffer, EditorSurface, apply_suggestion};
pub use fallback::fallback_reply;
pub use intent::classify;
pub use parser::{ParsedReply, parse_reply};
pub use prompt::build_prompt;
pub use session::ChatSession;
