//! Provider adapters for chat-completion services.

/// Scripted in-memory provider for tests.
pub mod scripted;
/// xAI chat-completion provider implementation.
pub mod xai;

pub use scripted::ScriptedProvider;
pub use xai::XaiProvider;
