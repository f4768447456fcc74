//! Core types and traits for the Quill assistant.
//!
//! This crate provides the shared data model, error handling, configuration,
//! and the provider trait used across the assistant pipeline.

/// Configuration loading and credential resolution.
pub mod config;
/// Chat message and suggestion types.
pub mod conversation;
/// Error types and result definitions.
pub mod error;
/// Trait definitions for completion providers.
pub mod traits;
/// Core data types for requests, prompts, and completions.
pub mod types;

pub use config::Config;
pub use conversation::{Message, MessageId, Role, Suggestion, SuggestionKind};
pub use error::{Error, Result};
pub use traits::CompletionProvider;
pub use types::{
    Completion, PromptMessage, RequestContext, RequestKind, SamplingOptions, TokenUsage,
};
