use async_trait::async_trait;

use crate::{Completion, PromptMessage, Result, SamplingOptions};

/// Trait for chat-completion providers that can answer a prompt.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the unique identifier for this provider.
    fn name(&self) -> &'static str;

    /// Checks whether this provider is configured and ready to take requests.
    async fn is_available(&self) -> bool;

    /// Sends the prompt to the completion endpoint and returns the raw text.
    ///
    /// A single request per call; no retries. The caller owns fallback
    /// behavior when this fails.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Transport`] when the endpoint answers with a
    /// non-success status, [`crate::Error::Network`] when the request cannot
    /// be sent or received, and [`crate::Error::InvalidResponse`] when the
    /// payload cannot be used.
    async fn complete(
        &self,
        messages: &[PromptMessage],
        options: SamplingOptions,
    ) -> Result<Completion>;
}
