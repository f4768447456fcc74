//! Scripted provider for testing the assistant pipeline.
//!
//! Allows defining canned completions for specific prompts, or forcing
//! transport failures, enabling end-to-end testing of the dispatcher
//! without real API calls.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use quill_core::{
    Completion, CompletionProvider, Error, PromptMessage, Result, SamplingOptions, TokenUsage,
};

/// Response storage type
type ResponseMap = Arc<Mutex<HashMap<String, String>>>;

/// Scripted provider that returns pre-defined completions based on prompt
/// patterns, or fails with a configured transport error.
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    /// Predefined completions keyed by user-prompt substring.
    responses: ResponseMap,
    /// Default completion if no pattern matches.
    default_response: Arc<Mutex<Option<String>>>,
    /// Forced transport failure, returned from every call when set.
    failure: Arc<Mutex<Option<(u16, String)>>>,
    /// History of user prompts, for verification.
    call_history: Arc<Mutex<Vec<String>>>,
}

impl ScriptedProvider {
    /// Create a new scripted provider with no canned completions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern-based completion.
    #[must_use]
    pub fn with_response(self, pattern: impl Into<String>, response: impl Into<String>) -> Self {
        {
            let mut responses = self
                .responses
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            responses.insert(pattern.into(), response.into());
        }
        self
    }

    /// Set a default completion for prompts that don't match any pattern.
    #[must_use]
    pub fn with_default_response(self, response: impl Into<String>) -> Self {
        {
            let mut default = self
                .default_response
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *default = Some(response.into());
        }
        self
    }

    /// Make every call fail with the given HTTP status.
    #[must_use]
    pub fn failing_with_status(self, status: u16, message: impl Into<String>) -> Self {
        {
            let mut failure = self.failure.lock().unwrap_or_else(PoisonError::into_inner);
            *failure = Some((status, message.into()));
        }
        self
    }

    /// Get the call history (list of user prompts seen).
    #[must_use]
    pub fn call_history(&self) -> Vec<String> {
        let history = self
            .call_history
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        history.clone()
    }

    /// Get the number of calls made.
    #[must_use]
    pub fn call_count(&self) -> usize {
        let history = self
            .call_history
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        history.len()
    }

    /// Find a matching completion for the given user prompt.
    fn find_response(&self, prompt: &str) -> Option<String> {
        let responses = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Exact match first, then substring match.
        if let Some(response) = responses.get(prompt) {
            return Some(response.clone());
        }

        responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn complete(
        &self,
        messages: &[PromptMessage],
        _options: SamplingOptions,
    ) -> Result<Completion> {
        let prompt = messages
            .iter()
            .rfind(|message| message.role == "user")
            .map(|message| message.content.clone())
            .unwrap_or_default();

        {
            let mut history = self
                .call_history
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            history.push(prompt.clone());
        }

        let forced_failure = {
            let failure = self.failure.lock().unwrap_or_else(PoisonError::into_inner);
            failure.clone()
        };
        if let Some((status, message)) = forced_failure {
            return Err(Error::Transport { status, message });
        }

        let text = self.find_response(&prompt).unwrap_or_else(|| {
            let default = self
                .default_response
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            default
                .clone()
                .unwrap_or_else(|| format!("Scripted response for prompt: {prompt}"))
        });

        Ok(Completion {
            text,
            provider: "scripted".to_owned(),
            tokens_used: TokenUsage {
                input: prompt.len() as u64,
                output: 0,
            },
            latency_ms: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests exact prompt matching in the scripted provider.
    #[tokio::test]
    async fn test_scripted_provider_exact_match() {
        let provider = ScriptedProvider::new().with_response("hello", "world");

        let messages = vec![PromptMessage::user("hello")];
        let completion = provider
            .complete(&messages, SamplingOptions::for_kind(quill_core::RequestKind::General))
            .await
            .expect("completion should succeed");

        assert_eq!(completion.text, "world");
    }

    /// Tests substring prompt matching in the scripted provider.
    #[tokio::test]
    async fn test_scripted_provider_substring_match() {
        let provider =
            ScriptedProvider::new().with_response("login system", "Here is a login system");

        let messages = vec![PromptMessage::user("Please build a login system for me")];
        let completion = provider
            .complete(&messages, SamplingOptions::for_kind(quill_core::RequestKind::General))
            .await
            .expect("completion should succeed");

        assert_eq!(completion.text, "Here is a login system");
    }

    /// Tests default completion fallback.
    #[tokio::test]
    async fn test_scripted_provider_default_response() {
        let provider = ScriptedProvider::new().with_default_response("Default response");

        let messages = vec![PromptMessage::user("unmatched prompt")];
        let completion = provider
            .complete(&messages, SamplingOptions::for_kind(quill_core::RequestKind::General))
            .await
            .expect("completion should succeed");

        assert_eq!(completion.text, "Default response");
    }

    /// Tests forced transport failure.
    #[tokio::test]
    async fn test_scripted_provider_forced_failure() {
        let provider =
            ScriptedProvider::new().failing_with_status(500, "Internal Server Error");

        let messages = vec![PromptMessage::user("anything")];
        let result = provider
            .complete(&messages, SamplingOptions::for_kind(quill_core::RequestKind::General))
            .await;

        match result {
            Err(Error::Transport { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    /// Tests call history tracking.
    #[tokio::test]
    async fn test_scripted_provider_call_history() {
        let provider = ScriptedProvider::new().with_default_response("ok");
        let options = SamplingOptions::for_kind(quill_core::RequestKind::General);

        let first = vec![PromptMessage::user("first prompt")];
        let second = vec![PromptMessage::user("second prompt")];

        provider
            .complete(&first, options)
            .await
            .expect("first call should succeed");
        provider
            .complete(&second, options)
            .await
            .expect("second call should succeed");

        let history = provider.call_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], "first prompt");
        assert_eq!(history[1], "second prompt");
        assert_eq!(provider.call_count(), 2);
    }
}
