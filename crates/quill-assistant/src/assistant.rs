//! Turn orchestration for the assistant pipeline.
//!
//! One submitted turn flows classify -> build prompt -> call provider ->
//! parse, and always lands in exactly one assistant [`Message`]. Any
//! failure on the way, including a missing credential, routes to the
//! canned fallback reply instead of propagating.

use std::sync::Arc;

use quill_core::{
    CompletionProvider, Message, RequestContext, RequestKind, SamplingOptions, Suggestion,
    SuggestionKind,
};

use crate::fallback::fallback_reply;
use crate::intent::classify;
use crate::parser::{ParsedReply, parse_reply};
use crate::prompt::{build_prompt, explain_prompt, fix_prompt, refactor_prompt};

/// Where a turn's reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplySource {
    /// The completion endpoint answered.
    Provider,
    /// The canned fallback answered (no credential, or the call failed).
    Fallback,
}

/// The assistant dispatcher.
///
/// Holds the provider explicitly; there is no ambient client state. An
/// assistant without a provider is a supported configuration that answers
/// every turn with fallback replies.
pub struct Assistant {
    /// Completion provider, absent when no credential is configured.
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl Assistant {
    /// Creates an assistant backed by the given provider.
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Creates an assistant with no provider; every turn falls back.
    #[must_use]
    pub fn without_provider() -> Self {
        Self { provider: None }
    }

    /// Whether a provider is configured and reports itself available.
    pub async fn is_configured(&self) -> bool {
        match &self.provider {
            Some(provider) => provider.is_available().await,
            None => false,
        }
    }

    /// Runs one request through the pipeline, reporting the reply source.
    async fn request_with_source(
        &self,
        kind: RequestKind,
        user_content: &str,
        context: &RequestContext,
    ) -> (ParsedReply, ReplySource) {
        let Some(provider) = &self.provider else {
            return (fallback_reply(kind), ReplySource::Fallback);
        };
        if !provider.is_available().await {
            return (fallback_reply(kind), ReplySource::Fallback);
        }

        let messages = build_prompt(kind, user_content, context);
        match provider
            .complete(&messages, SamplingOptions::for_kind(kind))
            .await
        {
            Ok(completion) => {
                tracing::debug!(
                    kind = %kind,
                    provider = %completion.provider,
                    latency_ms = completion.latency_ms,
                    tokens = completion.tokens_used.total(),
                    "completion received"
                );
                (parse_reply(kind, &completion.text), ReplySource::Provider)
            }
            Err(error) => {
                tracing::warn!(kind = %kind, %error, "completion failed, using fallback reply");
                (fallback_reply(kind), ReplySource::Fallback)
            }
        }
    }

    /// Generates code from a free-text description.
    pub async fn generate(&self, prompt: &str, context: &RequestContext) -> ParsedReply {
        self.request_with_source(RequestKind::Generate, prompt, context)
            .await
            .0
    }

    /// Explains the given code.
    pub async fn explain(&self, code: &str, context: &RequestContext) -> ParsedReply {
        self.request_with_source(RequestKind::Explain, &explain_prompt(code), context)
            .await
            .0
    }

    /// Finds and fixes bugs in the given code.
    pub async fn fix(
        &self,
        code: &str,
        error_message: Option<&str>,
        context: &RequestContext,
    ) -> ParsedReply {
        self.request_with_source(RequestKind::Fix, &fix_prompt(code, error_message), context)
            .await
            .0
    }

    /// Refactors the given code.
    pub async fn refactor(
        &self,
        code: &str,
        instructions: Option<&str>,
        context: &RequestContext,
    ) -> ParsedReply {
        self.request_with_source(
            RequestKind::Refactor,
            &refactor_prompt(code, instructions),
            context,
        )
        .await
        .0
    }

    /// Answers one chat turn: classifies the text, frames the prompt with
    /// the editor's current or selected code when relevant, and returns the
    /// single assistant message for the turn.
    pub async fn respond(
        &self,
        text: &str,
        code: Option<&str>,
        context: &RequestContext,
    ) -> Message {
        let kind = classify(text);

        let framed = match (kind, code) {
            (RequestKind::Explain, Some(code)) => explain_prompt(code),
            (RequestKind::Fix, Some(code)) => fix_prompt(code, None),
            (RequestKind::Refactor, Some(code)) => refactor_prompt(code, Some(text)),
            _ => text.to_owned(),
        };

        let (reply, source) = self.request_with_source(kind, &framed, context).await;
        Self::into_message(kind, reply, source)
    }

    /// Converts a parsed reply into the turn's assistant message.
    fn into_message(kind: RequestKind, reply: ParsedReply, source: ReplySource) -> Message {
        let content = if reply.explanation.is_empty() {
            reply.content.trim().to_owned()
        } else {
            reply.explanation.clone()
        };

        // Fallback replies never carry suggestions.
        if source == ReplySource::Fallback {
            return Message::assistant(content, Vec::new());
        }

        let mut suggestions = Vec::new();
        match kind {
            RequestKind::Generate => {
                if let Some(code) = reply.code.filter(|code| !code.is_empty()) {
                    suggestions.push(Suggestion::new(SuggestionKind::Code, "Generated Code", code));
                }
            }
            RequestKind::Fix => {
                if let Some(code) = reply.code.filter(|code| !code.is_empty()) {
                    suggestions.push(Suggestion::new(SuggestionKind::Fix, "Suggested Fix", code));
                }
            }
            RequestKind::Refactor => {
                if let Some(code) = reply.code.filter(|code| !code.is_empty()) {
                    suggestions.push(Suggestion::new(
                        SuggestionKind::Refactor,
                        "Refactored Code",
                        code,
                    ));
                }
            }
            RequestKind::Explain => {
                if !reply.explanation.is_empty() {
                    suggestions.push(Suggestion::new(
                        SuggestionKind::Explanation,
                        "Code Explanation",
                        reply.explanation,
                    ));
                }
            }
            RequestKind::General => {}
        }

        Message::assistant(content, suggestions)
    }
}
