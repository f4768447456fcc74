use std::fmt;

use serde::{Deserialize, Serialize};

/// The operation a user turn asks for, decided by the intent classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// Generate new code from a description.
    Generate,
    /// Explain existing code.
    Explain,
    /// Find and fix a bug.
    Fix,
    /// Refactor or improve existing code.
    Refactor,
    /// Anything else; answered conversationally.
    General,
}

impl RequestKind {
    /// Returns the lowercase wire/display name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Explain => "explain",
            Self::Fix => "fix",
            Self::Refactor => "refactor",
            Self::General => "general",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only snapshot of editor state passed into the prompt builder.
///
/// Reconstructed for every turn; has no lifecycle of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Language of the focused buffer (for example `rust` or `javascript`).
    pub language: Option<String>,
    /// Name of the focused file.
    pub file_name: Option<String>,
    /// Kind of project the editor has open (for example `cargo`, `node`).
    pub project_type: Option<String>,
}

impl RequestContext {
    /// Creates an empty context with no editor information.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the buffer language.
    #[must_use]
    pub fn with_language<T: Into<String>>(mut self, language: T) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the focused file name.
    #[must_use]
    pub fn with_file_name<T: Into<String>>(mut self, file_name: T) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Sets the project type.
    #[must_use]
    pub fn with_project_type<T: Into<String>>(mut self, project_type: T) -> Self {
        self.project_type = Some(project_type.into());
        self
    }
}

/// A single role-tagged message sent to the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    /// Author role (`system` or `user`).
    pub role: String,
    /// Message text.
    pub content: String,
}

impl PromptMessage {
    /// Creates a system message.
    pub fn system<T: Into<String>>(content: T) -> Self {
        Self {
            role: "system".to_owned(),
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user<T: Into<String>>(content: T) -> Self {
        Self {
            role: "user".to_owned(),
            content: content.into(),
        }
    }
}

/// Sampling parameters sent with a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    /// Sampling temperature controlling response randomness.
    pub temperature: f32,
    /// Maximum number of tokens allowed in the completion.
    pub max_tokens: usize,
    /// Nucleus sampling cutoff.
    pub top_p: f32,
}

impl SamplingOptions {
    /// Returns the fixed sampling parameters for a request kind.
    ///
    /// `General` reuses the `Generate` row; the four named operations carry
    /// the values the original dispatcher used.
    pub const fn for_kind(kind: RequestKind) -> Self {
        match kind {
            RequestKind::Generate | RequestKind::General => Self {
                temperature: 0.3,
                max_tokens: 2000,
                top_p: 0.9,
            },
            RequestKind::Explain => Self {
                temperature: 0.1,
                max_tokens: 1500,
                top_p: 0.7,
            },
            RequestKind::Fix => Self {
                temperature: 0.2,
                max_tokens: 2000,
                top_p: 0.8,
            },
            RequestKind::Refactor => Self {
                temperature: 0.4,
                max_tokens: 2000,
                top_p: 0.9,
            },
        }
    }
}

/// Raw completion returned by a provider, before parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// Full completion text.
    pub text: String,
    /// Name of the provider/model that produced the text.
    pub provider: String,
    /// Token accounting reported by the provider.
    pub tokens_used: TokenUsage,
    /// Wall-clock latency of the request in milliseconds.
    pub latency_ms: u64,
}

/// Token usage reported for one completion request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt portion of the request.
    pub input: u64,
    /// Tokens produced in the completion.
    pub output: u64,
}

impl TokenUsage {
    /// Total tokens across prompt and completion.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.input + self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_options_match_dispatch_table() {
        let generate = SamplingOptions::for_kind(RequestKind::Generate);
        assert!((generate.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(generate.max_tokens, 2000);

        let explain = SamplingOptions::for_kind(RequestKind::Explain);
        assert!((explain.temperature - 0.1).abs() < f32::EPSILON);
        assert_eq!(explain.max_tokens, 1500);
        assert!((explain.top_p - 0.7).abs() < f32::EPSILON);

        let fix = SamplingOptions::for_kind(RequestKind::Fix);
        assert!((fix.top_p - 0.8).abs() < f32::EPSILON);

        let refactor = SamplingOptions::for_kind(RequestKind::Refactor);
        assert!((refactor.temperature - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn general_reuses_generate_sampling() {
        assert_eq!(
            SamplingOptions::for_kind(RequestKind::General),
            SamplingOptions::for_kind(RequestKind::Generate)
        );
    }

    #[test]
    fn context_builder_sets_fields() {
        let context = RequestContext::new()
            .with_language("rust")
            .with_file_name("main.rs")
            .with_project_type("cargo");

        assert_eq!(context.language.as_deref(), Some("rust"));
        assert_eq!(context.file_name.as_deref(), Some("main.rs"));
        assert_eq!(context.project_type.as_deref(), Some("cargo"));
    }

    #[test]
    fn prompt_message_roles() {
        assert_eq!(PromptMessage::system("s").role, "system");
        assert_eq!(PromptMessage::user("u").role, "user");
    }

    #[test]
    fn token_usage_total() {
        let usage = TokenUsage {
            input: 120,
            output: 80,
        };
        assert_eq!(usage.total(), 200);
    }
}
