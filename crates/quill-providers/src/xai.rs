use std::env;
use std::time::Instant;

use async_trait::async_trait;
use quill_core::config::ENV_XAI_API_KEY;
use quill_core::{
    Completion, CompletionProvider, Config, Error, PromptMessage, Result, SamplingOptions,
    TokenUsage,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// xAI API base URL.
const XAI_API_BASE: &str = "https://api.x.ai/v1";
/// Default model for xAI.
const DEFAULT_MODEL: &str = "grok-code-fast-1";

/// xAI chat-completion provider.
pub struct XaiProvider {
    /// HTTP client for API requests.
    client: Client,
    /// xAI API key.
    api_key: String,
    /// Model name to use.
    model: String,
    /// Base URL of the API, overridable for tests.
    base_url: String,
}

impl XaiProvider {
    /// Creates a new `XaiProvider` with the given API key.
    ///
    /// # Errors
    /// Returns an error if the provided API key is empty.
    pub fn new(api_key: String) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::MissingApiKey(ENV_XAI_API_KEY.to_owned()));
        }

        Ok(Self {
            client: Client::default(),
            api_key,
            model: DEFAULT_MODEL.to_owned(),
            base_url: XAI_API_BASE.to_owned(),
        })
    }

    /// Creates a new `XaiProvider` from environment variables.
    ///
    /// # Errors
    /// Returns an error if the `XAI_API_KEY` environment variable is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(ENV_XAI_API_KEY)
            .map_err(|_| Error::MissingApiKey(ENV_XAI_API_KEY.to_owned()))?;
        Self::new(api_key)
    }

    /// Creates a new `XaiProvider` from the assistant configuration,
    /// resolving the key from the config file first and the environment
    /// second, and taking model name and base URL from the config.
    ///
    /// # Errors
    /// Returns an error if neither source provides an API key.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key().ok_or_else(|| {
            Error::MissingApiKey(format!("{ENV_XAI_API_KEY} or config.toml xai_api_key"))
        })?;

        Ok(Self::new(api_key)?
            .with_model(config.model.name.clone())
            .with_base_url(config.model.base_url.clone()))
    }

    /// Sets the model to use for generation.
    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

/// Request payload sent to the xAI chat-completion API.
#[derive(Debug, Serialize)]
struct XaiRequest<'req> {
    /// Model identifier provided by the xAI service.
    model: &'req str,
    /// Messages that form the conversation context for the request.
    messages: &'req [PromptMessage],
    /// Sampling temperature controlling response randomness.
    temperature: f32,
    /// Maximum number of tokens allowed in the completion.
    max_tokens: usize,
    /// Nucleus sampling cutoff.
    top_p: f32,
}

/// Response payload returned by xAI.
#[derive(Debug, Deserialize)]
struct XaiResponse {
    /// List of candidate completions.
    choices: Vec<XaiChoice>,
    /// Token accounting information for the request, when reported.
    usage: Option<XaiUsage>,
}

/// A single completion choice returned by xAI.
#[derive(Debug, Deserialize)]
struct XaiChoice {
    /// Message generated for the choice.
    message: XaiResponseMessage,
}

/// Response message containing the generated text.
#[derive(Debug, Deserialize)]
struct XaiResponseMessage {
    /// Generated text content.
    content: String,
}

/// Token usage metrics for an xAI response.
#[derive(Debug, Deserialize)]
struct XaiUsage {
    /// Number of tokens in the prompt portion of the request.
    prompt_tokens: u64,
    /// Number of tokens produced in the completion.
    completion_tokens: u64,
}

#[async_trait]
impl CompletionProvider for XaiProvider {
    fn name(&self) -> &'static str {
        "xai"
    }

    async fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn complete(
        &self,
        messages: &[PromptMessage],
        options: SamplingOptions,
    ) -> Result<Completion> {
        let start = Instant::now();

        let request = XaiRequest {
            model: &self.model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            top_p: options.top_p,
        };

        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(model = %self.model, %url, "sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_owned());
            return Err(Error::Transport {
                status: status.as_u16(),
                message,
            });
        }

        let xai_response: XaiResponse = response.json().await?;

        let latency_ms = start.elapsed().as_millis() as u64;

        let text = xai_response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| Error::InvalidResponse("no choices in xAI response".to_owned()))?;

        let tokens_used = xai_response.usage.map_or_else(TokenUsage::default, |usage| {
            TokenUsage {
                input: usage.prompt_tokens,
                output: usage.completion_tokens,
            }
        });

        Ok(Completion {
            text,
            provider: format!("xai/{}", self.model),
            tokens_used,
            latency_ms,
        })
    }
}
