//! Remote translation backend for OpenAI-compatible chat completion APIs.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::future::Future;

use super::error::BackendError;
use super::prompt::build_system_prompt;

/// Base URL of the hosted completion service.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model requested when none is configured.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

const MAX_TOKENS: u32 = 1024;
const TEMPERATURE: f32 = 0.1;

/// A single translation request as seen by a backend.
#[derive(Debug, Clone, Copy)]
pub struct BackendRequest<'a> {
    pub text: &'a str,
    pub source_lang: &'a str,
    pub target_lang: &'a str,
    pub context: &'a str,
}

/// Produces translations for the orchestrator.
///
/// `is_configured` gates whether a remote call is attempted at all: an
/// unconfigured backend is the offline-mode signal, not an error. The
/// orchestrator injects the backend at construction, so tests can swap
/// in scripted implementations.
pub trait TranslationBackend: Send + Sync {
    /// Whether the backend has the credentials to attempt a remote call.
    fn is_configured(&self) -> bool;

    /// Translates the request, or classifies why it could not.
    fn translate(
        &self,
        request: &BackendRequest<'_>,
    ) -> impl Future<Output = Result<String, BackendError>> + Send;
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Backend that POSTs to an OpenAI-compatible `/chat/completions` endpoint.
pub struct HttpBackend {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl HttpBackend {
    pub fn new(base_url: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            model,
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl TranslationBackend for HttpBackend {
    fn is_configured(&self) -> bool {
        self.api_key.as_ref().is_some_and(|key| !key.is_empty())
    }

    async fn translate(&self, request: &BackendRequest<'_>) -> Result<String, BackendError> {
        let Some(api_key) = self.api_key.as_deref().filter(|key| !key.is_empty()) else {
            return Err(BackendError::Unconfigured);
        };

        let system_prompt =
            build_system_prompt(request.context, request.source_lang, request.target_lang);

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Owned(system_prompt),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(request.text),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            stream: false,
        };

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&chat_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body).map_or_else(
                |_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                },
                |parsed| parsed.error.message,
            );
            return Err(BackendError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|err| BackendError::MalformedResponse(err.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                BackendError::MalformedResponse("no translation in first choice".to_string())
            })
    }
}
