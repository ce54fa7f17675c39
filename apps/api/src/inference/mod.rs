/// Inference client — the single point of entry for all text-generation calls
/// in Copyforge.
///
/// ARCHITECTURAL RULE: No other module may call the Hugging Face API directly.
/// All provider interactions MUST go through this module.
///
/// Model: google/gemma-2-2b-it, pinned to the nebius hosting provider
/// (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const INFERENCE_API_URL: &str = "https://router.huggingface.co/v1/chat/completions";
/// The model used for all generation calls in Copyforge.
pub const MODEL: &str = "google/gemma-2-2b-it";
/// Hosting provider the router pins the model to.
const PROVIDER: &str = "nebius";
const MAX_TOKENS: u32 = 200;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("no Hugging Face API key configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: String,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Extracts the generated text from the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single inference client used by the generation pipeline.
/// Wraps the router's OpenAI-compatible chat-completions API.
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    api_key: Option<String>,
}

impl InferenceClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Makes a single chat-completion call with a system+user message pair.
    ///
    /// Exactly one round-trip: callers recover from failures by substituting
    /// demo data, so there is no retry loop here.
    pub async fn chat(&self, system: &str, user: &str) -> Result<ChatResponse, InferenceError> {
        let api_key = self.api_key.as_deref().ok_or(InferenceError::MissingApiKey)?;

        let request_body = ChatRequest {
            model: format!("{MODEL}:{PROVIDER}"),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(INFERENCE_API_URL)
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the router's error envelope
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(InferenceError::Http)?;

        debug!(
            "inference call succeeded: {} choice(s) returned",
            chat_response.choices.len()
        );

        Ok(chat_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_extracts_first_choice() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"1. Headline one"}}]}"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), Some("1. Headline one"));
    }

    #[test]
    fn test_text_is_none_for_blank_content() {
        let raw = r#"{"choices":[{"message":{"content":"   "}}]}"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_text_is_none_without_choices() {
        let raw = r#"{"choices":[]}"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), None);
    }

    #[tokio::test]
    async fn test_chat_without_key_fails_fast() {
        let client = InferenceClient::new(None);
        let result = client.chat("system", "user").await;
        assert!(matches!(result, Err(InferenceError::MissingApiKey)));
    }
}
