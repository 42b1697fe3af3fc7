/// LLM Client — the single point of entry for all Ollama calls.
///
/// ARCHITECTURAL RULE: No other module may call the inference endpoint
/// directly. All LLM interactions MUST go through this module.
///
/// The client makes exactly one attempt per request, bounded by a 15-second
/// deadline. Callers treat every `LlmError` as "remote unavailable" and fall
/// back to the local responders; nothing here is surfaced to end users.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

/// Default local Ollama endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
/// Default model tag. Overridable via `OLLAMA_MODEL`.
pub const DEFAULT_MODEL: &str = "llama3.1";
/// Hard deadline for a completion. The losing future is abandoned, not
/// cancelled server-side; acceptable for a low-volume personal site.
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Sampling options for a single completion.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChatOptions {
    pub temperature: f32,
    pub num_predict: u32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage<'a>],
    options: ChatOptions,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: Option<OllamaMessage>,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: String,
}

/// The single LLM client shared by the chat and analyzer endpoints.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Posts a chat completion and returns the assistant's text.
    ///
    /// One attempt only. Timeout, transport failure, non-2xx status, and a
    /// payload without message content all map to `LlmError`.
    pub async fn chat(
        &self,
        messages: &[ChatMessage<'_>],
        options: ChatOptions,
    ) -> Result<String, LlmError> {
        let request_body = OllamaRequest {
            model: &self.model,
            messages,
            options,
        };

        let url = format!("{}/api/chat", self.base_url);

        let send = async {
            let response = self.client.post(&url).json(&request_body).send().await?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let payload: OllamaResponse = response.json().await?;
            let content = payload
                .message
                .map(|m| m.content)
                .filter(|c| !c.is_empty())
                .ok_or(LlmError::EmptyContent)?;

            debug!(chars = content.len(), "completion received");
            Ok(content)
        };

        tokio::time::timeout(REQUEST_TIMEOUT, send)
            .await
            .map_err(|_| LlmError::Timeout(REQUEST_TIMEOUT))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_ollama_wire_shape() {
        let messages = [
            ChatMessage {
                role: "system",
                content: "be brief",
            },
            ChatMessage {
                role: "user",
                content: "hello",
            },
        ];
        let request = OllamaRequest {
            model: "llama3.1",
            messages: &messages,
            options: ChatOptions {
                temperature: 0.7,
                num_predict: 150,
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3.1");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
        assert_eq!(json["options"]["num_predict"], 150);
    }

    #[test]
    fn test_response_parses_message_content() {
        let payload: OllamaResponse =
            serde_json::from_str(r#"{"message": {"content": "hi there"}}"#).unwrap();
        assert_eq!(payload.message.unwrap().content, "hi there");
    }

    #[test]
    fn test_response_tolerates_missing_message() {
        let payload: OllamaResponse = serde_json::from_str(r#"{"done": true}"#).unwrap();
        assert!(payload.message.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_error_not_panic() {
        // Port 1 refuses connections immediately; the call must fail fast
        // with an LlmError, which callers convert into a local fallback.
        let client = LlmClient::new("http://127.0.0.1:1".to_string(), "llama3.1".to_string());
        let result = client
            .chat(
                &[ChatMessage {
                    role: "user",
                    content: "hello",
                }],
                ChatOptions {
                    temperature: 0.7,
                    num_predict: 150,
                },
            )
            .await;
        assert!(result.is_err());
    }
}
