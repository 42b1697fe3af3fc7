//! Chat endpoint — remote completion with silent local fallback.
//!
//! Per request: one attempt against the inference service under a 15-second
//! deadline, then the keyword matcher if anything goes wrong. The caller
//! never sees a remote failure; worst case is a locally-computed answer
//! flagged with `isFallback: true`.

pub mod matcher;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{chat_system_prompt, CHAT_NUM_PREDICT, CHAT_TEMPERATURE};
use crate::llm_client::{ChatMessage, ChatOptions};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub is_fallback: bool,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.message.is_empty() {
        return Err(AppError::Validation(
            "Message is required and must be a string".to_string(),
        ));
    }

    let (response, is_fallback) = chat_reply(&state, &req.message).await;
    Ok(Json(ChatResponse {
        response,
        is_fallback,
    }))
}

/// Remote attempt first, keyword matcher on any failure.
/// Always produces a response; the bool is true on the fallback path.
pub async fn chat_reply(state: &AppState, message: &str) -> (String, bool) {
    let system = chat_system_prompt(&state.profile);
    let messages = [
        ChatMessage {
            role: "system",
            content: &system,
        },
        ChatMessage {
            role: "user",
            content: message,
        },
    ];
    let options = ChatOptions {
        temperature: CHAT_TEMPERATURE,
        num_predict: CHAT_NUM_PREDICT,
    };

    match state.llm.chat(&messages, options).await {
        Ok(text) => {
            info!("chat response served by {}", state.llm.model());
            (text, false)
        }
        Err(e) => {
            warn!("inference service unavailable, using keyword fallback: {e}");
            (state.matcher.respond(message).to_string(), true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_wire_field_names() {
        let json = serde_json::to_value(ChatResponse {
            response: "hello".to_string(),
            is_fallback: true,
        })
        .unwrap();
        assert_eq!(json["response"], "hello");
        assert_eq!(json["isFallback"], true);
        assert!(json.get("is_fallback").is_none());
    }
}
