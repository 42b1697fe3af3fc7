pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analyzer;
use crate::chat;
use crate::contact;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/chat", post(chat::handle_chat))
        .route("/api/v1/resume-analyzer", post(analyzer::handle_analyze))
        .route("/api/v1/contact", post(contact::handle_contact))
        .with_state(state)
}
