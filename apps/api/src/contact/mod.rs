//! Contact form endpoint.
//!
//! Validation lives here; delivery is delegated to whichever
//! `EmailTransport` was wired in at startup. The response shape is the
//! `{ success, message }` pair the form widget expects, including on
//! validation failures (400).

pub mod transport;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::contact::transport::{ContactMessage, DeliveryReceipt};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// POST /api/v1/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> (StatusCode, Json<DeliveryReceipt>) {
    if req.name.trim().is_empty()
        || req.email.trim().is_empty()
        || req.subject.trim().is_empty()
        || req.message.trim().is_empty()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(DeliveryReceipt {
                success: false,
                message: "All fields are required".to_string(),
            }),
        );
    }

    if !is_plausible_email(req.email.trim()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(DeliveryReceipt {
                success: false,
                message: "Please enter a valid email address".to_string(),
            }),
        );
    }

    let submission = ContactMessage {
        name: req.name.trim().to_string(),
        email: req.email.trim().to_string(),
        subject: req.subject.trim().to_string(),
        message: req.message.trim().to_string(),
    };

    match state.mailer.send(&submission).await {
        Ok(receipt) => (StatusCode::OK, Json(receipt)),
        Err(e) => {
            tracing::error!("contact transport error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DeliveryReceipt {
                    success: false,
                    message: format!(
                        "Something went wrong. Please try again or contact me directly at {}",
                        state.profile.email
                    ),
                }),
            )
        }
    }
}

/// Same acceptance set as the original form check: non-empty local part,
/// one '@', a dot in the domain, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tld)) => !head.is_empty() && !tld.is_empty(),
        None => false,
    }
}
