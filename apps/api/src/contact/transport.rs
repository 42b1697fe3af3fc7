//! Email transport — pluggable delivery for contact-form submissions.
//!
//! One trait, swappable providers, selected at startup. Held in `AppState`
//! as `Arc<dyn EmailTransport>` so handlers never care which provider is
//! wired in.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

use crate::errors::AppError;

/// A validated contact-form submission.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Outcome handed back to the form widget.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryReceipt {
    pub success: bool,
    pub message: String,
}

#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<DeliveryReceipt, AppError>;
}

/// Default transport: logs the submission and acknowledges with a pointer to
/// the direct email address. Keeps the form functional with no provider
/// credentials configured.
pub struct LogTransport {
    pub owner_email: String,
}

#[async_trait]
impl EmailTransport for LogTransport {
    async fn send(&self, message: &ContactMessage) -> Result<DeliveryReceipt, AppError> {
        info!(
            name = %message.name,
            email = %message.email,
            subject = %message.subject,
            "contact form submission received"
        );
        Ok(DeliveryReceipt {
            success: true,
            message: format!(
                "Message received! I'll get back to you soon. For immediate contact, \
                 please email me directly at {}",
                self.owner_email
            ),
        })
    }
}

/// Formspree-style webhook transport: POSTs the fields as JSON and treats
/// any 2xx as delivered.
pub struct FormspreeTransport {
    pub endpoint: String,
    pub client: reqwest::Client,
}

#[derive(Serialize)]
struct FormspreePayload<'a> {
    name: &'a str,
    #[serde(rename = "_replyto")]
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[async_trait]
impl EmailTransport for FormspreeTransport {
    async fn send(&self, message: &ContactMessage) -> Result<DeliveryReceipt, AppError> {
        let payload = FormspreePayload {
            name: &message.name,
            email: &message.email,
            subject: &message.subject,
            message: &message.message,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(r) if r.status().is_success() => Ok(DeliveryReceipt {
                success: true,
                message: "Message sent successfully! I'll get back to you soon.".to_string(),
            }),
            Ok(r) => {
                error!("form webhook returned {}", r.status());
                Ok(DeliveryReceipt {
                    success: false,
                    message: "Failed to send message. Please try again or email me directly."
                        .to_string(),
                })
            }
            Err(e) => {
                error!("form webhook unreachable: {e}");
                Ok(DeliveryReceipt {
                    success: false,
                    message: "Failed to send message. Please try again or email me directly."
                        .to_string(),
                })
            }
        }
    }
}
