use std::sync::Arc;

use crate::chat::matcher::IntentMatcher;
use crate::config::Config;
use crate::contact::transport::EmailTransport;
use crate::knowledge::{Profile, SkillCatalog};
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup, so concurrent requests share
/// it without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub profile: Arc<Profile>,
    pub catalog: Arc<SkillCatalog>,
    pub matcher: Arc<IntentMatcher>,
    /// Pluggable contact-form transport. Default: LogTransport. Swap via
    /// CONTACT_TRANSPORT env.
    pub mailer: Arc<dyn EmailTransport>,
    pub config: Config,
}
