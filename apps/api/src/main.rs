mod analyzer;
mod chat;
mod config;
mod contact;
mod errors;
mod knowledge;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{bail, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::matcher::IntentMatcher;
use crate::config::Config;
use crate::contact::transport::{EmailTransport, FormspreeTransport, LogTransport};
use crate::knowledge::{Profile, SkillCatalog};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Knowledge base: built once, read-only for the process lifetime
    let profile = Arc::new(Profile::owner());
    let catalog = Arc::new(SkillCatalog::owner());
    let matcher = Arc::new(IntentMatcher::new(&profile));

    // LLM client (single attempt per request, 15s deadline, local fallback)
    let llm = LlmClient::new(config.ollama_url.clone(), config.ollama_model.clone());
    info!("LLM client initialized (model: {})", llm.model());

    let mailer = build_mailer(&config, &profile)?;
    info!("contact transport: {}", config.contact_transport);

    let state = AppState {
        llm,
        profile,
        catalog,
        matcher,
        mailer,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // single-owner site, no credentials involved

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Selects the contact-form transport from config.
fn build_mailer(config: &Config, profile: &Profile) -> Result<Arc<dyn EmailTransport>> {
    match config.contact_transport.as_str() {
        "log" => Ok(Arc::new(LogTransport {
            owner_email: profile.email.clone(),
        })),
        "formspree" => {
            let Some(endpoint) = config.formspree_endpoint.clone() else {
                bail!("CONTACT_TRANSPORT=formspree requires FORMSPREE_ENDPOINT");
            };
            Ok(Arc::new(FormspreeTransport {
                endpoint,
                client: reqwest::Client::new(),
            }))
        }
        other => bail!("unknown CONTACT_TRANSPORT '{other}' (expected 'log' or 'formspree')"),
    }
}
