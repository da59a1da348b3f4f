//! Draftroom - fantasy draft API
//!
//! Keeps drafts and a character catalog in memory and forwards free-text
//! analysis prompts to an OpenAI-compatible chat completions API when a key
//! is configured.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod models;
mod providers;
mod routes;
mod store;

use config::Config;
use providers::AiGateway;
use store::{CharacterStore, DraftStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub drafts: Arc<DraftStore>,
    pub characters: Arc<CharacterStore>,
    pub ai: AiGateway,
}

impl AppState {
    pub fn new(ai: AiGateway) -> Self {
        Self {
            drafts: Arc::new(DraftStore::new()),
            characters: Arc::new(CharacterStore::new()),
            ai,
        }
    }
}

fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "draftroom=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let ai = AiGateway::from_config(&config.ai)?;
    if ai.is_enabled() {
        tracing::info!("AI analysis enabled (model {})", config.ai.model);
    } else {
        tracing::info!("AI analysis disabled: OPENAI_API_KEY is not set");
    }

    let app = app(AppState::new(ai));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
