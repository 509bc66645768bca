mod config;
mod errors;
mod llm_client;
mod models;
mod progress;
mod roadmap;
mod routes;
mod state;
mod storage;
mod wizard;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::roadmap::RoadmapGenerator;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{credentials, FileStore, KeyValueStore, MemoryStore};

/// `DATA_PATH` value selecting the non-persistent store.
const IN_MEMORY: &str = ":memory:";

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

    info!("Starting CareerPath API v{}", env!("CARGO_PKG_VERSION"));

    // Key-value store backing credentials, saved roadmaps and progress
    let store: Arc<dyn KeyValueStore> = if config.data_path.as_os_str() == IN_MEMORY {
        info!("Using in-memory store; nothing survives a restart");
        Arc::new(MemoryStore::new())
    } else {
        info!("Using data file {}", config.data_path.display());
        Arc::new(FileStore::new(config.data_path.clone()))
    };

    if let Some(key) = &config.gemini_api_key {
        if !credentials::has_api_key(store.as_ref())? {
            credentials::set_api_key(store.as_ref(), key)
                .context("failed to seed API key from GEMINI_API_KEY")?;
        }
    }

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_base.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState::new(store, RoadmapGenerator::new(Arc::new(llm)));

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("HOST and PORT must form a socket address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
