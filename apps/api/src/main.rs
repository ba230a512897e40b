mod analysis;
mod config;
mod errors;
mod extract;
mod matching;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::{AnalyzerConfig, DocumentAnalyzer};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::InMemoryCandidateStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("sift_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sift API v{}", env!("CARGO_PKG_VERSION"));

    // Compile the analyzer once; every request shares it read-only.
    let analyzer_config = AnalyzerConfig::default();
    info!(
        "Document analyzer: {} categories, {} link patterns",
        analyzer_config.categories.len(),
        analyzer_config.link_patterns.len()
    );
    let analyzer = Arc::new(DocumentAnalyzer::new(analyzer_config)?);

    // Candidate store (in-memory; swap behind the CandidateStore trait)
    let candidates = Arc::new(InMemoryCandidateStore::new());

    let state = AppState {
        config: config.clone(),
        analyzer,
        candidates,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
