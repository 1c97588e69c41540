mod catalog;
mod config;
mod errors;
mod models;
mod routes;
mod scoring;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::curated::ExampleLibrary;
use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::scoring::KeywordResumeScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS scoring API v{}", env!("CARGO_PKG_VERSION"));

    // Role catalog is validated here so scoring never sees an empty skill list
    let catalog = match &config.role_catalog_path {
        Some(path) => RoleCatalog::load(path).context("Failed to load role catalog")?,
        None => {
            info!("ROLE_CATALOG_PATH not set, using built-in role catalog");
            RoleCatalog::builtin()
        }
    };
    let catalog = Arc::new(catalog);
    info!("Role catalog ready: {:?}", catalog.role_names());

    let examples = match &config.examples_path {
        Some(path) => ExampleLibrary::load(path).context("Failed to load curated examples")?,
        None => ExampleLibrary::default(),
    };

    info!(
        "Scorer config: threshold {} metric {:?}",
        config.scoring.fuzzy_threshold, config.scoring.metric
    );
    let scorer = Arc::new(KeywordResumeScorer::new(catalog.clone(), config.scoring));

    let state = AppState {
        catalog,
        examples: Arc::new(examples),
        scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
