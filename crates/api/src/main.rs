//! HTTP API for the Parley speaking-practice backend.
//!
//! Relays conversation transcripts to the Gemini generator under a
//! scenario-selected prompt and persists completed feedback sessions.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use database::Database;
use gemini_generator::GeminiGenerator;
use scenario::{template_fingerprint, ScenarioMode};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting Parley API server");

    // Connect to database and create the session schema
    let db = Database::connect(&config.database_url).await?;
    db.ensure_schema().await?;

    // Construct the upstream generator client; a missing credential is fatal
    let generator = GeminiGenerator::from_env()?;

    for mode in ScenarioMode::ALL {
        info!(
            mode = %mode,
            fingerprint = %template_fingerprint(mode),
            "Loaded scenario template"
        );
    }

    // Build application state
    let state = AppState::new(db, Arc::new(generator));

    // Build router; the browser client is served from a different origin
    let app = routes::router().layer(CorsLayer::permissive()).with_state(state);

    // Start server
    info!(addr = %config.addr, "Parley API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
