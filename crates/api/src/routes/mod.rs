//! Route handlers for the API.

pub mod generate;
pub mod health;
pub mod history;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate::generate))
        .route("/history/:scenario_type", get(history::history))
        .route("/health", get(health::health))
}
