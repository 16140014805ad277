//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub generator: String,
}

/// Health check: process liveness plus upstream generator readiness.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let status = if state.generator.is_ready().await {
        "ok"
    } else {
        "degraded"
    };

    Json(Health {
        status: status.to_string(),
        generator: state.generator.name().to_string(),
    })
}
