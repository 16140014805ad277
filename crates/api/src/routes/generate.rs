//! Generation endpoint: scenario dispatch, upstream call, feedback persistence.

use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use database::session;
use generator_core::GenerationRequest;
use scenario::{parse_feedback, Dispatch, ScenarioMode};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::Result;
use crate::state::AppState;

/// Request body for `POST /generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// The conversation history so far (the client calls this "prompt").
    pub prompt: String,
    /// Scenario mode tag.
    pub mode: String,
    /// Scenario label stored with a feedback session.
    #[serde(default)]
    pub scenario: Option<String>,
}

/// Response body for text modes.
#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub response: String,
}

/// Response body for feedback mode: the raw model output, JSON or not.
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// Generate the next line (or the feedback report) for a conversation.
///
/// Feedback generations are persisted before the response is returned; a
/// storage failure is logged and swallowed so the caller still receives the
/// feedback it paid an upstream call for.
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Response> {
    let mode: ScenarioMode = payload.mode.parse()?;
    let dispatch = scenario::dispatch(mode, &payload.prompt, payload.scenario.as_deref());

    match dispatch {
        Dispatch::Text { prompt } => {
            let response = state
                .generator
                .generate(GenerationRequest::text(prompt))
                .await?;
            Ok(Json(TextResponse { response }).into_response())
        }
        Dispatch::Json {
            prompt,
            scenario_label,
        } => {
            let feedback = state
                .generator
                .generate(GenerationRequest::json(prompt))
                .await?;

            let parsed = parse_feedback(&feedback);
            if let Err(err) = session::insert_session(
                state.db.pool(),
                &scenario_label,
                &payload.prompt,
                &feedback,
                parsed.score,
            )
            .await
            {
                error!("Failed to save session: {}; returning feedback anyway", err);
            }

            Ok(Json(FeedbackResponse { feedback }).into_response())
        }
    }
}
