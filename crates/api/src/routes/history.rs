//! Session history listing.

use axum::extract::{Path, State};
use axum::Json;
use database::{session, Session};

use crate::error::Result;
use crate::state::AppState;

/// List persisted sessions for a scenario type, newest first.
pub async fn history(
    State(state): State<AppState>,
    Path(scenario_type): Path<String>,
) -> Result<Json<Vec<Session>>> {
    let sessions = session::list_by_scenario(state.db.pool(), &scenario_type).await?;
    Ok(Json(sessions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::Database;
    use mock_generator::CannedGenerator;
    use std::sync::Arc;

    async fn test_state() -> AppState {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.ensure_schema().await.unwrap();
        AppState::new(db, Arc::new(CannedGenerator::new("unused")))
    }

    #[tokio::test]
    async fn test_history_filters_and_orders() {
        let state = test_state().await;
        session::insert_session(state.db.pool(), "interview", "T1", "F1", Some(5))
            .await
            .unwrap();
        session::insert_session(state.db.pool(), "free_topic", "T2", "F2", None)
            .await
            .unwrap();
        session::insert_session(state.db.pool(), "interview", "T3", "F3", Some(8))
            .await
            .unwrap();

        let Json(sessions) = history(State(state), Path("interview".to_string()))
            .await
            .unwrap();

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].transcript, "T3");
        assert_eq!(sessions[1].transcript, "T1");
        assert!(sessions.iter().all(|s| s.scenario_type == "interview"));
    }

    #[tokio::test]
    async fn test_history_empty_scenario() {
        let state = test_state().await;
        let Json(sessions) = history(State(state), Path("group_discussion".to_string()))
            .await
            .unwrap();
        assert!(sessions.is_empty());
    }
}
