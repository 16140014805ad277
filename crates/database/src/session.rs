//! Session persistence.

use sqlx::SqlitePool;

use crate::models::Session;
use crate::Result;

/// Insert a completed practice session.
pub async fn insert_session(
    pool: &SqlitePool,
    scenario_type: &str,
    transcript: &str,
    feedback_json: &str,
    fluency_score: Option<i64>,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO sessions (scenario_type, transcript, feedback_json, fluency_score)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(scenario_type)
    .bind(transcript)
    .bind(feedback_json)
    .bind(fluency_score)
    .execute(pool)
    .await?;

    Ok(())
}

/// List sessions for a scenario type, newest first.
///
/// The id tie-break keeps ordering deterministic for rows created within the
/// same timestamp second.
pub async fn list_by_scenario(pool: &SqlitePool, scenario_type: &str) -> Result<Vec<Session>> {
    let rows = sqlx::query_as::<_, Session>(
        r#"
        SELECT id, scenario_type, transcript, feedback_json, fluency_score, created_at
        FROM sessions
        WHERE scenario_type = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(scenario_type)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
