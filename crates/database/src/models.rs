//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted practice session: one completed feedback-mode generation.
///
/// Rows are created exactly once and never mutated or deleted. The serialized
/// field names are the HTTP history contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Scenario the transcript came from (e.g. "interview").
    pub scenario_type: String,
    /// Full conversation transcript at save time.
    pub transcript: String,
    /// Raw feedback text as returned by the model, JSON or not.
    pub feedback_json: String,
    /// Fluency score extracted from the report, when coercible.
    pub fluency_score: Option<i64>,
    /// Creation timestamp, server-assigned.
    pub created_at: String,
}
