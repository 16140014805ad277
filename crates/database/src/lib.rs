//! SQLite persistence layer for Parley.
//!
//! This crate provides async database operations for completed practice
//! sessions using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{session, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and create the schema
//!     let db = Database::connect("sqlite:practice_history.db?mode=rwc").await?;
//!     db.ensure_schema().await?;
//!
//!     // Save a completed feedback generation
//!     session::insert_session(
//!         db.pool(),
//!         "interview",
//!         "User: I has five years experience.",
//!         r#"{"overall_fluency_score": 6}"#,
//!         Some(6),
//!     )
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod session;

pub use error::{DatabaseError, Result};
pub use models::Session;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    /// Each request runs short-lived statements; no long transactions exist.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:practice_history.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Create the sessions table if it does not exist.
    ///
    /// Idempotent; called once at process startup. Sessions are insert-only,
    /// so there is nothing to migrate beyond table creation.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                scenario_type TEXT NOT NULL,
                transcript TEXT NOT NULL,
                feedback_json TEXT NOT NULL,
                fluency_score INTEGER,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        tracing::info!("Session schema ready");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.ensure_schema().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_ensure_schema_idempotent() {
        let db = test_db().await;

        // Second call must succeed without error or duplicate table
        db.ensure_schema().await.unwrap();

        session::insert_session(db.pool(), "interview", "T", "F", None)
            .await
            .unwrap();
        let sessions = session::list_by_scenario(db.pool(), "interview")
            .await
            .unwrap();
        assert_eq!(sessions.len(), 1);
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        let db = test_db().await;

        session::insert_session(
            db.pool(),
            "interview",
            "User: hello",
            r#"{"overall_fluency_score": 7}"#,
            Some(7),
        )
        .await
        .unwrap();

        let sessions = session::list_by_scenario(db.pool(), "interview")
            .await
            .unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].scenario_type, "interview");
        assert_eq!(sessions[0].transcript, "User: hello");
        assert_eq!(sessions[0].feedback_json, r#"{"overall_fluency_score": 7}"#);
        assert_eq!(sessions[0].fluency_score, Some(7));
        assert!(!sessions[0].created_at.is_empty());
    }
}
