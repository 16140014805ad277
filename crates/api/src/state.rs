//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use generator_core::Generator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Upstream language-model client.
    pub generator: Arc<dyn Generator>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, generator: Arc<dyn Generator>) -> Self {
        Self { db, generator }
    }
}
