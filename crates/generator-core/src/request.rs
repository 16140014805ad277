//! Request types passed to generator implementations.

use serde::{Deserialize, Serialize};

/// The response shape the caller expects from the upstream model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Free-form text (a spoken line from a persona).
    Text,
    /// A strictly-JSON object (the feedback report).
    Json,
}

/// A fully assembled generation request.
///
/// The prompt is complete by the time it reaches a generator; generators
/// perform no template assembly of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// The assembled prompt text.
    pub prompt: String,
    /// Expected response shape.
    pub format: OutputFormat,
}

impl GenerationRequest {
    /// Create a request expecting free-form text back.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            format: OutputFormat::Text,
        }
    }

    /// Create a request expecting a strictly-JSON object back.
    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            format: OutputFormat::Json,
        }
    }
}
