//! Error types for generator operations.

use thiserror::Error;

/// Errors that can occur while generating a response.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The generator was misconfigured (missing credential, bad URL).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never reached the upstream service.
    #[error("network error: {0}")]
    Network(String),

    /// The upstream service rejected or failed the request.
    #[error("generation failed: {0}")]
    ProcessingFailed(String),

    /// The generator is temporarily unavailable.
    #[error("generator unavailable: {0}")]
    Unavailable(String),
}
