//! Failing generator implementation - always errors.

use async_trait::async_trait;
use generator_core::{GenerationRequest, Generator, GeneratorError};

/// A generator that fails every request with a fixed message.
///
/// Useful for testing the upstream-failure path of the request handler.
#[derive(Debug, Clone)]
pub struct FailingGenerator {
    message: String,
}

impl FailingGenerator {
    /// Create a new FailingGenerator with an error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingGenerator {
    fn default() -> Self {
        Self::new("upstream unavailable")
    }
}

#[async_trait]
impl Generator for FailingGenerator {
    async fn generate(&self, _request: GenerationRequest) -> Result<String, GeneratorError> {
        Err(GeneratorError::ProcessingFailed(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_fails() {
        let generator = FailingGenerator::new("boom");
        let err = generator
            .generate(GenerationRequest::text("a"))
            .await
            .unwrap_err();
        assert!(matches!(err, GeneratorError::ProcessingFailed(msg) if msg == "boom"));
    }
}
