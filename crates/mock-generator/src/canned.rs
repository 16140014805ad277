//! Canned generator implementation - always returns a fixed reply.

use async_trait::async_trait;
use generator_core::{GenerationRequest, Generator, GeneratorError};
use tokio::sync::Mutex;

/// A generator that returns the same reply for every request and records the
/// requests it received.
///
/// Useful for asserting on the exact prompt the request path assembled.
#[derive(Debug, Default)]
pub struct CannedGenerator {
    reply: String,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl CannedGenerator {
    /// Create a new CannedGenerator with a fixed reply.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// The requests received so far, in order.
    pub async fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl Generator for CannedGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GeneratorError> {
        self.requests.lock().await.push(request);
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "CannedGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generator_core::OutputFormat;

    #[tokio::test]
    async fn test_canned_reply() {
        let generator = CannedGenerator::new("fixed");
        let reply = generator
            .generate(GenerationRequest::text("anything"))
            .await
            .unwrap();
        assert_eq!(reply, "fixed");
    }

    #[tokio::test]
    async fn test_requests_recorded_in_order() {
        let generator = CannedGenerator::new("ok");
        generator
            .generate(GenerationRequest::text("first"))
            .await
            .unwrap();
        generator
            .generate(GenerationRequest::json("second"))
            .await
            .unwrap();

        let requests = generator.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].prompt, "first");
        assert_eq!(requests[1].format, OutputFormat::Json);
    }

    #[tokio::test]
    async fn test_generator_name() {
        let generator = CannedGenerator::new("ok");
        assert_eq!(generator.name(), "CannedGenerator");
        assert!(generator.is_ready().await);
    }
}
