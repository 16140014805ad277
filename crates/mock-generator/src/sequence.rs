//! Sequence generator implementation - scripted replies in order.

use async_trait::async_trait;
use generator_core::{GenerationRequest, Generator, GeneratorError};
use tokio::sync::Mutex;

/// A generator that returns pre-scripted replies, one per call.
///
/// Once the script is exhausted, further calls fail with
/// [`GeneratorError::Unavailable`].
#[derive(Debug)]
pub struct SequenceGenerator {
    replies: Mutex<Vec<String>>,
}

impl SequenceGenerator {
    /// Create a new SequenceGenerator from scripted replies.
    pub fn new(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut replies: Vec<String> = replies.into_iter().map(Into::into).collect();
        // Stored reversed so each call pops the next scripted reply.
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
        }
    }
}

#[async_trait]
impl Generator for SequenceGenerator {
    async fn generate(&self, _request: GenerationRequest) -> Result<String, GeneratorError> {
        self.replies
            .lock()
            .await
            .pop()
            .ok_or_else(|| GeneratorError::Unavailable("script exhausted".to_string()))
    }

    fn name(&self) -> &str {
        "SequenceGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_in_order() {
        let generator = SequenceGenerator::new(["one", "two"]);

        let first = generator
            .generate(GenerationRequest::text("a"))
            .await
            .unwrap();
        let second = generator
            .generate(GenerationRequest::text("b"))
            .await
            .unwrap();

        assert_eq!(first, "one");
        assert_eq!(second, "two");
    }

    #[tokio::test]
    async fn test_exhausted_script_fails() {
        let generator = SequenceGenerator::new(Vec::<String>::new());
        let err = generator
            .generate(GenerationRequest::text("a"))
            .await
            .unwrap_err();
        assert!(matches!(err, GeneratorError::Unavailable(_)));
    }
}
