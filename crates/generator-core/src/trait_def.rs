//! The Generator trait definition.

use async_trait::async_trait;

use crate::error::GeneratorError;
use crate::request::GenerationRequest;

/// A trait for producing model output from an assembled prompt.
///
/// Implementations range from canned fakes for tests to real HTTP clients
/// against a generative-language API. This trait is object-safe and can be
/// used with `Box<dyn Generator>` or `Arc<dyn Generator>`.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a response for the given request.
    ///
    /// # Arguments
    ///
    /// * `request` - The assembled prompt and expected output format.
    ///
    /// # Returns
    ///
    /// The raw response text, or an error if generation failed. Callers are
    /// responsible for interpreting the text (e.g. parsing feedback JSON).
    async fn generate(&self, request: GenerationRequest) -> Result<String, GeneratorError>;

    /// Get a human-readable name for this generator implementation.
    fn name(&self) -> &str;

    /// Check if the generator is ready to serve requests.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}
