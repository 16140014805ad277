//! Mock generator implementations for tests.
//!
//! This crate provides fake implementations of the `Generator` trait:
//! - `CannedGenerator` - Always returns a fixed reply, recording prompts
//! - `SequenceGenerator` - Returns scripted replies in order
//! - `FailingGenerator` - Always fails, for error-path tests
//!
//! For production generation, use the `gemini-generator` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_generator::{CannedGenerator, GenerationRequest, Generator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_generator::GeneratorError> {
//!     let generator = CannedGenerator::new("Zara: Tell me about yourself.");
//!
//!     let reply = generator
//!         .generate(GenerationRequest::text("some prompt"))
//!         .await?;
//!     assert_eq!(reply, "Zara: Tell me about yourself.");
//!     Ok(())
//! }
//! ```

mod canned;
mod failing;
mod sequence;

// Re-export generator-core types for convenience
pub use generator_core::{async_trait, GenerationRequest, Generator, GeneratorError, OutputFormat};

pub use canned::CannedGenerator;
pub use failing::FailingGenerator;
pub use sequence::SequenceGenerator;
