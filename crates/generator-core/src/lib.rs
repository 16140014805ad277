//! Core trait and types for generator implementations.
//!
//! This crate provides the shared interface for all language-model generator
//! clients in the Parley backend. It defines:
//!
//! - [`Generator`] - The trait that all generator implementations must implement
//! - [`GenerationRequest`] / [`OutputFormat`] - Request types describing what to generate
//! - [`GeneratorError`] - Error types for generator operations
//!
//! Generators are constructed explicitly and passed into the request path as
//! `Arc<dyn Generator>`, so tests can substitute a fake upstream client.
//!
//! # Example
//!
//! ```rust
//! use generator_core::{Generator, GeneratorError, GenerationRequest};
//! use async_trait::async_trait;
//!
//! struct MyGenerator;
//!
//! #[async_trait]
//! impl Generator for MyGenerator {
//!     async fn generate(&self, request: GenerationRequest) -> Result<String, GeneratorError> {
//!         Ok(format!("echo: {}", request.prompt))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyGenerator"
//!     }
//! }
//! ```

mod error;
mod request;
mod trait_def;

pub use error::GeneratorError;
pub use request::{GenerationRequest, OutputFormat};
pub use trait_def::Generator;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
