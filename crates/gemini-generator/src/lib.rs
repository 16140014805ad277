//! Google Gemini generator implementation.
//!
//! This crate provides a [`Generator`] implementation backed by the Gemini
//! `generateContent` REST API.
//!
//! # Features
//!
//! - Sends fully assembled prompts as single-turn `generateContent` requests
//! - Requests `application/json` output when the caller expects a report
//! - Configurable via environment variables
//! - `list_models` diagnostic for checking which models the API key can use
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_generator::GeminiGenerator;
//! use generator_core::{GenerationRequest, Generator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = GeminiGenerator::from_env()?;
//!     let reply = generator
//!         .generate(GenerationRequest::text("Say hello."))
//!         .await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod generator;

pub use api_types::ModelInfo;
pub use config::GeminiConfig;
pub use generator::GeminiGenerator;

// Re-export generator-core types for convenience
pub use generator_core::{async_trait, GenerationRequest, Generator, GeneratorError, OutputFormat};
