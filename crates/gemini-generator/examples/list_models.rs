//! List the Gemini models available to the configured API key.
//!
//! Run with: cargo run -p gemini-generator --example list_models
//!
//! Make sure to set environment variables in .env:
//!   GEMINI_API_KEY - Gemini API key for authentication

use gemini_generator::GeminiGenerator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let generator = GeminiGenerator::from_env()?;
    println!("API URL: {}", generator.config().api_url);
    println!("Configured model: {}", generator.config().model);
    println!();

    println!("--- Finding available models for your API key ---");
    let models = generator.list_models().await?;
    for model in &models {
        if model.supports_generate_content() {
            println!("Found usable model: {}", model.name);
        }
    }
    println!("--- Finished ({} models total) ---", models.len());

    Ok(())
}
