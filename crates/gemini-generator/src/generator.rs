//! GeminiGenerator implementation using the Gemini REST API.

use std::time::Duration;

use generator_core::{async_trait, GenerationRequest, Generator, GeneratorError, OutputFormat};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{
    ApiError, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ModelInfo, ModelList,
};
use crate::config::GeminiConfig;

/// A generator implementation that calls the Gemini `generateContent` API.
///
/// Each generation is a single-turn request carrying the fully assembled
/// prompt; the scenario layer owns all conversation context. For JSON
/// requests, `responseMimeType` is set so the model emits a bare JSON object.
pub struct GeminiGenerator {
    client: Client,
    config: GeminiConfig,
}

impl GeminiGenerator {
    /// Create a new GeminiGenerator with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                GeneratorError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            "GeminiGenerator initialized with model: {}, timeout: {}s",
            config.model, config.timeout_secs
        );

        Ok(Self { client, config })
    }

    /// Create a GeminiGenerator from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, GeneratorError> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Build the generation config for a request, if any options apply.
    fn build_generation_config(&self, format: OutputFormat) -> Option<GenerationConfig> {
        let response_mime_type = match format {
            OutputFormat::Json => Some("application/json".to_string()),
            OutputFormat::Text => None,
        };

        if response_mime_type.is_none()
            && self.config.max_output_tokens.is_none()
            && self.config.temperature.is_none()
        {
            return None;
        }

        Some(GenerationConfig {
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_output_tokens,
            response_mime_type,
        })
    }

    /// Make a generateContent request to the Gemini API.
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeneratorError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.api_url, self.config.model, self.config.api_key
        );

        debug!("Sending generateContent request for model {}", self.config.model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| GeneratorError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(GeneratorError::ProcessingFailed(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(GeneratorError::ProcessingFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: GenerateContentResponse = response.json().await.map_err(|e| {
            GeneratorError::ProcessingFailed(format!("Failed to parse response: {}", e))
        })?;

        Ok(completion)
    }

    /// List the models available to this API key.
    ///
    /// Diagnostic helper, exposed by the `list_models` example.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, GeneratorError> {
        let url = format!(
            "{}/v1beta/models?key={}",
            self.config.api_url, self.config.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GeneratorError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeneratorError::ProcessingFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let list: ModelList = response.json().await.map_err(|e| {
            GeneratorError::ProcessingFailed(format!("Failed to parse model list: {}", e))
        })?;

        Ok(list.models)
    }
}

#[async_trait]
impl Generator for GeminiGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GeneratorError> {
        let api_request = GenerateContentRequest {
            contents: vec![Content::user(request.prompt)],
            generation_config: self.build_generation_config(request.format),
        };

        let completion = self.generate_content(api_request).await?;

        let response_text = completion.first_candidate_text().unwrap_or_else(|| {
            warn!("No content in Gemini response, returning empty text");
            String::new()
        });

        Ok(response_text)
    }

    fn name(&self) -> &str {
        "GeminiGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_json_request() {
        let config = GeminiConfig::builder().api_key("test-key").build();
        let generator = GeminiGenerator::new(config).unwrap();

        let generation_config = generator.build_generation_config(OutputFormat::Json).unwrap();
        assert_eq!(
            generation_config.response_mime_type.as_deref(),
            Some("application/json")
        );
    }

    #[test]
    fn test_generation_config_text_request_without_options() {
        let config = GeminiConfig::builder().api_key("test-key").build();
        let generator = GeminiGenerator::new(config).unwrap();

        assert!(generator.build_generation_config(OutputFormat::Text).is_none());
    }

    #[test]
    fn test_generation_config_text_request_with_options() {
        let config = GeminiConfig::builder()
            .api_key("test-key")
            .max_output_tokens(256)
            .temperature(0.2)
            .build();
        let generator = GeminiGenerator::new(config).unwrap();

        let generation_config = generator.build_generation_config(OutputFormat::Text).unwrap();
        assert_eq!(generation_config.max_output_tokens, Some(256));
        assert_eq!(generation_config.temperature, Some(0.2));
        assert!(generation_config.response_mime_type.is_none());
    }

    #[test]
    fn test_generator_name() {
        let config = GeminiConfig::builder().api_key("test-key").build();
        let generator = GeminiGenerator::new(config).unwrap();
        assert_eq!(generator.name(), "GeminiGenerator");
    }
}
