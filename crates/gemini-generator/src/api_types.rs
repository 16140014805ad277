//! Gemini API request and response types.
//!
//! The REST surface uses camelCase field names; structs rename accordingly.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents. A single user turn carrying the full prompt.
    pub contents: Vec<Content>,
    /// Generation options (response MIME type, token limits).
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A content block: one role's parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Content {
    /// Create a user content block from plain text.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: Some(text.into()) }],
            role: Some("user".to_string()),
        }
    }
}

/// A single part of a content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Generation configuration options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i32>,
    /// Set to "application/json" to request strictly-JSON output.
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

/// Response body for `generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenate the text parts of the first candidate, if any.
    pub fn first_candidate_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let mut text = String::new();
        for part in &content.parts {
            if let Some(part_text) = &part.text {
                text.push_str(part_text);
            }
        }
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Response body for the `models` listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}

/// One available model.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    /// Resource name, e.g. "models/gemini-pro-latest".
    pub name: String,
    /// Generation methods the model supports, e.g. "generateContent".
    #[serde(rename = "supportedGenerationMethods", default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    /// Whether this model can serve `generateContent` requests.
    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|method| method == "generateContent")
    }
}

/// API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorDetails,
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    pub message: String,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                ..Default::default()
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["contents"][0]["role"], "user");
    }

    #[test]
    fn test_first_candidate_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Hello"}, {"text": " there"}], "role": "model"}}]}"#,
        )
        .unwrap();

        assert_eq!(response.first_candidate_text().as_deref(), Some("Hello there"));
    }

    #[test]
    fn test_empty_candidates_yield_no_text() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.first_candidate_text().is_none());
    }

    #[test]
    fn test_model_supports_generate_content() {
        let model: ModelInfo = serde_json::from_str(
            r#"{"name": "models/gemini-pro-latest", "supportedGenerationMethods": ["generateContent", "countTokens"]}"#,
        )
        .unwrap();
        assert!(model.supports_generate_content());

        let embed: ModelInfo = serde_json::from_str(
            r#"{"name": "models/embedding-001", "supportedGenerationMethods": ["embedContent"]}"#,
        )
        .unwrap();
        assert!(!embed.supports_generate_content());
    }
}
