//! Google Gemini `generateContent` client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::TextGenerator;
use crate::error::{DeckError, Result};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the Gemini `generateContent` REST endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    name: String,
    api_key: String,
    model: String,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client for [`DEFAULT_MODEL`].
    pub fn new(api_key: impl Into<String>) -> Self {
        let model = DEFAULT_MODEL.to_string();
        Self {
            name: format!("Gemini {}", model),
            api_key: api_key.into(),
            model,
            timeout: DEFAULT_TIMEOUT,
            http_client: reqwest::Client::new(),
        }
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim().to_string())),
            _ => Err(DeckError::MissingApiKey),
        }
    }

    /// Use a different Gemini model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self.name = format!("Gemini {}", self.model);
        self
    }

    /// Override the per-request timeout (default 60s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        )
    }

    async fn request_completion(&self, prompt: &str) -> Result<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .timeout(self.timeout)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeckError::ServiceStatus {
                status: status.as_u16(),
                body,
            });
        }

        let completion: GeminiResponse = response
            .json()
            .await
            .map_err(|e| DeckError::MalformedResponse(e.to_string()))?;

        completion
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                DeckError::MalformedResponse("no candidate text in response".to_string())
            })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        self.request_completion(prompt).await
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_embeds_model_and_key() {
        let client = GeminiClient::new("test-key").with_model("gemini-1.5-pro");
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-pro:generateContent?key=test-key"
        );
    }

    #[test]
    fn test_default_model() {
        let client = GeminiClient::new("k");
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.name(), "Gemini gemini-2.0-flash");
    }

    #[test]
    fn test_from_env_requires_non_blank_key() {
        // Single test drives all three states so parallel tests never race
        // on the shared variable.
        std::env::remove_var(API_KEY_ENV);
        assert!(matches!(
            GeminiClient::from_env(),
            Err(DeckError::MissingApiKey)
        ));

        std::env::set_var(API_KEY_ENV, "   ");
        assert!(matches!(
            GeminiClient::from_env(),
            Err(DeckError::MissingApiKey)
        ));

        std::env::set_var(API_KEY_ENV, " secret ");
        let client = GeminiClient::from_env().unwrap();
        assert!(client.endpoint().ends_with("key=secret"));

        std::env::remove_var(API_KEY_ENV);
    }

    #[test]
    fn test_parses_candidate_text() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "  Nova - Ship faster  "}]}}
            ]
        }"#;
        let parsed: GeminiResponse = serde_json::from_str(body).unwrap();
        let text = parsed.candidates[0].content.parts[0].text.trim();
        assert_eq!(text, "Nova - Ship faster");
    }

    #[test]
    fn test_missing_candidates_deserializes_empty() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let parsed: GeminiResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.candidates.is_empty());
    }

    #[test]
    fn test_request_serialization_shape() {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: "hello".to_string(),
                }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["contents"][0]["role"], "user");
    }
}
