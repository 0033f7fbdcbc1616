use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;

/// Errors that can occur while talking to the generation service.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("no API key configured for the generation service")]
    MissingApiKey,

    #[error("generation request failed: {0}")]
    RequestFailed(String),

    #[error("generation service returned {status}: {detail}")]
    ServiceError { status: u16, detail: String },

    #[error("failed to parse generation response: {0}")]
    ParseError(String),
}

/// A text-generation backend. Takes a fully built prompt and returns the
/// model's reply text.
pub trait TextGenerator: Send + Sync {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationError>> + Send + 'a>>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Gemini client
// ---------------------------------------------------------------------------

/// Client for the Gemini generateContent API.
#[derive(Debug)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    parts: Vec<GeminiPart>,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, GenerationError> {
        if config.api_key.is_empty() {
            return Err(GenerationError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;
        Ok(Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
            client,
        })
    }
}

impl TextGenerator for GeminiClient {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationError>> + Send + 'a>> {
        Box::pin(async move {
            let url = format!("{}/{}:generateContent", self.endpoint, self.model);

            let body = GeminiRequest {
                contents: vec![GeminiContent {
                    parts: vec![GeminiPart {
                        text: prompt.to_string(),
                    }],
                }],
            };

            let resp = self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .header("x-goog-api-key", &self.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

            if !resp.status().is_success() {
                let status = resp.status().as_u16();
                let detail = resp.text().await.unwrap_or_default();
                return Err(GenerationError::ServiceError { status, detail });
            }

            let parsed: GeminiResponse = resp
                .json()
                .await
                .map_err(|e| GenerationError::ParseError(e.to_string()))?;

            parsed
                .candidates
                .first()
                .and_then(|c| c.content.parts.first())
                .map(|p| p.text.clone())
                .ok_or_else(|| GenerationError::ParseError("empty candidates".to_string()))
        })
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
