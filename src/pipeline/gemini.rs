//! Gemini HTTP client for multimodal prescription extraction.
//!
//! Sends the instruction set plus an inline base64 image to the
//! `generateContent` endpoint and returns the model's raw text answer,
//! unparsed. Failures are surfaced to the caller; retry policy, if any,
//! belongs to an outer layer.

use async_trait::async_trait;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// Multimodal extraction model boundary.
///
/// Implemented by `GeminiClient` in production and `MockVisionModel` in
/// tests so the pipeline is exercisable without network access.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Invoke the model with an instruction string and an image payload.
    /// Returns the raw text response.
    async fn generate(
        &self,
        prompt: &str,
        image_bytes: &[u8],
        mime_type: &str,
    ) -> Result<String, ExtractionError>;
}

/// Gemini API client.
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
            client,
            timeout_secs,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

/// Request body for `generateContent`.
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

/// Response body from `generateContent`.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[async_trait]
impl VisionModel for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        image_bytes: &[u8],
        mime_type: &str,
    ) -> Result<String, ExtractionError> {
        let start = std::time::Instant::now();

        let data = base64::engine::general_purpose::STANDARD.encode(image_bytes);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type,
                            data,
                        },
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ExtractionError::Service(format!(
                        "request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    ExtractionError::Service(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ExtractionError::Service(format!("invalid response envelope: {e}")))?;

        let text: String = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ExtractionError::EmptyResponse);
        }

        tracing::info!(
            model = %self.model,
            elapsed_ms = %start.elapsed().as_millis(),
            image_size = image_bytes.len(),
            response_len = text.len(),
            "extraction call complete"
        );

        Ok(text)
    }
}

/// Mock extraction model for testing — returns a configurable response.
pub struct MockVisionModel {
    response: String,
}

impl MockVisionModel {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

#[async_trait]
impl VisionModel for MockVisionModel {
    async fn generate(
        &self,
        _prompt: &str,
        _image_bytes: &[u8],
        _mime_type: &str,
    ) -> Result<String, ExtractionError> {
        Ok(self.response.clone())
    }
}
