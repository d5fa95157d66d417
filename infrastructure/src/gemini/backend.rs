//! Gemini structured-generation backend
//!
//! Calls the Gemini REST API directly and asks for a JSON document that
//! conforms to the council output schema.

use super::types::{Content, ErrorWrapper, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use async_trait::async_trait;
use council_application::{BackendError, Credential, FailureKind, GenerationBackend, GenerationRequest};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Adapter implementing [`GenerationBackend`] over the Gemini HTTP API.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: Client,
    endpoint: String,
    model: String,
}

impl GeminiBackend {
    /// Creates a backend for `model` at `endpoint` with a per-call timeout.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::other(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn build_body(request: &GenerationRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(request.user_prompt.clone())],
            system_instruction: Some(Content::system(request.system_instruction.clone())),
            generation_config: GenerationConfig {
                response_mime_type: request.response_mime_type.to_string(),
                response_schema: request.response_schema.clone(),
            },
        }
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(
        &self,
        request: &GenerationRequest,
        credential: &Credential,
    ) -> Result<String, BackendError> {
        let body = Self::build_body(request);
        debug!(model = %self.model, mode = request.mode.as_str(), "POST generateContent");

        let response = self
            .client
            .post(self.url())
            .header(API_KEY_HEADER, credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        let text = response.text().await.map_err(map_transport_error)?;
        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| BackendError::other(format!("Failed to parse Gemini response: {e}")))?;

        parsed
            .into_text()
            .ok_or_else(|| BackendError::other("Gemini API returned no text in the response candidates"))
    }
}

/// Classify an HTTP status
pub fn classify_status(status: StatusCode) -> FailureKind {
    match status {
        StatusCode::SERVICE_UNAVAILABLE => FailureKind::ServiceUnavailable,
        StatusCode::TOO_MANY_REQUESTS => FailureKind::RateLimited,
        _ => FailureKind::Other,
    }
}

/// Body and decode errors can only come from reading the response stream
fn map_transport_error(err: reqwest::Error) -> BackendError {
    let kind = if err.is_connect()
        || err.is_timeout()
        || err.is_request()
        || err.is_body()
        || err.is_decode()
    {
        FailureKind::Network
    } else {
        FailureKind::Other
    };
    BackendError::new(kind, format!("Gemini API request failed: {err}"))
}

fn map_http_error(status: StatusCode, body: &str) -> BackendError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.to_string());

    BackendError::new(classify_status(status), format!("HTTP {}: {}", status.as_u16(), message))
}
