// ABOUTME: Google Gemini LLM provider implementation over the Generative Language REST API
// ABOUTME: Sends text with inline images, lists models, and maps quota errors to friendly messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Provider
//!
//! Implementation of the `LlmProvider` trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with your API key from
//! Google AI Studio. `GEMINI_MODEL` picks the model used for text and vision
//! calls (default `gemini-1.5-flash`), and `AI_REQUEST_TIMEOUT_SECS` bounds
//! every call.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, ModelInfo};
use crate::config::GeminiConfig;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::utils::http_client::ai_client;

/// Service name used in error messages
const SERVICE: &str = "Gemini";

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Page size requested when listing models
const MODELS_PAGE_SIZE: u32 = 100;

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

/// Role Gemini expects on caller-authored content
const USER_ROLE: &str = "user";

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

/// Part of content (text or inline binary data)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    /// Text content
    Text { text: String },
    /// Inline base64 payload
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    /// Anything else the API may return
    Other(serde_json::Value),
}

/// Inline binary payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    prompt_feedback: Option<PromptFeedback>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

/// Why a prompt was refused
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

/// Model catalog page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<GeminiModel>,
    next_page_token: Option<String>,
}

/// Catalog entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiModel {
    name: String,
    display_name: Option<String>,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    base_url: String,
    default_model: String,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .finish_non_exhaustive()
    }
}

impl GeminiProvider {
    /// Create a provider from configuration, with its own bounded HTTP client
    #[must_use]
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            client: ai_client(config),
            base_url: config.base_url.clone(),
            default_model: config.model.clone(),
        }
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{model}:{method}", self.base_url)
    }

    fn convert_parts(message: &ChatMessage) -> Vec<ContentPart> {
        let mut parts = vec![ContentPart::Text {
            text: message.content.clone(),
        }];
        parts.extend(message.images.iter().map(|image| ContentPart::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.clone(),
                data: image.to_base64(),
            },
        }));
        parts
    }

    /// Build a Gemini API request from a `ChatRequest`
    fn build_gemini_request(request: &ChatRequest) -> GeminiRequest {
        GeminiRequest {
            contents: request
                .messages
                .iter()
                .map(|message| GeminiContent {
                    role: Some(USER_ROLE.to_owned()),
                    parts: Self::convert_parts(message),
                })
                .collect(),
        }
    }

    /// Concatenate the text parts of the first candidate
    fn extract_content(response: &GeminiResponse) -> AppResult<String> {
        let text: String = response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| match part {
                        ContentPart::Text { text } => Some(text.as_str()),
                        ContentPart::InlineData { .. } | ContentPart::Other(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default();

        if !text.is_empty() {
            return Ok(text);
        }

        let reason = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
            .or_else(|| {
                response
                    .candidates
                    .as_ref()
                    .and_then(|c| c.first())
                    .and_then(|c| c.finish_reason.as_deref())
            })
            .unwrap_or("empty response");

        Err(AppError::external_service(
            SERVICE,
            format!("No content in response ({reason})"),
        ))
    }

    fn map_transport_error(&self, error: reqwest::Error) -> AppError {
        let message = if error.is_timeout() {
            format!("request timed out (model {})", self.default_model)
        } else {
            format!("HTTP request failed: {error}")
        };
        AppError::external_unavailable(SERVICE, message).with_source(error)
    }

    /// Map API error status to appropriate error type
    ///
    /// Rate limit (429) errors become a user-facing wait message.
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                Self::extract_quota_message(&message),
            ),
            503 => AppError::external_unavailable(SERVICE, message),
            _ => AppError::external_service(SERVICE, format!("API error ({status}): {message}")),
        }
    }

    /// Extract a user-friendly quota/rate limit message from Gemini error
    ///
    /// Gemini reports the delay as e.g. `Please retry in 6.406453963s.`
    fn extract_quota_message(message: &str) -> String {
        const RETRY_PREFIX: &str = "Please retry in ";

        let seconds = message.find(RETRY_PREFIX).and_then(|pos| {
            let after_prefix = &message[pos + RETRY_PREFIX.len()..];
            let end = after_prefix.find('s')?;
            after_prefix[..end].parse::<f64>().ok()
        });

        match seconds {
            Some(seconds) => format!(
                "AI service quota exceeded. Please try again in {} seconds.",
                seconds.ceil() as u64
            ),
            None => "AI service quota exceeded. Please wait a moment and try again.".to_owned(),
        }
    }

    async fn fetch_models_page(&self, page_token: Option<&str>) -> AppResult<ListModelsResponse> {
        let mut request = self
            .client
            .get(format!("{}/models", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("pageSize", MODELS_PAGE_SIZE.to_string())]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            error!(status = %status, "Gemini model listing failed");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::external_service(SERVICE, format!("Failed to parse model list: {e}"))
        })
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::multimodal()
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = self.build_url(model, "generateContent");

        let gemini_request = Self::build_gemini_request(request);

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response");
                AppError::external_service(SERVICE, format!("Failed to parse response: {e}"))
            })?;

        if let Some(error) = gemini_response.error {
            return Err(AppError::external_service(SERVICE, error.message));
        }

        let content = Self::extract_content(&gemini_response)?;
        let finish_reason = gemini_response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.clone());

        debug!("Successfully received Gemini response");

        Ok(ChatResponse {
            content,
            model: model.to_owned(),
            finish_reason,
        })
    }

    async fn list_models(&self) -> AppResult<Vec<ModelInfo>> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.fetch_models_page(page_token.as_deref()).await?;
            models.extend(page.models.into_iter().map(|m| ModelInfo {
                display_name: m.display_name.unwrap_or_else(|| m.name.clone()),
                name: m.name,
            }));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ImageAttachment;

    fn provider() -> GeminiProvider {
        GeminiProvider::new(&GeminiConfig::with_api_key("test-key"))
    }

    #[test]
    fn test_quota_message_rounds_retry_delay_up() {
        let message = "Resource has been exhausted. Please retry in 6.406453963s.";
        assert_eq!(
            GeminiProvider::extract_quota_message(message),
            "AI service quota exceeded. Please try again in 7 seconds."
        );
    }

    #[test]
    fn test_quota_message_without_delay() {
        assert_eq!(
            GeminiProvider::extract_quota_message("Quota exceeded"),
            "AI service quota exceeded. Please wait a moment and try again."
        );
    }

    #[test]
    fn test_map_api_error_codes() {
        let body = r#"{"error": {"code": 429, "message": "Please retry in 2s."}}"#;
        let err = GeminiProvider::map_api_error(429, body);
        assert_eq!(err.code, ErrorCode::ExternalRateLimited);
        assert_eq!(
            err.message,
            "AI service quota exceeded. Please try again in 2 seconds."
        );

        let err = GeminiProvider::map_api_error(400, r#"{"error": {"message": "API key not valid"}}"#);
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
        assert!(err.message.contains("API key not valid"));
    }

    #[test]
    fn test_build_url_accepts_qualified_model_names() {
        let provider = provider();
        assert_eq!(
            provider.build_url("models/gemini-1.5-flash", "generateContent"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_images_become_inline_data_parts() {
        let image = ImageAttachment::from_encoded("data:image/png;base64,iVBORw0KGgo=").unwrap();
        let request = ChatRequest::new(vec![ChatMessage::user("Analyze").with_image(image)]);

        let json = serde_json::to_value(GeminiProvider::build_gemini_request(&request)).unwrap();
        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "Analyze");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], "iVBORw0KGgo=");
        assert_eq!(json["contents"][0]["role"], "user");
    }

    #[test]
    fn test_extract_content_joins_text_parts() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "Hello "}, {"text": "there"}]}, "finishReason": "STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(
            GeminiProvider::extract_content(&response).unwrap(),
            "Hello there"
        );
    }

    #[test]
    fn test_blocked_prompt_reports_reason() {
        let response: GeminiResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        let err = GeminiProvider::extract_content(&response).unwrap_err();
        assert!(err.message.contains("SAFETY"));
    }
}
