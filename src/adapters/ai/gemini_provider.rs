//! Gemini Provider - Implementation of AIProvider for Google's Generative Language API.
//!
//! Sends one `generateContent` call per request, with the declared response
//! schema in `generationConfig` so the model answers with a single JSON
//! candidate. There is no retry loop: a failure is returned as-is.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.5-flash")
//!     .with_timeout(Duration::from_secs(120));
//!
//! let provider = GeminiProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::AiConfig;
use crate::domain::schema::ResponseSchema;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Seconds to wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u32 = 30;

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-2.5-flash").
    pub model: String,
    /// Base URL for the API, without a trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Default temperature when the request sets none.
    pub temperature: Option<f32>,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(120),
            temperature: None,
        }
    }

    /// Builds the provider configuration from application settings.
    pub fn from_settings(settings: &AiConfig) -> Result<Self, AIError> {
        let key = settings
            .gemini_api_key()
            .ok_or_else(|| AIError::InvalidRequest("GEMINI_API_KEY is not set".to_string()))?;

        let mut config = Self::new(key)
            .with_model(settings.model.clone())
            .with_base_url(settings.base_url.clone())
            .with_timeout(settings.timeout());
        config.temperature = settings.temperature;
        Ok(config)
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Converts our request to Gemini's format.
    fn to_gemini_request<'a>(&self, request: &'a CompletionRequest) -> GeminiRequest<'a> {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: request.schema.as_ref().map(|_| "application/json"),
                response_schema: request.schema.as_ref(),
                candidate_count: 1,
                temperature: request.temperature.or(self.config.temperature),
            },
        }
    }

    /// Sends a request.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .json(&self.to_gemini_request(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Maps a non-success status to an error.
    async fn handle_response_status(response: Response) -> Result<Response, AIError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u32>().ok());
        let error_body = response.text().await.unwrap_or_default();

        Err(status_error(status.as_u16(), retry_after, &error_body))
    }

    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = Self::handle_response_status(response).await?;
        let reply: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        completion_from_reply(reply, &self.config.model)
    }
}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            feature = %request.metadata.feature,
            trace_id = %request.metadata.trace_id,
            model = %self.config.model,
            "sending generateContent request"
        );

        let response = self.send_request(&request).await?;
        let completion = self.parse_response(response).await;

        if let Err(ref err) = completion {
            tracing::warn!(
                feature = %request.metadata.feature,
                trace_id = %request.metadata.trace_id,
                error = %err,
                "gemini request failed"
            );
        }
        completion
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model)
    }
}

/// Maps an HTTP error status and body to an `AIError`.
fn status_error(status: u16, retry_after: Option<u32>, body: &str) -> AIError {
    match status {
        401 | 403 => AIError::AuthenticationFailed,
        // Gemini reports a bad key as a 400.
        400 if body.contains("API_KEY_INVALID") => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS)),
        400..=499 => AIError::InvalidRequest(format!("status {}: {}", status, body)),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, body)),
    }
}

/// Extracts the single candidate's text from a parsed reply.
fn completion_from_reply(
    reply: GeminiResponse,
    default_model: &str,
) -> Result<CompletionResponse, AIError> {
    if let Some(reason) = reply.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(AIError::content_filtered(format!("prompt blocked: {}", reason)));
    }

    let candidate = reply
        .candidates
        .into_iter()
        .next()
        .ok_or(AIError::EmptyResponse)?;

    let finish_reason = match candidate.finish_reason.as_deref() {
        None | Some("STOP") => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("BLOCKLIST") | Some("PROHIBITED_CONTENT") | Some("SPII") => {
            FinishReason::ContentFilter
        }
        Some(_) => FinishReason::Other,
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(match finish_reason {
            FinishReason::ContentFilter => {
                AIError::content_filtered(candidate.finish_reason.unwrap_or_default())
            }
            _ => AIError::EmptyResponse,
        });
    }

    let usage = reply
        .usage_metadata
        .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
        .unwrap_or_default();

    Ok(CompletionResponse {
        content: text,
        usage,
        model: reply
            .model_version
            .unwrap_or_else(|| default_model.to_string()),
        finish_reason,
    })
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'static str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a ResponseSchema>,
    candidate_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{Feature, RequestMetadata};
    use serde_json::json;

    fn provider() -> GeminiProvider {
        GeminiProvider::new(GeminiConfig::new("test-key")).unwrap()
    }

    fn reply(value: serde_json::Value) -> GeminiResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn config_builder_works() {
        let config = GeminiConfig::new("test-key")
            .with_model("gemini-pro")
            .with_base_url("https://custom.api.com/v1/")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.base_url, "https://custom.api.com/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn config_from_settings_requires_key() {
        let settings = AiConfig::default();
        assert!(matches!(
            GeminiConfig::from_settings(&settings),
            Err(AIError::InvalidRequest(_))
        ));

        let settings = AiConfig {
            gemini_api_key: Some(Secret::new("abc".to_string())),
            temperature: Some(0.4),
            ..AiConfig::default()
        };
        let config = GeminiConfig::from_settings(&settings).unwrap();
        assert_eq!(config.api_key(), "abc");
        assert_eq!(config.temperature, Some(0.4));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = GeminiConfig::new("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    #[test]
    fn url_targets_generate_content() {
        assert_eq!(
            provider().generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_declares_json_schema() {
        let request = CompletionRequest::new(
            "Genera",
            RequestMetadata::new(Feature::TeacherQuiz, "t-1"),
        )
        .with_schema(ResponseSchema::array(ResponseSchema::string()));

        let provider = provider();
        let body = serde_json::to_value(provider.to_gemini_request(&request)).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], "Genera");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
        assert_eq!(body["generationConfig"]["candidateCount"], 1);
        assert!(body["generationConfig"].get("temperature").is_none());
    }

    #[test]
    fn request_without_schema_omits_mime_type() {
        let request = CompletionRequest::new("Hola", RequestMetadata::new(Feature::LessonPlan, "t"));
        let provider = provider();
        let body = serde_json::to_value(provider.to_gemini_request(&request)).unwrap();
        assert!(body["generationConfig"].get("responseMimeType").is_none());
        assert!(body["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn reply_text_parts_are_joined() {
        let completion = completion_from_reply(
            reply(json!({
                "candidates": [{
                    "content": {"parts": [{"text": "{\"a\":"}, {"text": "1}"}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 3},
                "modelVersion": "gemini-2.5-flash-001"
            })),
            "gemini-2.5-flash",
        )
        .unwrap();

        assert_eq!(completion.content, "{\"a\":1}");
        assert_eq!(completion.usage.total_tokens, 15);
        assert_eq!(completion.model, "gemini-2.5-flash-001");
        assert_eq!(completion.finish_reason, FinishReason::Stop);
    }

    #[test]
    fn missing_candidates_is_empty_response() {
        let err = completion_from_reply(reply(json!({})), "m").unwrap_err();
        assert_eq!(err, AIError::EmptyResponse);
    }

    #[test]
    fn blank_text_is_empty_response() {
        let err = completion_from_reply(
            reply(json!({"candidates": [{"content": {"parts": [{"text": "  "}]}}]})),
            "m",
        )
        .unwrap_err();
        assert_eq!(err, AIError::EmptyResponse);
    }

    #[test]
    fn blocked_prompt_is_content_filtered() {
        let err = completion_from_reply(
            reply(json!({"promptFeedback": {"blockReason": "SAFETY"}})),
            "m",
        )
        .unwrap_err();
        assert!(matches!(err, AIError::ContentFiltered { .. }));
    }

    #[test]
    fn safety_stop_without_text_is_content_filtered() {
        let err = completion_from_reply(
            reply(json!({"candidates": [{"finishReason": "SAFETY"}]})),
            "m",
        )
        .unwrap_err();
        assert_eq!(err, AIError::content_filtered("SAFETY"));
    }

    #[test]
    fn status_codes_map_to_errors() {
        assert_eq!(status_error(401, None, ""), AIError::AuthenticationFailed);
        assert_eq!(status_error(403, None, ""), AIError::AuthenticationFailed);
        assert_eq!(
            status_error(400, None, r#"{"reason":"API_KEY_INVALID"}"#),
            AIError::AuthenticationFailed
        );
        assert_eq!(status_error(429, Some(7), ""), AIError::rate_limited(7));
        assert_eq!(status_error(429, None, ""), AIError::rate_limited(30));
        assert!(matches!(status_error(404, None, "x"), AIError::InvalidRequest(_)));
        assert!(matches!(status_error(503, None, "x"), AIError::Unavailable { .. }));
    }

    #[test]
    fn provider_info_reports_model() {
        let info = provider().provider_info();
        assert_eq!(info.name, "gemini");
        assert_eq!(info.model, "gemini-2.5-flash");
        assert!(info.supports_schema);
    }
}
