//! Shared request/parse/validate step behind every generation handler.

use std::sync::Arc;

use serde_json::Value;

use super::generation_error::GenerationError;
use crate::domain::foundation::SchemaValidationError;
use crate::domain::schema::ResponseSchema;
use crate::ports::{AIError, AIProvider, CompletionRequest, Feature, RequestMetadata, ResponseValidator};

/// Asks the model for one JSON reply and checks it against the declared schema.
///
/// Nothing is retried: the first failure is returned.
#[derive(Clone)]
pub struct StructuredGenerator {
    provider: Arc<dyn AIProvider>,
    validator: Arc<dyn ResponseValidator>,
    temperature: Option<f32>,
}

impl StructuredGenerator {
    pub fn new(provider: Arc<dyn AIProvider>, validator: Arc<dyn ResponseValidator>) -> Self {
        Self {
            provider,
            validator,
            temperature: None,
        }
    }

    /// Sets the temperature sent with every request.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Returns the reply as JSON that satisfies `schema`.
    pub async fn generate(
        &self,
        feature: Feature,
        prompt: String,
        schema: &ResponseSchema,
    ) -> Result<Value, GenerationError> {
        let metadata = RequestMetadata::for_feature(feature);
        let trace_id = metadata.trace_id.clone();
        let mut request = CompletionRequest::new(prompt, metadata).with_schema(schema.clone());
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }

        tracing::info!(%feature, %trace_id, provider = %self.provider.provider_info().name, "requesting generation");

        let response = self.provider.complete(request).await.map_err(|err| {
            tracing::warn!(%feature, %trace_id, error = %err, "model call failed");
            GenerationError::transport(feature, err)
        })?;

        if response.content.trim().is_empty() {
            tracing::warn!(%feature, %trace_id, "model returned blank text");
            return Err(GenerationError::transport(feature, AIError::EmptyResponse));
        }

        let reply: Value = serde_json::from_str(&response.content).map_err(|e| {
            tracing::warn!(%feature, %trace_id, error = %e, "reply is not JSON");
            GenerationError::schema(
                feature,
                SchemaValidationError::NotJson {
                    reason: e.to_string(),
                },
            )
        })?;

        self.validator.validate(schema, &reply).map_err(|err| {
            tracing::warn!(
                %feature,
                %trace_id,
                field = err.field().unwrap_or("root"),
                violations = err.error_count(),
                "reply violates declared schema"
            );
            GenerationError::schema(feature, err)
        })?;

        tracing::debug!(%feature, %trace_id, tokens = response.usage.total_tokens, "reply accepted");
        Ok(reply)
    }
}

/// Logs a domain conversion failure and wraps it.
pub(crate) fn rejected(feature: Feature, err: SchemaValidationError) -> GenerationError {
    tracing::warn!(%feature, field = err.field().unwrap_or("root"), error = %err, "reply rejected");
    GenerationError::schema(feature, err)
}
