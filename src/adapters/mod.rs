//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generative model providers (Gemini, mock)
//! - `validation` - Reply validation against declared schemas
//! - `document` - Word-compatible document rendering
//! - `http` - REST API (axum)

pub mod ai;
pub mod document;
pub mod http;
pub mod validation;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider, MockResponse};
pub use document::WordHtmlRenderer;
pub use http::{api_router, app_router, ApiDependencies};
pub use validation::JsonSchemaValidator;
