//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Structured completions from a generative model
//! - `ResponseValidator` - Checks a model reply against its declared schema
//! - `DocumentRenderer` - Turns a structured document into a downloadable file

mod ai_provider;
mod document_export_service;
mod schema_validator;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Feature, FinishReason,
    ProviderInfo, RequestMetadata, TokenUsage,
};
pub use document_export_service::{
    DocumentRenderer, ExportError, ExportedDocument, WORD_CONTENT_TYPE,
};
pub use schema_validator::ResponseValidator;
