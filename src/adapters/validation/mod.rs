//! Validation Adapters - Schema validation implementations.
//!
//! Contains adapters for validating model replies against their declared
//! response schemas.

mod json_schema_validator;

pub use json_schema_validator::JsonSchemaValidator;
