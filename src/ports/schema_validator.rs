//! Response Validator Port - Generated reply validation interface.
//!
//! This port defines the contract for checking a parsed model reply against
//! the [`ResponseSchema`] that was declared with the request. The generation
//! handlers depend on this trait; `JsonSchemaValidator` provides it.

use serde_json::Value;

use crate::domain::foundation::SchemaValidationError;
use crate::domain::schema::ResponseSchema;

/// Port for validating replies against their declared schema.
///
/// # Contract
///
/// Implementations must:
/// - Require every field listed as required, at every depth
/// - Check JSON types and enumerations
/// - Name offending fields by dotted path (`questions[2].type`)
/// - Report every violation found, folded with `SchemaValidationError::collect`
///
/// Cross-field rules (e.g. options present only for multiple choice) are not
/// expressible in the schema and are enforced by the domain conversion.
///
/// # Usage
///
/// ```rust,ignore
/// let validator: &dyn ResponseValidator = get_validator();
/// validator.validate(&LessonPlan::response_schema(), &reply)?;
/// ```
pub trait ResponseValidator: Send + Sync {
    /// Validate a reply against the schema.
    ///
    /// Returns `Ok(())` if valid, `Err` with every violation if not.
    fn validate(&self, schema: &ResponseSchema, reply: &Value) -> Result<(), SchemaValidationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_validator_is_object_safe() {
        fn check<T: ResponseValidator + ?Sized>() {}
        check::<dyn ResponseValidator>();
    }
}
