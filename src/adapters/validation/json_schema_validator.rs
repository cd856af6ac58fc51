//! JSON Schema Validator - Implementation of ResponseValidator.
//!
//! Walks a reply alongside its declared [`ResponseSchema`], collecting every
//! violation with the dotted path of the offending field. Properties the
//! schema does not mention are ignored.

use serde_json::{Map, Value};

use crate::domain::foundation::SchemaValidationError;
use crate::domain::schema::{ResponseSchema, SchemaKind};
use crate::ports::ResponseValidator;

/// Tree-walking validator for declared response schemas.
///
/// # Thread Safety
///
/// This struct is `Send + Sync` and can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaValidator;

impl JsonSchemaValidator {
    pub fn new() -> Self {
        Self
    }

    fn check(schema: &ResponseSchema, value: &Value, path: &str, errors: &mut Vec<SchemaValidationError>) {
        match &schema.kind {
            SchemaKind::Object {
                properties,
                required,
            } => {
                let Some(obj) = value.as_object() else {
                    errors.push(Self::wrong_type(path, "object", value));
                    return;
                };
                Self::check_object(properties, required, obj, path, errors);
            }
            SchemaKind::Array { items } => {
                let Some(arr) = value.as_array() else {
                    errors.push(Self::wrong_type(path, "array", value));
                    return;
                };
                for (i, item) in arr.iter().enumerate() {
                    Self::check(items, item, &format!("{}[{}]", path, i), errors);
                }
            }
            SchemaKind::String { enum_values } => {
                let Some(s) = value.as_str() else {
                    errors.push(Self::wrong_type(path, "string", value));
                    return;
                };
                if !enum_values.is_empty() && !enum_values.iter().any(|allowed| allowed == s) {
                    errors.push(SchemaValidationError::InvalidEnum {
                        field: path.to_string(),
                        allowed: enum_values.clone(),
                        actual: s.to_string(),
                    });
                }
            }
            SchemaKind::Integer => {
                if !Self::is_integer(value) {
                    errors.push(Self::wrong_type(path, "integer", value));
                }
            }
        }
    }

    fn check_object(
        properties: &[(String, ResponseSchema)],
        required: &[String],
        obj: &Map<String, Value>,
        path: &str,
        errors: &mut Vec<SchemaValidationError>,
    ) {
        for field in required {
            if matches!(obj.get(field), None | Some(Value::Null)) {
                errors.push(SchemaValidationError::missing(Self::join(path, field)));
            }
        }

        for (name, schema) in properties {
            match obj.get(name) {
                // Absent or null optional fields are fine; required ones were reported above.
                None | Some(Value::Null) => {}
                Some(value) => Self::check(schema, value, &Self::join(path, name), errors),
            }
        }
    }

    /// Whole numbers, including floats like `2.0` some models emit.
    fn is_integer(value: &Value) -> bool {
        match value {
            Value::Number(n) => {
                n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
            }
            _ => false,
        }
    }

    fn join(parent: &str, field: &str) -> String {
        if parent.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", parent, field)
        }
    }

    fn wrong_type(path: &str, expected: &str, value: &Value) -> SchemaValidationError {
        SchemaValidationError::InvalidType {
            field: if path.is_empty() {
                "root".to_string()
            } else {
                path.to_string()
            },
            expected: expected.to_string(),
            actual: Self::type_name(value),
        }
    }

    fn type_name(value: &Value) -> String {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
        .to_string()
    }
}

impl ResponseValidator for JsonSchemaValidator {
    fn validate(&self, schema: &ResponseSchema, reply: &Value) -> Result<(), SchemaValidationError> {
        let mut errors = Vec::new();
        Self::check(schema, reply, "", &mut errors);
        match SchemaValidationError::collect(errors) {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}
