//! Response schemas declared to the generative model.
//!
//! A `ResponseSchema` is a small tree describing the JSON object a feature
//! expects back. It serialises to the model's schema dialect, where type
//! names are uppercase (`OBJECT`, `ARRAY`, `STRING`, `INTEGER`), and the
//! same tree drives the reply validator.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Node kind of a response schema.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    /// Object with ordered properties.
    Object {
        properties: Vec<(String, ResponseSchema)>,
        required: Vec<String>,
    },
    /// Homogeneous array.
    Array { items: Box<ResponseSchema> },
    /// String, optionally restricted to an enumeration.
    String { enum_values: Vec<String> },
    /// Whole number.
    Integer,
}

/// A node of the declared reply shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSchema {
    pub kind: SchemaKind,
    pub description: Option<String>,
}

impl ResponseSchema {
    fn of(kind: SchemaKind) -> Self {
        Self {
            kind,
            description: None,
        }
    }

    /// Object schema. Properties keep the order given.
    pub fn object<I, K>(properties: I, required: &[&str]) -> Self
    where
        I: IntoIterator<Item = (K, ResponseSchema)>,
        K: Into<String>,
    {
        Self::of(SchemaKind::Object {
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
            required: required.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Array schema.
    pub fn array(items: ResponseSchema) -> Self {
        Self::of(SchemaKind::Array {
            items: Box::new(items),
        })
    }

    /// Free text.
    pub fn string() -> Self {
        Self::of(SchemaKind::String {
            enum_values: Vec::new(),
        })
    }

    /// String restricted to the given values.
    pub fn string_enum(values: &[&str]) -> Self {
        Self::of(SchemaKind::String {
            enum_values: values.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Integer.
    pub fn integer() -> Self {
        Self::of(SchemaKind::Integer)
    }

    /// Attaches a description for the model.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Type name in the model's dialect.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            SchemaKind::Object { .. } => "OBJECT",
            SchemaKind::Array { .. } => "ARRAY",
            SchemaKind::String { .. } => "STRING",
            SchemaKind::Integer => "INTEGER",
        }
    }

    /// Looks up a direct property of an object schema.
    pub fn property(&self, name: &str) -> Option<&ResponseSchema> {
        match &self.kind {
            SchemaKind::Object { properties, .. } => properties
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, schema)| schema),
            _ => None,
        }
    }
}

impl Serialize for ResponseSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.type_name())?;
        if let Some(description) = &self.description {
            map.serialize_entry("description", description)?;
        }
        match &self.kind {
            SchemaKind::Object {
                properties,
                required,
            } => {
                map.serialize_entry("properties", &OrderedProperties(properties))?;
                if !required.is_empty() {
                    map.serialize_entry("required", required)?;
                }
            }
            SchemaKind::Array { items } => {
                map.serialize_entry("items", items.as_ref())?;
            }
            SchemaKind::String { enum_values } => {
                if !enum_values.is_empty() {
                    map.serialize_entry("enum", enum_values)?;
                }
            }
            SchemaKind::Integer => {}
        }
        map.end()
    }
}

struct OrderedProperties<'a>(&'a [(String, ResponseSchema)]);

impl Serialize for OrderedProperties<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, schema) in self.0 {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}
