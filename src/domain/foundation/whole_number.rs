//! Integer fields in model replies.
//!
//! Models sometimes write `1.0` where an integer is expected. The schema
//! validator lets whole floats through, so reply parsing accepts them too
//! and rejects anything with a fractional part.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn whole<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            Number::Int(n) => Ok(n),
            Number::Float(f) if is_whole(f) => Ok(f as i64),
            Number::Float(f) => Err(E::custom(format!("expected a whole number, got {}", f))),
        }
    }
}

fn is_whole(f: f64) -> bool {
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Use with `#[serde(deserialize_with = "whole_number::deserialize")]`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Number::deserialize(deserializer)?.whole()
}

/// Optional variant; pair with `#[serde(default)]`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Number>::deserialize(deserializer)? {
        Some(n) => n.whole().map(Some),
        None => Ok(None),
    }
}
