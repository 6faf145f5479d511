//! Serde helpers for loosely typed backend fields
//!
//! The backend is not consistent about scalar types: table numbers are
//! stored as strings but sometimes serialized as integers, and menu item
//! ids come back as strings from the customer menu route.

use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;

/// Accept a JSON string or number and keep it as a string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Accept a JSON integer or a string holding one.
pub fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("id out of range: {n}"))),
        Value::String(s) => s.trim().parse().map_err(D::Error::custom),
        other => Err(D::Error::custom(format!("expected id, got {other}"))),
    }
}
