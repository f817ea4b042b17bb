// src/utils/serialization.rs
//! Serialization helpers shared by the models and the demo controller.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Decodes a base64 string holding a JSON document, as found in the
/// `data.base64` field of DIDComm attachments.
pub fn decode_base64_json(data: &str) -> Result<Value> {
    let bytes = base64::decode(data.trim()).map_err(|e| {
        Error::Json(serde::de::Error::custom(format!("base64 decoding failed: {}", e)))
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Removes object members whose value is `null`, recursively.
///
/// Records decode with `#[serde(default)]`, so a dropped member comes back as
/// its empty value instead of failing to decode into a non-optional field.
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

/// Pretty-prints a value as JSON for display.
///
/// Falls back to the `Debug` representation if serialization fails.
pub fn to_pretty_json<T: Serialize + std::fmt::Debug>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{:?}", value))
}
