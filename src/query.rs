//! Query-string encoding for GET and DELETE payloads.
//!
//! A payload is serialized to JSON and flattened into `key=value` pairs.
//! Lists become a single comma-joined value, keys are emitted in
//! lexicographic order so the same payload always yields the same URL.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{HubSpotError, Result};

/// Flatten `payload` into sorted query pairs.
pub fn to_pairs<Q: Serialize + ?Sized>(payload: &Q) -> Result<BTreeMap<String, String>> {
    let value =
        serde_json::to_value(payload).map_err(|e| HubSpotError::Encode(e.to_string()))?;

    let object = match value {
        Value::Null => return Ok(BTreeMap::new()),
        Value::Object(map) => map,
        other => {
            return Err(HubSpotError::Encode(format!(
                "query payload must be an object, got {other}"
            )))
        }
    };

    let mut pairs = BTreeMap::new();
    for (key, value) in object {
        let encoded = match value {
            Value::Null => continue,
            Value::Array(items) => {
                if items.is_empty() {
                    continue;
                }
                let parts = items
                    .into_iter()
                    .map(|item| scalar(&key, item))
                    .collect::<Result<Vec<_>>>()?;
                parts.join(",")
            }
            other => scalar(&key, other)?,
        };
        pairs.insert(key, encoded);
    }
    Ok(pairs)
}

/// Encode `payload` as an `application/x-www-form-urlencoded` string.
pub fn encode<Q: Serialize + ?Sized>(payload: &Q) -> Result<String> {
    let pairs = to_pairs(payload)?;
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    Ok(serializer.finish())
}

fn scalar(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(HubSpotError::Encode(format!(
            "query field `{key}` must be a scalar or a list of scalars"
        ))),
    }
}
