//! Response envelope normalization.
//!
//! The backend wraps payloads inconsistently: a bare value, `{data: ..}`,
//! `{success, data}`, or `{courses: [..]}` / `{faqs: [..]}` for lists. Everything
//! coming off the network passes through here once, so callers only ever
//! see the payload itself.

use serde_json::Value;

/// Keys that may hold a list payload, in lookup order.
const LIST_KEYS: [&str; 3] = ["data", "courses", "faqs"];

/// Strip a `{data: ..}` or `{success, data}` wrapper.
///
/// Nested wrappers (`{data: {data: [..]}}`, as produced by paginated
/// endpoints) are stripped repeatedly. Objects without `data` are returned
/// unchanged.
pub fn payload(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            let inner = map.remove("data").unwrap_or(Value::Null);
            if inner.is_null() {
                Value::Null
            } else {
                payload(inner)
            }
        }
        other => other,
    }
}

/// Extract a list payload, empty when none of the known shapes match.
pub fn list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => LIST_KEYS
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(inner @ (Value::Array(_) | Value::Object(_))) => Some(list(inner)),
                _ => None,
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Extract a single record.
///
/// When the payload is a list the last element wins, matching how
/// singleton tables (form copy, page settings) are appended to over time.
pub fn record(value: Value) -> Value {
    match payload(value) {
        Value::Array(mut items) => items.pop().unwrap_or(Value::Null),
        other => other,
    }
}

/// Deserialize each list element, dropping the ones that do not fit.
pub fn typed_list<T: serde::de::DeserializeOwned>(value: Value) -> Vec<T> {
    let items = list(value);
    let total = items.len();
    let parsed: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if parsed.len() < total {
        log::debug!("Dropped {} malformed list entries", total - parsed.len());
    }
    parsed
}
