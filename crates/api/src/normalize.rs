//! Conversion of arbitrary backend failures into [`ApiError`] records.
//!
//! The backends behind the veriwork front end disagree on failure shape:
//! some emit `{message}`, some `{error}`, some nest the useful text under
//! `data.error.message`. Everything funnels through here so downstream code
//! matches on [`ErrorKind`] instead of probing optional fields, and so no
//! raw object dump ever reaches the UI.

use serde_json::Value;
use veriwork_types::{ApiError, ErrorKind};

/// Placeholder strings produced when an upstream coerced an object to text.
/// Never shown to the user; treated the same as an absent message.
const OPAQUE_MESSAGES: &[&str] = &["[object Object]", "[object Error]", "[object Response]"];

/// Normalizes a failed response from its status and raw body text.
///
/// A body that fails to parse as JSON is treated as absent; the parse
/// failure itself is never propagated.
#[must_use]
pub fn from_parts(status: u16, body: Option<&str>, fallback: &str) -> ApiError {
    let data = body.and_then(|text| serde_json::from_str::<Value>(text).ok());
    let message = data
        .as_ref()
        .and_then(|d| string_field(d, "message").or_else(|| string_field(d, "error")))
        .unwrap_or_else(|| fallback.to_string());
    ApiError {
        kind: ErrorKind::Http,
        message,
        code: data.as_ref().and_then(|d| string_field(d, "code")),
        details: data.as_ref().and_then(|d| d.get("details").cloned()),
        http_status: Some(status),
    }
}

/// Normalizes a failed [`rquest::Response`].
pub async fn from_response(resp: rquest::Response, fallback: &str) -> ApiError {
    let status = resp.status().as_u16();
    let body = resp.text().await.ok();
    from_parts(status, body.as_deref(), fallback)
}

/// Normalizes a failure observed as an already-thrown value rather than a
/// response.
///
/// Message priority: `value.message` when display-safe, then the nested
/// `data.error.message` → `data.message` → `data.error` → `code` chain,
/// then the value itself when it is a scalar, then `fallback`.
#[must_use]
pub fn from_value(value: &Value, fallback: &str) -> ApiError {
    let message = string_field(value, "message")
        .or_else(|| nested_message(value))
        .or_else(|| string_field(value, "code"))
        .or_else(|| scalar_text(value))
        .unwrap_or_else(|| fallback.to_string());
    ApiError {
        kind: ErrorKind::Internal,
        message,
        code: string_field(value, "code"),
        details: value.get("details").cloned(),
        http_status: None,
    }
}

/// Normalizes a transport-level failure (the request produced no response).
#[must_use]
pub fn from_transport(err: &rquest::Error, fallback: &str) -> ApiError {
    let mut api = ApiError::new(ErrorKind::Network, fallback);
    api.details = Some(Value::String(err.to_string()));
    api
}

fn nested_message(value: &Value) -> Option<String> {
    let data = value.get("data")?;
    if let Some(m) = data.get("error").and_then(|e| string_field(e, "message")) {
        return Some(m);
    }
    if let Some(m) = string_field(data, "message") {
        return Some(m);
    }
    data.get("error").and_then(displayable)
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(displayable)
}

/// A display-safe string: non-empty after trimming and not one of the
/// opaque object-coercion placeholders.
fn displayable(value: &Value) -> Option<String> {
    let s = value.as_str()?.trim();
    if s.is_empty() || OPAQUE_MESSAGES.contains(&s) {
        return None;
    }
    Some(s.to_string())
}

/// Text form of a scalar value. Objects and arrays yield nothing: dumping
/// structure into a user-facing message is exactly what this module exists
/// to prevent. Numbers of any width stringify without failing.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(_) => displayable(value),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
