//! # Response interpretation
//!
//! Turns a raw HTTP response (status, URL, `Content-Type`, body bytes) into
//! either an optional JSON payload or an [`ApiError`]. Kept free of any HTTP
//! client type so every branch is unit-testable.
//!
//! | Response | Result |
//! |----------|--------|
//! | 404, any body | [`ApiError::RouteNotFound`] |
//! | JSON, 2xx | `Ok(Some(value))` |
//! | JSON, error with `errors: {field: [msg, ..]}` | [`ApiError::Validation`] with the first field's first message |
//! | JSON, other error | [`ApiError::Rejected`] with `message`, or a generic text |
//! | non-JSON, 2xx | `Ok(None)` |
//! | non-JSON, error | [`ApiError::Server`] |

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Message used when an error response carries no explanation.
pub const GENERIC_FAILURE: &str = "Something went wrong";

fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| {
        let ct = ct.to_ascii_lowercase();
        ct.contains("application/json") || ct.contains("+json")
    })
}

/// First message of the first field in a validation `errors` object.
fn first_field_error(errors: &Value) -> Option<String> {
    let (_, messages) = errors.as_object()?.iter().next()?;
    match messages {
        Value::Array(list) => list.iter().find_map(|m| m.as_str()).map(str::to_string),
        Value::String(message) => Some(message.clone()),
        _ => None,
    }
}

/// Interpret a response. See the module table for the mapping.
pub fn interpret(
    status: u16,
    url: &str,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<Option<Value>, ApiError> {
    let ok = (200..300).contains(&status);

    if status == 404 {
        return Err(ApiError::RouteNotFound {
            url: url.to_string(),
        });
    }

    if !is_json(content_type) {
        if !ok {
            tracing::error!(
                status,
                "Non-JSON response from {url}: {}",
                String::from_utf8_lossy(body)
            );
            return Err(ApiError::Server { status });
        }
        return Ok(None);
    }

    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) if body.is_empty() && ok => return Ok(None),
        Err(e) if ok => return Err(ApiError::MalformedResponse(e.to_string())),
        Err(_) => return Err(ApiError::Server { status }),
    };

    if ok {
        return Ok(Some(value));
    }

    if let Some(message) = value.get("errors").and_then(first_field_error) {
        return Err(ApiError::Validation(message));
    }

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(GENERIC_FAILURE)
        .to_string();
    Err(ApiError::Rejected { status, message })
}

/// Decode a payload that must be present.
pub fn decode<T: DeserializeOwned>(payload: Option<Value>) -> Result<T, ApiError> {
    let value = payload
        .ok_or_else(|| ApiError::MalformedResponse("expected a JSON body".to_string()))?;
    serde_json::from_value(value).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}
