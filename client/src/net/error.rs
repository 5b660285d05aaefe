//! Error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages render `ApiError` directly as an inline banner, so `Display` is the
//! user-facing message. For HTTP failures that is the backend's `detail` or
//! `error` field when present, otherwise a per-endpoint fallback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    #[must_use]
    pub fn from_status(status: u16, body: &[u8], fallback: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| fallback.to_owned());
        Self::Status { status, message }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of a backend error body.
fn server_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["detail", "error", "message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .map(str::to_owned)
        .or_else(|| first_field_error(&value))
}

/// DRF validation errors look like `{"field": ["message", ...]}`.
fn first_field_error(value: &serde_json::Value) -> Option<String> {
    let (field, messages) = value.as_object()?.iter().next()?;
    let first = messages.as_array()?.first()?.as_str()?;
    Some(format!("{field}: {first}"))
}
