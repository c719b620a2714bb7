//! Error types for the SAR client SDK

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

/// Main error type for the SDK
#[derive(Error, Debug)]
pub enum SdkError {
    /// HTTP transport errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with a non-success status
    #[error(transparent)]
    Remote(#[from] RemoteCallError),

    /// Invalid configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SdkError {
    /// HTTP status code of a remote failure, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Remote(e) => Some(e.status),
            SdkError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Which remote operation produced a [`RemoteCallError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Generate,
    StatusCheck,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Generate => f.write_str("Error"),
            Operation::StatusCheck => f.write_str("Status Check Error"),
        }
    }
}

/// Non-success response from the remote job service.
///
/// Displays as `Error {status}: {detail}` for submissions and
/// `Status Check Error {status}: {detail}` for status checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation} {status}: {detail}")]
pub struct RemoteCallError {
    pub operation: Operation,
    pub status: u16,
    pub detail: String,
}

impl RemoteCallError {
    /// Builds the error from a decoded error body.
    ///
    /// `body` is whatever the error body decoded to (an empty object when it
    /// could not be decoded). A usable `detail` field is rendered as compact
    /// JSON, otherwise the status text is used.
    pub fn from_body(operation: Operation, status: u16, status_text: &str, body: &Value) -> Self {
        let detail = match body.get("detail") {
            Some(detail) if is_truthy(detail) => detail.to_string(),
            _ => status_text.to_string(),
        };

        Self {
            operation,
            status,
            detail,
        }
    }
}

// null, false, 0 and "" do not count as a detail
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
