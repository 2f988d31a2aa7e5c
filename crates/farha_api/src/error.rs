use std::fmt;

use assistant_provider::ApiError;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Error as JsonError, Value};

#[derive(Debug)]
pub enum FarhaApiError {
    MissingCredential,
    InvalidHeader(String),
    Request(reqwest::Error),
    Status(StatusCode, String),
    Decode(JsonError),
}

/// Backend error envelope (`{"detail": ...}`).
///
/// `detail` is usually a string, but validation failures arrive as structured
/// values; both are surfaced.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorPayload {
    pub detail: Option<Value>,
}

impl fmt::Display for FarhaApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential => write!(f, "bearer credential is required"),
            Self::InvalidHeader(message) => write!(f, "invalid header: {message}"),
            Self::Request(error) => write!(f, "request error: {error}"),
            Self::Status(status, message) => write!(f, "HTTP {status} {message}"),
            Self::Decode(error) => write!(f, "response decode error: {error}"),
        }
    }
}

impl std::error::Error for FarhaApiError {}

impl From<reqwest::Error> for FarhaApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error)
    }
}

impl From<JsonError> for FarhaApiError {
    fn from(error: JsonError) -> Self {
        Self::Decode(error)
    }
}

impl From<FarhaApiError> for ApiError {
    fn from(error: FarhaApiError) -> Self {
        match error {
            FarhaApiError::Status(status, message) => {
                ApiError::with_status(status.as_u16(), message)
            }
            other => ApiError::new(other.to_string()),
        }
    }
}

/// Extract a human-readable message from a failed response body.
pub fn parse_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ErrorPayload>(body) {
        match payload.detail {
            Some(Value::String(text)) => {
                if !text.trim().is_empty() {
                    return text;
                }
            }
            Some(Value::Null) | None => {}
            Some(other) => return other.to_string(),
        }
    }

    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.to_string()
    }
}
