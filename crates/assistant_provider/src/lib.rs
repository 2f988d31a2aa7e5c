//! Transport-agnostic contract for the F.A.R.H.A assistant backend.
//!
//! This crate intentionally defines only the wire data shapes and the
//! operation trait the client state machines consume. It excludes transport
//! details (HTTP, headers, endpoints) and client policy (persistence,
//! optimistic rendering, error surfacing).

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Failure of one remote operation, detached from any transport machinery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: Option<u16>,
    message: String,
}

impl ApiError {
    /// Creates an error without an HTTP status (transport-level failures).
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Creates an error carrying the HTTP status the backend answered with.
    #[must_use]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Returns the HTTP status when the backend produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the underlying error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {status}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<String> for ApiError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ApiError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Authenticated user profile reported by the backend.
///
/// Only `name` and `picture` are meaningful to the client; every other field
/// the backend includes (`id`, `email`, `created_at`, ...) rides along
/// opaquely for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of exchanging a one-time session id for a bearer credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionGrant {
    pub session_token: String,
    pub user: UserProfile,
    /// Reported by the backend; the client carries it but does not act on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// One completed round trip as recorded by the history endpoint.
///
/// A record always expands to exactly two timeline messages, user text first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub message_id: String,
    pub message: String,
    pub response: String,
    pub timestamp: String,
}

/// Assistant reply to one sent chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message_id: String,
    pub response: String,
    pub timestamp: String,
}

/// Remote operations the assistant client consumes.
///
/// `exchange_session` is the only unauthenticated operation; every other call
/// carries the bearer credential. Each call resolves or fails exactly once;
/// retry and cancellation are not part of this contract.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    /// Exchanges a one-time session id for a credential and the user profile.
    async fn exchange_session(&self, session_id: &str) -> Result<SessionGrant, ApiError>;

    /// Validates a stored credential and returns the profile it belongs to.
    async fn verify_profile(&self, credential: &str) -> Result<UserProfile, ApiError>;

    /// Returns completed round trips, most recent first.
    async fn load_history(&self, credential: &str) -> Result<Vec<HistoryRecord>, ApiError>;

    /// Sends one chat message and waits for the assistant reply.
    async fn send_chat(&self, credential: &str, message: &str) -> Result<ChatReply, ApiError>;

    /// Invalidates the remote session. Best effort; callers swallow failures.
    async fn logout(&self, credential: &str) -> Result<(), ApiError>;
}
