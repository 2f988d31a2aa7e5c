use serde::Serialize;

/// Request body for the one-time session exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionExchangeRequest {
    pub session_id: String,
}

/// Request body for one chat round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatSendRequest {
    pub message: String,
}
