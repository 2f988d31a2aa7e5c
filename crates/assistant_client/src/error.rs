use assistant_provider::ApiError;
use thiserror::Error;

/// Authentication failure surfaced alongside the unauthenticated outcome.
///
/// The variants carry distinct user-facing messages: a rejected one-time
/// exchange requires restarting the login from scratch, while a rejected
/// stored credential only requires logging in again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("authentication failed: the session link may have expired")]
    ExchangeRejected(#[source] ApiError),

    #[error("session expired, please log in again")]
    CredentialExpired(#[source] ApiError),
}

/// A chat round trip failed after the optimistic append.
///
/// By the time this surfaces the placeholder has already been removed from
/// the timeline; the user's own message stays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to get a response: {source}")]
pub struct SendError {
    #[from]
    pub source: ApiError,
}

/// History fetch failed; the timeline degrades to empty and chat stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load chat history: {source}")]
pub struct HistoryLoadError {
    #[from]
    pub source: ApiError,
}

/// Remote logout failed; logged and otherwise ignored, since the local reset
/// must proceed even when the network is down.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("remote logout failed: {source}")]
pub struct LogoutRemoteError {
    #[from]
    pub source: ApiError,
}
