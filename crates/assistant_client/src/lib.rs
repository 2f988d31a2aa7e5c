//! Client state machines for the F.A.R.H.A assistant.
//!
//! Two pieces of real state live here: the session bootstrap machine that
//! reconciles a login callback, a stored credential, and the absence of both
//! into one authenticated-or-not outcome, and the optimistic chat timeline
//! that renders sends immediately and reconciles them against server replies.
//! Presentation and transport stay behind traits so both machines run against
//! fakes in tests.

mod assistant;
mod auth;
mod chat;
mod error;

pub use assistant::{Assistant, AssistantError};
pub use auth::{
    logout, session_id_from_fragment, AuthBootstrap, BootstrapOutcome, BootstrapState,
    CredentialSlot, LocationOps, SESSION_ID_PARAM,
};
pub use chat::{ChatSession, Message, MessageStatus, SendOutcome};
pub use error::{AuthFailure, HistoryLoadError, LogoutRemoteError, SendError};
