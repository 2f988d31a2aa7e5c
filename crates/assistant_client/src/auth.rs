use assistant_provider::{AssistantApi, UserProfile};
use credential_store::CredentialStore;

use crate::error::{AuthFailure, LogoutRemoteError};

/// Fragment parameter carrying the one-time session id after a login redirect.
pub const SESSION_ID_PARAM: &str = "session_id";

/// Visible-location boundary for the login callback fragment.
///
/// The bootstrap machine reads the fragment at most once and strips it after
/// a successful exchange, so a reload cannot replay an already-consumed id.
pub trait LocationOps {
    /// Returns the current fragment without the leading `#`, if any.
    fn fragment(&self) -> Option<String>;

    /// Replaces the visible location without its fragment, adding no history
    /// entry.
    fn strip_fragment(&mut self);
}

/// Single-slot credential dependency injected into the bootstrap machine.
///
/// Storage is assumed always available; implementations fail open by
/// reporting an unreadable or unwritable slot as absent.
pub trait CredentialSlot {
    fn get(&self) -> Option<String>;
    fn set(&self, credential: &str);
    fn remove(&self);
}

impl CredentialSlot for CredentialStore {
    fn get(&self) -> Option<String> {
        CredentialStore::get(self)
    }

    fn set(&self, credential: &str) {
        if let Err(error) = CredentialStore::set(self, credential) {
            log::warn!("failed to persist credential: {error}");
        }
    }

    fn remove(&self) {
        if let Err(error) = CredentialStore::remove(self) {
            log::warn!("failed to clear stored credential: {error}");
        }
    }
}

/// Extracts the one-time session id from a callback fragment such as
/// `session_id=abc123` or `state=xyz&session_id=abc123`.
#[must_use]
pub fn session_id_from_fragment(fragment: &str) -> Option<String> {
    fragment.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == SESSION_ID_PARAM && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

/// Bootstrap progress markers.
///
/// The authenticated user is not retained here; it is handed off by value in
/// [`BootstrapOutcome`] and owned by the presentation layer afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Init,
    ExchangingSession,
    VerifyingStored,
    Authenticated,
    Unauthenticated,
    Failed,
}

/// Terminal result of one bootstrap evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapOutcome {
    Authenticated(UserProfile),
    Unauthenticated { failure: Option<AuthFailure> },
}

/// Startup state machine reconciling three conflicting signals (a pending
/// login callback, a previously stored credential, and neither) into a
/// single authenticated-or-not outcome.
#[derive(Debug)]
pub struct AuthBootstrap {
    state: BootstrapState,
    attempted: bool,
}

impl Default for AuthBootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthBootstrap {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: BootstrapState::Init,
            attempted: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> BootstrapState {
        self.state
    }

    /// Returns true once [`AuthBootstrap::run`] has been evaluated.
    #[must_use]
    pub fn attempted(&self) -> bool {
        self.attempted
    }

    /// Evaluates the transition algorithm exactly once.
    ///
    /// Returns `None` on re-entry: the one-time session id is single-use
    /// server-side, and extraction itself mutates the visible location, so
    /// repeated render triggers must not reach the network again. The
    /// callback token always takes precedence over a stored credential; it
    /// represents a fresher, explicit login.
    pub async fn run(
        &mut self,
        location: &mut dyn LocationOps,
        slot: &dyn CredentialSlot,
        api: &dyn AssistantApi,
    ) -> Option<BootstrapOutcome> {
        if self.attempted {
            return None;
        }
        self.attempted = true;

        let session_id = location
            .fragment()
            .as_deref()
            .and_then(session_id_from_fragment);

        if let Some(session_id) = session_id {
            self.state = BootstrapState::ExchangingSession;
            return Some(match api.exchange_session(&session_id).await {
                Ok(grant) => {
                    slot.set(&grant.session_token);
                    location.strip_fragment();
                    self.state = BootstrapState::Authenticated;
                    BootstrapOutcome::Authenticated(grant.user)
                }
                Err(error) => {
                    slot.remove();
                    self.state = BootstrapState::Failed;
                    BootstrapOutcome::Unauthenticated {
                        failure: Some(AuthFailure::ExchangeRejected(error)),
                    }
                }
            });
        }

        if let Some(credential) = slot.get() {
            self.state = BootstrapState::VerifyingStored;
            return Some(match api.verify_profile(&credential).await {
                Ok(user) => {
                    self.state = BootstrapState::Authenticated;
                    BootstrapOutcome::Authenticated(user)
                }
                Err(error) => {
                    slot.remove();
                    self.state = BootstrapState::Unauthenticated;
                    BootstrapOutcome::Unauthenticated {
                        failure: Some(AuthFailure::CredentialExpired(error)),
                    }
                }
            });
        }

        self.state = BootstrapState::Unauthenticated;
        Some(BootstrapOutcome::Unauthenticated { failure: None })
    }
}

/// Best-effort remote invalidation followed by an unconditional local clear.
///
/// The user must always be able to drop local credentials, so the remote
/// outcome never gates the clear.
pub async fn logout(api: &dyn AssistantApi, slot: &dyn CredentialSlot) {
    if let Some(credential) = slot.get() {
        if let Err(error) = api.logout(&credential).await {
            log::warn!("{}", LogoutRemoteError::from(error));
        }
    }

    slot.remove();
}
