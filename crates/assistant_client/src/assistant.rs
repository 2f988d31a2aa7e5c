use credential_store::{CredentialStore, CredentialStoreError};
use farha_api::{FarhaApiClient, FarhaApiConfig, FarhaApiError};
use thiserror::Error;

use crate::auth::{self, AuthBootstrap, BootstrapOutcome, CredentialSlot, LocationOps};
use crate::chat::{ChatSession, Message, SendOutcome};
use crate::error::SendError;

/// Failure to assemble the assistant from its real parts.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("transport setup failed: {0}")]
    Api(#[from] FarhaApiError),

    #[error("credential storage unavailable: {0}")]
    Store(#[from] CredentialStoreError),
}

/// Facade wiring the HTTP transport, the credential store, and the two state
/// machines into one surface for a presentation layer.
///
/// The credential lives in a single injectable slot rather than ambient
/// process state, so the machines stay independently testable.
pub struct Assistant {
    api: FarhaApiClient,
    store: CredentialStore,
    bootstrap: AuthBootstrap,
    session: ChatSession,
    credential: Option<String>,
}

impl Assistant {
    /// Builds an assistant against the default credential location.
    pub fn new(config: FarhaApiConfig) -> Result<Self, AssistantError> {
        let api = FarhaApiClient::new(config)?;
        let store = CredentialStore::open_default()?;
        Ok(Self::with_parts(api, store))
    }

    #[must_use]
    pub fn with_parts(api: FarhaApiClient, store: CredentialStore) -> Self {
        Self {
            api,
            store,
            bootstrap: AuthBootstrap::new(),
            session: ChatSession::new(),
            credential: None,
        }
    }

    /// Runs the bootstrap machine once and, when it authenticates, primes the
    /// credential slot and loads the chat history.
    ///
    /// Returns `None` on re-entry, mirroring [`AuthBootstrap::run`].
    pub async fn start(&mut self, location: &mut dyn LocationOps) -> Option<BootstrapOutcome> {
        let outcome = self.bootstrap.run(location, &self.store, &self.api).await?;

        if matches!(outcome, BootstrapOutcome::Authenticated(_)) {
            self.credential = CredentialSlot::get(&self.store);
            if let Some(credential) = self.credential.clone() {
                self.session.refresh_history(&self.api, &credential).await;
            }
        }

        Some(outcome)
    }

    #[must_use]
    pub fn timeline(&self) -> &[Message] {
        self.session.timeline()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.session.is_busy()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        self.session.input()
    }

    pub fn on_input_replace(&mut self, text: String) {
        self.session.on_input_replace(text);
    }

    /// Submits the input buffer; a no-op without an authenticated credential.
    pub async fn send(&mut self) -> Result<SendOutcome, SendError> {
        let Some(credential) = self.credential.clone() else {
            return Ok(SendOutcome::Skipped);
        };

        self.session.send(&self.api, &credential).await
    }

    /// Best-effort remote logout followed by an unconditional local reset.
    pub async fn logout(&mut self) {
        auth::logout(&self.api, &self.store).await;
        self.credential = None;
        self.session = ChatSession::new();
    }
}
