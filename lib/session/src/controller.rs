//! The session controller: one verification attempt per mount.
//!
//! The controller orchestrates token acquisition and backend
//! verification, publishing progress through a watch channel the view
//! renders from. Attempts are tagged with a monotonically increasing
//! sequence number; only the most recent attempt may apply its result, so
//! a slow stale response can never overwrite a newer one. The watch
//! channel also suppresses publication once the last subscriber (the
//! view) is gone.

use crate::classify::ErrorKind;
use crate::gateway::{BackendGateway, GatewayFailure};
use crate::user::{BackendUser, UserInfoHint};
use login_relay_identity::IdentityProvider;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::debug;

/// Which backend operation the current route calls for.
///
/// Plain verification fetches the profile; the OAuth completion route
/// uses the oauth-login endpoint, which additionally provisions/links a
/// backend account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncRoute {
    /// Plain session verification against the profile endpoint.
    Profile,
    /// OAuth-login completion.
    OauthLogin,
}

/// What a successful synchronization produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncedPayload {
    /// The canonical user record from plain verification.
    Profile(BackendUser),
    /// The oauth-login response, opaque JSON surfaced verbatim.
    OauthLogin(JsonValue),
}

/// Progress of the current verification attempt.
///
/// Exactly one state is observable at a time; a new attempt supersedes
/// the previous one atomically.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No attempt has started.
    Idle,
    /// Waiting for the identity provider to issue a token.
    AcquiringToken,
    /// Token in hand; waiting for the backend.
    VerifyingBackend,
    /// The backend accepted the token.
    Synced(SyncedPayload),
    /// The attempt ended in a classified failure. Terminal for this
    /// attempt; the user may re-trigger sign-in.
    Failed { kind: ErrorKind, message: String },
}

/// Orchestrates token acquisition and backend verification.
///
/// Holds the provider and gateway behind trait seams so tests can inject
/// fakes. The controller is the only writer of [`SessionState`]; views
/// and routers observe through [`SessionController::subscribe`].
pub struct SessionController<P, G> {
    provider: Arc<P>,
    gateway: Arc<G>,
    attempts: AtomicU64,
    state: watch::Sender<SessionState>,
}

impl<P, G> SessionController<P, G>
where
    P: IdentityProvider,
    G: BackendGateway,
{
    /// Creates a controller in the `Idle` state.
    #[must_use]
    pub fn new(provider: Arc<P>, gateway: Arc<G>) -> Self {
        let (state, _) = watch::channel(SessionState::Idle);
        Self {
            provider,
            gateway,
            attempts: AtomicU64::new(0),
            state,
        }
    }

    /// Returns a receiver observing state transitions.
    ///
    /// Dropping every receiver tears the channel down; completions that
    /// arrive afterwards are suppressed.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Returns the last published state.
    #[must_use]
    pub fn current_state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Runs one verification/synchronization attempt.
    ///
    /// A new call while another attempt is in flight invalidates the
    /// earlier attempt; its eventual completion is discarded. Failures
    /// are terminal for the attempt and land in `SessionState::Failed`;
    /// there is no automatic retry.
    pub async fn start_session(&self, route: SyncRoute) {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(attempt, ?route, "starting session verification");
        self.apply(attempt, SessionState::AcquiringToken);

        let token = match self.provider.get_token().await {
            Some(token) if !token.is_empty() => token,
            _ => {
                debug!(attempt, "identity provider issued no token");
                self.apply(attempt, Self::failed(ErrorKind::AuthTokenUnavailable));
                return;
            }
        };

        self.apply(attempt, SessionState::VerifyingBackend);

        let hint = self
            .provider
            .current_user()
            .map(|identity| UserInfoHint::from_identity(&identity))
            .unwrap_or_default();

        let next = match route {
            SyncRoute::Profile => match self.gateway.verify_session(&token, &hint).await {
                Ok(user) => SessionState::Synced(SyncedPayload::Profile(user)),
                Err(failure) => Self::classify(&failure),
            },
            SyncRoute::OauthLogin => match self.gateway.oauth_login(&token, &hint).await {
                Ok(payload) => SessionState::Synced(SyncedPayload::OauthLogin(payload)),
                Err(failure) => Self::classify(&failure),
            },
        };

        self.apply(attempt, next);
    }

    fn classify(failure: &GatewayFailure) -> SessionState {
        Self::failed(ErrorKind::classify(failure))
    }

    fn failed(kind: ErrorKind) -> SessionState {
        let message = kind.user_message();
        SessionState::Failed { kind, message }
    }

    /// Publishes a state transition if the attempt is still the latest.
    fn apply(&self, attempt: u64, next: SessionState) {
        if attempt != self.attempts.load(Ordering::SeqCst) {
            debug!(attempt, "discarding completion from superseded attempt");
            return;
        }
        // send only fails when every receiver is gone, i.e. the view has
        // torn down; either way the completion goes no further.
        let _ = self.state.send(next);
    }
}
