//! The identity provider trait and sign-in surface.
//!
//! `IdentityProvider` is the seam between the client and the external IdP.
//! Production code wraps the real provider SDK; tests inject a fake. The
//! trait mirrors exactly what the client consumes: readiness signals, the
//! current-user snapshot, token acquisition, and the two sign-in entry
//! points (credentials and redirect-based OAuth).

use crate::error::ProviderError;
use crate::local::LocalIdentity;
use async_trait::async_trait;
use login_relay_core::{IdentityToken, Result};
use serde::{Deserialize, Serialize};

/// Outcome of a credential sign-in attempt, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInStatus {
    /// The sign-in completed; the provider session is established.
    Complete,
    /// The provider requires a further verification factor.
    NeedsFirstFactor,
    /// Any other provider-specific status, carried verbatim.
    Other(String),
}

impl SignInStatus {
    /// Parses the provider's status string.
    #[must_use]
    pub fn from_provider_status(status: &str) -> Self {
        match status {
            "complete" => Self::Complete,
            "needs_first_factor" => Self::NeedsFirstFactor,
            other => Self::Other(other.to_string()),
        }
    }
}

/// OAuth provider selection for redirect-based sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OauthStrategy {
    /// Sign in with Google.
    OauthGoogle,
    /// Sign in with GitHub.
    OauthGithub,
}

impl OauthStrategy {
    /// Returns the strategy identifier the provider expects.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OauthGoogle => "oauth_google",
            Self::OauthGithub => "oauth_github",
        }
    }
}

/// Parameters for a redirect-based OAuth sign-in.
///
/// `redirect_url` is where the provider sends the browser to complete the
/// handshake (the same-origin SSO callback route); `redirect_url_complete`
/// is the final destination once the session exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectSignIn {
    pub strategy: OauthStrategy,
    pub redirect_url: String,
    pub redirect_url_complete: String,
}

impl RedirectSignIn {
    /// Creates a redirect sign-in with explicit URLs.
    #[must_use]
    pub fn new(
        strategy: OauthStrategy,
        redirect_url: impl Into<String>,
        redirect_url_complete: impl Into<String>,
    ) -> Self {
        Self {
            strategy,
            redirect_url: redirect_url.into(),
            redirect_url_complete: redirect_url_complete.into(),
        }
    }

    /// Google sign-in through the standard callback routes.
    #[must_use]
    pub fn google() -> Self {
        Self::new(OauthStrategy::OauthGoogle, "/sso-callback", "/")
    }

    /// GitHub sign-in through the standard callback routes.
    #[must_use]
    pub fn github() -> Self {
        Self::new(OauthStrategy::OauthGithub, "/sso-callback", "/")
    }
}

/// The surface the client consumes from the external identity provider.
///
/// Implementations must be cheap to clone behind an `Arc`; the session
/// controller holds one for the lifetime of the view.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// True once the provider has finished loading in the client.
    fn is_loaded(&self) -> bool;

    /// True if the provider currently holds a signed-in session.
    fn is_signed_in(&self) -> bool;

    /// Returns the current user snapshot, if a session exists.
    fn current_user(&self) -> Option<LocalIdentity>;

    /// Requests a fresh identity token for the current session.
    ///
    /// Returns `None` when the provider cannot issue a token (no session,
    /// or the provider is unavailable). Tokens are short-lived; callers
    /// request a fresh one per verification attempt.
    async fn get_token(&self) -> Option<IdentityToken>;

    /// Signs in with an identifier (email) and password.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::NotLoaded` when called before the provider
    /// is ready, or `ProviderError::SignInFailed` when the provider
    /// rejects the credentials.
    async fn sign_in_with_credentials(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<SignInStatus, ProviderError>;

    /// Starts a redirect-based OAuth sign-in.
    ///
    /// On success the provider navigates the browser away; control returns
    /// to the application on the callback route.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::NotLoaded` when called before the provider
    /// is ready.
    async fn sign_in_with_redirect(
        &self,
        request: RedirectSignIn,
    ) -> Result<(), ProviderError>;

    /// Guard for the sign-in operations.
    ///
    /// Sign-in implementations call this first; until the provider
    /// reports loaded, every sign-in attempt is refused with
    /// `ProviderError::NotLoaded`.
    fn ensure_loaded(&self) -> std::result::Result<(), ProviderError> {
        if self.is_loaded() {
            Ok(())
        } else {
            Err(ProviderError::NotLoaded)
        }
    }
}
