//! Routing decisions for redirect-based login completions.
//!
//! Two routes are reached only as the target of a redirect: the
//! same-origin SSO callback and the OAuth-provider callback. Both apply
//! the same decision table over the provider's readiness and sign-in
//! signals. Decisions are pure values; the surrounding navigation layer
//! performs the actual navigation and must no-op when already at the
//! destination, which makes re-evaluation idempotent.

use login_relay_identity::IdentityProvider;
use serde::{Deserialize, Serialize};

/// Query marker appended to the home route when a login attempt failed.
pub const LOGIN_FAILED_MARKER: &str = "login_failed";

/// Application routes the auth flow navigates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppRoute {
    /// The default/home route.
    Home,
    /// Same-origin SSO completion route.
    SsoCallback,
    /// OAuth-provider completion route.
    OauthCallback,
}

impl AppRoute {
    /// Resolves a path to a route; unrecognized paths go home.
    #[must_use]
    pub fn resolve_path(path: &str) -> Self {
        match path {
            "/sso-callback" => Self::SsoCallback,
            "/oauth-callback" => Self::OauthCallback,
            _ => Self::Home,
        }
    }

    /// The canonical path for this route.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SsoCallback => "/sso-callback",
            Self::OauthCallback => "/oauth-callback",
        }
    }
}

/// Outcome of evaluating a callback route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackDecision {
    /// Provider not ready yet; stay and render "completing sign-in".
    Wait,
    /// Sign-in succeeded; navigate home.
    GoHome,
    /// Sign-in failed; navigate home with the failure marker.
    GoHomeWithError,
}

impl CallbackDecision {
    /// Evaluates the decision table for a callback route.
    ///
    /// The table is keyed on the provider's readiness and sign-in
    /// signals; `signed_in` is irrelevant until the provider is ready.
    #[must_use]
    pub fn decide(provider_ready: bool, signed_in: bool) -> Self {
        if !provider_ready {
            return Self::Wait;
        }
        if signed_in {
            Self::GoHome
        } else {
            Self::GoHomeWithError
        }
    }

    /// Evaluates the decision table against a live provider.
    #[must_use]
    pub fn from_provider<P: IdentityProvider>(provider: &P) -> Self {
        Self::decide(provider.is_loaded(), provider.is_signed_in())
    }

    /// The navigation target, or `None` to remain on the callback route.
    #[must_use]
    pub fn target_path(&self) -> Option<String> {
        match self {
            Self::Wait => None,
            Self::GoHome => Some(AppRoute::Home.path().to_string()),
            Self::GoHomeWithError => Some(format!(
                "{}?error={}",
                AppRoute::Home.path(),
                LOGIN_FAILED_MARKER
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_ready_never_navigates() {
        assert_eq!(CallbackDecision::decide(false, false), CallbackDecision::Wait);
        assert_eq!(CallbackDecision::decide(false, true), CallbackDecision::Wait);
        assert_eq!(CallbackDecision::decide(false, true).target_path(), None);
    }

    #[test]
    fn ready_and_signed_in_goes_home() {
        let decision = CallbackDecision::decide(true, true);
        assert_eq!(decision, CallbackDecision::GoHome);
        assert_eq!(decision.target_path().as_deref(), Some("/"));
    }

    #[test]
    fn ready_but_not_signed_in_goes_home_with_marker() {
        let decision = CallbackDecision::decide(true, false);
        assert_eq!(decision, CallbackDecision::GoHomeWithError);
        assert_eq!(
            decision.target_path().as_deref(),
            Some("/?error=login_failed")
        );
    }

    #[test]
    fn re_evaluation_is_idempotent() {
        let first = CallbackDecision::decide(true, true);
        let second = CallbackDecision::decide(true, true);
        assert_eq!(first, second);
        assert_eq!(first.target_path(), second.target_path());
    }

    #[test]
    fn known_paths_resolve_to_their_routes() {
        assert_eq!(AppRoute::resolve_path("/sso-callback"), AppRoute::SsoCallback);
        assert_eq!(
            AppRoute::resolve_path("/oauth-callback"),
            AppRoute::OauthCallback
        );
        assert_eq!(AppRoute::resolve_path("/"), AppRoute::Home);
    }

    #[test]
    fn unrecognized_paths_redirect_home() {
        assert_eq!(AppRoute::resolve_path("/nowhere"), AppRoute::Home);
        assert_eq!(AppRoute::resolve_path(""), AppRoute::Home);
    }
}
