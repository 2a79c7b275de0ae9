//! The identity token issued by the external identity provider.
//!
//! Tokens are opaque, short-lived bearer credentials. They are held in
//! memory for the duration of a single verification attempt and must never
//! appear in logs, which is why `Debug` and `Display` redact the secret.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque bearer credential issued by the identity provider.
///
/// The wrapped string is only reachable through [`IdentityToken::as_str`],
/// which the backend gateway uses to build the `Authorization` header and
/// the oauth-login request body. Everything else sees a redacted value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityToken(String);

impl IdentityToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for transmission to the backend.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the token carries no usable credential.
    ///
    /// The provider may hand back an empty or whitespace-only string when
    /// no session exists; such a token must be treated as absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityToken(..)")
    }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityToken(..)")
    }
}

impl From<String> for IdentityToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for IdentityToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_secret() {
        let token = IdentityToken::new("eyJhbGciOiJSUzI1NiJ9.secret");
        let debug = format!("{token:?}");
        assert_eq!(debug, "IdentityToken(..)");
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn display_redacts_secret() {
        let token = IdentityToken::new("super-secret");
        assert_eq!(token.to_string(), "IdentityToken(..)");
    }

    #[test]
    fn as_str_exposes_raw_value() {
        let token = IdentityToken::new("abc123");
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn empty_and_whitespace_tokens_are_empty() {
        assert!(IdentityToken::new("").is_empty());
        assert!(IdentityToken::new("   ").is_empty());
        assert!(!IdentityToken::new("tok").is_empty());
    }

    #[test]
    fn serde_is_transparent() {
        let token = IdentityToken::new("tok_1");
        let json = serde_json::to_string(&token).expect("serialize");
        assert_eq!(json, "\"tok_1\"");
        let parsed: IdentityToken = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, token);
    }
}
