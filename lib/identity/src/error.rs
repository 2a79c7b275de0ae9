//! Error types for the identity crate.
//!
//! Errors are designed for layered context using rootcause:
//! `ProviderError` covers failures of operations delegated to the
//! external identity provider.

use std::fmt;

/// Errors from identity provider operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider has not finished loading; sign-in is not yet possible.
    NotLoaded,
    /// The provider rejected or failed a sign-in attempt.
    SignInFailed { details: String },
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotLoaded => {
                write!(f, "identity provider is not loaded yet")
            }
            Self::SignInFailed { details } => {
                write!(f, "sign-in failed: {details}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}
