//! Identity provider interface for the login-relay client.
//!
//! This crate defines the surface the rest of the client consumes from the
//! external identity provider (IdP):
//! - `IdentityProvider`: readiness/sign-in signals, token acquisition, and
//!   the user snapshot
//! - `LocalIdentity`: the read-only user snapshot supplied by the provider
//! - Sign-in operations (credential sign-in and redirect-based OAuth)
//!
//! The provider's own authentication UI and protocol internals stay behind
//! this trait; the client never talks OAuth to the IdP directly. Injecting
//! the trait also lets tests substitute a fake provider.

pub mod error;
pub mod local;
pub mod provider;

pub use error::ProviderError;
pub use local::LocalIdentity;
pub use provider::{IdentityProvider, OauthStrategy, RedirectSignIn, SignInStatus};
