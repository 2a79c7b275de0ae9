//! Session synchronization and callback routing for the login-relay client.
//!
//! This crate implements the identity handshake between the client and the
//! application backend:
//! - `SessionController` runs one verification attempt per mount: acquire
//!   a token from the identity provider, relay it to the backend, publish
//!   progress as a `SessionState`
//! - `BackendGateway` is the HTTP contract with the backend (profile
//!   verification and oauth-login), with a reqwest implementation
//! - `ErrorKind` is the closed failure taxonomy, produced once by the
//!   classifier instead of re-inspected ad hoc at call sites
//! - `CallbackDecision`/`AppRoute` route redirect-based login completions
//!
//! # Example
//!
//! ```no_run
//! use login_relay_session::{
//!     GatewayConfig, HttpGateway, SessionController, SyncRoute,
//! };
//! use std::sync::Arc;
//!
//! # async fn run(provider: Arc<impl login_relay_identity::IdentityProvider>) {
//! let config = GatewayConfig::new("http://localhost:8080");
//! let gateway = Arc::new(HttpGateway::new(&config).expect("gateway"));
//! let controller = SessionController::new(provider, gateway);
//!
//! let mut state = controller.subscribe();
//! controller.start_session(SyncRoute::Profile).await;
//! println!("{:?}", *state.borrow_and_update());
//! # }
//! ```

pub mod classify;
pub mod config;
pub mod controller;
pub mod gateway;
pub mod router;
pub mod user;

pub use classify::ErrorKind;
pub use config::GatewayConfig;
pub use controller::{SessionController, SessionState, SyncRoute, SyncedPayload};
pub use gateway::{BackendGateway, GatewayError, GatewayFailure, HttpGateway, HttpRejection};
pub use router::{AppRoute, CallbackDecision, LOGIN_FAILED_MARKER};
pub use user::{BackendUser, EmailField, UserInfoHint};
