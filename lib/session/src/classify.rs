//! The closed error taxonomy surfaced to the user.
//!
//! Backend and transport failures arrive as loosely-shaped
//! [`GatewayFailure`] values; classification re-expresses them as one
//! `ErrorKind` in a single place instead of re-inspecting shapes at each
//! call site. Resolution order matters: a failure can carry both a
//! response and a generic message, and the response shape must win.

use crate::gateway::{CONNECTION_REFUSED, GatewayFailure};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every failure mode a verification attempt can end in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorKind {
    /// The identity provider could not issue a token.
    AuthTokenUnavailable,
    /// The backend rejected the token (HTTP 401).
    Unauthorized,
    /// Authenticated but not permitted (HTTP 403).
    Forbidden,
    /// Any other non-success backend response.
    BackendError { status: u16, body: String },
    /// The backend refused the connection; it is likely down.
    BackendUnreachable,
    /// Some other transport-level failure.
    NetworkError { code: String },
    /// Fallback for failures with no recognizable shape.
    Unknown { message: String },
}

impl ErrorKind {
    /// Classifies a raw gateway failure, first match wins.
    ///
    /// Response-shaped failures are checked before generic-error shapes
    /// because a single value can satisfy both.
    #[must_use]
    pub fn classify(failure: &GatewayFailure) -> Self {
        if let Some(rejection) = &failure.response {
            return match rejection.status {
                401 => Self::Unauthorized,
                403 => Self::Forbidden,
                status => Self::BackendError {
                    status,
                    body: rejection.body.clone(),
                },
            };
        }

        if let Some(code) = &failure.transport_code {
            if code == CONNECTION_REFUSED {
                return Self::BackendUnreachable;
            }
            return Self::NetworkError { code: code.clone() };
        }

        if let Some(message) = &failure.message {
            return Self::Unknown {
                message: message.clone(),
            };
        }

        Self::Unknown {
            message: "unknown".to_string(),
        }
    }

    /// The human-readable message shown for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthTokenUnavailable => {
                "Could not obtain an authentication token; please sign in again.".to_string()
            }
            Self::Unauthorized => {
                "Login verification failed; please sign in again.".to_string()
            }
            Self::Forbidden => "You do not have permission to access this account.".to_string(),
            Self::BackendError { status, body } => {
                format!("Verification failed ({status}): {body}")
            }
            Self::BackendUnreachable => {
                "Could not reach the backend server; it may be down.".to_string()
            }
            Self::NetworkError { code } => format!("Connection error: {code}"),
            Self::Unknown { message } => format!("Verification failed: {message}"),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}
