//! The backend gateway: HTTP interface to the application backend.
//!
//! Two operations prove identity to the backend: plain session
//! verification against the profile endpoint, and oauth-login, which
//! additionally provisions/links a backend account. They stay distinct
//! operations because their contracts differ; both are single-attempt,
//! with retry policy left to the caller.

use crate::config::GatewayConfig;
use crate::user::{BackendUser, UserInfoHint};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use login_relay_core::{IdentityToken, Result};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};

/// Transport code reported when the backend refuses the connection.
pub const CONNECTION_REFUSED: &str = "connection_refused";

/// Transport code reported when a request times out.
pub const TIMEOUT: &str = "timeout";

/// Header carrying the base64-encoded user-info hint.
///
/// Base64 sidesteps transport encoding issues with non-ASCII display
/// names; the companion header tags the encoding scheme.
const USER_INFO_HEADER: &str = "X-User-Info";
const USER_INFO_ENCODING_HEADER: &str = "X-User-Info-Encoded";
const USER_INFO_ENCODING: &str = "base64";

/// An HTTP response the backend answered with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRejection {
    /// The HTTP status code.
    pub status: u16,
    /// The response body, as text.
    pub body: String,
}

/// Raw failure produced by a gateway operation.
///
/// Backend failures are heterogeneous: the backend may answer with a
/// non-success status, the transport may fail with a connection-level
/// code, or something else may go wrong with only a message to show for
/// it. All three facets may be populated at once; the classifier decides
/// which one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayFailure {
    /// The backend's non-success response, if one arrived.
    pub response: Option<HttpRejection>,
    /// Transport/connection failure code, if the request never completed.
    pub transport_code: Option<String>,
    /// A generic error message, when neither shape applies.
    pub message: Option<String>,
}

impl GatewayFailure {
    /// A failure carrying a non-success backend response.
    #[must_use]
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self {
            response: Some(HttpRejection {
                status,
                body: body.into(),
            }),
            ..Self::default()
        }
    }

    /// A transport-level failure with a connection code.
    #[must_use]
    pub fn transport(code: impl Into<String>) -> Self {
        Self {
            transport_code: Some(code.into()),
            ..Self::default()
        }
    }

    /// A generic failure with only a message.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

impl fmt::Display for GatewayFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(rejection) = &self.response {
            write!(f, "backend responded with status {}", rejection.status)
        } else if let Some(code) = &self.transport_code {
            write!(f, "transport failure: {code}")
        } else if let Some(message) = &self.message {
            write!(f, "{message}")
        } else {
            write!(f, "unknown gateway failure")
        }
    }
}

impl std::error::Error for GatewayFailure {}

impl From<reqwest::Error> for GatewayFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::transport(CONNECTION_REFUSED)
        } else if err.is_timeout() {
            Self::transport(TIMEOUT)
        } else {
            Self::from_message(err.to_string())
        }
    }
}

/// Errors from gateway construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The underlying HTTP client could not be built.
    ClientBuild { details: String },
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientBuild { details } => {
                write!(f, "failed to build HTTP client: {details}")
            }
        }
    }
}

impl std::error::Error for GatewayError {}

/// HTTP interface exposed by the application backend.
///
/// The session controller calls exactly one of these per verification
/// attempt. Implementations must not retry or cache; two identical calls
/// are independent requests.
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// Verifies the session and fetches the canonical user record.
    ///
    /// The token travels as a bearer credential; the hint rides along in
    /// the base64-encoded `X-User-Info` header.
    async fn verify_session(
        &self,
        token: &IdentityToken,
        hint: &UserInfoHint,
    ) -> std::result::Result<BackendUser, GatewayFailure>;

    /// Completes an OAuth login, provisioning/linking a backend account.
    ///
    /// The response payload is opaque to the client and surfaced verbatim.
    async fn oauth_login(
        &self,
        token: &IdentityToken,
        hint: &UserInfoHint,
    ) -> std::result::Result<JsonValue, GatewayFailure>;
}

/// Request body for the oauth-login endpoint.
#[derive(Serialize)]
struct OauthLoginBody<'a> {
    auth_token: &'a str,
    user_info: &'a UserInfoHint,
}

/// Encodes the user-info hint for the `X-User-Info` header.
fn encode_user_info(hint: &UserInfoHint) -> std::result::Result<String, GatewayFailure> {
    let json = serde_json::to_vec(hint)
        .map_err(|e| GatewayFailure::from_message(format!("failed to encode user info: {e}")))?;
    Ok(BASE64.encode(json))
}

/// reqwest-backed implementation of [`BackendGateway`].
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Creates a gateway for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GatewayError::ClientBuild {
                details: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl BackendGateway for HttpGateway {
    #[instrument(skip(self, token, hint))]
    async fn verify_session(
        &self,
        token: &IdentityToken,
        hint: &UserInfoHint,
    ) -> std::result::Result<BackendUser, GatewayFailure> {
        let encoded_hint = encode_user_info(hint)?;

        let response = self
            .client
            .get(format!("{}/profile", self.base_url))
            .bearer_auth(token.as_str())
            .header(USER_INFO_HEADER, encoded_hint)
            .header(USER_INFO_ENCODING_HEADER, USER_INFO_ENCODING)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "profile verification rejected");
            return Err(GatewayFailure::http(status.as_u16(), body));
        }

        debug!("profile verification succeeded");
        response.json::<BackendUser>().await.map_err(|e| {
            GatewayFailure::from_message(format!("invalid profile response: {e}"))
        })
    }

    #[instrument(skip(self, token, hint))]
    async fn oauth_login(
        &self,
        token: &IdentityToken,
        hint: &UserInfoHint,
    ) -> std::result::Result<JsonValue, GatewayFailure> {
        let body = OauthLoginBody {
            auth_token: token.as_str(),
            user_info: hint,
        };

        let response = self
            .client
            .post(format!("{}/api/v1/auth/users/oauth-login", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "oauth login rejected");
            return Err(GatewayFailure::http(status.as_u16(), body));
        }

        debug!("oauth login succeeded");
        response.json::<JsonValue>().await.map_err(|e| {
            GatewayFailure::from_message(format!("invalid oauth-login response: {e}"))
        })
    }
}
