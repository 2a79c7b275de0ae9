//! The local user snapshot supplied by the identity provider.

use serde::{Deserialize, Serialize};

/// Read-only snapshot of the signed-in user as seen by the provider.
///
/// Every field may be absent; providers only populate what the user's
/// account carries. The snapshot is sourced from the provider and never
/// mutated by the client. It is *not* authoritative for the backend, which
/// must derive trust from the identity token alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalIdentity {
    /// Provider-side user identifier.
    pub id: Option<String>,
    /// Primary email address.
    pub primary_email: Option<String>,
    /// Full display name.
    pub full_name: Option<String>,
    /// Username, if the account has one.
    pub username: Option<String>,
}

impl LocalIdentity {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the provider-side user ID.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the primary email address.
    #[must_use]
    pub fn with_primary_email(mut self, email: impl Into<String>) -> Self {
        self.primary_email = Some(email.into());
        self
    }

    /// Sets the full display name.
    #[must_use]
    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = Some(name.into());
        self
    }

    /// Sets the username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_populates_fields() {
        let identity = LocalIdentity::new()
            .with_id("user_2abc")
            .with_primary_email("alice@example.com")
            .with_full_name("Alice Example")
            .with_username("alice");

        assert_eq!(identity.id.as_deref(), Some("user_2abc"));
        assert_eq!(identity.primary_email.as_deref(), Some("alice@example.com"));
        assert_eq!(identity.full_name.as_deref(), Some("Alice Example"));
        assert_eq!(identity.username.as_deref(), Some("alice"));
    }

    #[test]
    fn default_snapshot_is_fully_absent() {
        let identity = LocalIdentity::new();
        assert!(identity.id.is_none());
        assert!(identity.primary_email.is_none());
        assert!(identity.full_name.is_none());
        assert!(identity.username.is_none());
    }
}
