//! Wire DTOs exchanged with the application backend.
//!
//! `UserInfoHint` travels client-to-backend to assist first-time account
//! linking; `BackendUser` is the canonical account record coming back. The
//! field names on both are fixed by the backend's HTTP contract.

use chrono::{DateTime, Utc};
use login_relay_identity::LocalIdentity;
use serde::{Deserialize, Serialize};

/// Projection of [`LocalIdentity`] sent to the backend alongside the token.
///
/// The hint helps the backend link a first-time account; it is never
/// authoritative. Trust is derived from the identity token alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoHint {
    /// Provider-side user identifier.
    #[serde(rename = "clerkUserId", skip_serializing_if = "Option::is_none")]
    pub provider_user_id: Option<String>,
    /// Primary email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Full display name; empty when the account has none.
    pub name: String,
    /// Username; empty when the account has none.
    pub username: String,
}

impl UserInfoHint {
    /// Builds the hint from the provider's user snapshot.
    #[must_use]
    pub fn from_identity(identity: &LocalIdentity) -> Self {
        Self {
            provider_user_id: identity.id.clone(),
            email: identity.primary_email.clone(),
            name: identity.full_name.clone().unwrap_or_default(),
            username: identity.username.clone().unwrap_or_default(),
        }
    }
}

/// The backend's email field, which arrives as a list, a bare string, or
/// not at all depending on the account's provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmailField {
    /// Multiple addresses on record.
    Many(Vec<String>),
    /// A single address.
    One(String),
}

/// Canonical account record returned by the backend.
///
/// The client only ever reads this record: one fetch per verification
/// attempt, stored verbatim, no local mutation. String fields the backend
/// omits deserialize to their empty defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<EmailField>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BackendUser {
    /// Returns all email addresses on record, flattened.
    #[must_use]
    pub fn emails(&self) -> Vec<&str> {
        match &self.email {
            Some(EmailField::Many(addresses)) => {
                addresses.iter().map(String::as_str).collect()
            }
            Some(EmailField::One(address)) => vec![address.as_str()],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_from_full_identity() {
        let identity = LocalIdentity::new()
            .with_id("user_2abc")
            .with_primary_email("alice@example.com")
            .with_full_name("Alice Example")
            .with_username("alice");

        let hint = UserInfoHint::from_identity(&identity);

        assert_eq!(hint.provider_user_id.as_deref(), Some("user_2abc"));
        assert_eq!(hint.email.as_deref(), Some("alice@example.com"));
        assert_eq!(hint.name, "Alice Example");
        assert_eq!(hint.username, "alice");
    }

    #[test]
    fn hint_from_empty_identity_uses_empty_strings() {
        let hint = UserInfoHint::from_identity(&LocalIdentity::new());
        assert!(hint.provider_user_id.is_none());
        assert!(hint.email.is_none());
        assert_eq!(hint.name, "");
        assert_eq!(hint.username, "");
    }

    #[test]
    fn hint_serializes_with_contract_field_names() {
        let hint = UserInfoHint {
            provider_user_id: Some("user_2abc".to_string()),
            email: Some("alice@example.com".to_string()),
            name: "Alice".to_string(),
            username: "alice".to_string(),
        };

        let json = serde_json::to_value(&hint).expect("serialize");
        assert_eq!(json["clerkUserId"], "user_2abc");
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["username"], "alice");
    }

    #[test]
    fn hint_omits_absent_fields_entirely() {
        let hint = UserInfoHint::from_identity(&LocalIdentity::new());

        let json = serde_json::to_value(&hint).expect("serialize");
        let object = json.as_object().expect("json object");
        assert!(!object.contains_key("clerkUserId"));
        assert!(!object.contains_key("email"));
        assert_eq!(json["name"], "");
        assert_eq!(json["username"], "");
    }

    #[test]
    fn backend_user_with_email_list() {
        let user: BackendUser = serde_json::from_str(
            r#"{
                "id": "42",
                "username": "alice",
                "email": ["a@example.com", "b@example.com"],
                "firstName": "Alice",
                "lastName": "Example",
                "imageUrl": "https://img.example.com/alice.png",
                "createdAt": "2024-05-01T12:00:00Z",
                "updatedAt": "2024-05-02T12:00:00Z"
            }"#,
        )
        .expect("deserialize");

        assert_eq!(user.id, "42");
        assert_eq!(user.emails(), vec!["a@example.com", "b@example.com"]);
        assert_eq!(user.first_name, "Alice");
        assert!(user.created_at.is_some());
    }

    #[test]
    fn backend_user_with_single_email_string() {
        let user: BackendUser =
            serde_json::from_str(r#"{"id": "7", "email": "solo@example.com"}"#)
                .expect("deserialize");
        assert_eq!(user.emails(), vec!["solo@example.com"]);
    }

    #[test]
    fn backend_user_with_absent_fields() {
        let user: BackendUser = serde_json::from_str(r#"{"id": "7"}"#).expect("deserialize");
        assert!(user.emails().is_empty());
        assert_eq!(user.username, "");
        assert!(user.created_at.is_none());
        assert!(user.updated_at.is_none());
    }
}
