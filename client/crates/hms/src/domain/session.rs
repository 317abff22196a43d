//! Session Entity
//!
//! What the client remembers between page loads: an optional bearer token and
//! an optional user profile. Either may exist without the other.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder shown when the stored user has neither name nor email
pub const ANONYMOUS_DISPLAY_NAME: &str = "User";

/// User profile as returned by the backend
///
/// Kept as the raw JSON object so a stored profile reads back exactly as it
/// was saved, whatever types the backend uses. Accessors only see string
/// values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile {
    fields: Map<String, Value>,
}

impl UserProfile {
    /// Interpret a JSON value as a profile; `None` unless it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    pub fn email(&self) -> Option<&str> {
        self.text("email")
    }

    pub fn role(&self) -> Option<&str> {
        self.text("role")
    }

    /// Any field, as stored
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Name for current-user placeholders: name, else email, else "User"
    pub fn display_name(&self) -> &str {
        [self.name(), self.email()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or(ANONYMOUS_DISPLAY_NAME)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Authentication state read from storage
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() || self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_keeps_unknown_fields() {
        let value = json!({"name": "Ada", "email": "ada@example.com", "role": "doctor", "id": 7, "ward": "B"});
        let profile = UserProfile::from_value(value.clone()).unwrap();

        assert_eq!(profile.name(), Some("Ada"));
        assert_eq!(profile.role(), Some("doctor"));
        assert_eq!(profile.get("id"), Some(&json!(7)));
        assert_eq!(serde_json::to_value(&profile).unwrap(), value);
    }

    #[test]
    fn test_profile_accepts_non_string_fields() {
        let value = json!({"id": 1, "name": "Ada", "role": 2, "email": null});
        let profile = UserProfile::from_value(value.clone()).unwrap();

        assert_eq!(profile.name(), Some("Ada"));
        assert_eq!(profile.role(), None);
        assert_eq!(profile.email(), None);
        assert_eq!(profile.get("role"), Some(&json!(2)));

        let stored = serde_json::to_string(&profile).unwrap();
        let restored: UserProfile = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, profile);
        assert_eq!(serde_json::to_value(&restored).unwrap(), value);
    }

    #[test]
    fn test_profile_rejects_non_objects() {
        assert!(UserProfile::from_value(json!("ada")).is_none());
        assert!(UserProfile::from_value(json!([1, 2])).is_none());
        assert!(UserProfile::from_value(Value::Null).is_none());
    }

    #[test]
    fn test_display_name_fallbacks() {
        let profile = |v: Value| UserProfile::from_value(v).unwrap();

        assert_eq!(profile(json!({"name": "Ada", "email": "ada@example.com"})).display_name(), "Ada");
        assert_eq!(profile(json!({"name": "", "email": "ada@example.com"})).display_name(), "ada@example.com");
        assert_eq!(profile(json!({"name": 42, "email": "ada@example.com"})).display_name(), "ada@example.com");
        assert_eq!(profile(json!({"role": "nurse"})).display_name(), ANONYMOUS_DISPLAY_NAME);
    }

    #[test]
    fn test_session_is_authenticated() {
        assert!(!Session::default().is_authenticated());
        assert!(Session { token: Some("t".into()), user: None }.is_authenticated());
        assert!(Session { token: None, user: Some(UserProfile::default()) }.is_authenticated());
    }
}
