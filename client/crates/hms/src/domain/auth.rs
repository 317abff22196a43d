//! Auth Contract
//!
//! Request bodies for `/auth/register` and `/auth/login`, and the
//! interpretation of their responses into an [`AuthGrant`].
//!
//! ## Response shapes
//! The backend does not commit to one response shape, so the body is probed
//! field by field. This is a compatibility shim; an explicit discriminated
//! response agreed with the backend should replace it.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::session::UserProfile;
use crate::error::{ClientError, ClientResult};

/// Role sent when the registration form leaves it unset
pub const DEFAULT_ROLE: &str = "patient";

pub const REGISTER_FIELDS_REQUIRED: &str = "Please fill all registration fields";
pub const LOGIN_FIELDS_REQUIRED: &str = "Please enter email and password";

// ============================================================================
// Requests
// ============================================================================

/// POST /auth/register body
#[derive(Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl RegisterRequest {
    /// Validate raw form values
    ///
    /// Name and email are trimmed; the password is taken as typed. All three
    /// must be non-empty. An empty role becomes [`DEFAULT_ROLE`].
    pub fn new(name: &str, email: &str, password: &str, role: &str) -> ClientResult<Self> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ClientError::Validation(REGISTER_FIELDS_REQUIRED.into()));
        }

        let role = if role.is_empty() { DEFAULT_ROLE } else { role };

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        })
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// POST /auth/login body
#[derive(Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> ClientResult<Self> {
        let email = email.trim();

        if email.is_empty() || password.is_empty() {
            return Err(ClientError::Validation(LOGIN_FIELDS_REQUIRED.into()));
        }

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Responses
// ============================================================================

/// What an auth response entitles the client to persist
#[derive(Debug, Clone, PartialEq)]
pub enum AuthGrant {
    /// Token and/or user to store
    Session {
        token: Option<String>,
        user: Option<UserProfile>,
    },
    /// Registration accepted without a session (only an id or message came back)
    Acknowledged { message: Option<String> },
    /// Nothing recognizable in the body
    Empty,
}

impl AuthGrant {
    /// Interpret a `/auth/register` response
    ///
    /// - `token` or `user` present: [`AuthGrant::Session`]
    /// - only `id` or `message`: [`AuthGrant::Acknowledged`]
    pub fn from_register_body(body: &Value) -> Self {
        if let Some(grant) = Self::session_from(body) {
            return grant;
        }
        if has_field(body, "id") || has_field(body, "message") {
            return AuthGrant::Acknowledged {
                message: field_text(body, "message"),
            };
        }
        AuthGrant::Empty
    }

    /// Interpret a `/auth/login` response
    ///
    /// - `token` or `user` present: [`AuthGrant::Session`]
    /// - only `id` or `message`: the whole body is taken as the user
    pub fn from_login_body(body: &Value) -> Self {
        if let Some(grant) = Self::session_from(body) {
            return grant;
        }
        if has_field(body, "id") || has_field(body, "message") {
            return AuthGrant::Session {
                token: None,
                user: UserProfile::from_value(body.clone()),
            };
        }
        AuthGrant::Empty
    }

    /// Token/user grant, with the body minus `token` standing in for a
    /// missing `user`
    fn session_from(body: &Value) -> Option<Self> {
        let token = field_text(body, "token");
        let explicit_user = body.get("user").filter(|u| is_present(u));

        if token.is_none() && explicit_user.is_none() {
            return None;
        }

        let user = match explicit_user {
            Some(user) => UserProfile::from_value(user.clone()),
            None => body.as_object().and_then(|fields| {
                let rest: Map<String, Value> = fields
                    .iter()
                    .filter(|(key, _)| key.as_str() != "token")
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();
                if rest.is_empty() {
                    None
                } else {
                    UserProfile::from_value(Value::Object(rest))
                }
            }),
        };

        Some(AuthGrant::Session { token, user })
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    }
}

fn has_field(body: &Value, key: &str) -> bool {
    body.get(key).is_some_and(is_present)
}

/// Field as text: strings verbatim, numbers stringified
fn field_text(body: &Value, key: &str) -> Option<String> {
    match body.get(key).filter(|v| is_present(v))? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
