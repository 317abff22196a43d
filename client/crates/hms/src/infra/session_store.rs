//! Session Store
//!
//! Persists the bearer token and user profile as two independent entries of a
//! [`KeyValueStore`]. Reads never fail: unreadable or malformed entries are
//! logged and treated as absent, so page load is never blocked by storage.

use std::sync::Arc;

use platform::storage::KeyValueStore;

use crate::application::config::{TOKEN_KEY, USER_KEY};
use crate::domain::session::{Session, UserProfile};
use crate::error::ClientResult;

pub struct SessionStore<S: KeyValueStore> {
    store: Arc<S>,
    token_key: String,
    user_key: String,
}

impl<S: KeyValueStore> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            token_key: self.token_key.clone(),
            user_key: self.user_key.clone(),
        }
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Session store using the default `hms_token` / `hms_user` keys
    pub fn new(store: Arc<S>) -> Self {
        Self::with_keys(store, TOKEN_KEY, USER_KEY)
    }

    pub fn with_keys(store: Arc<S>, token_key: &str, user_key: &str) -> Self {
        Self {
            store,
            token_key: token_key.to_string(),
            user_key: user_key.to_string(),
        }
    }

    /// Underlying key-value store
    pub fn backing_store(&self) -> &Arc<S> {
        &self.store
    }

    /// Write whichever of `token` and `user` is given; the other entry is left
    /// untouched. An empty token counts as not given.
    pub fn save(&self, token: Option<&str>, user: Option<&UserProfile>) -> ClientResult<()> {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.store.set(&self.token_key, token)?;
        }

        if let Some(user) = user {
            let json = serde_json::to_string(user)?;
            self.store.set(&self.user_key, &json)?;
        }

        tracing::debug!(
            token_saved = token.is_some_and(|t| !t.is_empty()),
            user_saved = user.is_some(),
            "Session saved"
        );
        Ok(())
    }

    /// Remove both entries
    ///
    /// Both removals are attempted; the first failure is returned.
    pub fn clear(&self) -> ClientResult<()> {
        let token_result = self.store.remove(&self.token_key);
        let user_result = self.store.remove(&self.user_key);
        token_result?;
        user_result?;

        tracing::debug!("Session cleared");
        Ok(())
    }

    /// Stored bearer token
    pub fn token(&self) -> Option<String> {
        match self.store.get(&self.token_key) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored token");
                None
            }
        }
    }

    /// Stored user profile; malformed JSON reads as absent
    pub fn user(&self) -> Option<UserProfile> {
        let raw = match self.store.get(&self.user_key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored user");
                return None;
            }
        };

        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring malformed stored user");
                None
            }
        }
    }

    /// Both entries at once
    pub fn load(&self) -> Session {
        Session {
            token: self.token(),
            user: self.user(),
        }
    }
}
