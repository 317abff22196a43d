//! Logout Use Case
//!
//! Forgets the local session. There is no backend call.

use std::sync::Arc;

use platform::storage::KeyValueStore;

use crate::application::config::ClientConfig;
use crate::domain::ports::{AlertKind, AlertPresenter, Navigator, Page};
use crate::infra::session_store::SessionStore;

pub const LOGOUT_SUCCESS: &str = "Logged out";

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: KeyValueStore,
{
    session: SessionStore<S>,
    alerts: Arc<dyn AlertPresenter>,
    navigator: Arc<dyn Navigator>,
    config: Arc<ClientConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: KeyValueStore,
{
    pub fn new(
        session: SessionStore<S>,
        alerts: Arc<dyn AlertPresenter>,
        navigator: Arc<dyn Navigator>,
        config: Arc<ClientConfig>,
    ) -> Self {
        Self {
            session,
            alerts,
            navigator,
            config,
        }
    }

    /// Clear the session, confirm, and go home. Never fails.
    pub fn execute(&self) {
        match self.session.clear() {
            Ok(()) => tracing::info!("User signed out"),
            Err(e) => e.report("logout"),
        }

        self.alerts
            .show(LOGOUT_SUCCESS, AlertKind::Success, self.config.alert_duration);
        self.navigator
            .navigate(Page::Home, self.config.logout_redirect_delay);
    }
}
