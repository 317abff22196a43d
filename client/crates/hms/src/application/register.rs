//! Register Use Case
//!
//! Creates an account and stores whatever session the backend hands back.

use std::sync::Arc;
use std::time::Duration;

use platform::storage::KeyValueStore;

use crate::application::alert_failure;
use crate::application::config::ClientConfig;
use crate::domain::auth::{AuthGrant, RegisterRequest};
use crate::domain::ports::{AlertKind, AlertPresenter, Gateway, Navigator, Page, RequestOptions};
use crate::error::ClientResult;
use crate::infra::session_store::SessionStore;

pub const REGISTER_PATH: &str = "/auth/register";
pub const REGISTER_SUCCESS: &str = "Registration successful";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const REGISTERED_DEFAULT: &str = "Registered";

/// Register input (raw form values)
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Empty means the default role
    pub role: String,
    /// Page the form was submitted from
    pub current_page: Page,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub grant: AuthGrant,
    pub redirect: Page,
}

/// Register use case
pub struct RegisterUseCase<G, S>
where
    G: Gateway,
    S: KeyValueStore,
{
    gateway: Arc<G>,
    session: SessionStore<S>,
    alerts: Arc<dyn AlertPresenter>,
    navigator: Arc<dyn Navigator>,
    config: Arc<ClientConfig>,
}

impl<G, S> RegisterUseCase<G, S>
where
    G: Gateway,
    S: KeyValueStore,
{
    pub fn new(
        gateway: Arc<G>,
        session: SessionStore<S>,
        alerts: Arc<dyn AlertPresenter>,
        navigator: Arc<dyn Navigator>,
        config: Arc<ClientConfig>,
    ) -> Self {
        Self {
            gateway,
            session,
            alerts,
            navigator,
            config,
        }
    }

    /// Run the flow; failures are alerted before being returned
    pub async fn execute(&self, input: RegisterInput) -> ClientResult<RegisterOutput> {
        let result = self.register(input).await;
        if let Err(e) = &result {
            alert_failure(
                self.alerts.as_ref(),
                &self.config,
                "register",
                e,
                None,
                REGISTER_FAILED,
            );
        }
        result
    }

    async fn register(&self, input: RegisterInput) -> ClientResult<RegisterOutput> {
        let request = RegisterRequest::new(&input.name, &input.email, &input.password, &input.role)?;

        let body = self
            .gateway
            .request(REGISTER_PATH, RequestOptions::post_json(&request)?)
            .await?;

        let grant = AuthGrant::from_register_body(&body);
        match &grant {
            AuthGrant::Session { token, user } => {
                self.session.save(token.as_deref(), user.as_ref())?;
            }
            AuthGrant::Acknowledged { message } => {
                let message = message.as_deref().unwrap_or(REGISTERED_DEFAULT);
                self.alerts
                    .show(message, AlertKind::Success, self.config.alert_duration);
            }
            AuthGrant::Empty => {
                tracing::debug!("Registration response carried no session");
            }
        }

        tracing::info!(
            email = %request.email,
            role = %request.role,
            session_saved = matches!(grant, AuthGrant::Session { .. }),
            "User registered"
        );

        self.alerts
            .show(REGISTER_SUCCESS, AlertKind::Success, self.config.alert_duration);

        let (redirect, delay) = if input.current_page == Page::Register {
            (Page::Login, Duration::ZERO)
        } else {
            (Page::Dashboard, self.config.register_redirect_delay)
        };
        self.navigator.navigate(redirect, delay);

        Ok(RegisterOutput { grant, redirect })
    }
}
