//! Login Use Case
//!
//! Authenticates with email and password and persists the returned session.

use std::sync::Arc;

use platform::storage::KeyValueStore;

use crate::application::alert_failure;
use crate::application::config::ClientConfig;
use crate::domain::auth::{AuthGrant, LoginRequest};
use crate::domain::ports::{AlertKind, AlertPresenter, Gateway, Navigator, Page, RequestOptions};
use crate::error::ClientResult;
use crate::infra::session_store::SessionStore;

pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGIN_SUCCESS: &str = "Login successful";
pub const LOGIN_FAILED: &str = "Login failed";

/// Login input (raw form values)
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub grant: AuthGrant,
}

/// Login use case
pub struct LoginUseCase<G, S>
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

impl<G, S> LoginUseCase<G, S>
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
    pub async fn execute(&self, input: LoginInput) -> ClientResult<LoginOutput> {
        let result = self.login(input).await;
        if let Err(e) = &result {
            alert_failure(
                self.alerts.as_ref(),
                &self.config,
                "login",
                e,
                None,
                LOGIN_FAILED,
            );
        }
        result
    }

    async fn login(&self, input: LoginInput) -> ClientResult<LoginOutput> {
        let request = LoginRequest::new(&input.email, &input.password)?;

        let body = self
            .gateway
            .request(LOGIN_PATH, RequestOptions::post_json(&request)?)
            .await?;

        let grant = AuthGrant::from_login_body(&body);
        if let AuthGrant::Session { token, user } = &grant {
            self.session.save(token.as_deref(), user.as_ref())?;
        }

        tracing::info!(
            email = %request.email,
            token_received = matches!(&grant, AuthGrant::Session { token: Some(_), .. }),
            "User signed in"
        );

        self.alerts
            .show(LOGIN_SUCCESS, AlertKind::Success, self.config.alert_duration);
        self.navigator
            .navigate(Page::Dashboard, self.config.login_redirect_delay);

        Ok(LoginOutput { grant })
    }
}
