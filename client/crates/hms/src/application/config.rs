//! Application Configuration
//!
//! Configuration for the client application layer.

use std::time::Duration;

/// Backend used when `HMS_API_BASE` is not set
pub const DEFAULT_API_BASE: &str = "https://hms-backend-yqjj.onrender.com/api";

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "hms_token";

/// Storage key of the JSON-encoded user profile
pub const USER_KEY: &str = "hms_user";

/// Client application configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    pub api_base: String,
    /// How long an alert stays visible (4 seconds)
    pub alert_duration: Duration,
    /// Delay before leaving for the dashboard after registering elsewhere than
    /// the registration page (800 ms)
    pub register_redirect_delay: Duration,
    /// Delay before leaving for the dashboard after login (400 ms)
    pub login_redirect_delay: Duration,
    /// Delay before returning home after logout (400 ms)
    pub logout_redirect_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            alert_duration: Duration::from_millis(4000),
            register_redirect_delay: Duration::from_millis(800),
            login_redirect_delay: Duration::from_millis(400),
            logout_redirect_delay: Duration::from_millis(400),
        }
    }
}

impl ClientConfig {
    /// Load from environment
    ///
    /// - `HMS_API_BASE`: backend base URL (trailing `/` removed)
    /// - `HMS_ALERT_DURATION_MS`: alert lifetime in milliseconds
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base) = std::env::var("HMS_API_BASE") {
            if !base.trim().is_empty() {
                config.api_base = normalize_base(&base);
            }
        }

        if let Some(ms) = std::env::var("HMS_ALERT_DURATION_MS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.alert_duration = Duration::from_millis(ms);
        }

        config
    }

    /// Config pointing at another backend
    pub fn with_api_base(base: &str) -> Self {
        Self {
            api_base: normalize_base(base),
            ..Self::default()
        }
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
