//! Ports
//!
//! Interfaces to the outside world. Implementations live in the
//! infrastructure and presentation layers.

use std::fmt;
use std::time::Duration;

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientResult;

// ============================================================================
// Request Gateway
// ============================================================================

/// Options for one backend request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method (GET by default)
    pub method: Method,
    /// JSON body; `None` sends no body at all
    pub body: Option<Value>,
    /// Extra headers. `Content-Type` and `Authorization` are always computed
    /// by the gateway and replace caller values of the same name.
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            headers: HeaderMap::new(),
        }
    }

    /// POST with a serializable body
    pub fn post_json<T: Serialize>(body: &T) -> ClientResult<Self> {
        Ok(Self::post(serde_json::to_value(body)?))
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Backend request gateway
#[trait_variant::make(Gateway: Send)]
pub trait LocalGateway {
    /// Issue a request to `path` (relative to the API base URL)
    ///
    /// Returns the parsed body on a 2xx response: `Value::Null` when empty,
    /// `{"raw": text}` when not JSON.
    async fn request(&self, path: &str, options: RequestOptions) -> ClientResult<Value>;
}

// ============================================================================
// Alert Presenter
// ============================================================================

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Error,
}

impl AlertKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Info => "info",
            AlertKind::Success => "success",
            AlertKind::Error => "error",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient user notifications. Fire-and-forget.
pub trait AlertPresenter: Send + Sync {
    /// Show `message` for `duration`, stacked below earlier alerts
    fn show(&self, message: &str, kind: AlertKind, duration: Duration);
}

// ============================================================================
// Navigation
// ============================================================================

/// Pages of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Login,
    Register,
    Dashboard,
}

impl Page {
    pub const fn file_name(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Login => "login.html",
            Page::Register => "register.html",
            Page::Dashboard => "dashboard.html",
        }
    }

    /// Resolve a location path by its trailing file name
    ///
    /// Unknown paths and `/` resolve to [`Page::Home`].
    pub fn from_path(path: &str) -> Self {
        [Page::Login, Page::Register, Page::Dashboard]
            .into_iter()
            .find(|page| path.ends_with(page.file_name()))
            .unwrap_or(Page::Home)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Page navigation
pub trait Navigator: Send + Sync {
    /// Leave the current page for `to` once `after` has elapsed
    fn navigate(&self, to: Page, after: Duration);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_options_defaults() {
        let options = RequestOptions::get();
        assert_eq!(options.method, Method::GET);
        assert!(options.body.is_none());
        assert!(options.headers.is_empty());
    }

    #[test]
    fn test_request_options_post_json() {
        #[derive(Serialize)]
        struct Body {
            name: &'static str,
        }
        let options = RequestOptions::post_json(&Body { name: "Jane" })
            .unwrap()
            .with_header(HeaderName::from_static("x-trace"), HeaderValue::from_static("1"));
        assert_eq!(options.method, Method::POST);
        assert_eq!(options.body, Some(json!({"name": "Jane"})));
        assert_eq!(options.headers.get("x-trace").unwrap(), "1");
    }

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/hms/register.html"), Page::Register);
        assert_eq!(Page::from_path("login.html"), Page::Login);
        assert_eq!(Page::from_path("/dashboard.html"), Page::Dashboard);
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/index.html"), Page::Home);
    }

    #[test]
    fn test_alert_kind_as_str() {
        assert_eq!(AlertKind::Info.to_string(), "info");
        assert_eq!(AlertKind::Success.as_str(), "success");
        assert_eq!(AlertKind::Error.as_str(), "error");
    }
}
