//! HTTP Request Infrastructure
//!
//! Client construction and header assembly for calls to the backend.

use ::http::header::{self, HeaderMap, HeaderValue, InvalidHeaderValue};

/// Content type of every request body sent to the backend
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Default User-Agent sent by the client
pub const DEFAULT_USER_AGENT: &str = concat!("hms-client/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client
///
/// No request timeout is configured: a call either resolves, fails at the
/// transport, or fails with a non-success status.
pub fn build_client(user_agent: &str) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().user_agent(user_agent).build()
}

/// Format an `Authorization` header value for a bearer token
pub fn bearer_value(token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Assemble the headers for one request
///
/// Caller headers are applied first. `Content-Type: application/json` and,
/// when a token is given, `Authorization: Bearer <token>` are inserted last,
/// so they replace any caller header of the same name.
pub fn request_headers(
    token: Option<&str>,
    caller: &HeaderMap,
) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = caller.clone();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );

    if let Some(token) = token {
        headers.insert(header::AUTHORIZATION, bearer_value(token)?);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_headers_without_token() {
        let headers = request_headers(None, &HeaderMap::new()).unwrap();
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), JSON_CONTENT_TYPE);
        assert!(headers.get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_request_headers_with_token() {
        let headers = request_headers(Some("abc123"), &HeaderMap::new()).unwrap();
        assert_eq!(headers.get(header::AUTHORIZATION).unwrap(), "Bearer abc123");
        assert!(headers.get(header::AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn test_computed_headers_win_over_caller_headers() {
        let mut caller = HeaderMap::new();
        caller.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        caller.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic xyz"));
        caller.insert("x-request-source", HeaderValue::from_static("tests"));

        let headers = request_headers(Some("tok"), &caller).unwrap();

        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), JSON_CONTENT_TYPE);
        assert_eq!(headers.get(header::AUTHORIZATION).unwrap(), "Bearer tok");
        assert_eq!(headers.get("x-request-source").unwrap(), "tests");
    }

    #[test]
    fn test_caller_authorization_kept_without_token() {
        let mut caller = HeaderMap::new();
        caller.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic xyz"));

        let headers = request_headers(None, &caller).unwrap();
        assert_eq!(headers.get(header::AUTHORIZATION).unwrap(), "Basic xyz");
    }

    #[test]
    fn test_token_with_control_characters_is_rejected() {
        assert!(request_headers(Some("bad\ntoken"), &HeaderMap::new()).is_err());
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(DEFAULT_USER_AGENT).is_ok());
    }
}
