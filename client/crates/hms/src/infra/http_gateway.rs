//! HTTP Gateway
//!
//! `reqwest`-backed implementation of the [`Gateway`] port.

use std::error::Error as StdError;

use platform::request::{DEFAULT_USER_AGENT, build_client, request_headers};
use platform::storage::KeyValueStore;
use serde_json::{Value, json};

use crate::domain::ports::{Gateway, RequestOptions};
use crate::error::{ClientError, ClientResult, RequestError};
use crate::infra::session_store::SessionStore;

/// Gateway to the backend REST API
pub struct HttpGateway<S: KeyValueStore> {
    client: reqwest::Client,
    base_url: String,
    session: SessionStore<S>,
}

impl<S: KeyValueStore> HttpGateway<S> {
    /// Create a gateway with its own HTTP client
    pub fn new(base_url: impl Into<String>, session: SessionStore<S>) -> ClientResult<Self> {
        let client =
            build_client(DEFAULT_USER_AGENT).map_err(|e| ClientError::Network(error_chain(&e)))?;
        Ok(Self::with_client(client, base_url, session))
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        session: SessionStore<S>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            session,
        }
    }

    /// Full URL for `path`: plain concatenation with the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl<S: KeyValueStore + 'static> Gateway for HttpGateway<S> {
    async fn request(&self, path: &str, options: RequestOptions) -> ClientResult<Value> {
        let url = self.url(path);
        let token = self.session.token();

        let headers = request_headers(token.as_deref(), &options.headers)
            .map_err(|e| ClientError::InvalidHeader(e.to_string()))?;

        let mut builder = self
            .client
            .request(options.method.clone(), &url)
            .headers(headers);

        if let Some(body) = &options.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        tracing::debug!(
            method = %options.method,
            url = %url,
            authenticated = token.is_some(),
            "Sending request"
        );

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Network(error_chain(&e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(error_chain(&e)))?;
        let body = parse_body(&text);

        tracing::debug!(
            method = %options.method,
            url = %url,
            status = status.as_u16(),
            "Response received"
        );

        if !status.is_success() {
            return Err(RequestError::from_response(status.as_u16(), status.canonical_reason(), body).into());
        }

        Ok(body)
    }
}

/// Parse a response payload
///
/// Empty text is `null`; text that is not JSON is wrapped as `{"raw": text}`.
pub fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw": text }))
}

/// Error message including its causes, e.g. "error sending request: connection refused"
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
