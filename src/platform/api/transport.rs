//! HTTP transport for the Coolify API
//!
//! [`Transport`] is the seam between the typed client and the network: it
//! executes one HTTP-shaped request and returns the decoded JSON body, or a
//! [`CoolifyApiError`] built from whatever went wrong.

use super::error::{CoolifyApiError, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent for API requests
const USER_AGENT: &str = concat!("coolify-mcp/", env!("CARGO_PKG_VERSION"));

/// Path prefix of the Coolify v1 API
const API_PREFIX: &str = "/api/v1";

/// HTTP method of an API request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Returns the uppercase method name
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request against the API, relative to `/api/v1`
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// Executes API requests.
///
/// Implementations must resolve every call to a body or an error; the
/// callers never retry and never apply timeouts of their own.
pub trait Transport {
    /// Send the request and return its JSON body.
    ///
    /// An empty body decodes to `Value::Null`; a non-JSON body decodes to
    /// `Value::String`.
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<Value>>;
}

/// Transport backed by `reqwest`, authenticating with a bearer token
pub struct HttpTransport {
    /// HTTP client with configured timeout and headers
    http_client: Client,
    /// Base URL of the Coolify instance, without the API prefix
    base_url: String,
    /// API access token
    token: String,
}

impl HttpTransport {
    /// Create a transport with the default timeout
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, token, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a transport with a custom request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(CoolifyApiError::HttpError)?;

        let base_url: String = base_url.into();
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path relative to the API prefix
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Convert the HTTP response into a JSON body or an API error
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(decode_body(&body))
        } else {
            Err(CoolifyApiError::from_response(status.as_u16(), &body))
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url_for(&request.path);
        log::trace!("{} {}", request.method, url);

        let builder = match request.method {
            Method::Get => self.http_client.get(&url),
            Method::Post => self.http_client.post(&url),
            Method::Put => self.http_client.put(&url),
            Method::Delete => self.http_client.delete(&url),
        };

        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.bearer_auth(&self.token).send().await?;
        self.handle_response(response).await
    }
}

/// Decode a success body: JSON when possible, the raw text otherwise
fn decode_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transport_construction() {
        let transport = HttpTransport::new("https://coolify.example.com/", "token").unwrap();
        assert_eq!(transport.base_url(), "https://coolify.example.com");
    }

    #[test]
    fn test_url_building() {
        let transport = HttpTransport::new("https://coolify.example.com", "token").unwrap();
        assert_eq!(
            transport.url_for("/teams/current"),
            "https://coolify.example.com/api/v1/teams/current"
        );
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("coolify-mcp/"));
    }

    #[test]
    fn test_decode_body_variants() {
        assert_eq!(decode_body(""), Value::Null);
        assert_eq!(decode_body("v4.0.0"), json!("v4.0.0"));
        assert_eq!(decode_body(r#"{"message":"ok"}"#), json!({"message": "ok"}));
    }

    #[test]
    fn test_request_constructors() {
        let request = ApiRequest::put("/projects/3", json!({"name": "web"}));
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.body, Some(json!({"name": "web"})));
        assert!(ApiRequest::delete("/projects/3").body.is_none());
    }
}
