//! HTTP request/response values and the transport that executes them.
//!
//! # Design
//! Requests and responses are plain data. Resources build an `HttpRequest`,
//! hand it to `HttpTransport::execute`, and parse the returned `HttpResponse`.
//! Only `execute` touches the network, so request shapes and response
//! handling can be tested without a server.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// An HTTP request described as plain data. `path` is the absolute URL,
/// query string included.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data. `HttpTransport` does not copy
/// response headers; no parser reads them.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Async transport preconfigured with the bearer token.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport that sends `Authorization: Bearer {token}` on every
    /// request.
    pub fn new(token: &str) -> Result<Self, ApiError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ApiError::TransportError(e.to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let inner = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self { inner })
    }

    /// Perform the round-trip. Any status code is returned as data; only
    /// transport failures are errors here.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.inner.request(request.method.into(), &request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let method = request.method.as_str();
        tracing::debug!(method, url = %request.path, "sending wishlist API request");

        let response = builder.send().await.inspect_err(|err| {
            tracing::warn!(method, url = %request.path, error = %err, "wishlist API request failed");
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.inspect_err(|err| {
            tracing::warn!(method, url = %request.path, status, error = %err, "reading wishlist API response failed");
        })?;

        tracing::debug!(method, url = %request.path, status, "wishlist API response");

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
