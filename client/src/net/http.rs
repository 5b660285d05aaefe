//! HTTP transport seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` speaks to the backend through [`Transport`] so its refresh and
//! retry rules are testable natively with a scripted fake. [`BrowserTransport`]
//! is the `gloo-net` implementation used in the browser; during SSR it returns
//! [`ApiError::Unavailable`].

#![allow(clippy::unused_async)]

use serde::de::DeserializeOwned;

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request against an absolute URL.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), body: None, bearer: None }
    }

    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    #[must_use]
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    #[must_use]
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be serialized.
    pub fn json<B: serde::Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?);
        Ok(self)
    }

    #[must_use]
    pub fn bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a successful body, or turn a failure into [`ApiError::Status`].
    ///
    /// # Errors
    ///
    /// Returns the backend's message for non-2xx statuses and
    /// [`ApiError::Decode`] for malformed bodies.
    pub fn json<T: DeserializeOwned>(&self, fallback: &str) -> Result<T, ApiError> {
        self.check(fallback)?;
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Succeed on 2xx, discarding the body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for non-2xx statuses.
    pub fn check(&self, fallback: &str) -> Result<(), ApiError> {
        if self.ok() { Ok(()) } else { Err(ApiError::from_status(self.status, &self.body, fallback)) }
    }
}

/// Sends one request and returns the raw response. Non-2xx statuses are not
/// errors at this layer.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let network = |e: gloo_net::Error| ApiError::Network(e.to_string());
            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let response = match &request.body {
                Some(body) => builder.json(body).map_err(network)?.send().await,
                None => builder.send().await,
            }
            .map_err(network)?;
            let status = response.status();
            let body = response.binary().await.map_err(network)?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
