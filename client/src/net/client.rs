//! Authenticated REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every vendor-side request goes through [`ApiClient::send_authed`], which
//! attaches the stored bearer token and handles expiry:
//!
//! 1. A 401 triggers one refresh through the shared [`RefreshGate`].
//! 2. On success the original request is replayed once with the new token.
//! 3. If refresh fails or no refresh token is stored, local storage is wiped
//!    and the `on_expired` hook runs (the browser build redirects to `/login`).
//!
//! A 401 on the replay is returned as a plain status error.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::rc::Rc;

use super::error::ApiError;
use super::http::{HttpRequest, HttpResponse, Transport};
use super::refresh::{RefreshGate, Ticket};
use super::session::Session;
use super::types::{RefreshRequest, RefreshResponse};
use crate::util::storage::KeyValueStore;

const UNAUTHORIZED: u16 = 401;

pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    session: Session<S>,
    gate: RefreshGate,
    on_expired: Rc<dyn Fn()>,
}

/// Outcome of asking for a fresh access token.
enum Refreshed {
    Token(String),
    /// This caller ran the failed refresh and owns the expiry handling.
    FailedAsLeader,
    FailedAsFollower,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, store: S, on_expired: impl Fn() + 'static) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, transport, session: Session::new(store), gate: RefreshGate::new(), on_expired: Rc::new(on_expired) }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Absolute URL for an API path such as `/campaigns/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send without credentials (public play endpoints, login).
    ///
    /// # Errors
    ///
    /// Propagates transport failures.
    pub async fn send_public(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport.send(request).await
    }

    /// Send with the stored bearer token, refreshing once on 401.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SessionExpired`] when the session cannot be
    /// refreshed, or propagates transport failures.
    pub async fn send_authed(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let first = self.transport.send(request.clone().bearer(self.session.access_token())).await?;
        if first.status != UNAUTHORIZED {
            return Ok(first);
        }
        match self.refresh_access().await {
            Refreshed::Token(token) => self.transport.send(request.bearer(Some(token))).await,
            Refreshed::FailedAsLeader => {
                self.session.expire();
                (self.on_expired)();
                Err(ApiError::SessionExpired)
            }
            Refreshed::FailedAsFollower => Err(ApiError::SessionExpired),
        }
    }

    async fn refresh_access(&self) -> Refreshed {
        match self.gate.begin() {
            Ticket::Leader => {
                let token = self.request_refresh().await;
                self.gate.finish(token.clone());
                token.map_or(Refreshed::FailedAsLeader, Refreshed::Token)
            }
            Ticket::Follower(rx) => match rx.await {
                Ok(Some(token)) => Refreshed::Token(token),
                _ => Refreshed::FailedAsFollower,
            },
        }
    }

    async fn request_refresh(&self) -> Option<String> {
        let refresh = self.session.refresh_token()?;
        let request = HttpRequest::post(self.url("/token/refresh/")).json(&RefreshRequest { refresh }).ok()?;
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                leptos::logging::warn!("token refresh failed: {e}");
                return None;
            }
        };
        if !response.ok() {
            return None;
        }
        let body: RefreshResponse = serde_json::from_slice(&response.body).ok()?;
        self.session.store_refresh(&body.access, body.refresh.as_deref());
        Some(body.access)
    }
}
