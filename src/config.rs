//! Host configuration from the process environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` with `dotenvy`, then builds a [`HostConfig`]. The API
//! base URL and public site URL are not used by the host itself; they are
//! rendered into the SSR shell for the browser app to pick up.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::ParseIntError;

use client::config::{ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_PUBLIC_SITE_URL};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub api_base_url: String,
    pub public_site_url: String,
    /// Overrides Leptos's `site-root` for static assets.
    pub site_root: Option<String>,
}

impl HostConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let client = ClientConfig::from_parts(var("API_BASE_URL").as_deref(), var("PUBLIC_SITE_URL").as_deref());

        Ok(Self {
            port,
            api_base_url: client.api_base_url,
            public_site_url: client.public_site_url,
            site_root: var("SITE_ROOT"),
        })
    }

    /// Values published to the browser through the shell's `<meta>` tags.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig { api_base_url: self.api_base_url.clone(), public_site_url: self.public_site_url.clone() }
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            public_site_url: DEFAULT_PUBLIC_SITE_URL.to_owned(),
            site_root: None,
        }
    }
}
