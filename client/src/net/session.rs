//! Vendor session persisted in `localStorage`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::types::{LoginResponse, SessionUser};
use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";

/// Typed view over the session keys of a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get_item(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get_item(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<SessionUser> {
        load_json(&self.store, USER_KEY)
    }

    /// A user counts as signed in when both a token and a profile are cached.
    pub fn signed_in_user(&self) -> Option<SessionUser> {
        self.access_token()?;
        self.user()
    }

    pub fn store_login(&self, login: &LoginResponse) {
        self.store.set_item(ACCESS_TOKEN_KEY, &login.access);
        self.store.set_item(REFRESH_TOKEN_KEY, &login.refresh);
        save_json(&self.store, USER_KEY, &login.user);
    }

    /// Store a refreshed access token, plus the rotated refresh token if any.
    pub fn store_refresh(&self, access: &str, refresh: Option<&str>) {
        self.store.set_item(ACCESS_TOKEN_KEY, access);
        if let Some(refresh) = refresh {
            self.store.set_item(REFRESH_TOKEN_KEY, refresh);
        }
    }

    /// Remove the vendor session but keep player identities.
    pub fn logout(&self) {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
            self.store.remove_item(key);
        }
    }

    /// Wipe all local storage. Used when the session can no longer be refreshed.
    pub fn expire(&self) {
        self.store.clear();
    }
}
