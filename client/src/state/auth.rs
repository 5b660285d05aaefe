//! Auth-session state for the current vendor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` by `App`. The server renders with
//! `loading = true`; after hydration the cached session is read from
//! `localStorage` and route guards redirect if no vendor is signed in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;
use crate::util::access::{AccessBlock, access_block, renewal_warning};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthState {
    /// State before the browser session has been read.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn resolved(user: Option<SessionUser>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn company_name(&self) -> String {
        self.user.as_ref().map(|u| u.company_name.clone()).filter(|n| !n.is_empty()).unwrap_or_default()
    }

    #[must_use]
    pub fn access_block(&self) -> Option<AccessBlock> {
        access_block(self.user.as_ref()?.access_status.as_ref())
    }

    #[must_use]
    pub fn renewal_warning(&self) -> Option<String> {
        renewal_warning(self.user.as_ref()?.access_status.as_ref())
    }
}
