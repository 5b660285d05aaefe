//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Vendor routes apply identical unauthenticated redirect behavior, and the
//! login/logout controls share one way of updating `AuthState`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::session::Session;
use crate::state::auth::AuthState;
use crate::util::storage::KeyValueStore;

/// Whether a guarded route should send the visitor to `/login`.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Read the cached vendor session into an `AuthState`.
pub fn restore_session<S: KeyValueStore>(session: &Session<S>) -> AuthState {
    AuthState::resolved(session.signed_in_user())
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Clear the vendor session and return to the login page.
pub fn logout(auth: RwSignal<AuthState>) {
    crate::net::api::browser_api().logout();
    auth.set(AuthState::resolved(None));
    crate::util::share::hard_navigate("/login");
}
