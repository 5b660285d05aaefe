use super::*;
use crate::net::types::SessionUser;
use crate::util::storage::MemoryStore;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&AuthState::resolved(None)));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::pending()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState::resolved(Some(SessionUser { company_name: "Acme".into(), ..SessionUser::default() }));
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn restore_session_requires_token_and_user() {
    let signed_in = Session::new(MemoryStore::with(&[("access_token", "a"), ("user", r#"{"company_name":"Acme"}"#)]));
    assert_eq!(restore_session(&signed_in).company_name(), "Acme");

    let token_only = Session::new(MemoryStore::with(&[("access_token", "a")]));
    assert!(should_redirect_unauth(&restore_session(&token_only)));
}
