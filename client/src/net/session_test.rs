use super::*;
use crate::util::storage::MemoryStore;

fn login() -> LoginResponse {
    LoginResponse {
        access: "acc".into(),
        refresh: "ref".into(),
        user: SessionUser { company_name: "Acme".into(), ..SessionUser::default() },
    }
}

#[test]
fn store_login_persists_tokens_and_user() {
    let session = Session::new(MemoryStore::default());
    session.store_login(&login());
    assert_eq!(session.access_token().as_deref(), Some("acc"));
    assert_eq!(session.refresh_token().as_deref(), Some("ref"));
    assert_eq!(session.signed_in_user().map(|u| u.company_name), Some("Acme".into()));
}

#[test]
fn signed_in_requires_access_token() {
    let session = Session::new(MemoryStore::with(&[("user", r#"{"company_name":"Acme"}"#)]));
    assert!(session.user().is_some());
    assert!(session.signed_in_user().is_none());
}

#[test]
fn store_refresh_keeps_refresh_token_unless_rotated() {
    let session = Session::new(MemoryStore::default());
    session.store_login(&login());
    session.store_refresh("acc2", None);
    assert_eq!(session.refresh_token().as_deref(), Some("ref"));
    session.store_refresh("acc3", Some("ref3"));
    assert_eq!(session.access_token().as_deref(), Some("acc3"));
    assert_eq!(session.refresh_token().as_deref(), Some("ref3"));
}

#[test]
fn logout_keeps_player_identity() {
    let store = MemoryStore::with(&[("campaign_user_4", "{}")]);
    let session = Session::new(store.clone());
    session.store_login(&login());
    session.logout();
    assert_eq!(store.len(), 1);
}

#[test]
fn expire_clears_everything() {
    let store = MemoryStore::with(&[("campaign_user_4", "{}")]);
    let session = Session::new(store.clone());
    session.store_login(&login());
    session.expire();
    assert_eq!(store.len(), 0);
}

#[test]
fn empty_tokens_read_as_absent() {
    let session = Session::new(MemoryStore::with(&[("access_token", "")]));
    assert_eq!(session.access_token(), None);
}
