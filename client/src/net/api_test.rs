use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::http::HttpResponse;
use crate::util::storage::MemoryStore;

// =============================================================
// Paths
// =============================================================

#[test]
fn campaign_paths_have_trailing_slash() {
    assert_eq!(campaign_path(12), "/campaigns/12/");
    assert_eq!(campaign_action_path(12, "cancel_deletion"), "/campaigns/12/cancel_deletion/");
    assert_eq!(prize_path(3), "/prizes/3/");
    assert_eq!(mark_redeemed_path(8), "/claims/8/mark_redeemed/");
}

#[test]
fn prizes_are_listed_per_campaign() {
    assert_eq!(prizes_for_campaign_path(5), "/prizes/?campaign=5");
}

#[test]
fn public_paths_cover_view_and_actions() {
    assert_eq!(public_campaign_path("abc", None), "/public/campaign/abc/");
    assert_eq!(public_campaign_path("abc", Some("spin")), "/public/campaign/abc/spin/");
}

#[test]
fn download_path_omits_empty_range() {
    assert_eq!(download_claims_path(4, None, Some("")), "/campaigns/4/download-claims/");
}

#[test]
fn download_path_includes_given_bounds() {
    assert_eq!(
        download_claims_path(4, Some("2024-01-01"), Some("2024-01-31")),
        "/campaigns/4/download-claims/?start_date=2024-01-01&end_date=2024-01-31"
    );
    assert_eq!(download_claims_path(4, None, Some("2024-01-31")), "/campaigns/4/download-claims/?end_date=2024-01-31");
}

// =============================================================
// Endpoints
// =============================================================

struct Scripted {
    response: HttpResponse,
    seen: RefCell<Vec<HttpRequest>>,
}

impl Transport for &Scripted {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.seen.borrow_mut().push(request);
        Ok(self.response.clone())
    }
}

fn scripted(status: u16, body: &str) -> Scripted {
    Scripted { response: HttpResponse { status, body: body.as_bytes().to_vec() }, seen: RefCell::default() }
}

#[test]
fn login_persists_session() {
    let transport = scripted(200, r#"{"access":"a","refresh":"r","user":{"company_name":"Acme"}}"#);
    let store = MemoryStore::default();
    let api = ApiClient::new("http://api.test/api", &transport, store.clone(), || {});

    let login = block_on(api.login("vendor", "secret")).unwrap();

    assert_eq!(login.user.company_name, "Acme");
    assert_eq!(store.get_item("access_token").as_deref(), Some("a"));
    let seen = transport.seen.borrow();
    assert_eq!(seen[0].url, "http://api.test/api/token/");
    assert_eq!(seen[0].body, Some(serde_json::json!({ "username": "vendor", "password": "secret" })));
}

#[test]
fn login_failure_surfaces_backend_detail() {
    let transport = scripted(401, r#"{"detail":"No active account found with the given credentials"}"#);
    let store = MemoryStore::default();
    let api = ApiClient::new("http://api.test/api", &transport, store.clone(), || {});

    let err = block_on(api.login("vendor", "wrong")).unwrap_err();

    assert_eq!(err.to_string(), "No active account found with the given credentials");
    assert_eq!(store.len(), 0);
}

#[test]
fn spin_sends_stored_identity_verbatim() {
    let transport = scripted(200, r#"{"needs_registration": true}"#);
    let api = ApiClient::new("http://api.test/api", &transport, MemoryStore::default(), || {});

    let outcome = block_on(api.spin("abc", Some(r#"{"name":"Ann"}"#))).unwrap();

    assert_eq!(outcome, SpinOutcome::NeedsRegistration);
    let seen = transport.seen.borrow();
    assert_eq!(seen[0].body, Some(serde_json::json!({ "user": "{\"name\":\"Ann\"}" })));
    assert_eq!(seen[0].bearer, None);
}

#[test]
fn public_campaign_unwraps_envelope() {
    let transport = scripted(200, r#"{"campaign":{"id":3,"name":"Spring","campaign_type":"spin"}}"#);
    let api = ApiClient::new("http://api.test/api", &transport, MemoryStore::default(), || {});
    let campaign = block_on(api.public_campaign("abc")).unwrap();
    assert_eq!(campaign.id, 3);
}

#[test]
fn list_campaigns_reports_fallback_on_bare_failure() {
    let transport = scripted(500, "");
    let api = ApiClient::new("http://api.test/api", &transport, MemoryStore::default(), || {});
    let err = block_on(api.list_campaigns()).unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch campaigns");
}
