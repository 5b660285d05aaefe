use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::executor::block_on;

use super::*;
use crate::util::storage::MemoryStore;

// =============================================================
// Helpers
// =============================================================

/// Yields to the executor once so concurrent requests interleave.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

type Responder = Rc<dyn Fn(&HttpRequest) -> HttpResponse>;

#[derive(Clone)]
struct FakeTransport {
    log: Rc<RefCell<Vec<HttpRequest>>>,
    responder: Responder,
}

impl FakeTransport {
    fn new(responder: impl Fn(&HttpRequest) -> HttpResponse + 'static) -> Self {
        Self { log: Rc::default(), responder: Rc::new(responder) }
    }

    fn refresh_calls(&self) -> usize {
        self.log.borrow().iter().filter(|r| r.url.ends_with("/token/refresh/")).count()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.log.borrow_mut().push(request.clone());
        YieldOnce(false).await;
        Ok((self.responder)(&request))
    }
}

fn respond(status: u16, body: &str) -> HttpResponse {
    HttpResponse { status, body: body.as_bytes().to_vec() }
}

/// Backend that accepts only the token `"fresh"` and refreshes successfully.
fn refreshing_backend(request: &HttpRequest) -> HttpResponse {
    if request.url.ends_with("/token/refresh/") {
        return respond(200, r#"{"access": "fresh"}"#);
    }
    match request.bearer.as_deref() {
        Some("fresh") => respond(200, "[]"),
        _ => respond(401, r#"{"detail": "token expired"}"#),
    }
}

fn logged_in_store() -> MemoryStore {
    MemoryStore::with(&[("access_token", "stale"), ("refresh_token", "r1"), ("user", "{}"), ("campaign_user_2", "{}")])
}

fn client_with(
    transport: FakeTransport,
    store: MemoryStore,
) -> (ApiClient<FakeTransport, MemoryStore>, Rc<Cell<usize>>) {
    let expired = Rc::new(Cell::new(0));
    let counter = expired.clone();
    let client = ApiClient::new("http://api.test/api/", transport, store, move || counter.set(counter.get() + 1));
    (client, expired)
}

// =============================================================
// Plain requests
// =============================================================

#[test]
fn url_joins_base_without_double_slash() {
    let (client, _) = client_with(FakeTransport::new(|_| respond(200, "")), MemoryStore::default());
    assert_eq!(client.url("/campaigns/"), "http://api.test/api/campaigns/");
}

#[test]
fn authed_request_carries_bearer_token() {
    let transport = FakeTransport::new(|_| respond(200, "[]"));
    let (client, _) = client_with(transport.clone(), logged_in_store());
    let response = block_on(client.send_authed(HttpRequest::get(client.url("/campaigns/")))).unwrap();
    assert!(response.ok());
    assert_eq!(transport.log.borrow()[0].bearer.as_deref(), Some("stale"));
}

#[test]
fn public_request_has_no_bearer() {
    let transport = FakeTransport::new(|_| respond(200, "{}"));
    let (client, _) = client_with(transport.clone(), logged_in_store());
    block_on(client.send_public(HttpRequest::get(client.url("/public/campaign/abc/")))).unwrap();
    assert_eq!(transport.log.borrow()[0].bearer, None);
}

#[test]
fn non_401_failures_pass_through_without_refresh() {
    let transport = FakeTransport::new(|_| respond(500, "boom"));
    let (client, _) = client_with(transport.clone(), logged_in_store());
    let response = block_on(client.send_authed(HttpRequest::get(client.url("/claims/")))).unwrap();
    assert_eq!(response.status, 500);
    assert_eq!(transport.refresh_calls(), 0);
}

// =============================================================
// Refresh on 401
// =============================================================

#[test]
fn expired_token_is_refreshed_and_request_replayed() {
    let transport = FakeTransport::new(refreshing_backend);
    let store = logged_in_store();
    let (client, expired) = client_with(transport.clone(), store.clone());

    let response = block_on(client.send_authed(HttpRequest::get(client.url("/campaigns/")))).unwrap();

    assert!(response.ok());
    assert_eq!(transport.refresh_calls(), 1);
    assert_eq!(store.get_item("access_token").as_deref(), Some("fresh"));
    assert_eq!(expired.get(), 0);
    let log = transport.log.borrow();
    assert_eq!(log.last().and_then(|r| r.bearer.as_deref()), Some("fresh"));
}

#[test]
fn concurrent_401s_share_one_refresh() {
    let transport = FakeTransport::new(refreshing_backend);
    let (client, _) = client_with(transport.clone(), logged_in_store());

    let (a, b) = block_on(async {
        futures::join!(
            client.send_authed(HttpRequest::get(client.url("/campaigns/"))),
            client.send_authed(HttpRequest::get(client.url("/claims/"))),
        )
    });

    assert!(a.unwrap().ok());
    assert!(b.unwrap().ok());
    assert_eq!(transport.refresh_calls(), 1);
}

#[test]
fn failed_refresh_clears_storage_and_expires_session() {
    let transport = FakeTransport::new(|_| respond(401, ""));
    let store = logged_in_store();
    let (client, expired) = client_with(transport.clone(), store.clone());

    let err = block_on(client.send_authed(HttpRequest::get(client.url("/campaigns/")))).unwrap_err();

    assert_eq!(err, ApiError::SessionExpired);
    assert_eq!(transport.refresh_calls(), 1);
    assert_eq!(store.len(), 0);
    assert_eq!(expired.get(), 1);
}

#[test]
fn missing_refresh_token_expires_without_calling_backend() {
    let transport = FakeTransport::new(|_| respond(401, ""));
    let store = MemoryStore::with(&[("access_token", "stale")]);
    let (client, expired) = client_with(transport.clone(), store.clone());

    let err = block_on(client.send_authed(HttpRequest::get(client.url("/campaigns/")))).unwrap_err();

    assert_eq!(err, ApiError::SessionExpired);
    assert_eq!(transport.refresh_calls(), 0);
    assert_eq!(expired.get(), 1);
}

#[test]
fn concurrent_failures_expire_once() {
    let transport = FakeTransport::new(|_| respond(401, ""));
    let (client, expired) = client_with(transport.clone(), logged_in_store());

    let (a, b) = block_on(async {
        futures::join!(
            client.send_authed(HttpRequest::get(client.url("/campaigns/"))),
            client.send_authed(HttpRequest::get(client.url("/claims/"))),
        )
    });

    assert_eq!(a.unwrap_err(), ApiError::SessionExpired);
    assert_eq!(b.unwrap_err(), ApiError::SessionExpired);
    assert_eq!(transport.refresh_calls(), 1);
    assert_eq!(expired.get(), 1);
}

#[test]
fn replayed_401_is_not_refreshed_again() {
    let transport = FakeTransport::new(|request| {
        if request.url.ends_with("/token/refresh/") {
            respond(200, r#"{"access": "fresh"}"#)
        } else {
            respond(401, r#"{"detail": "forbidden"}"#)
        }
    });
    let (client, expired) = client_with(transport.clone(), logged_in_store());

    let response = block_on(client.send_authed(HttpRequest::get(client.url("/campaigns/")))).unwrap();

    assert_eq!(response.status, 401);
    assert_eq!(transport.refresh_calls(), 1);
    assert_eq!(expired.get(), 0);
}
