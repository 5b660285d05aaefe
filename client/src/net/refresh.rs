//! Single-flight guard for access-token refresh.
//!
//! DESIGN
//! ======
//! The first request to see a 401 becomes the leader and performs the refresh.
//! Requests that hit a 401 while it is in flight become followers: they park
//! on a oneshot channel and are woken with the leader's outcome, so one burst
//! of expired requests costs exactly one `/token/refresh/` call.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;

#[derive(Default)]
struct GateState {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<Option<String>>>,
}

/// What a caller should do after [`RefreshGate::begin`].
pub enum Ticket {
    /// Perform the refresh, then call [`RefreshGate::finish`].
    Leader,
    /// Await the leader's new access token (`None` if the refresh failed).
    Follower(oneshot::Receiver<Option<String>>),
}

#[derive(Clone, Default)]
pub struct RefreshGate {
    state: Rc<RefCell<GateState>>,
}

impl RefreshGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        let mut state = self.state.borrow_mut();
        if state.in_flight {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            Ticket::Follower(rx)
        } else {
            state.in_flight = true;
            Ticket::Leader
        }
    }

    /// Publish the leader's result to every follower and reopen the gate.
    pub fn finish(&self, token: Option<String>) {
        let waiters = {
            let mut state = self.state.borrow_mut();
            state.in_flight = false;
            std::mem::take(&mut state.waiters)
        };
        for waiter in waiters {
            // A dropped receiver means that request was abandoned.
            let _ = waiter.send(token.clone());
        }
    }

    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.state.borrow().in_flight
    }
}
