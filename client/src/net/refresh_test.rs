use super::*;
use futures::executor::block_on;

#[test]
fn first_caller_leads() {
    let gate = RefreshGate::new();
    assert!(matches!(gate.begin(), Ticket::Leader));
    assert!(gate.in_flight());
}

#[test]
fn concurrent_callers_follow_and_receive_token() {
    let gate = RefreshGate::new();
    assert!(matches!(gate.begin(), Ticket::Leader));
    let Ticket::Follower(a) = gate.begin() else { panic!("expected follower") };
    let Ticket::Follower(b) = gate.begin() else { panic!("expected follower") };

    gate.finish(Some("fresh".into()));

    assert_eq!(block_on(a).unwrap().as_deref(), Some("fresh"));
    assert_eq!(block_on(b).unwrap().as_deref(), Some("fresh"));
    assert!(!gate.in_flight());
}

#[test]
fn failed_refresh_is_broadcast_as_none() {
    let gate = RefreshGate::new();
    let _leader = gate.begin();
    let Ticket::Follower(rx) = gate.begin() else { panic!("expected follower") };
    gate.finish(None);
    assert_eq!(block_on(rx).unwrap(), None);
}

#[test]
fn gate_reopens_after_finish() {
    let gate = RefreshGate::new();
    let _leader = gate.begin();
    gate.finish(None);
    assert!(matches!(gate.begin(), Ticket::Leader));
}

#[test]
fn dropped_follower_does_not_block_finish() {
    let gate = RefreshGate::new();
    let _leader = gate.begin();
    drop(gate.begin());
    gate.finish(Some("t".into()));
    assert!(!gate.in_flight());
}
