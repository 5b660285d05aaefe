use super::*;

fn status(kind: &str, days_left: Option<i64>) -> AccessStatus {
    AccessStatus { status: kind.into(), days_left }
}

#[test]
fn expired_statuses_block_access() {
    assert_eq!(access_block(Some(&status("trial_expired", None))), Some(AccessBlock::TrialEnded));
    assert_eq!(access_block(Some(&status("expired", Some(0)))), Some(AccessBlock::SubscriptionExpired));
}

#[test]
fn active_and_missing_statuses_do_not_block() {
    assert_eq!(access_block(Some(&status("active", Some(30)))), None);
    assert_eq!(access_block(Some(&status("trial", Some(3)))), None);
    assert_eq!(access_block(None), None);
}

#[test]
fn warning_copy_by_days_left() {
    assert_eq!(renewal_warning(Some(&status("trial", Some(0)))).as_deref(), Some("Expires today"));
    assert_eq!(renewal_warning(Some(&status("trial", Some(1)))).as_deref(), Some("1 day left"));
    assert_eq!(renewal_warning(Some(&status("active", Some(9)))).as_deref(), Some("9 days left"));
}

#[test]
fn warning_hidden_outside_window() {
    assert_eq!(renewal_warning(Some(&status("active", Some(10)))), None);
    assert_eq!(renewal_warning(Some(&status("expired", Some(-1)))), None);
    assert_eq!(renewal_warning(Some(&status("active", None))), None);
}
