use super::*;

#[test]
fn banner_timer_clears_its_own_message() {
    let mut banner = SuccessBanner::default();
    let generation = banner.show("Saved");
    banner.expire(generation);
    assert_eq!(banner.message, None);
}

#[test]
fn earlier_timer_leaves_newer_banner_up() {
    let mut banner = SuccessBanner::default();
    let first = banner.show("Saved");
    let second = banner.show("Saved again");
    banner.expire(first);
    assert_eq!(banner.message.as_deref(), Some("Saved again"));
    banner.expire(second);
    assert_eq!(banner.message, None);
}
