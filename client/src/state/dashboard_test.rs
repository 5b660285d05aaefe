use time::macros::datetime;

use super::*;

fn campaign(id: Id, end: &str) -> Campaign {
    serde_json::from_value(serde_json::json!({ "id": id, "name": format!("c{id}"), "end_date": end })).unwrap()
}

fn claim(id: Id, campaign_id: Id, name: &str, prize: &str, redeemed: bool) -> Claim {
    Claim {
        id,
        campaign_id,
        user_name: name.into(),
        user_email: format!("{}@example.com", name.to_lowercase()),
        user_phone: "5551234567".into(),
        prize_name: prize.into(),
        claimed_at: "2024-03-01T10:00:00Z".into(),
        is_redeemed: redeemed,
    }
}

fn claims() -> Vec<Claim> {
    vec![
        claim(1, 10, "Ann", "Free Coffee", false),
        claim(2, 10, "Bob", "Mug", true),
        claim(3, 20, "Cara", "Free Coffee", false),
    ]
}

#[test]
fn stats_count_active_and_pending() {
    let now = datetime!(2024-03-10 00:00 UTC);
    let campaigns = [campaign(10, "2024-04-01T00:00:00Z"), campaign(20, "2024-03-01T00:00:00Z"), campaign(30, "")];
    let s = stats(&campaigns, &claims(), now);
    assert_eq!(
        s,
        DashboardStats { total_campaigns: 3, active_campaigns: 1, total_claims: 3, pending_claims: 2 }
    );
}

#[test]
fn claims_counted_per_campaign() {
    assert_eq!(claims_for_campaign(&claims(), 10), 2);
    assert_eq!(claims_for_campaign(&claims(), 99), 0);
}

#[test]
fn campaign_toggle_selects_and_clears() {
    let mut filter = ClaimFilter::default();
    filter.toggle_campaign(10);
    assert_eq!(filter.apply(&claims()).len(), 2);
    filter.toggle_campaign(20);
    assert_eq!(filter.apply(&claims()).len(), 1);
    filter.toggle_campaign(20);
    assert_eq!(filter.campaign, None);
    assert_eq!(filter.apply(&claims()).len(), 3);
}

#[test]
fn campaign_toggle_resets_search() {
    let mut filter = ClaimFilter { campaign: None, search: "ann".into() };
    filter.toggle_campaign(10);
    assert_eq!(filter.search, "");
    filter.search = "bob".into();
    filter.toggle_campaign(10);
    assert_eq!(filter, ClaimFilter::default());
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let all = claims();
    let by_prize = ClaimFilter { campaign: None, search: "free COFFEE".into() };
    assert_eq!(by_prize.apply(&all).iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);
    let by_email = ClaimFilter { campaign: None, search: "BOB@".into() };
    assert_eq!(by_email.apply(&all).iter().map(|c| c.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn search_combines_with_campaign_filter() {
    let filter = ClaimFilter { campaign: Some(20), search: "coffee".into() };
    assert_eq!(filter.apply(&claims()).iter().map(|c| c.id).collect::<Vec<_>>(), vec![3]);
}

#[test]
fn redeem_marks_claim_locally_once() {
    let mut state = DashboardState { claims: claims(), ..DashboardState::default() };
    assert!(state.begin_redeem(1));
    assert!(!state.begin_redeem(1));
    state.redeemed(1);
    assert!(state.claims[0].is_redeemed);
    assert!(state.redeeming.is_empty());
}

#[test]
fn unknown_campaign_name_is_na() {
    let state = DashboardState { campaigns: vec![campaign(10, "")], ..DashboardState::default() };
    assert_eq!(state.campaign_name(10), "c10");
    assert_eq!(state.campaign_name(11), "N/A");
}
