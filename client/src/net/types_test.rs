#![allow(clippy::float_cmp)]

use super::*;
use serde_json::json;

fn prize_json(probability: serde_json::Value) -> serde_json::Value {
    json!({ "id": 7, "campaign": 3, "name": "Free Coffee", "probability": probability, "is_winning": true })
}

// =============================================================
// Prize decoding
// =============================================================

#[test]
fn prize_probability_accepts_numbers() {
    let prize: Prize = serde_json::from_value(prize_json(json!(12.5))).unwrap();
    assert_eq!(prize.probability, 12.5);
}

#[test]
fn prize_probability_accepts_decimal_strings() {
    let prize: Prize = serde_json::from_value(prize_json(json!("30.00"))).unwrap();
    assert_eq!(prize.probability, 30.0);
}

#[test]
fn prize_probability_rejects_garbage() {
    assert!(serde_json::from_value::<Prize>(prize_json(json!("lots"))).is_err());
}

#[test]
fn prize_defaults_to_winning_without_flag() {
    let prize: Prize = serde_json::from_value(json!({ "id": 1, "name": "Mug", "probability": 5 })).unwrap();
    assert!(prize.is_winning);
    assert_eq!(prize.description, "");
}

// =============================================================
// Campaign decoding
// =============================================================

#[test]
fn campaign_tolerates_null_text_fields() {
    let campaign: Campaign = serde_json::from_value(json!({
        "id": 4,
        "name": "Spring",
        "campaign_type": "spin",
        "instagram_link": null,
        "guidelines": null,
    }))
    .unwrap();
    assert_eq!(campaign.campaign_type, CampaignType::Spin);
    assert_eq!(campaign.instagram(), None);
    assert!(campaign.guideline_lines().is_empty());
}

#[test]
fn guideline_lines_skip_blank_lines() {
    let campaign: Campaign = serde_json::from_value(json!({
        "id": 1,
        "name": "x",
        "guidelines": "Follow us\n\n  Tag a friend  \n",
    }))
    .unwrap();
    assert_eq!(campaign.guideline_lines(), vec!["Follow us", "Tag a friend"]);
}

#[test]
fn public_code_falls_back_to_id() {
    let campaign: Campaign = serde_json::from_value(json!({ "id": 9, "name": "x", "public_url": "" })).unwrap();
    assert_eq!(campaign.public_code(), "9");
}

#[test]
fn campaign_type_from_value_defaults_to_scratch() {
    assert_eq!(CampaignType::from_value("spin"), CampaignType::Spin);
    assert_eq!(CampaignType::from_value("bogus"), CampaignType::Scratch);
}

#[test]
fn claim_accepts_campaign_alias() {
    let claim: Claim = serde_json::from_value(json!({ "id": 1, "campaign": 5, "is_redeemed": false })).unwrap();
    assert_eq!(claim.campaign_id, 5);
}

// =============================================================
// Spin responses
// =============================================================

#[test]
fn spin_needs_registration_wins_over_status() {
    let body = br#"{"needs_registration": true}"#;
    assert_eq!(SpinOutcome::from_response(false, body), SpinOutcome::NeedsRegistration);
    assert_eq!(SpinOutcome::from_response(true, body), SpinOutcome::NeedsRegistration);
}

#[test]
fn spin_success_carries_prize_and_spins_left() {
    let body = serde_json::to_vec(&json!({ "prize": prize_json(json!(10)), "spins_left": 2 })).unwrap();
    match SpinOutcome::from_response(true, &body) {
        SpinOutcome::Won { prize, spins_left } => {
            assert_eq!(prize.id, 7);
            assert_eq!(spins_left, Some(2));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn spin_error_surfaces_message_and_share_unlock() {
    let body = br#"{"error": "No spins left", "can_unlock_with_share": true}"#;
    assert_eq!(
        SpinOutcome::from_response(false, body),
        SpinOutcome::Refused { message: "No spins left".into(), can_unlock_with_share: true }
    );
}

#[test]
fn spin_unparseable_error_uses_fallback_message() {
    assert_eq!(
        SpinOutcome::from_response(false, b"<html>"),
        SpinOutcome::Refused { message: "Failed to spin".into(), can_unlock_with_share: false }
    );
}

#[test]
fn spin_prize_without_probability_still_wins() {
    let body = br#"{"prize": {"id": 7, "name": "Free Coffee", "description": "", "is_winning": true}, "spins_left": 2}"#;
    match SpinOutcome::from_response(true, body) {
        SpinOutcome::Won { prize, spins_left } => {
            assert_eq!(prize.name, "Free Coffee");
            assert_eq!(prize.probability, 0.0);
            assert_eq!(spins_left, Some(2));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn spin_malformed_prize_keeps_share_flag_on_refusal() {
    let body = br#"{"prize": {"id": "seven"}, "error": "No spins left", "can_unlock_with_share": true}"#;
    assert_eq!(
        SpinOutcome::from_response(false, body),
        SpinOutcome::Refused { message: "No spins left".into(), can_unlock_with_share: true }
    );
    assert_eq!(
        SpinOutcome::from_response(true, br#"{"prize": {"id": "seven"}}"#),
        SpinOutcome::Refused { message: "Failed to spin".into(), can_unlock_with_share: false }
    );
}

#[test]
fn public_campaign_accepts_null_max_claims() {
    let response: PublicCampaignResponse = serde_json::from_value(json!({
        "campaign": { "id": 2, "name": "Spring", "max_claims": null, "prizes": [] }
    }))
    .unwrap();
    assert_eq!(response.campaign.max_claims, 0);
}
