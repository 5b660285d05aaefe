#![allow(clippy::float_cmp)]

use super::*;

fn prize(probability: f64) -> Prize {
    Prize {
        id: 1,
        campaign: Some(1),
        name: "p".into(),
        description: String::new(),
        probability,
        quantity: Some(1),
        is_winning: true,
    }
}

fn prize_form(probability: &str, quantity: &str, is_winning: bool) -> PrizeForm {
    PrizeForm {
        name: "Free Coffee".into(),
        description: " Any size ".into(),
        probability: probability.into(),
        quantity: quantity.into(),
        is_winning,
    }
}

// =============================================================
// Phone / registration
// =============================================================

#[test]
fn phone_ignores_separators() {
    assert!(validate_phone("(555) 123-4567").is_ok());
}

#[test]
fn phone_rejects_wrong_digit_counts() {
    assert_eq!(validate_phone("555123456"), Err(ValidationError::PhoneDigits));
    assert_eq!(validate_phone("+1 555 123 4567"), Err(ValidationError::PhoneDigits));
    assert_eq!(validate_phone(""), Err(ValidationError::PhoneDigits));
}

#[test]
fn phone_error_message_matches_form_copy() {
    assert_eq!(ValidationError::PhoneDigits.to_string(), "Phone number must be exactly 10 digits");
}

#[test]
fn player_is_trimmed() {
    let player = validate_player(" Ann ", " ann@example.com ", "5551234567").unwrap();
    assert_eq!(player.name, "Ann");
    assert_eq!(player.email, "ann@example.com");
}

#[test]
fn player_requires_name_and_email() {
    assert_eq!(validate_player("", "a@b.co", "5551234567"), Err(ValidationError::Required("Name")));
    assert_eq!(validate_player("Ann", "ann", "5551234567"), Err(ValidationError::Email));
    assert_eq!(validate_player("Ann", "ann@localhost", "5551234567"), Err(ValidationError::Email));
}

// =============================================================
// Prize probability
// =============================================================

#[test]
fn total_probability_sums_prizes() {
    assert_eq!(total_probability(&[prize(30.0), prize(25.5)]), 55.5);
}

#[test]
fn can_add_allows_exactly_one_hundred() {
    assert!(can_add_probability(70.0, 30.0));
    assert!(!can_add_probability(70.0, 30.5));
}

#[test]
fn can_add_tolerates_decimal_rounding() {
    assert!(can_add_probability(0.1 + 0.2 + 69.7, 30.0));
}

#[test]
fn add_disabled_when_total_would_exceed_limit() {
    let existing = [prize(60.0), prize(30.0)];
    assert!(prize_form("10", "5", true).can_submit(&existing));
    assert!(!prize_form("10.5", "5", true).can_submit(&existing));
    assert_eq!(prize_form("11", "5", true).validate(3, &existing), Err(ValidationError::ProbabilityTotal));
}

#[test]
fn prize_form_rejects_out_of_range_probability() {
    assert_eq!(prize_form("-1", "1", true).validate(3, &[]), Err(ValidationError::ProbabilityRange));
    assert_eq!(prize_form("abc", "1", true).validate(3, &[]), Err(ValidationError::ProbabilityRange));
}

#[test]
fn winning_prize_requires_quantity() {
    assert_eq!(prize_form("10", "0", true).validate(3, &[]), Err(ValidationError::Quantity));
    assert_eq!(prize_form("10", "", true).validate(3, &[]), Err(ValidationError::Quantity));
}

#[test]
fn non_winning_prize_gets_unlimited_quantity() {
    let new = prize_form("40", "", false).validate(3, &[]).unwrap();
    assert_eq!(new.quantity, UNLIMITED_QUANTITY);
    assert!(!new.is_winning);
}

#[test]
fn valid_prize_builds_request() {
    let new = prize_form("12.5", "3", true).validate(9, &[prize(50.0)]).unwrap();
    assert_eq!(new.campaign, 9);
    assert_eq!(new.probability, 12.5);
    assert_eq!(new.quantity, 3);
    assert_eq!(new.description, "Any size");
}

// =============================================================
// Campaign form
// =============================================================

fn campaign_form() -> CampaignForm {
    CampaignForm {
        name: "Spring".into(),
        start_date: "2024-03-01T09:00".into(),
        end_date: "2024-03-31T18:00".into(),
        max_claims: "100".into(),
        instagram_link: "https://instagram.com/acme".into(),
        ..CampaignForm::default()
    }
}

#[test]
fn campaign_form_builds_draft() {
    let draft = campaign_form().validate().unwrap();
    assert_eq!(draft.max_claims, 100);
    assert_eq!(draft.campaign_type, CampaignType::Scratch);
}

#[test]
fn campaign_form_drops_social_fields_when_gate_off() {
    let draft = campaign_form().validate().unwrap();
    assert_eq!(draft.instagram_link, "");
    let mut form = campaign_form();
    form.show_social_page = true;
    assert_eq!(form.validate().unwrap().instagram_link, "https://instagram.com/acme");
}

#[test]
fn campaign_form_requires_end_after_start() {
    let mut form = campaign_form();
    form.end_date = "2024-02-01T00:00".into();
    assert_eq!(form.validate(), Err(ValidationError::DateOrder));
}

#[test]
fn campaign_form_requires_positive_max_claims() {
    let mut form = campaign_form();
    form.max_claims = "0".into();
    assert_eq!(form.validate(), Err(ValidationError::MaxClaims));
}

#[test]
fn campaign_form_requires_name() {
    let mut form = campaign_form();
    form.name = "   ".into();
    assert_eq!(form.validate(), Err(ValidationError::Required("Campaign name")));
}

// =============================================================
// Password reset
// =============================================================

#[test]
fn password_reset_checks_match_then_length() {
    assert_eq!(validate_password_reset("u", "t", "abc", "abd"), Err(ValidationError::PasswordMismatch));
    assert_eq!(validate_password_reset("u", "t", "short", "short"), Err(ValidationError::PasswordTooShort));
    let ok = validate_password_reset("u", "t", "longenough", "longenough").unwrap();
    assert_eq!(ok.new_password, "longenough");
}
