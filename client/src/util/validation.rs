//! Client-side form validation.
//!
//! DESIGN
//! ======
//! These checks run before any request is issued and mirror the backend's
//! rules as a UX guard only; the backend remains authoritative. Each form
//! parses its raw input strings into the wire type so pages never submit
//! half-validated data.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use thiserror::Error;

use crate::net::types::{CampaignDraft, CampaignType, Id, NewPrize, PasswordResetConfirm, PlayerDetails, Prize};

pub const PHONE_DIGITS: usize = 10;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_TOTAL_PROBABILITY: f64 = 100.0;
/// Absorbs float error when summing decimal percentages.
const PROBABILITY_TOLERANCE: f64 = 1e-9;
/// Quantity sent for non-winning outcomes, which never run out.
pub const UNLIMITED_QUANTITY: u32 = 999_999;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid email address")]
    Email,
    #[error("Phone number must be exactly 10 digits")]
    PhoneDigits,
    #[error("Probability must be a number between 0 and 100")]
    ProbabilityRange,
    #[error("Total probability cannot exceed 100%")]
    ProbabilityTotal,
    #[error("Quantity must be at least 1 for winning prizes")]
    Quantity,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("End date must be after start date")]
    DateOrder,
    #[error("Max claims must be a whole number of at least 1")]
    MaxClaims,
}

// =============================================================
// Registration
// =============================================================

/// Count the digits in a phone number, ignoring separators.
#[must_use]
pub fn phone_digit_count(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}

/// # Errors
///
/// Returns [`ValidationError::PhoneDigits`] unless exactly ten digits are present.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone_digit_count(phone) == PHONE_DIGITS { Ok(()) } else { Err(ValidationError::PhoneDigits) }
}

/// Validate and normalize the registration form.
///
/// # Errors
///
/// Returns the first failing field.
pub fn validate_player(name: &str, email: &str, phone: &str) -> Result<PlayerDetails, ValidationError> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err(ValidationError::Required("Name"));
    }
    if !looks_like_email(email) {
        return Err(ValidationError::Email);
    }
    validate_phone(phone)?;
    Ok(PlayerDetails { name: name.to_owned(), email: email.to_owned(), phone: phone.trim().to_owned() })
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

// =============================================================
// Prizes
// =============================================================

/// Sum of probabilities across a campaign's prizes.
#[must_use]
pub fn total_probability(prizes: &[Prize]) -> f64 {
    prizes.iter().map(|p| p.probability).sum()
}

/// Parse a probability input; blank and unparseable input read as `None`.
#[must_use]
pub fn parse_probability(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Whether adding `new` keeps the campaign total at or under 100%.
#[must_use]
pub fn can_add_probability(existing_total: f64, new: f64) -> bool {
    existing_total + new <= MAX_TOTAL_PROBABILITY + PROBABILITY_TOLERANCE
}

/// Raw prize form input.
#[derive(Clone, Debug, PartialEq)]
pub struct PrizeForm {
    pub name: String,
    pub description: String,
    pub probability: String,
    pub quantity: String,
    pub is_winning: bool,
}

impl Default for PrizeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            probability: String::new(),
            quantity: String::new(),
            is_winning: true,
        }
    }
}

impl PrizeForm {
    /// Whether the Add button should be enabled given the existing prizes.
    #[must_use]
    pub fn can_submit(&self, existing: &[Prize]) -> bool {
        self.validate(0, existing).is_ok()
    }

    /// Validate against the campaign's existing prizes and build the request.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&self, campaign: Id, existing: &[Prize]) -> Result<NewPrize, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("Prize name"));
        }
        let probability = parse_probability(&self.probability)
            .filter(|p| (0.0..=MAX_TOTAL_PROBABILITY).contains(p))
            .ok_or(ValidationError::ProbabilityRange)?;
        if !can_add_probability(total_probability(existing), probability) {
            return Err(ValidationError::ProbabilityTotal);
        }
        let quantity = if self.is_winning {
            self.quantity.trim().parse::<u32>().ok().filter(|q| *q >= 1).ok_or(ValidationError::Quantity)?
        } else {
            UNLIMITED_QUANTITY
        };
        Ok(NewPrize {
            campaign,
            name: name.to_owned(),
            description: self.description.trim().to_owned(),
            probability,
            quantity,
            is_winning: self.is_winning,
        })
    }
}

// =============================================================
// Campaigns
// =============================================================

/// Raw campaign form input. Dates are `datetime-local` strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignForm {
    pub name: String,
    pub campaign_type: CampaignType,
    pub start_date: String,
    pub end_date: String,
    pub max_claims: String,
    pub is_in_store: bool,
    pub show_social_page: bool,
    pub instagram_link: String,
    pub facebook_link: String,
    pub guidelines: String,
}

impl CampaignForm {
    /// Prefill from an existing campaign for editing.
    #[must_use]
    pub fn from_campaign(campaign: &crate::net::types::Campaign) -> Self {
        Self {
            name: campaign.name.clone(),
            campaign_type: campaign.campaign_type,
            start_date: super::time::to_datetime_local(&campaign.start_date),
            end_date: super::time::to_datetime_local(&campaign.end_date),
            max_claims: campaign.max_claims.to_string(),
            is_in_store: campaign.is_in_store,
            show_social_page: campaign.show_social_page,
            instagram_link: campaign.instagram_link.clone(),
            facebook_link: campaign.facebook_link.clone(),
            guidelines: campaign.guidelines.clone(),
        }
    }

    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(&self) -> Result<CampaignDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required("Campaign name"));
        }
        if self.start_date.trim().is_empty() {
            return Err(ValidationError::Required("Start date"));
        }
        if self.end_date.trim().is_empty() {
            return Err(ValidationError::Required("End date"));
        }
        // `datetime-local` values share one fixed-width format, so they order lexically.
        if self.end_date.trim() <= self.start_date.trim() {
            return Err(ValidationError::DateOrder);
        }
        let max_claims =
            self.max_claims.trim().parse::<u32>().ok().filter(|n| *n >= 1).ok_or(ValidationError::MaxClaims)?;
        let social = self.show_social_page;
        Ok(CampaignDraft {
            name: name.to_owned(),
            campaign_type: self.campaign_type,
            start_date: self.start_date.trim().to_owned(),
            end_date: self.end_date.trim().to_owned(),
            max_claims,
            is_in_store: self.is_in_store,
            show_social_page: social,
            instagram_link: if social { self.instagram_link.trim().to_owned() } else { String::new() },
            facebook_link: if social { self.facebook_link.trim().to_owned() } else { String::new() },
            guidelines: if social { self.guidelines.trim().to_owned() } else { String::new() },
        })
    }
}

// =============================================================
// Password reset
// =============================================================

/// # Errors
///
/// Returns [`ValidationError::PasswordMismatch`] or
/// [`ValidationError::PasswordTooShort`].
pub fn validate_password_reset(
    uid: &str,
    token: &str,
    password: &str,
    confirm: &str,
) -> Result<PasswordResetConfirm, ValidationError> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(PasswordResetConfirm { uid: uid.to_owned(), token: token.to_owned(), new_password: password.to_owned() })
}
