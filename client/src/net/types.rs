//! REST payload types for the CofferCard backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON so serde needs no per-field renames.
//! The backend is lenient about nulls and numeric encodings (probabilities may
//! arrive as decimal strings), so deserializers here accept both shapes
//! instead of failing the whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Backend primary key.
pub type Id = i64;

/// Which game a campaign plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    #[default]
    Scratch,
    Spin,
}

impl CampaignType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scratch => "scratch",
            Self::Spin => "spin",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scratch => "Scratch Card",
            Self::Spin => "Spin Wheel",
        }
    }

    /// Parse a `<select>` value; anything unknown is a scratch card.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == "spin" { Self::Spin } else { Self::Scratch }
    }
}

/// A promotional campaign as returned by `/campaigns/` and the public endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub campaign_type: CampaignType,
    #[serde(default, deserialize_with = "string_or_null")]
    pub start_date: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub end_date: String,
    /// `0` when the backend sends `null`.
    #[serde(default, deserialize_with = "u32_or_null")]
    pub max_claims: u32,
    #[serde(default)]
    pub is_in_store: bool,
    #[serde(default)]
    pub show_social_page: bool,
    #[serde(default, deserialize_with = "string_or_null")]
    pub instagram_link: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub facebook_link: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub guidelines: String,
    /// When the vendor requested deletion; `None` for live campaigns.
    #[serde(default)]
    pub scheduled_for_deletion: Option<String>,
    /// Public code used in `/campaign/{code}`.
    #[serde(default)]
    pub public_url: Option<String>,
    /// Embedded in the public payload only.
    #[serde(default)]
    pub prizes: Vec<Prize>,
}

impl Campaign {
    /// Configured Instagram link, if any.
    #[must_use]
    pub fn instagram(&self) -> Option<&str> {
        non_blank(&self.instagram_link)
    }

    /// Configured Facebook link, if any.
    #[must_use]
    pub fn facebook(&self) -> Option<&str> {
        non_blank(&self.facebook_link)
    }

    /// Non-blank guideline lines, trimmed, in order.
    #[must_use]
    pub fn guideline_lines(&self) -> Vec<&str> {
        self.guidelines.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
    }

    /// Public code, falling back to the numeric id.
    #[must_use]
    pub fn public_code(&self) -> String {
        self.public_url.clone().filter(|code| !code.is_empty()).unwrap_or_else(|| self.id.to_string())
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// A possible outcome of a play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    pub id: Id,
    #[serde(default)]
    pub campaign: Option<Id>,
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
    /// Percent chance, 0..=100. The `/spin/` payload omits it.
    #[serde(default, deserialize_with = "f64_from_number_or_string")]
    pub probability: f64,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default = "default_true")]
    pub is_winning: bool,
}

fn default_true() -> bool {
    true
}

/// Body of `POST /prizes/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPrize {
    pub campaign: Id,
    pub name: String,
    pub description: String,
    pub probability: f64,
    pub quantity: u32,
    pub is_winning: bool,
}

/// A customer's recorded outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: Id,
    #[serde(alias = "campaign")]
    pub campaign_id: Id,
    #[serde(default, deserialize_with = "string_or_null")]
    pub user_name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub user_email: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub user_phone: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub prize_name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub claimed_at: String,
    #[serde(default)]
    pub is_redeemed: bool,
}

/// Subscription state of the logged-in vendor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub days_left: Option<i64>,
}

/// The vendor profile cached under the `user` storage key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub username: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub company_name: String,
    #[serde(default)]
    pub access_status: Option<AccessStatus>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub user: SessionUser,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// `refresh` is present only when the backend rotates refresh tokens.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Vendor company details shown to winners.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorSettings {
    #[serde(default, deserialize_with = "string_or_null")]
    pub company_name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub company_phone: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub company_address: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub company_location: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub redemption_instructions: String,
}

/// Body of `POST /campaigns/` and `PUT /campaigns/{id}/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CampaignDraft {
    pub name: String,
    pub campaign_type: CampaignType,
    pub start_date: String,
    pub end_date: String,
    pub max_claims: u32,
    pub is_in_store: bool,
    pub show_social_page: bool,
    pub instagram_link: String,
    pub facebook_link: String,
    pub guidelines: String,
}

/// Player details collected by the registration modal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PublicCampaignResponse {
    pub campaign: Campaign,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordResetConfirm {
    pub uid: String,
    pub token: String,
    pub new_password: String,
}

/// Interpreted `/spin/` response.
#[derive(Clone, Debug, PartialEq)]
pub enum SpinOutcome {
    /// The stored identity is unknown to the backend.
    NeedsRegistration,
    Won { prize: Prize, spins_left: Option<u32> },
    /// The backend refused the play (limit reached, campaign closed, ...).
    Refused { message: String, can_unlock_with_share: bool },
}

#[derive(Debug, Default, Deserialize)]
struct SpinBody {
    #[serde(default)]
    needs_registration: bool,
    /// Decoded on its own so a malformed prize keeps the rest of the body.
    #[serde(default)]
    prize: Option<serde_json::Value>,
    #[serde(default)]
    spins_left: Option<u32>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    can_unlock_with_share: bool,
}

const SPIN_FAILED: &str = "Failed to spin";

impl SpinOutcome {
    /// Interpret a `/spin/` response. `needs_registration` wins over the
    /// status code; non-2xx bodies carry `error` and the share-unlock flag.
    #[must_use]
    pub fn from_response(success: bool, body: &[u8]) -> Self {
        let parsed: SpinBody = match serde_json::from_slice(body) {
            Ok(parsed) => parsed,
            Err(e) => {
                leptos::logging::warn!("unreadable /spin/ response: {e}");
                SpinBody::default()
            }
        };
        if parsed.needs_registration {
            return Self::NeedsRegistration;
        }
        if !success {
            return Self::Refused {
                message: parsed.error.unwrap_or_else(|| SPIN_FAILED.to_owned()),
                can_unlock_with_share: parsed.can_unlock_with_share,
            };
        }
        let prize = parsed.prize.map(serde_json::from_value::<Prize>);
        match prize {
            Some(Ok(prize)) => Self::Won { prize, spins_left: parsed.spins_left },
            Some(Err(e)) => {
                leptos::logging::warn!("unreadable prize in /spin/ response: {e}");
                Self::Refused { message: SPIN_FAILED.to_owned(), can_unlock_with_share: false }
            }
            None => Self::Refused { message: SPIN_FAILED.to_owned(), can_unlock_with_share: false },
        }
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn u32_or_null<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

fn f64_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => n.as_f64().ok_or_else(|| D::Error::custom("invalid number")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid decimal string: {s}"))),
        serde_json::Value::Null => Ok(0.0),
        other => Err(D::Error::custom(format!("expected number, got {other}"))),
    }
}
