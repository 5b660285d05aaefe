//! Subscription access rules for the vendor layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cached session user carries `access_status`. An expired trial or
//! subscription blocks every authenticated screen behind a renewal notice;
//! fewer than ten days left shows a warning chip in the navigation bar.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::net::types::AccessStatus;

/// Days-left threshold below which the renewal warning appears.
pub const RENEWAL_WARNING_DAYS: i64 = 10;
/// Customer care line shown in renewal notices.
pub const SUPPORT_PHONE: &str = "7034714831";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessBlock {
    TrialEnded,
    SubscriptionExpired,
}

impl AccessBlock {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::TrialEnded => "Trial Period Ended",
            Self::SubscriptionExpired => "Subscription Expired",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::TrialEnded => {
                "Your 7-day trial period has ended. Please contact our customer care to activate your subscription and continue using CofferCard."
            }
            Self::SubscriptionExpired => {
                "Your subscription has expired. Please renew to continue accessing your campaigns and features."
            }
        }
    }
}

/// Whether access is blocked, and why.
#[must_use]
pub fn access_block(status: Option<&AccessStatus>) -> Option<AccessBlock> {
    match status?.status.as_str() {
        "trial_expired" => Some(AccessBlock::TrialEnded),
        "expired" => Some(AccessBlock::SubscriptionExpired),
        _ => None,
    }
}

/// Warning chip text when `0 <= days_left < 10`.
#[must_use]
pub fn renewal_warning(status: Option<&AccessStatus>) -> Option<String> {
    let days = status?.days_left?;
    if !(0..RENEWAL_WARNING_DAYS).contains(&days) {
        return None;
    }
    Some(match days {
        0 => "Expires today".to_owned(),
        1 => "1 day left".to_owned(),
        n => format!("{n} days left"),
    })
}
