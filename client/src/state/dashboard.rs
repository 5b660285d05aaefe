//! Dashboard overview: stats, claim filtering, and redemption.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use time::OffsetDateTime;

use crate::net::types::{Campaign, Claim, Id};
use crate::util::time::parse_timestamp;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_campaigns: usize,
    /// End date in the future.
    pub active_campaigns: usize,
    pub total_claims: usize,
    /// Not yet redeemed.
    pub pending_claims: usize,
}

#[must_use]
pub fn stats(campaigns: &[Campaign], claims: &[Claim], now: OffsetDateTime) -> DashboardStats {
    DashboardStats {
        total_campaigns: campaigns.len(),
        active_campaigns: campaigns
            .iter()
            .filter(|c| parse_timestamp(&c.end_date).is_some_and(|end| end > now))
            .count(),
        total_claims: claims.len(),
        pending_claims: claims.iter().filter(|c| !c.is_redeemed).count(),
    }
}

#[must_use]
pub fn claims_for_campaign(claims: &[Claim], campaign: Id) -> usize {
    claims.iter().filter(|c| c.campaign_id == campaign).count()
}

/// Claim table filter: a campaign tile toggle plus free-text search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimFilter {
    pub campaign: Option<Id>,
    pub search: String,
}

impl ClaimFilter {
    /// Clicking the selected tile again clears the filter. Either way the
    /// search text is reset.
    pub fn toggle_campaign(&mut self, id: Id) {
        self.campaign = if self.campaign == Some(id) { None } else { Some(id) };
        self.search.clear();
    }

    /// Case-insensitive match on player name, email, or prize name.
    #[must_use]
    pub fn matches(&self, claim: &Claim) -> bool {
        if self.campaign.is_some_and(|id| id != claim.campaign_id) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&claim.user_name, &claim.user_email, &claim.prize_name].iter().any(|field| field.to_lowercase().contains(&needle))
    }

    #[must_use]
    pub fn apply<'a>(&self, claims: &'a [Claim]) -> Vec<&'a Claim> {
        claims.iter().filter(|c| self.matches(c)).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub campaigns: Vec<Campaign>,
    pub claims: Vec<Claim>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: ClaimFilter,
    /// Claim ids with a mark-redeemed request in flight.
    pub redeeming: Vec<Id>,
}

impl DashboardState {
    #[must_use]
    pub fn campaign_name(&self, id: Id) -> String {
        self.campaigns.iter().find(|c| c.id == id).map_or_else(|| "N/A".to_owned(), |c| c.name.clone())
    }

    pub fn begin_redeem(&mut self, claim: Id) -> bool {
        if self.redeeming.contains(&claim) {
            return false;
        }
        self.redeeming.push(claim);
        true
    }

    pub fn redeemed(&mut self, claim: Id) {
        self.redeeming.retain(|id| *id != claim);
        if let Some(c) = self.claims.iter_mut().find(|c| c.id == claim) {
            c.is_redeemed = true;
        }
    }

    pub fn redeem_failed(&mut self, claim: Id, message: impl Into<String>) {
        self.redeeming.retain(|id| *id != claim);
        self.error = Some(message.into());
    }
}
