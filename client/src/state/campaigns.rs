//! Campaign list state and the soft-delete countdown.
//!
//! DESIGN
//! ======
//! Deleting a campaign only stamps `scheduled_for_deletion`. The card then
//! counts down [`DELETION_GRACE_SECS`] from that stamp and offers Undo; once
//! the countdown reaches zero the page calls `cleanup_deleted` once per
//! campaign (tracked in `cleaning`) and reloads the list. A failed purge is
//! retried after [`CLEANUP_RETRY_SECS`].

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use std::collections::{BTreeMap, BTreeSet};

use time::{Duration, OffsetDateTime};

use crate::net::types::{Campaign, Id};
use crate::util::time::parse_timestamp;

pub const DELETION_GRACE_SECS: i64 = 5 * 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignStatus {
    Upcoming,
    Active,
    Ended,
    PendingDeletion,
}

impl CampaignStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Active => "Active",
            Self::Ended => "Ended",
            Self::PendingDeletion => "Deleting",
        }
    }
}

#[must_use]
pub fn campaign_status(campaign: &Campaign, now: OffsetDateTime) -> CampaignStatus {
    if campaign.scheduled_for_deletion.is_some() {
        return CampaignStatus::PendingDeletion;
    }
    let start = parse_timestamp(&campaign.start_date);
    let end = parse_timestamp(&campaign.end_date);
    if start.is_some_and(|s| now < s) {
        CampaignStatus::Upcoming
    } else if end.is_some_and(|e| now >= e) {
        CampaignStatus::Ended
    } else {
        CampaignStatus::Active
    }
}

/// Seconds left before a scheduled deletion becomes permanent, clamped at 0.
/// `None` for live campaigns or unparseable stamps.
#[must_use]
pub fn deletion_remaining_secs(campaign: &Campaign, now: OffsetDateTime) -> Option<i64> {
    let scheduled = parse_timestamp(campaign.scheduled_for_deletion.as_deref()?)?;
    let deadline = scheduled + Duration::seconds(DELETION_GRACE_SECS);
    Some((deadline - now).whole_seconds().max(0))
}

/// Delay before a failed `cleanup_deleted` is attempted again.
pub const CLEANUP_RETRY_SECS: i64 = 30;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignsState {
    pub items: Vec<Campaign>,
    pub loading: bool,
    pub error: Option<String>,
    /// Campaigns whose `cleanup_deleted` call has been issued.
    pub cleaning: BTreeSet<Id>,
    /// Failed purges and when they may be retried.
    pub retry_at: BTreeMap<Id, OffsetDateTime>,
}

impl CampaignsState {
    pub fn loaded(&mut self, items: Vec<Campaign>) {
        self.cleaning.retain(|id| items.iter().any(|c| c.id == *id));
        self.retry_at.retain(|id, _| items.iter().any(|c| c.id == *id));
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Campaigns whose grace period has run out and are not yet being cleaned.
    /// Marks them as cleaning so each is returned once per attempt.
    pub fn take_due_cleanups(&mut self, now: OffsetDateTime) -> Vec<Id> {
        let due: Vec<Id> = self
            .items
            .iter()
            .filter(|c| deletion_remaining_secs(c, now) == Some(0))
            .map(|c| c.id)
            .filter(|id| !self.cleaning.contains(id))
            .filter(|id| self.retry_at.get(id).is_none_or(|at| now >= *at))
            .collect();
        for id in &due {
            self.retry_at.remove(id);
            self.cleaning.insert(*id);
        }
        due
    }

    /// The purge request for `id` failed; make it due again later.
    pub fn cleanup_failed(&mut self, id: Id, now: OffsetDateTime) {
        self.cleaning.remove(&id);
        self.retry_at.insert(id, now + Duration::seconds(CLEANUP_RETRY_SECS));
    }

    #[must_use]
    pub fn has_pending_deletions(&self) -> bool {
        self.items.iter().any(|c| c.scheduled_for_deletion.is_some())
    }
}
