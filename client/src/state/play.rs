//! Public play flow for a campaign page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PublicCampaignPage` holds a `RwSignal<PlayState>` and forwards every user
//! action and network result here. Transitions are pure; side effects the page
//! must perform (storage writes, timers, reload) come back as [`Effect`]s.
//!
//! DESIGN
//! ======
//! ```text
//! Loading ─┬─ failed ──────────────► Failed
//!          ├─ in-store / no identity ► Registration ─┐
//!          └─ returning player ──────────────────────┤
//!                                                    ▼
//!                     show_social_page ? SocialGate ─► Play ─► Result
//!                                                      ▲          │
//!                            needs_registration ───────┘ in-store: Registration
//! ```
//! A stale next-customer timer is ignored by comparing its generation.

#[cfg(test)]
#[path = "play_test.rs"]
mod play_test;

use crate::net::types::{Campaign, CampaignType, Id, PlayerDetails, Prize, SpinOutcome};
use crate::util::storage::{KeyValueStore, save_json};

/// Delay before an in-store result resets for the next customer.
pub const NEXT_CUSTOMER_DELAY_MS: u32 = 3000;
pub const PRIZE_NOT_FOUND: &str = "Prize not found in available prizes";

#[must_use]
pub fn current_user_key(campaign: Id) -> String {
    format!("current_user_{campaign}")
}

#[must_use]
pub fn campaign_user_key(campaign: Id) -> String {
    format!("campaign_user_{campaign}")
}

/// Whether a returning player is remembered for this campaign.
pub fn has_identity(store: &impl KeyValueStore, campaign: &Campaign) -> bool {
    store.get_item(&campaign_user_key(campaign.id)).is_some()
}

/// Persist a freshly registered player. In-store sessions are not remembered
/// across visits.
pub fn remember_player(store: &impl KeyValueStore, campaign: &Campaign, player: &PlayerDetails) {
    save_json(store, &current_user_key(campaign.id), player);
    if !campaign.is_in_store {
        save_json(store, &campaign_user_key(campaign.id), player);
    }
}

/// Raw identity sent with `/spin/` and `/share/`.
pub fn play_identity(store: &impl KeyValueStore, campaign: &Campaign) -> Option<String> {
    store.get_item(&current_user_key(campaign.id)).or_else(|| store.get_item(&campaign_user_key(campaign.id)))
}

pub fn forget_current_player(store: &impl KeyValueStore, campaign: &Campaign) {
    store.remove_item(&current_user_key(campaign.id));
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Stage {
    #[default]
    Loading,
    Failed(String),
    Registration,
    SocialGate,
    Play,
    Result,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialLink {
    Instagram,
    Facebook,
}

/// Click-through flags for the social gate. Memory only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SocialClicks {
    pub instagram: bool,
    pub facebook: bool,
}

/// Inline error banner on the play screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayNotice {
    pub message: String,
    pub can_unlock_with_share: bool,
}

/// Side effects requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Remove `current_user_{id}` from storage.
    ClearCurrentUser,
    /// Call [`PlayState::next_customer_due`] with `generation` after `delay_ms`.
    ScheduleNextCustomer { generation: u64, delay_ms: u32 },
    Reload,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayState {
    pub stage: Stage,
    pub campaign: Option<Campaign>,
    pub social: SocialClicks,
    /// Prize returned by `/spin/`. Stays set through the result so the
    /// stopped wheel or scratched card remains on screen.
    pub drawn: Option<Prize>,
    /// Prize shown in the result modal.
    pub won: Option<Prize>,
    pub spins_left: Option<u32>,
    pub notice: Option<PlayNotice>,
    /// A `/spin/` or `/register/` request is in flight.
    pub busy: bool,
    result_generation: u64,
}

impl PlayState {
    pub fn campaign_loaded(&mut self, campaign: Campaign, has_identity: bool) {
        self.stage = if campaign.is_in_store || !has_identity {
            Stage::Registration
        } else if campaign.show_social_page {
            Stage::SocialGate
        } else {
            Stage::Play
        };
        self.campaign = Some(campaign);
    }

    pub fn campaign_failed(&mut self, message: impl Into<String>) {
        self.stage = Stage::Failed(message.into());
    }

    #[must_use]
    pub fn is_in_store(&self) -> bool {
        self.campaign.as_ref().is_some_and(|c| c.is_in_store)
    }

    #[must_use]
    pub fn campaign_type(&self) -> CampaignType {
        self.campaign.as_ref().map(|c| c.campaign_type).unwrap_or_default()
    }

    // ---------------------------------------------------------
    // Registration
    // ---------------------------------------------------------

    /// Only remote players may close the registration modal.
    #[must_use]
    pub fn can_dismiss_registration(&self) -> bool {
        self.stage == Stage::Registration && !self.is_in_store()
    }

    pub fn dismiss_registration(&mut self) {
        if self.can_dismiss_registration() {
            self.stage = Stage::Play;
        }
    }

    pub fn registration_started(&mut self) -> bool {
        if self.busy || self.stage != Stage::Registration {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn registered(&mut self) {
        self.busy = false;
        self.social = SocialClicks::default();
        self.notice = None;
        let social = self.campaign.as_ref().is_some_and(|c| c.show_social_page);
        self.stage = if social { Stage::SocialGate } else { Stage::Play };
    }

    pub fn registration_failed(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.notice = Some(PlayNotice { message: message.into(), can_unlock_with_share: false });
    }

    // ---------------------------------------------------------
    // Social gate
    // ---------------------------------------------------------

    pub fn social_clicked(&mut self, link: SocialLink) {
        match link {
            SocialLink::Instagram => self.social.instagram = true,
            SocialLink::Facebook => self.social.facebook = true,
        }
    }

    /// Every configured link has been clicked. Unconfigured links are not required.
    #[must_use]
    pub fn social_complete(&self) -> bool {
        let Some(campaign) = &self.campaign else {
            return false;
        };
        (campaign.instagram().is_none() || self.social.instagram)
            && (campaign.facebook().is_none() || self.social.facebook)
    }

    pub fn continue_from_social(&mut self) {
        if self.stage == Stage::SocialGate && self.social_complete() {
            self.stage = Stage::Play;
        }
    }

    // ---------------------------------------------------------
    // Play
    // ---------------------------------------------------------

    /// Returns `true` if the page should issue exactly one `/spin/` request.
    pub fn begin_play(&mut self) -> bool {
        if self.busy || self.stage != Stage::Play || self.drawn.is_some() {
            return false;
        }
        self.busy = true;
        self.notice = None;
        true
    }

    pub fn spin_outcome(&mut self, outcome: SpinOutcome) {
        self.busy = false;
        match outcome {
            SpinOutcome::NeedsRegistration => {
                self.drawn = None;
                self.won = None;
                self.stage = Stage::Registration;
            }
            SpinOutcome::Refused { message, can_unlock_with_share } => {
                self.notice = Some(PlayNotice { message, can_unlock_with_share });
            }
            SpinOutcome::Won { prize, spins_left } => {
                if spins_left.is_some() {
                    self.spins_left = spins_left;
                }
                match self.resolve_prize(prize) {
                    Some(prize) => self.drawn = Some(prize),
                    None => {
                        self.notice =
                            Some(PlayNotice { message: PRIZE_NOT_FOUND.to_owned(), can_unlock_with_share: false });
                    }
                }
            }
        }
    }

    /// Wheel prizes must be one of the campaign's slices. Scratch prizes are
    /// shown as returned.
    fn resolve_prize(&self, prize: Prize) -> Option<Prize> {
        let campaign = self.campaign.as_ref()?;
        match campaign.campaign_type {
            CampaignType::Scratch => Some(prize),
            CampaignType::Spin => campaign.prizes.iter().find(|p| p.id == prize.id).cloned(),
        }
    }

    pub fn spin_failed(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.notice = Some(PlayNotice { message: message.into(), can_unlock_with_share: false });
    }

    /// Slice index of the drawn prize on the wheel.
    #[must_use]
    pub fn drawn_slice(&self) -> Option<usize> {
        let drawn = self.drawn.as_ref()?;
        self.campaign.as_ref()?.prizes.iter().position(|p| p.id == drawn.id)
    }

    /// The wheel stopped or the card crossed its reveal threshold.
    pub fn prize_revealed(&mut self) -> Vec<Effect> {
        if self.stage != Stage::Play {
            return Vec::new();
        }
        let Some(prize) = self.drawn.clone() else {
            return Vec::new();
        };
        self.won = Some(prize);
        self.stage = Stage::Result;
        self.result_generation += 1;
        if self.is_in_store() {
            vec![
                Effect::ClearCurrentUser,
                Effect::ScheduleNextCustomer { generation: self.result_generation, delay_ms: NEXT_CUSTOMER_DELAY_MS },
            ]
        } else {
            Vec::new()
        }
    }

    /// "Next Customer" / "Play Again".
    pub fn result_dismissed(&mut self) -> Vec<Effect> {
        if self.is_in_store() {
            self.next_customer();
            Vec::new()
        } else {
            vec![Effect::Reload]
        }
    }

    /// Timer callback from [`Effect::ScheduleNextCustomer`].
    pub fn next_customer_due(&mut self, generation: u64) {
        if self.stage == Stage::Result && generation == self.result_generation {
            self.next_customer();
        }
    }

    fn next_customer(&mut self) {
        self.won = None;
        self.drawn = None;
        self.spins_left = None;
        self.notice = None;
        self.social = SocialClicks::default();
        self.stage = Stage::Registration;
    }

    pub fn share_recorded(&mut self) {
        self.notice = None;
    }
}
