//! Typed REST endpoints.
//!
//! Client-side (hydrate): [`browser_api`] returns the page-wide client backed
//! by `gloo-net` and `localStorage`.
//! Server-side (SSR): the same client exists but every call returns
//! [`ApiError::Unavailable`]; pages only issue requests from hydrate-gated
//! tasks.
//!
//! ERROR HANDLING
//! ==============
//! Each endpoint names a fallback message used when the backend's error body
//! carries none, matching the banners the pages show.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::rc::Rc;

use super::client::ApiClient;
use super::error::ApiError;
use super::http::{BrowserTransport, HttpRequest, Transport};
use super::types::{
    Campaign, CampaignDraft, Claim, Id, LoginRequest, LoginResponse, NewPrize, PasswordResetConfirm,
    PasswordResetRequest, PlayerDetails, Prize, PublicCampaignResponse, SpinOutcome, VendorSettings,
};
use crate::util::storage::{BrowserStorage, KeyValueStore};

pub type BrowserApi = ApiClient<BrowserTransport, BrowserStorage>;

thread_local! {
    static BROWSER_API: Rc<BrowserApi> = Rc::new(build_browser_api());
}

/// The page-wide API client.
pub fn browser_api() -> Rc<BrowserApi> {
    BROWSER_API.with(Rc::clone)
}

fn build_browser_api() -> BrowserApi {
    let config = crate::config::ClientConfig::load();
    ApiClient::new(config.api_base_url, BrowserTransport, BrowserStorage, redirect_to_login)
}

fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

// =============================================================
// Paths
// =============================================================

pub(crate) fn campaign_path(id: Id) -> String {
    format!("/campaigns/{id}/")
}

pub(crate) fn campaign_action_path(id: Id, action: &str) -> String {
    format!("/campaigns/{id}/{action}/")
}

pub(crate) fn prizes_for_campaign_path(campaign: Id) -> String {
    format!("/prizes/?campaign={campaign}")
}

pub(crate) fn prize_path(id: Id) -> String {
    format!("/prizes/{id}/")
}

pub(crate) fn mark_redeemed_path(claim: Id) -> String {
    format!("/claims/{claim}/mark_redeemed/")
}

pub(crate) fn public_campaign_path(code: &str, action: Option<&str>) -> String {
    match action {
        Some(action) => format!("/public/campaign/{code}/{action}/"),
        None => format!("/public/campaign/{code}/"),
    }
}

/// Claims export path with an optional inclusive date range (`YYYY-MM-DD`).
pub(crate) fn download_claims_path(campaign: Id, start: Option<&str>, end: Option<&str>) -> String {
    let params: Vec<String> = [("start_date", start), ("end_date", end)]
        .into_iter()
        .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| format!("{key}={v}")))
        .collect();
    let base = campaign_action_path(campaign, "download-claims");
    if params.is_empty() { base } else { format!("{base}?{}", params.join("&")) }
}

// =============================================================
// Endpoints
// =============================================================

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `POST /token/` and persist the session on success.
    ///
    /// # Errors
    ///
    /// Returns the backend's message for rejected credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let request = HttpRequest::post(self.url("/token/")).json(&body)?;
        let login: LoginResponse = self.send_public(request).await?.json("Invalid username or password")?;
        self.session().store_login(&login);
        Ok(login)
    }

    pub fn logout(&self) {
        self.session().logout();
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let request =
            HttpRequest::post(self.url("/password-reset/")).json(&PasswordResetRequest { email: email.to_owned() })?;
        self.send_public(request).await?.check("Failed to send reset email")
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn confirm_password_reset(&self, body: &PasswordResetConfirm) -> Result<(), ApiError> {
        let request = HttpRequest::post(self.url("/password-reset-confirm/")).json(body)?;
        self.send_public(request).await?.check("Failed to reset password")
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        self.send_authed(HttpRequest::get(self.url("/campaigns/"))).await?.json("Failed to fetch campaigns")
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn create_campaign(&self, draft: &CampaignDraft) -> Result<Campaign, ApiError> {
        let request = HttpRequest::post(self.url("/campaigns/")).json(draft)?;
        self.send_authed(request).await?.json("Failed to create campaign")
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn update_campaign(&self, id: Id, draft: &CampaignDraft) -> Result<Campaign, ApiError> {
        let request = HttpRequest::put(self.url(&campaign_path(id))).json(draft)?;
        self.send_authed(request).await?.json("Failed to update campaign")
    }

    /// Soft-delete: the backend stamps `scheduled_for_deletion`.
    ///
    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn delete_campaign(&self, id: Id) -> Result<(), ApiError> {
        self.send_authed(HttpRequest::delete(self.url(&campaign_path(id)))).await?.check("Failed to delete campaign")
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn cancel_deletion(&self, id: Id) -> Result<(), ApiError> {
        let request = HttpRequest::post(self.url(&campaign_action_path(id, "cancel_deletion")));
        self.send_authed(request).await?.check("Failed to restore campaign")
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn cleanup_deleted(&self, id: Id) -> Result<(), ApiError> {
        let request = HttpRequest::post(self.url(&campaign_action_path(id, "cleanup_deleted")));
        self.send_authed(request).await?.check("Failed to remove campaign")
    }

    /// Download the claims spreadsheet as raw bytes.
    ///
    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn download_claims(&self, id: Id, start: Option<&str>, end: Option<&str>) -> Result<Vec<u8>, ApiError> {
        let request = HttpRequest::get(self.url(&download_claims_path(id, start, end)));
        let response = self.send_authed(request).await?;
        response.check("Failed to download claims")?;
        Ok(response.body)
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn list_prizes(&self, campaign: Id) -> Result<Vec<Prize>, ApiError> {
        let request = HttpRequest::get(self.url(&prizes_for_campaign_path(campaign)));
        self.send_authed(request).await?.json("Failed to fetch prizes")
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn create_prize(&self, prize: &NewPrize) -> Result<Prize, ApiError> {
        let request = HttpRequest::post(self.url("/prizes/")).json(prize)?;
        self.send_authed(request).await?.json("Failed to create prize")
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn delete_prize(&self, id: Id) -> Result<(), ApiError> {
        self.send_authed(HttpRequest::delete(self.url(&prize_path(id)))).await?.check("Failed to delete prize")
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn list_claims(&self) -> Result<Vec<Claim>, ApiError> {
        self.send_authed(HttpRequest::get(self.url("/claims/"))).await?.json("Failed to fetch claims")
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn mark_redeemed(&self, claim: Id) -> Result<(), ApiError> {
        let request = HttpRequest::post(self.url(&mark_redeemed_path(claim)));
        self.send_authed(request).await?.check("Failed to mark claim as redeemed")
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn vendor_settings(&self) -> Result<VendorSettings, ApiError> {
        self.send_authed(HttpRequest::get(self.url("/vendors/settings/"))).await?.json("Failed to load settings")
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn save_vendor_settings(&self, settings: &VendorSettings) -> Result<(), ApiError> {
        let request = HttpRequest::put(self.url("/vendors/settings/")).json(settings)?;
        self.send_authed(request).await?.check("Failed to update settings")
    }

    // Public play endpoints carry no credentials.

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn public_campaign(&self, code: &str) -> Result<Campaign, ApiError> {
        let request = HttpRequest::get(self.url(&public_campaign_path(code, None)));
        let body: PublicCampaignResponse = self.send_public(request).await?.json("Failed to load campaign")?;
        Ok(body.campaign)
    }

    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn register_player(&self, code: &str, player: &PlayerDetails) -> Result<(), ApiError> {
        let request = HttpRequest::post(self.url(&public_campaign_path(code, Some("register")))).json(player)?;
        self.send_public(request).await?.check("Registration failed")
    }

    /// One play. `identity` is the raw stored `current_user_{id}` value.
    ///
    /// # Errors
    ///
    /// Only transport failures are errors; backend refusals are a
    /// [`SpinOutcome::Refused`].
    pub async fn spin(&self, code: &str, identity: Option<&str>) -> Result<SpinOutcome, ApiError> {
        let body = serde_json::json!({ "user": identity });
        let request = HttpRequest::post(self.url(&public_campaign_path(code, Some("spin")))).json(&body)?;
        let response = self.send_public(request).await?;
        Ok(SpinOutcome::from_response(response.ok(), &response.body))
    }

    /// Record a share so the backend can unlock another play.
    ///
    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn record_share(&self, code: &str, identity: Option<&str>) -> Result<(), ApiError> {
        let body = serde_json::json!({ "user": identity });
        let request = HttpRequest::post(self.url(&public_campaign_path(code, Some("share")))).json(&body)?;
        self.send_public(request).await?.check("Failed to record share")
    }
}
