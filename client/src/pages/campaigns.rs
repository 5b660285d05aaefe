//! Campaign list with create/edit, prize management, sharing, and soft delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Deleting a campaign only stamps `scheduled_for_deletion` on the backend.
//! The card then counts down the grace period with an Undo button. A
//! once-a-second ticker redraws the countdowns and, when one reaches zero,
//! asks the backend to purge that campaign and reloads the list.
//!
//! ERROR HANDLING
//! ==============
//! Load and mutation failures land in one page banner. A failed purge is
//! logged and becomes due again after a short backoff.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::campaign_form::CampaignFormDialog;
use crate::components::layout::{NavItem, VendorLayout};
use crate::components::prize_modal::PrizeModal;
use crate::components::share_link::ShareLinkDialog;
use crate::net::types::{Campaign, Id};
use crate::state::campaigns::{CampaignStatus, CampaignsState, campaign_status, deletion_remaining_secs};
use crate::util::time::{format_countdown, format_date, now};

#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Create,
    Edit(Campaign),
    Prizes(Campaign),
    Share(Campaign),
}

#[component]
pub fn CampaignsPage() -> impl IntoView {
    view! {
        <VendorLayout active=NavItem::Campaigns>
            <CampaignsContent/>
        </VendorLayout>
    }
}

#[cfg(feature = "hydrate")]
async fn load_campaigns(campaigns: RwSignal<CampaignsState>) {
    match crate::net::api::browser_api().list_campaigns().await {
        Ok(items) => campaigns.update(|s| s.loaded(items)),
        Err(e) => {
            leptos::logging::warn!("campaign list failed: {e}");
            campaigns.update(|s| s.failed(e.to_string()));
        }
    }
}

#[component]
fn CampaignsContent() -> impl IntoView {
    let campaigns = RwSignal::new(CampaignsState { loading: true, ..CampaignsState::default() });
    let dialog = RwSignal::new(None::<Dialog>);
    // Bumped every second so countdowns re-render.
    let clock = RwSignal::new(now());

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_campaigns(campaigns));
    };
    reload();

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let tick = now();
                clock.set(tick);
                let mut due = Vec::new();
                campaigns.update(|s| due = s.take_due_cleanups(tick));
                if due.is_empty() {
                    continue;
                }
                let api = crate::net::api::browser_api();
                for id in due {
                    if let Err(e) = api.cleanup_deleted(id).await {
                        leptos::logging::warn!("cleanup of campaign {id} failed: {e}");
                        campaigns.update(|s| s.cleanup_failed(id, tick));
                    }
                }
                load_campaigns(campaigns).await;
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_delete = move |id: Id| {
        if !crate::util::share::confirm("Delete this campaign? You can undo within 5 minutes.") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::browser_api().delete_campaign(id).await {
                Ok(()) => load_campaigns(campaigns).await,
                Err(e) => campaigns.update(|s| s.error = Some(e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let on_undo = move |id: Id| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::browser_api().cancel_deletion(id).await {
                Ok(()) => load_campaigns(campaigns).await,
                Err(e) => campaigns.update(|s| s.error = Some(e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let close_dialog = Callback::new(move |()| dialog.set(None));
    let on_saved = Callback::new(move |()| {
        dialog.set(None);
        reload();
    });

    view! {
        <div class="campaigns-page">
            <header class="campaigns-page__header">
                <h1>"Campaigns"</h1>
                <button class="btn btn--primary" on:click=move |_| dialog.set(Some(Dialog::Create))>
                    "+ New Campaign"
                </button>
            </header>

            <Show when=move || campaigns.get().error.is_some()>
                <p class="banner banner--error">{move || campaigns.get().error.unwrap_or_default()}</p>
            </Show>

            <Show when=move || !campaigns.get().loading fallback=|| view! { <p>"Loading campaigns..."</p> }>
                <Show
                    when=move || !campaigns.get().items.is_empty()
                    fallback=|| view! { <p class="campaigns-page__empty">"No campaigns yet. Create your first one."</p> }
                >
                    <div class="campaign-cards">
                        <For
                            each=move || campaigns.get().items
                            key=|c| (c.id, c.scheduled_for_deletion.clone())
                            let:campaign
                        >
                            <CampaignCard
                                campaign=campaign
                                clock=clock
                                dialog=dialog
                                on_delete=Callback::new(on_delete)
                                on_undo=Callback::new(on_undo)
                            />
                        </For>
                    </div>
                </Show>
            </Show>

            {move || {
                dialog
                    .get()
                    .map(|open| match open {
                        Dialog::Create => {
                            view! { <CampaignFormDialog editing=None on_saved=on_saved on_close=close_dialog/> }
                                .into_any()
                        }
                        Dialog::Edit(campaign) => {
                            view! { <CampaignFormDialog editing=Some(campaign) on_saved=on_saved on_close=close_dialog/> }
                                .into_any()
                        }
                        Dialog::Prizes(campaign) => {
                            view! { <PrizeModal campaign=campaign on_close=close_dialog/> }.into_any()
                        }
                        Dialog::Share(campaign) => {
                            view! { <ShareLinkDialog campaign=campaign on_close=close_dialog/> }.into_any()
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn CampaignCard(
    campaign: Campaign,
    clock: RwSignal<time::OffsetDateTime>,
    dialog: RwSignal<Option<Dialog>>,
    on_delete: Callback<Id>,
    on_undo: Callback<Id>,
) -> impl IntoView {
    let id = campaign.id;
    let stored = StoredValue::new(campaign.clone());
    let status = move || stored.with_value(|c| campaign_status(c, clock.get()));
    let remaining = move || stored.with_value(|c| deletion_remaining_secs(c, clock.get()));
    let open = move |make: fn(Campaign) -> Dialog| dialog.set(Some(make(stored.get_value())));

    view! {
        <article class="campaign-card" class:campaign-card--deleting=move || status() == CampaignStatus::PendingDeletion>
            <header class="campaign-card__header">
                <h3>{campaign.name.clone()}</h3>
                <span class="status-chip">{move || status().label()}</span>
            </header>
            <p class="campaign-card__meta">
                {campaign.campaign_type.label()}
                {if campaign.is_in_store { " · In-store" } else { "" }}
            </p>
            <p class="campaign-card__dates">
                {format!("{} – {}", format_date(&campaign.start_date), format_date(&campaign.end_date))}
            </p>
            <p class="campaign-card__claims">{format!("Max claims: {}", campaign.max_claims)}</p>

            <Show
                when=move || remaining().is_none()
                fallback=move || {
                    view! {
                        <div class="campaign-card__deletion">
                            <span>"Deleting in " {move || format_countdown(remaining().unwrap_or_default())}</span>
                            <button class="btn btn--small" on:click=move |_| on_undo.run(id)>"Undo"</button>
                        </div>
                    }
                }
            >
                <div class="campaign-card__actions">
                    <button class="btn btn--small" on:click=move |_| open(Dialog::Edit)>"Edit"</button>
                    <button class="btn btn--small" on:click=move |_| open(Dialog::Prizes)>"Manage Prizes"</button>
                    <button class="btn btn--small" on:click=move |_| open(Dialog::Share)>"Share"</button>
                    <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(id)>"Delete"</button>
                </div>
            </Show>
        </article>
    }
}
