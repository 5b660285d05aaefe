//! Vendor dashboard: stats, campaign tiles, claims table, claims export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Campaigns and claims are fetched together when the page mounts. Campaign
//! tiles double as a claims filter; clicking a selected tile clears it. The
//! export dialog downloads the backend's xlsx for one campaign and an
//! optional date range.

use leptos::prelude::*;

use crate::components::layout::{NavItem, VendorLayout};
use crate::net::types::Id;
use crate::state::dashboard::{DashboardState, claims_for_campaign, stats};
use crate::util::time::{format_date_time, now};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <VendorLayout active=NavItem::Dashboard>
            <DashboardContent/>
        </VendorLayout>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let dashboard = RwSignal::new(DashboardState { loading: true, ..DashboardState::default() });
    let download_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::browser_api();
        let (campaigns, claims) = futures::join!(api.list_campaigns(), api.list_claims());
        dashboard.update(|d| {
            d.loading = false;
            match (campaigns, claims) {
                (Ok(campaigns), Ok(claims)) => {
                    d.campaigns = campaigns;
                    d.claims = claims;
                    d.error = None;
                }
                (Err(e), _) | (_, Err(e)) => {
                    leptos::logging::warn!("dashboard load failed: {e}");
                    d.error = Some(e.to_string());
                }
            }
        });
    });

    let on_redeem = move |claim: Id| {
        let mut started = false;
        dashboard.update(|d| started = d.begin_redeem(claim));
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::browser_api().mark_redeemed(claim).await {
                Ok(()) => dashboard.update(|d| d.redeemed(claim)),
                Err(e) => dashboard.update(|d| d.redeem_failed(claim, e.to_string())),
            }
        });
    };

    let summary = move || dashboard.with(|d| stats(&d.campaigns, &d.claims, now()));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button class="btn" on:click=move |_| download_open.set(true)>"Download Claims"</button>
            </header>

            <Show when=move || dashboard.get().error.is_some()>
                <p class="banner banner--error">{move || dashboard.get().error.unwrap_or_default()}</p>
            </Show>

            <Show when=move || !dashboard.get().loading fallback=|| view! { <p>"Loading dashboard..."</p> }>
                <div class="stats-grid">
                    <StatCard label="Total Campaigns" value=Signal::derive(move || summary().total_campaigns)/>
                    <StatCard label="Active Campaigns" value=Signal::derive(move || summary().active_campaigns)/>
                    <StatCard label="Total Claims" value=Signal::derive(move || summary().total_claims)/>
                    <StatCard label="Pending Claims" value=Signal::derive(move || summary().pending_claims)/>
                </div>

                <h2>"Campaigns"</h2>
                <div class="campaign-tiles">
                    <For each=move || dashboard.get().campaigns key=|c| c.id let:campaign>
                        {
                            let id = campaign.id;
                            let claimed = move || dashboard.with(|d| claims_for_campaign(&d.claims, id));
                            view! {
                                <button
                                    class="campaign-tile"
                                    class:campaign-tile--selected=move || dashboard.get().filter.campaign == Some(id)
                                    on:click=move |_| dashboard.update(|d| d.filter.toggle_campaign(id))
                                >
                                    <span class="campaign-tile__name">{campaign.name.clone()}</span>
                                    <span class="campaign-tile__type">{campaign.campaign_type.label()}</span>
                                    <span class="campaign-tile__claims">
                                        {move || format!("{} / {} claims", claimed(), campaign.max_claims)}
                                    </span>
                                </button>
                            }
                        }
                    </For>
                </div>

                <h2>"Claims"</h2>
                <input
                    class="dialog__input claims-search"
                    type="search"
                    placeholder="Search by name, email, or prize"
                    prop:value=move || dashboard.get().filter.search
                    on:input=move |ev| dashboard.update(|d| d.filter.search = event_target_value(&ev))
                />
                <table class="claims-table">
                    <thead>
                        <tr>
                            <th>"Customer"</th>
                            <th>"Contact"</th>
                            <th>"Campaign"</th>
                            <th>"Prize"</th>
                            <th>"Claimed"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            dashboard.with(|d| {
                                d.filter
                                    .apply(&d.claims)
                                    .into_iter()
                                    .map(|claim| {
                                        let id = claim.id;
                                        let redeemed = claim.is_redeemed;
                                        let busy = d.redeeming.contains(&id);
                                        view! {
                                            <tr>
                                                <td>{claim.user_name.clone()}</td>
                                                <td>
                                                    <div>{claim.user_email.clone()}</div>
                                                    <div class="claims-table__phone">{claim.user_phone.clone()}</div>
                                                </td>
                                                <td>{d.campaign_name(claim.campaign_id)}</td>
                                                <td>{claim.prize_name.clone()}</td>
                                                <td>{format_date_time(&claim.claimed_at)}</td>
                                                <td>
                                                    <span class="status-chip" class:status-chip--done=redeemed>
                                                        {if redeemed { "Redeemed" } else { "Pending" }}
                                                    </span>
                                                </td>
                                                <td>
                                                    {(!redeemed)
                                                        .then(|| {
                                                            view! {
                                                                <button
                                                                    class="btn btn--small"
                                                                    disabled=busy
                                                                    on:click=move |_| on_redeem(id)
                                                                >
                                                                    {if busy { "Saving..." } else { "Mark Redeemed" }}
                                                                </button>
                                                            }
                                                        })}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </tbody>
                </table>
            </Show>

            <Show when=move || download_open.get()>
                <DownloadClaimsDialog dashboard=dashboard on_close=Callback::new(move |()| download_open.set(false))/>
            </Show>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || value.get()}</span>
        </div>
    }
}

#[component]
fn DownloadClaimsDialog(dashboard: RwSignal<DashboardState>, on_close: Callback<()>) -> impl IntoView {
    let initial = dashboard.with_untracked(|d| d.filter.campaign.or_else(|| d.campaigns.first().map(|c| c.id)));
    let campaign = RwSignal::new(initial);
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_download = move |_| {
        let Some(id) = campaign.get() else {
            error.set(Some("Select a campaign".to_owned()));
            return;
        };
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);
        let name = dashboard.with_untracked(|d| d.campaign_name(id));
        let (start_value, end_value) = (start.get(), end.get());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::browser_api();
            let result = api
                .download_claims(id, Some(start_value.as_str()), Some(end_value.as_str()))
                .await
                .map_err(|e| e.to_string())
                .and_then(|bytes| {
                    let file = crate::util::share::claims_file_name(&name);
                    crate::util::share::download_bytes(&file, crate::util::share::XLSX_MIME, &bytes)
                });
            busy.set(false);
            match result {
                Ok(()) => on_close.run(()),
                Err(message) => error.set(Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, start_value, end_value);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Download Claims"</h2>
                <Show when=move || error.get().is_some()>
                    <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <label class="dialog__label">"Campaign"</label>
                <select
                    class="dialog__input"
                    prop:value=move || campaign.get().map(|id| id.to_string()).unwrap_or_default()
                    on:change=move |ev| campaign.set(event_target_value(&ev).parse::<Id>().ok())
                >
                    {move || {
                        dashboard
                            .get()
                            .campaigns
                            .into_iter()
                            .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                            .collect_view()
                    }}
                </select>
                <label class="dialog__label">"Start Date (optional)"</label>
                <input
                    class="dialog__input"
                    type="date"
                    prop:value=move || start.get()
                    on:input=move |ev| start.set(event_target_value(&ev))
                />
                <label class="dialog__label">"End Date (optional)"</label>
                <input
                    class="dialog__input"
                    type="date"
                    prop:value=move || end.get()
                    on:input=move |ev| end.set(event_target_value(&ev))
                />
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=on_download>
                        {move || if busy.get() { "Downloading..." } else { "Download" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
