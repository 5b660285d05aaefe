//! Prize management dialog for one campaign.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from a campaign card. Lists the campaign's prizes with a total
//! probability bar, adds new prizes, and deletes existing ones after a native
//! confirm. The probability ceiling is checked both to enable the Add button
//! and again on submit.

use leptos::prelude::*;

use crate::net::types::{Campaign, Id, Prize};
use crate::util::validation::{MAX_TOTAL_PROBABILITY, PrizeForm, total_probability};

#[component]
pub fn PrizeModal(campaign: Campaign, on_close: Callback<()>) -> impl IntoView {
    let campaign_id = campaign.id;
    let prizes = RwSignal::new(Vec::<Prize>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let form = RwSignal::new(PrizeForm::default());
    let saving = RwSignal::new(false);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::browser_api().list_prizes(campaign_id).await {
                Ok(items) => {
                    prizes.set(items);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };
    reload();

    let total = move || total_probability(&prizes.get());
    let can_submit = move || !saving.get() && form.with(|f| prizes.with(|p| f.can_submit(p)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with_untracked(|f| prizes.with_untracked(|p| f.validate(campaign_id, p))) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        saving.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::browser_api().create_prize(&request).await {
                Ok(_) => {
                    form.set(PrizeForm::default());
                    reload();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let on_delete = move |id: Id| {
        if !crate::util::share::confirm("Are you sure you want to delete this prize?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::browser_api().delete_prize(id).await {
                Ok(()) => reload(),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog prize-modal" on:click=move |ev| ev.stop_propagation()>
                <h2>"Manage Prizes"</h2>
                <p class="prize-modal__campaign">{campaign.name.clone()}</p>

                <Show when=move || error.get().is_some()>
                    <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="probability-bar">
                    <div class="probability-bar__label">
                        "Total probability: " {move || format!("{:.1}%", total())}
                    </div>
                    <div class="probability-bar__track">
                        <div
                            class="probability-bar__fill"
                            class:probability-bar__fill--full={move || total() >= MAX_TOTAL_PROBABILITY}
                            style:width=move || format!("{}%", total().clamp(0.0, MAX_TOTAL_PROBABILITY))
                        ></div>
                    </div>
                </div>

                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading prizes..."</p> }>
                    <ul class="prize-list">
                        <For each=move || prizes.get() key=|p| p.id let:prize>
                            <li class="prize-list__item">
                                <div>
                                    <span class="prize-list__name">{prize.name.clone()}</span>
                                    <span class="prize-list__meta">
                                        {format!("{}%", prize.probability)}
                                        {if prize.is_winning {
                                            prize.quantity.map(|q| format!(" · {q} left")).unwrap_or_default()
                                        } else {
                                            " · no prize".to_owned()
                                        }}
                                    </span>
                                    <p class="prize-list__description">{prize.description.clone()}</p>
                                </div>
                                <button class="btn btn--danger btn--small" on:click=move |_| on_delete(prize.id)>
                                    "Delete"
                                </button>
                            </li>
                        </For>
                    </ul>
                </Show>

                <form class="prize-form" on:submit=on_submit>
                    <h3>"Add Prize"</h3>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Prize name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <textarea
                        class="dialog__input"
                        placeholder="Description"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                    <input
                        class="dialog__input"
                        type="number"
                        step="0.01"
                        min="0"
                        max="100"
                        placeholder="Probability (%)"
                        prop:value=move || form.get().probability
                        on:input=move |ev| form.update(|f| f.probability = event_target_value(&ev))
                    />
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_winning
                            on:change=move |ev| form.update(|f| f.is_winning = event_target_checked(&ev))
                        />
                        "Winning prize"
                    </label>
                    <Show when=move || form.get().is_winning>
                        <input
                            class="dialog__input"
                            type="number"
                            min="1"
                            placeholder="Quantity"
                            prop:value=move || form.get().quantity
                            on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                        />
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>"Close"</button>
                        <button class="btn btn--primary" type="submit" disabled=move || !can_submit()>
                            {move || if saving.get() { "Adding..." } else { "Add Prize" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
