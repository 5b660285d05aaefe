//! Create/edit campaign dialog.
//!
//! DESIGN
//! ======
//! The form keeps raw input in a `CampaignForm` and validates on submit.
//! Social links and guidelines are only shown, and only sent, while the
//! social page toggle is on.

use leptos::prelude::*;

use crate::net::types::{Campaign, CampaignType};
use crate::util::validation::CampaignForm;

#[component]
pub fn CampaignFormDialog(
    /// Campaign being edited, or `None` to create one.
    editing: Option<Campaign>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let editing_id = editing.as_ref().map(|c| c.id);
    let form = RwSignal::new(editing.as_ref().map(CampaignForm::from_campaign).unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let draft = match form.get_untracked().validate() {
            Ok(draft) => draft,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::browser_api();
            let result = match editing_id {
                Some(id) => api.update_campaign(id, &draft).await,
                None => api.create_campaign(&draft).await,
            };
            saving.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => {
                    leptos::logging::warn!("campaign save failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, editing_id, on_saved);
        }
    };

    let title = if editing_id.is_some() { "Edit Campaign" } else { "Create Campaign" };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog campaign-form" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>{title}</h2>
                <Show when=move || error.get().is_some()>
                    <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <label class="dialog__label">"Campaign Name"</label>
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || form.get().name
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />

                <label class="dialog__label">"Campaign Type"</label>
                <select
                    class="dialog__input"
                    prop:value=move || form.get().campaign_type.as_str()
                    on:change=move |ev| form.update(|f| f.campaign_type = CampaignType::from_value(&event_target_value(&ev)))
                >
                    <option value="scratch">{CampaignType::Scratch.label()}</option>
                    <option value="spin">{CampaignType::Spin.label()}</option>
                </select>

                <div class="campaign-form__dates">
                    <div>
                        <label class="dialog__label">"Start Date"</label>
                        <input
                            class="dialog__input"
                            type="datetime-local"
                            prop:value=move || form.get().start_date
                            on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="dialog__label">"End Date"</label>
                        <input
                            class="dialog__input"
                            type="datetime-local"
                            prop:value=move || form.get().end_date
                            on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev))
                        />
                    </div>
                </div>

                <label class="dialog__label">"Max Claims"</label>
                <input
                    class="dialog__input"
                    type="number"
                    min="1"
                    prop:value=move || form.get().max_claims
                    on:input=move |ev| form.update(|f| f.max_claims = event_target_value(&ev))
                />

                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.get().is_in_store
                        on:change=move |ev| form.update(|f| f.is_in_store = event_target_checked(&ev))
                    />
                    "In-store campaign (register every customer)"
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.get().show_social_page
                        on:change=move |ev| form.update(|f| f.show_social_page = event_target_checked(&ev))
                    />
                    "Show social media page before playing"
                </label>

                <Show when=move || form.get().show_social_page>
                    <label class="dialog__label">"Instagram Link"</label>
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="https://instagram.com/yourpage"
                        prop:value=move || form.get().instagram_link
                        on:input=move |ev| form.update(|f| f.instagram_link = event_target_value(&ev))
                    />
                    <label class="dialog__label">"Facebook Link"</label>
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="https://facebook.com/yourpage"
                        prop:value=move || form.get().facebook_link
                        on:input=move |ev| form.update(|f| f.facebook_link = event_target_value(&ev))
                    />
                    <label class="dialog__label">"Guidelines (one per line)"</label>
                    <textarea
                        class="dialog__input"
                        rows="4"
                        prop:value=move || form.get().guidelines
                        on:input=move |ev| form.update(|f| f.guidelines = event_target_value(&ev))
                    ></textarea>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
