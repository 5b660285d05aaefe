//! Vendor company settings.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::components::layout::{NavItem, VendorLayout};
use crate::net::types::VendorSettings;

/// How long the "saved" banner stays up.
const SUCCESS_BANNER_MS: u64 = 3000;

/// Success banner whose auto-hide timer belongs to the save that showed it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SuccessBanner {
    message: Option<String>,
    generation: u64,
}

impl SuccessBanner {
    /// Show `message`; returns the generation its timer must present.
    fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = Some(message.into());
        self.generation
    }

    /// Timer expiry; ignored once a newer save replaced the banner.
    fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.message = None;
        }
    }

    fn clear(&mut self) {
        self.message = None;
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <VendorLayout active=NavItem::Settings>
            <SettingsContent/>
        </VendorLayout>
    }
}

#[component]
fn SettingsContent() -> impl IntoView {
    let settings = RwSignal::new(VendorSettings::default());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(SuccessBanner::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::browser_api().vendor_settings().await {
            Ok(loaded) => settings.set(loaded),
            Err(e) => {
                leptos::logging::warn!("settings load failed: {e}");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        saving.set(true);
        error.set(None);
        success.update(SuccessBanner::clear);
        let body = settings.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::browser_api().save_vendor_settings(&body).await {
                Ok(()) => {
                    saving.set(false);
                    let mut generation = 0;
                    success.update(|b| generation = b.show("Settings updated successfully"));
                    gloo_timers::future::sleep(std::time::Duration::from_millis(SUCCESS_BANNER_MS)).await;
                    success.update(|b| b.expire(generation));
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, SUCCESS_BANNER_MS);
        }
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <Show when=move || error.get().is_some()>
                <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || success.with(|b| b.message.is_some())>
                <p class="banner banner--success">{move || success.with(|b| b.message.clone()).unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading settings..."</p> }>
                <form class="settings-form" on:submit=on_submit>
                    {text_field("Company Name", settings, |s| s.company_name.clone(), |s, v| s.company_name = v)}
                    {text_field("Company Phone", settings, |s| s.company_phone.clone(), |s, v| s.company_phone = v)}
                    {text_field("Company Address", settings, |s| s.company_address.clone(), |s, v| s.company_address = v)}
                    {text_field(
                        "Company Location (map link)",
                        settings,
                        |s| s.company_location.clone(),
                        |s, v| s.company_location = v,
                    )}
                    <label class="dialog__label">"Redemption Instructions"</label>
                    <textarea
                        class="dialog__input"
                        rows="4"
                        prop:value=move || settings.get().redemption_instructions
                        on:input=move |ev| settings.update(|s| s.redemption_instructions = event_target_value(&ev))
                    ></textarea>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save Settings" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

fn text_field(
    label: &'static str,
    settings: RwSignal<VendorSettings>,
    read: fn(&VendorSettings) -> String,
    write: fn(&mut VendorSettings, String),
) -> impl IntoView {
    view! {
        <label class="dialog__label">{label}</label>
        <input
            class="dialog__input"
            type="text"
            prop:value=move || settings.with(read)
            on:input=move |ev| settings.update(|s| write(s, event_target_value(&ev)))
        />
    }
}
