//! Player registration dialog on the public campaign page.

use leptos::prelude::*;

use crate::net::types::PlayerDetails;
use crate::util::validation::validate_player;

/// Collects name, email, and a 10-digit phone number. Invalid input never
/// reaches `on_submit`.
#[component]
pub fn RegistrationModal(
    on_submit: Callback<PlayerDetails>,
    /// `None` hides the close button (in-store campaigns).
    on_dismiss: Option<Callback<()>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] server_error: Signal<Option<String>>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match validate_player(&name.get_untracked(), &email.get_untracked(), &phone.get_untracked()) {
            Ok(player) => {
                error.set(None);
                on_submit.run(player);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let shown_error = move || error.get().or_else(|| server_error.get());

    view! {
        <div class="dialog-backdrop">
            <form class="dialog registration-modal" on:submit=submit>
                <div class="dialog__header">
                    <h2>"Enter Your Details"</h2>
                    {on_dismiss.map(|dismiss| {
                        view! {
                            <button class="btn dialog__close" type="button" on:click=move |_| dismiss.run(())>
                                "×"
                            </button>
                        }
                    })}
                </div>
                <p class="registration-modal__hint">"Register to play and claim your prize."</p>
                <Show when=move || shown_error().is_some()>
                    <p class="banner banner--error">{move || shown_error().unwrap_or_default()}</p>
                </Show>
                <label class="dialog__label">"Name"</label>
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <label class="dialog__label">"Email"</label>
                <input
                    class="dialog__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label class="dialog__label">"Phone"</label>
                <input
                    class="dialog__input"
                    type="tel"
                    placeholder="10-digit phone number"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
                <div class="dialog__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Continue" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
