//! `/reset-password/:uid/:token` landing page from the reset email.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::util::validation::validate_password_reset;

/// Delay before sending the vendor back to `/login` after a successful reset.
const REDIRECT_DELAY_MS: u64 = 3000;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let params = use_params_map();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || success.get() {
            return;
        }
        let (uid, token) = params.with(|p| (p.get("uid").unwrap_or_default(), p.get("token").unwrap_or_default()));
        let body = match validate_password_reset(&uid, &token, &password.get(), &confirm.get()) {
            Ok(body) => body,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::browser_api().confirm_password_reset(&body).await {
                Ok(()) => {
                    success.set(true);
                    gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS)).await;
                    crate::util::share::hard_navigate("/login");
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, REDIRECT_DELAY_MS);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Reset Password"</h1>
                <Show
                    when=move || !success.get()
                    fallback=|| {
                        view! {
                            <p class="login-message login-message--success">
                                "Password reset successful! Redirecting to login..."
                            </p>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="password"
                            placeholder="New password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Confirm new password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Resetting..." } else { "Reset Password" }}
                        </button>
                        <Show when=move || error.get().is_some()>
                            <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                    </form>
                </Show>
            </div>
        </div>
    }
}
