//! Vendor login page with a forgot-password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

fn validate_reset_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter the email address on your account.");
    }
    Ok(email.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let forgot_open = RwSignal::new(false);
    let reset_email = RwSignal::new(String::new());
    let reset_info = RwSignal::new(None::<String>);

    // Already signed in: skip the form.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate_home("/dashboard", NavigateOptions::default());
        }
    });

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::browser_api().login(&username_value, &password_value).await {
                Ok(login) => {
                    log::info!("signed in as {}", login.user.username);
                    auth.set(AuthState::resolved(Some(login.user)));
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value);
        }
    };

    let on_request_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_reset_email(&reset_email.get()) {
            Ok(email) => email,
            Err(message) => {
                reset_info.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        reset_info.set(Some("Sending reset link...".to_owned()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::browser_api().request_password_reset(&email_value).await {
                Ok(()) => reset_info.set(Some("Check your email for a password reset link.".to_owned())),
                Err(e) => reset_info.set(Some(e.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CofferCard"</h1>
                <p class="login-card__subtitle">"Vendor Login"</p>
                <Show
                    when=move || !forgot_open.get()
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_request_reset>
                                <input
                                    class="login-input"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || reset_email.get()
                                    on:input=move |ev| reset_email.set(event_target_value(&ev))
                                />
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    "Send Reset Link"
                                </button>
                                <Show when=move || reset_info.get().is_some()>
                                    <p class="login-message">{move || reset_info.get().unwrap_or_default()}</p>
                                </Show>
                                <button class="login-link" type="button" on:click=move |_| forgot_open.set(false)>
                                    "Back to login"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_login>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                        <Show when=move || error.get().is_some()>
                            <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="login-link" type="button" on:click=move |_| forgot_open.set(true)>
                            "Forgot password?"
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
