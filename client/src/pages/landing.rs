//! Public marketing page at `/`.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth.get().user.is_some();

    view! {
        <div class="landing-page">
            <header class="landing-page__nav">
                <span class="nav__brand">"CofferCard"</span>
                <span class="nav__spacer"></span>
                <Show
                    when=signed_in
                    fallback=|| view! { <a class="btn btn--primary" href="/login">"Vendor Login"</a> }
                >
                    <a class="btn btn--primary" href="/dashboard">"Go to Dashboard"</a>
                </Show>
            </header>
            <section class="landing-page__hero">
                <h1>"Turn every visit into a game"</h1>
                <p>
                    "Launch scratch-card and spin-wheel promotions, share one link, and track every prize your customers claim."
                </p>
            </section>
            <section class="landing-page__features">
                <div class="feature-card">
                    <h3>"Scratch Cards"</h3>
                    <p>"Customers scratch to reveal a prize drawn from your weighted prize list."</p>
                </div>
                <div class="feature-card">
                    <h3>"Spin the Wheel"</h3>
                    <p>"A colourful wheel with one slice per prize, decided fairly on the server."</p>
                </div>
                <div class="feature-card">
                    <h3>"In-Store Mode"</h3>
                    <p>"Run a kiosk at your counter that resets for the next customer automatically."</p>
                </div>
                <div class="feature-card">
                    <h3>"Claims Tracking"</h3>
                    <p>"Search claims, mark prizes redeemed, and export them to a spreadsheet."</p>
                </div>
            </section>
        </div>
    }
}
