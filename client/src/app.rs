//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_BASE_META, ClientConfig, PUBLIC_SITE_META};
use crate::pages::{
    campaigns::CampaignsPage, dashboard::DashboardPage, landing::LandingPage, login::LoginPage,
    public_campaign::PublicCampaignPage, reset_password::ResetPasswordPage, settings::SettingsPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is published as `<meta>` tags for [`ClientConfig::load`].
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=config.api_base_url/>
                <meta name=PUBLIC_SITE_META content=config.public_site_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the vendor auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    // Storage is browser-only, so the session is read after hydration.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let api = crate::net::api::browser_api();
        auth.set(crate::util::auth::restore_session(api.session()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/coffercard.css"/>
        <Title text="CofferCard"/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=(StaticSegment("reset-password"), ParamSegment("uid"), ParamSegment("token"))
                    view=ResetPasswordPage
                />
                <Route path=(StaticSegment("campaign"), ParamSegment("code")) view=PublicCampaignPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("campaigns") view=CampaignsPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
    }
}
