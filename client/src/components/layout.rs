//! Authenticated vendor chrome: navigation, renewal notices, route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every vendor page renders inside `VendorLayout`. Children are only built
//! once a signed-in vendor is known, so page-level fetches never fire for
//! anonymous visitors. An expired subscription overlays the page with a
//! blocking renewal notice that only allows logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::access::{AccessBlock, SUPPORT_PHONE};
use crate::util::auth::{install_unauth_redirect, logout};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Campaigns,
    Settings,
}

#[component]
pub fn VendorLayout(active: NavItem, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let renewal_open = RwSignal::new(false);
    let on_logout = move |_: leptos::ev::MouseEvent| logout(auth);
    let nav_class = move |item: NavItem| if item == active { "nav__link nav__link--active" } else { "nav__link" };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="vendor-layout vendor-layout--pending">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="vendor-layout">
                <nav class="nav">
                    <a href="/dashboard" class="nav__brand">"CofferCard"</a>
                    <a href="/dashboard" class=nav_class(NavItem::Dashboard)>"Dashboard"</a>
                    <a href="/campaigns" class=nav_class(NavItem::Campaigns)>"Campaigns"</a>
                    <a href="/settings" class=nav_class(NavItem::Settings)>"Settings"</a>
                    <span class="nav__spacer"></span>
                    <Show when=move || auth.get().renewal_warning().is_some()>
                        <div class="renewal-chip">
                            <span>{move || auth.get().renewal_warning().unwrap_or_default()}</span>
                            <button class="btn btn--small btn--warning" on:click=move |_| renewal_open.set(true)>
                                "Renew"
                            </button>
                        </div>
                    </Show>
                    <span class="nav__company">{move || auth.get().company_name()}</span>
                    <button class="btn nav__logout" on:click=on_logout>"Logout"</button>
                </nav>
                <main class="vendor-layout__content">{children()}</main>
                <Show when=move || renewal_open.get()>
                    <RenewalDialog on_close=Callback::new(move |()| renewal_open.set(false))/>
                </Show>
                {move || {
                    auth.get()
                        .access_block()
                        .map(|block| view! { <ExpiredAccessOverlay block=block on_logout=Callback::new(move |()| logout(auth))/> })
                }}
            </div>
        </Show>
    }
}

#[component]
fn RenewalDialog(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Renew Your Subscription"</h2>
                <p>"Contact our customer care executive to renew or extend your subscription"</p>
                <p class="dialog__label">"Customer Care Number"</p>
                <a class="renewal__phone" href=format!("tel:{SUPPORT_PHONE}")>{SUPPORT_PHONE}</a>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ExpiredAccessOverlay(block: AccessBlock, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop dialog-backdrop--blocking">
            <div class="dialog dialog--blocking">
                <h2>{block.title()}</h2>
                <p>{block.message()}</p>
                <div class="renewal__contact">
                    <p class="dialog__label">"Contact Customer Care to Renew"</p>
                    <a class="renewal__phone" href=format!("tel:{SUPPORT_PHONE}")>{SUPPORT_PHONE}</a>
                    <p class="renewal__hours">"Available Mon-Sat, 9 AM - 6 PM"</p>
                </div>
                <div class="dialog__actions">
                    <a class="btn btn--primary" href=format!("tel:{SUPPORT_PHONE}")>"Call to Renew"</a>
                    <button class="btn" on:click=move |_| on_logout.run(())>"Logout"</button>
                </div>
            </div>
        </div>
    }
}
