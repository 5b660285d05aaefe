//! Social-follow interstitial shown before play.

use leptos::prelude::*;

use crate::net::types::Campaign;
use crate::state::play::{SocialClicks, SocialLink};
use crate::util::share::open_in_new_tab;

#[component]
pub fn SocialGate(
    campaign: Campaign,
    #[prop(into)] clicks: Signal<SocialClicks>,
    #[prop(into)] complete: Signal<bool>,
    on_click: Callback<SocialLink>,
    on_continue: Callback<()>,
) -> impl IntoView {
    let guidelines: Vec<String> = campaign.guideline_lines().into_iter().map(str::to_owned).collect();
    let instagram = campaign.instagram().map(str::to_owned);
    let facebook = campaign.facebook().map(str::to_owned);

    let link_button = move |link: SocialLink, url: String, label: &'static str| {
        let clicked = move || match link {
            SocialLink::Instagram => clicks.get().instagram,
            SocialLink::Facebook => clicks.get().facebook,
        };
        view! {
            <button
                class="btn social-gate__link"
                class:social-gate__link--done=clicked
                on:click=move |_| {
                    open_in_new_tab(&url);
                    on_click.run(link);
                }
            >
                {label}
                {move || if clicked() { " ✓" } else { "" }}
            </button>
        }
    };

    view! {
        <section class="social-gate">
            <h2>"Before You Play"</h2>
            {(!guidelines.is_empty()).then(|| {
                view! {
                    <ol class="social-gate__guidelines">
                        {guidelines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                    </ol>
                }
            })}
            <div class="social-gate__links">
                {instagram.map(|url| link_button(SocialLink::Instagram, url, "Follow on Instagram"))}
                {facebook.map(|url| link_button(SocialLink::Facebook, url, "Like on Facebook"))}
            </div>
            <button class="btn btn--primary" disabled=move || !complete.get() on:click=move |_| on_continue.run(())>
                "Continue to Play"
            </button>
        </section>
    }
}
