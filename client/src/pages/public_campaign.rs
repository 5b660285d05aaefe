//! Public play page at `/campaign/:code`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anonymous players land here from a shared link. All flow decisions live
//! in `state::play::PlayState`; this page performs the network calls, writes
//! player identity to `localStorage`, and carries out the `Effect`s a
//! transition asks for.
//!
//! DESIGN
//! ======
//! Views hang off memos of the stage, campaign, and drawn prize so a state
//! change elsewhere (busy flag, notice) never rebuilds the wheel or the
//! scratch canvas mid-play.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::registration_modal::RegistrationModal;
use crate::components::result_modal::ResultModal;
use crate::components::scratch_card::ScratchCard;
use crate::components::social_gate::SocialGate;
use crate::components::spin_wheel::SpinWheel;
use crate::net::types::{CampaignType, PlayerDetails};
use crate::state::play::{Effect, PlayState, SocialLink, Stage, forget_current_player};
use crate::util::storage::BrowserStorage;

fn run_effects(play: RwSignal<PlayState>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::ClearCurrentUser => {
                if let Some(campaign) = play.with_untracked(|p| p.campaign.clone()) {
                    forget_current_player(&BrowserStorage, &campaign);
                }
            }
            Effect::ScheduleNextCustomer { generation, delay_ms } => {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
                    play.update(|p| p.next_customer_due(generation));
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (generation, delay_ms);
                }
            }
            Effect::Reload => crate::util::share::reload(),
        }
    }
}

#[component]
pub fn PublicCampaignPage() -> impl IntoView {
    let params = use_params_map();
    let code = StoredValue::new(params.with_untracked(|p| p.get("code").unwrap_or_default()));
    let play = RwSignal::new(PlayState::default());

    let stage = Memo::new(move |_| play.with(|p| p.stage.clone()));
    let campaign = Memo::new(move |_| play.with(|p| p.campaign.clone()));
    let drawn = Memo::new(move |_| play.with(|p| p.drawn.clone()));
    // The wheel spins on every change of target, so it must only notify on change.
    let drawn_slice = Memo::new(move |_| play.with(PlayState::drawn_slice));
    let busy = Signal::derive(move || play.with(|p| p.busy));
    let notice = Memo::new(move |_| play.with(|p| p.notice.clone()));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let code = code.get_value();
        match crate::net::api::browser_api().public_campaign(&code).await {
            Ok(loaded) => {
                log::info!("loaded campaign {} ({})", loaded.id, loaded.campaign_type.as_str());
                let known = crate::state::play::has_identity(&BrowserStorage, &loaded);
                play.update(|p| p.campaign_loaded(loaded, known));
            }
            Err(e) => play.update(|p| p.campaign_failed(e.to_string())),
        }
    });

    let on_register = Callback::new(move |player: PlayerDetails| {
        let mut started = false;
        play.update(|p| started = p.registration_started());
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::browser_api().register_player(&code.get_value(), &player).await;
            match result {
                Ok(()) => {
                    if let Some(current) = play.with_untracked(|p| p.campaign.clone()) {
                        crate::state::play::remember_player(&BrowserStorage, &current, &player);
                    }
                    play.update(PlayState::registered);
                }
                Err(e) => play.update(|p| p.registration_failed(e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = player;
        }
    });

    let on_play = Callback::new(move |()| {
        let mut started = false;
        play.update(|p| started = p.begin_play());
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let identity = play
                .with_untracked(|p| p.campaign.clone())
                .and_then(|c| crate::state::play::play_identity(&BrowserStorage, &c));
            match crate::net::api::browser_api().spin(&code.get_value(), identity.as_deref()).await {
                Ok(outcome) => play.update(|p| p.spin_outcome(outcome)),
                Err(e) => {
                    leptos::logging::warn!("spin failed: {e}");
                    play.update(|p| p.spin_failed(e.to_string()));
                }
            }
        });
    });

    let on_revealed = Callback::new(move |()| {
        let mut effects = Vec::new();
        play.update(|p| effects = p.prize_revealed());
        run_effects(play, effects);
    });

    let on_result_dismissed = Callback::new(move |()| {
        let mut effects = Vec::new();
        play.update(|p| effects = p.result_dismissed());
        run_effects(play, effects);
    });

    let on_share_unlock = move |_: leptos::ev::MouseEvent| {
        let page = crate::util::share::current_href();
        crate::util::share::open_in_new_tab(&crate::util::share::tweet_intent_url(&page));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let identity = play
                .with_untracked(|p| p.campaign.clone())
                .and_then(|c| crate::state::play::play_identity(&BrowserStorage, &c));
            match crate::net::api::browser_api().record_share(&code.get_value(), identity.as_deref()).await {
                Ok(()) => play.update(PlayState::share_recorded),
                Err(e) => play.update(|p| p.spin_failed(e.to_string())),
            }
        });
    };

    // Only remote players may close the registration modal.
    let dismiss_handler = move || {
        play.with_untracked(PlayState::can_dismiss_registration)
            .then(|| Callback::new(move |()| play.update(PlayState::dismiss_registration)))
    };

    let in_game = move || matches!(stage.get(), Stage::Play | Stage::Result);

    let game = move || {
        campaign.get().map(|c| match c.campaign_type {
            CampaignType::Spin => view! {
                <SpinWheel
                    prizes=c.prizes.clone()
                    target=drawn_slice
                    busy=busy
                    spins_left=Signal::derive(move || play.with(|p| p.spins_left))
                    on_spin=on_play
                    on_stopped=on_revealed
                />
            }
            .into_any(),
            CampaignType::Scratch => view! {
                {move || match drawn.get() {
                    Some(prize) => view! { <ScratchCard prize=prize on_reveal=on_revealed/> }.into_any(),
                    None => view! {
                        <button
                            class="btn btn--primary scratch-card__start"
                            disabled=move || busy.get() || stage.get() != Stage::Play
                            on:click=move |_| on_play.run(())
                        >
                            {move || if busy.get() { "Getting your card..." } else { "Get Your Scratch Card" }}
                        </button>
                    }
                    .into_any(),
                }}
            }
            .into_any(),
        })
    };

    view! {
        <div class="public-campaign">
            {move || {
                campaign
                    .get()
                    .map(|c| {
                        view! {
                            <header class="public-campaign__header">
                                <h1>{c.name.clone()}</h1>
                                <p class="public-campaign__type">{c.campaign_type.label()}</p>
                            </header>
                        }
                    })
            }}

            {move || match stage.get() {
                Stage::Loading => view! { <p class="public-campaign__loading">"Loading campaign..."</p> }.into_any(),
                Stage::Failed(message) => {
                    view! { <p class="banner banner--error">{message}</p> }.into_any()
                }
                _ => ().into_any(),
            }}

            <Show when=move || notice.get().is_some() && stage.get() != Stage::Registration>
                <div class="banner banner--error public-campaign__notice">
                    <span>{move || notice.get().map(|n| n.message).unwrap_or_default()}</span>
                    <Show when=move || notice.get().is_some_and(|n| n.can_unlock_with_share)>
                        <button class="btn btn--small" on:click=on_share_unlock>"Share to unlock another play"</button>
                    </Show>
                </div>
            </Show>

            <Show when=in_game>
                <section class="public-campaign__game">{game}</section>
            </Show>

            <Show when=move || stage.get() == Stage::SocialGate>
                {move || {
                    campaign
                        .get()
                        .map(|c| {
                            view! {
                                <SocialGate
                                    campaign=c
                                    clicks=Signal::derive(move || play.with(|p| p.social))
                                    complete=Signal::derive(move || play.with(PlayState::social_complete))
                                    on_click=Callback::new(move |link: SocialLink| play.update(|p| p.social_clicked(link)))
                                    on_continue=Callback::new(move |()| play.update(PlayState::continue_from_social))
                                />
                            }
                        })
                }}
            </Show>

            <Show when=move || stage.get() == Stage::Registration>
                <RegistrationModal
                    on_submit=on_register
                    on_dismiss=dismiss_handler()
                    busy=busy
                    server_error=Signal::derive(move || notice.get().map(|n| n.message))
                />
            </Show>

            {move || {
                (stage.get() == Stage::Result)
                    .then(|| play.with_untracked(|p| p.won.clone()))
                    .flatten()
                    .map(|prize| {
                        let in_store = play.with_untracked(PlayState::is_in_store);
                        view! { <ResultModal prize=prize in_store=in_store on_dismiss=on_result_dismissed/> }
                    })
            }}
        </div>
    }
}
