//! Leptos host for the `scratch` canvas engine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The prize is rendered as ordinary markup underneath a square canvas. The
//! `scratch` crate paints the cover on that canvas, erases it along pointer
//! strokes, and reports progress and the one-time reveal back to this
//! component as actions.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use scratch::engine::{Action, ScratchCard as Engine};

use crate::net::types::Prize;

#[component]
pub fn ScratchCard(prize: Prize, on_reveal: Callback<()>) -> impl IntoView {
    let wrapper_ref = NodeRef::<leptos::html::Div>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let progress = RwSignal::new(None::<u32>);
    let revealed = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<Engine>));

    #[cfg(feature = "hydrate")]
    let handle_actions = move |actions: Vec<Action>| {
        for action in actions {
            match action {
                Action::Progress(percent) => progress.set(percent),
                Action::Revealed => {
                    revealed.set(true);
                    progress.set(None);
                    on_reveal.run(());
                }
                Action::Erase(_) | Action::SampleCoverage => {}
            }
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let container = wrapper_ref.get_untracked().map_or(0.0, |div| f64::from(div.client_width()));
            let size = scratch::geometry::surface_size(container);
            match Engine::new(canvas, size) {
                Ok(card) => *engine.borrow_mut() = Some(card),
                Err(e) => leptos::logging::warn!("scratch card init failed: {e:?}"),
            }
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get_untracked() {
                    let _ = canvas.set_pointer_capture(ev.pointer_id());
                }
                if let Some(card) = engine.borrow_mut().as_mut() {
                    card.on_pointer_down(f64::from(ev.client_x()), f64::from(ev.client_y()));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let result = match engine.borrow_mut().as_mut() {
                    Some(card) => card.on_pointer_move(f64::from(ev.client_x()), f64::from(ev.client_y())),
                    None => return,
                };
                match result {
                    Ok(actions) => handle_actions(actions),
                    Err(e) => leptos::logging::warn!("scratch stroke failed: {e:?}"),
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                let result = match engine.borrow_mut().as_mut() {
                    Some(card) => card.on_pointer_up(),
                    None => return,
                };
                match result {
                    Ok(actions) => handle_actions(actions),
                    Err(e) => leptos::logging::warn!("scratch sample failed: {e:?}"),
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_reveal;
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };
    let on_pointer_leave = on_pointer_up.clone();

    view! {
        <div class="scratch-card" node_ref=wrapper_ref>
            <div class="scratch-card__prize">
                <span class="scratch-card__prize-name">{prize.name.clone()}</span>
                {(!prize.description.is_empty())
                    .then(|| view! { <span class="scratch-card__prize-description">{prize.description.clone()}</span> })}
            </div>
            <canvas
                class="scratch-card__cover"
                class:scratch-card__cover--revealed=move || revealed.get()
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
            ></canvas>
        </div>
        {move || {
            progress
                .get()
                .filter(|p| *p > 0)
                .map(|p| view! { <p class="scratch-card__hint">{format!("Keep scratching! ({p}% revealed)")}</p> })
        }}
    }
}
