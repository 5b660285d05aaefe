//! SVG prize wheel.
//!
//! DESIGN
//! ======
//! The wheel never picks a prize. The page asks the backend, then hands the
//! drawn slice index in through `target`. The disc rotates to that slice via
//! a CSS transition and `on_stopped` fires once the transition has run.

use leptos::prelude::*;

use crate::net::types::Prize;
use crate::util::wheel::{SPIN_DURATION_MS, VIEWBOX, label_anchor, slice_color, slice_path, target_rotation};

const WHEEL_RADIUS: f64 = 190.0;
const LABEL_DISTANCE: f64 = 120.0;

#[component]
pub fn SpinWheel(
    prizes: Vec<Prize>,
    /// Slice to land on; set after a successful `/spin/`.
    #[prop(into)]
    target: Signal<Option<usize>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] spins_left: Signal<Option<u32>>,
    on_spin: Callback<()>,
    on_stopped: Callback<()>,
) -> impl IntoView {
    let count = prizes.len();
    let rotation = RwSignal::new(0.0_f64);
    let spinning = RwSignal::new(false);

    Effect::new(move || {
        let Some(index) = target.get() else {
            return;
        };
        if spinning.get_untracked() {
            return;
        }
        spinning.set(true);
        rotation.update(|r| *r = target_rotation(*r, index, count));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(SPIN_DURATION_MS))).await;
            spinning.set(false);
            on_stopped.run(());
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_stopped;
        }
    });

    let slices = prizes
        .iter()
        .enumerate()
        .map(|(index, prize)| {
            let (x, y, angle) = label_anchor(index, count, LABEL_DISTANCE);
            view! {
                <g class="spin-wheel__slice">
                    <path d=slice_path(index, count, WHEEL_RADIUS) fill=slice_color(index) stroke="#fff" stroke-width="2"/>
                    <text
                        x=format!("{x:.2}")
                        y=format!("{y:.2}")
                        transform=format!("rotate({angle:.2} {x:.2} {y:.2})")
                        text-anchor="middle"
                        dominant-baseline="middle"
                        fill="#fff"
                        font-size="14"
                        font-weight="bold"
                    >
                        {prize.name.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let centre = VIEWBOX / 2.0;
    let disabled = move || busy.get() || spinning.get() || count == 0;

    view! {
        <div class="spin-wheel">
            <div class="spin-wheel__pointer" aria-hidden="true">"▼"</div>
            <svg
                class="spin-wheel__disc"
                viewBox=format!("0 0 {VIEWBOX} {VIEWBOX}")
                style:transform=move || format!("rotate({}deg)", rotation.get())
                style:transition-duration=format!("{SPIN_DURATION_MS}ms")
            >
                {slices}
                <circle cx=centre.to_string() cy=centre.to_string() r="18" fill="#fff" stroke="#1F2937" stroke-width="3"/>
            </svg>
            {move || spins_left.get().map(|n| view! { <p class="spin-wheel__remaining">"Spins Remaining: " {n}</p> })}
            <button class="btn btn--primary spin-wheel__button" disabled=disabled on:click=move |_| on_spin.run(())>
                {move || if busy.get() || spinning.get() { "Spinning..." } else { "SPIN THE WHEEL" }}
            </button>
        </div>
    }
}
