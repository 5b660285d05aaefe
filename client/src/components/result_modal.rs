//! Prize result dialog.

use leptos::prelude::*;

use crate::net::types::Prize;

#[component]
pub fn ResultModal(prize: Prize, in_store: bool, on_dismiss: Callback<()>) -> impl IntoView {
    let heading = if prize.is_winning { "🎉 Congratulations! 🎉" } else { "🎲 Result" };
    let headline = if prize.is_winning { format!("You won: {}", prize.name) } else { prize.name.clone() };
    let action = if in_store { "Next Customer" } else { "Play Again" };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog result-modal" class:result-modal--winning=prize.is_winning>
                <h2>{heading}</h2>
                <p class="result-modal__prize">{headline}</p>
                {(!prize.description.is_empty())
                    .then(|| view! { <p class="result-modal__description">{prize.description.clone()}</p> })}
                {in_store.then(|| view! { <p class="result-modal__hint">"Resetting for the next customer..."</p> })}
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_dismiss.run(())>{action}</button>
                </div>
            </div>
        </div>
    }
}
