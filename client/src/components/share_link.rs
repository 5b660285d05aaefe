//! Share dialog: the campaign's public link, its QR code, copy-to-clipboard.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::config::ClientConfig;
use crate::net::types::Campaign;
use crate::util::qr::link_svg;
use crate::util::share::{SVG_MIME, download_bytes, open_in_new_tab, qr_file_name};

#[component]
pub fn ShareLinkDialog(campaign: Campaign, on_close: Callback<()>) -> impl IntoView {
    let link = ClientConfig::load().campaign_link(&campaign.public_code());
    let copied = RwSignal::new(false);
    let download_error = RwSignal::new(None::<String>);

    let qr = StoredValue::new(link_svg(&link).map_err(|e| e.to_string()));
    let file_name = qr_file_name(&campaign.name);

    let link_copy = link.clone();
    let on_copy = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let text = link_copy.clone();
            leptos::task::spawn_local(async move {
                copied.set(crate::util::share::copy_to_clipboard(&text).await);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &link_copy;
        }
    };
    let on_download = move |_: leptos::ev::MouseEvent| {
        let result = qr.with_value(|svg| match svg {
            Ok(svg) => download_bytes(&file_name, SVG_MIME, svg.as_bytes()),
            Err(e) => Err(e.clone()),
        });
        download_error.set(result.err());
    };
    let link_open = link.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog share-dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Share Campaign"</h2>
                <p class="share-dialog__name">{campaign.name.clone()}</p>
                {qr.with_value(|svg| match svg {
                    Ok(svg) => {
                        view! {
                            <div class="share-dialog__qr" inner_html=svg.clone()></div>
                            <p class="share-dialog__hint">"Scan to participate"</p>
                        }
                            .into_any()
                    }
                    Err(e) => view! { <p class="banner banner--error">{format!("QR code unavailable: {e}")}</p> }.into_any(),
                })}
                <label class="dialog__label">"Public link"</label>
                <div class="share-dialog__row">
                    <input class="dialog__input share-dialog__link" type="text" readonly=true prop:value=link/>
                    <button class="btn btn--primary" on:click=on_copy>
                        {move || if copied.get() { "Copied!" } else { "Copy" }}
                    </button>
                </div>
                {move || download_error.get().map(|e| view! { <p class="banner banner--error">{e}</p> })}
                <div class="dialog__actions">
                    <button class="btn" disabled=qr.with_value(Result::is_err) on:click=on_download>
                        "Download QR (SVG)"
                    </button>
                    <button class="btn" on:click=move |_| open_in_new_tab(&link_open)>"Open"</button>
                    <button class="btn" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
