//! Sharing and browser side-effect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Campaign share links, the share-to-unlock tweet fallback, clipboard copy,
//! file download, and page navigation. URL builders are pure; the rest are
//! hydrate-only and no-ops during SSR.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

const TWEET_TEXT: &str = "Check out this prize wheel!";

/// Twitter intent used when the native share sheet is unavailable.
#[must_use]
pub fn tweet_intent_url(page_url: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        urlencoding::encode(TWEET_TEXT),
        urlencoding::encode(page_url)
    )
}

fn file_slug(name: &str) -> String {
    name.trim().chars().map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' }).collect()
}

/// Spreadsheet file name for a campaign's claims export.
#[must_use]
pub fn claims_file_name(campaign_name: &str) -> String {
    format!("campaign_claims_{}.xlsx", file_slug(campaign_name))
}

/// File name for a campaign's downloaded QR code.
#[must_use]
pub fn qr_file_name(campaign_name: &str) -> String {
    format!("{}_qr.svg", file_slug(campaign_name))
}

/// Write `text` to the clipboard. Resolves to whether the browser accepted it.
pub async fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(clipboard) = web_sys::window().and_then(|w| w.navigator().clipboard()) else {
            return false;
        };
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await {
            Ok(_) => true,
            Err(e) => {
                leptos::logging::warn!("clipboard write failed: {e:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Open `url` in a new tab.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Current page URL, or empty during SSR.
#[must_use]
pub fn current_href() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().href().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Full page navigation.
pub fn hard_navigate(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Native confirm dialog; `false` when unavailable.
#[must_use]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Save `bytes` as a file through a temporary object URL.
///
/// # Errors
///
/// Returns a message if the browser refuses to build the blob or link.
pub fn download_bytes(file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let js_err = |e: wasm_bindgen::JsValue| format!("{e:?}");
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;
        let document = web_sys::window().and_then(|w| w.document()).ok_or("document unavailable")?;
        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor element unavailable".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, mime, bytes);
        Err("downloads are only available in the browser".to_owned())
    }
}

pub const SVG_MIME: &str = "image/svg+xml";

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
