//! Runtime configuration handed from the host to the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the values below as `<meta>` tags in the SSR shell; the
//! hydrated app reads them back with [`ClientConfig::load`]. Missing tags fall
//! back to the compile-time defaults so a static build still works.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_PUBLIC_SITE_URL: &str = "https://coffercard.com";

pub const API_BASE_META: &str = "coffercard-api-base";
pub const PUBLIC_SITE_META: &str = "coffercard-public-site";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST base URL without a trailing slash, e.g. `http://localhost:8000/api`.
    pub api_base_url: String,
    /// Origin used when building shareable campaign links.
    pub public_site_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), public_site_url: DEFAULT_PUBLIC_SITE_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build from optional overrides, trimming trailing slashes and ignoring blanks.
    #[must_use]
    pub fn from_parts(api_base_url: Option<&str>, public_site_url: Option<&str>) -> Self {
        let pick = |value: Option<&str>, fallback: &str| {
            value
                .map(|v| v.trim().trim_end_matches('/'))
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
                .to_owned()
        };
        Self {
            api_base_url: pick(api_base_url, DEFAULT_API_BASE_URL),
            public_site_url: pick(public_site_url, DEFAULT_PUBLIC_SITE_URL),
        }
    }

    /// Read the shell's `<meta>` tags (browser) or use defaults (server).
    #[must_use]
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::from_parts(meta_content(API_BASE_META).as_deref(), meta_content(PUBLIC_SITE_META).as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Shareable link for a campaign's public code.
    #[must_use]
    pub fn campaign_link(&self, code: &str) -> String {
        format!("{}/campaign/{code}", self.public_site_url)
    }
}

#[cfg(feature = "hydrate")]
fn meta_content(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let element = document.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten()?;
    element.dyn_into::<web_sys::HtmlMetaElement>().ok().map(|meta| meta.content())
}
