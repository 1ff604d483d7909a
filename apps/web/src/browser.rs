//! Thin wrappers over `web_sys` for the bits of the page the chrome touches
//! outside its own component tree. Every call tolerates a missing window,
//! element, or API and logs instead of failing.

use gztechiz_core::theme::{PreferenceStore, Theme};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// `window.location.origin`, used as the API base when none is configured.
pub fn origin() -> String {
    window().and_then(|w| w.location().origin().ok()).unwrap_or_default()
}

/// Raw JSON inside `<script id="site-data" type="application/json">`.
pub fn site_data_json() -> Option<String> {
    document()?.get_element_by_id("site-data")?.text_content()
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

pub fn theme_attribute() -> Option<String> {
    document()?.document_element()?.get_attribute("data-theme")
}

pub fn apply_theme(theme: Theme) {
    let Some(html) = document().and_then(|d| d.document_element()) else {
        return;
    };
    if let Err(e) = html.set_attribute("data-theme", theme.as_str()) {
        warn!(error = ?e, "Could not set data-theme");
    }
}

/// `window.localStorage`. Storage can be disabled (private mode, policies);
/// reads then return nothing and writes are dropped.
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        match window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                debug!(error = ?e, "localStorage unavailable");
                None
            }
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                warn!(key, error = ?e, "Could not persist preference");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Set `document.body.style.overflow`; an empty value clears it.
pub fn set_body_overflow(value: &str) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if value.is_empty() {
        style.remove_property("overflow").map(|_| ())
    } else {
        style.set_property("overflow", value)
    };
    if let Err(e) = result {
        warn!(error = ?e, "Could not update body overflow");
    }
}

pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(w) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&options);
    }
}

/// Set one inline style property on an element, if it is an `HtmlElement`.
pub fn set_style(element: &web_sys::Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

// ---------------------------------------------------------------------------
// Clipboard
// ---------------------------------------------------------------------------

pub async fn copy_text(text: &str) -> Result<(), String> {
    let w = window().ok_or("no window")?;
    let clipboard = w.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}
