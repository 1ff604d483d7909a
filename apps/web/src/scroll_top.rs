use dioxus::prelude::*;

use crate::browser::scroll_to_top;
use crate::state::SCROLL_VISIBLE;

/// Floating button, shown once the page has scrolled past the threshold.
#[component]
pub fn ScrollToTop() -> Element {
    let visible = *SCROLL_VISIBLE.read();

    rsx! {
        button {
            class: if visible { "scroll-to-top visible" } else { "scroll-to-top" },
            aria_label: "Scroll to top",
            onclick: move |_| scroll_to_top(),
            i { class: "fas fa-arrow-up" }
        }
    }
}
