//! Suggestion dropdown under the search box.

use dioxus::prelude::*;
use gztechiz_core::suggest::SuggestionList;

/// Titles and excerpts are rendered as text, never as markup.
#[component]
pub fn SuggestionDropdown(list: SuggestionList) -> Element {
    rsx! {
        div {
            class: "search-suggestions",
            for item in list.items.iter() {
                a {
                    key: "{item.href}",
                    class: "search-suggestion-item",
                    href: "{item.href}",
                    div { class: "search-suggestion-title", "{item.title}" }
                    if !item.excerpt.is_empty() {
                        div { class: "search-suggestion-excerpt", "{item.excerpt}" }
                    }
                }
            }
            a {
                class: "search-suggestion-item search-view-all",
                href: "{list.view_all.href}",
                "{list.view_all.label}"
            }
        }
    }
}
