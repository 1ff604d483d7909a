//! Navbar search box with live suggestions.

mod suggestions;

use dioxus::prelude::*;
use gztechiz_core::client::dispatch;
use gztechiz_core::suggest::{InputAction, ResponseOutcome};
use tracing::debug;

use crate::enhance::focus;
use crate::state::*;
use crate::timer::sleep;
use suggestions::SuggestionDropdown;

const INPUT_ID: &str = "navbar-search-input";

#[component]
pub fn SearchBox() -> Element {
    let mut query = use_signal(String::new);
    let dropdown = SEARCH.read().dropdown().cloned();

    rsx! {
        div {
            class: "navbar-search",
            form {
                class: "navbar-search-form",
                action: "/search",
                method: "get",
                // Accepted queries go out as the form's own GET to /search.
                onsubmit: move |e: Event<FormData>| {
                    if let Err(rejection) = SEARCH.peek().check_submit(&query.peek()) {
                        e.prevent_default();
                        debug!(%rejection, "Search submit blocked");
                        focus(INPUT_ID);
                    }
                },
                input {
                    id: INPUT_ID,
                    class: "navbar-search-input",
                    r#type: "text",
                    name: "q",
                    placeholder: "Search articles...",
                    autocomplete: "off",
                    value: "{query}",
                    oninput: move |e: Event<FormData>| {
                        let value = e.value();
                        query.set(value.clone());
                        on_keystroke(&value);
                    },
                    onfocus: move |_| {
                        SEARCH.write().on_focus(&query.peek());
                    },
                }
                button {
                    class: "navbar-search-btn",
                    r#type: "submit",
                    i { class: "fas fa-search" }
                }
            }

            if let Some(list) = dropdown {
                SuggestionDropdown { list }
            }
        }
    }
}

/// Feed one keystroke to the controller and, if it survives the debounce,
/// run the request.
fn on_keystroke(raw: &str) {
    let action = SEARCH.write().on_input(raw);
    let InputAction::Schedule(ticket) = action else {
        return;
    };

    spawn(async move {
        sleep(ticket.delay()).await;
        let Some(tag) = SEARCH.write().on_debounce_elapsed(&ticket) else {
            return;
        };
        let client = CLIENT.peek().clone();
        let (tag, result) = dispatch(&client, tag).await;
        let outcome = SEARCH.write().on_response(&tag, result);
        if outcome == ResponseOutcome::Stale {
            debug!(seq = tag.seq(), "Late suggestions ignored");
        }
    });
}
