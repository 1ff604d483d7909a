//! Root component: navbar, notices and the scroll button, plus the coroutine
//! that receives events from outside the component tree.

use dioxus::prelude::*;
use futures_channel::mpsc;
use futures_util::StreamExt;
use gztechiz_core::nav::NavMenus;
use gztechiz_core::page::scroll_top_visible;
use tracing::{info, warn};

use crate::browser::apply_theme;
use crate::enhance::{self, ChromeEvent};
use crate::navbar::Navbar;
use crate::notices::{show_toast, FlashStack, ToastHost};
use crate::scroll_top::ScrollToTop;
use crate::state::*;
use crate::timer::sleep;

#[component]
pub fn App() -> Element {
    use_hook(|| {
        apply_theme(*THEME.peek());

        let (tx, mut rx) = mpsc::unbounded::<ChromeEvent>();
        if let Err(e) = enhance::install(tx) {
            warn!(error = %e, "Page enhancers not installed");
        }
        spawn(async move {
            while let Some(event) = rx.next().await {
                handle(event);
            }
        });
        info!(site = site_data().site_name.as_str(), "Blog chrome initialized");
    });

    rsx! {
        Navbar {}
        FlashStack {}
        ToastHost {}
        ScrollToTop {}
    }
}

fn handle(event: ChromeEvent) {
    match event {
        ChromeEvent::DocumentClick { in_search, in_dropdown } => {
            if !in_dropdown && *MENUS.peek() != NavMenus::default() {
                MENUS.write().close_all();
            }
            if !in_search {
                // Hidden only after the grace delay so a suggestion click still lands.
                let ticket = SEARCH.peek().on_outside_click();
                if let Some(ticket) = ticket {
                    spawn(async move {
                        sleep(ticket.delay()).await;
                        SEARCH.write().on_grace_elapsed(&ticket);
                    });
                }
            }
        }
        ChromeEvent::Scrolled(offset) => {
            let visible = scroll_top_visible(offset, site_config().scroll_top_threshold);
            if *SCROLL_VISIBLE.peek() != visible {
                *SCROLL_VISIBLE.write() = visible;
            }
        }
        ChromeEvent::Toast(kind, message) => show_toast(kind, message),
    }
}
