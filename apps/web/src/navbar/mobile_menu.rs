use dioxus::prelude::*;
use gztechiz_core::links::category_href;

use super::NAV_LINKS;
use crate::browser::set_body_overflow;
use crate::state::*;

fn close() {
    MOBILE.write().close();
}

/// Slide-in menu for narrow screens. Closed by its button or the overlay.
#[component]
pub fn MobileMenu() -> Element {
    let menu = *MOBILE.read();
    let site = site_data();

    use_effect(move || {
        set_body_overflow(MOBILE.read().body_overflow());
    });

    rsx! {
        div {
            class: menu.class("mobile-menu-overlay"),
            onclick: move |_| close(),
        }
        aside {
            class: menu.class("mobile-menu"),
            div {
                class: "mobile-menu-header",
                span { class: "mobile-menu-title", "{site.site_name}" }
                button {
                    class: "mobile-menu-close",
                    aria_label: "Close menu",
                    onclick: move |_| close(),
                    i { class: "fas fa-times" }
                }
            }
            nav {
                class: "mobile-menu-links",
                for (href, label) in NAV_LINKS {
                    a { href, onclick: move |_| close(), "{label}" }
                }
                for category in site.categories.iter() {
                    a {
                        key: "{category.slug}",
                        class: "mobile-menu-category",
                        href: category_href(&category.slug),
                        onclick: move |_| close(),
                        "{category.name}"
                    }
                }
            }
        }
    }
}
