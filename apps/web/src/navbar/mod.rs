//! Top navigation: brand, categories dropdown, search, theme toggle and the
//! mobile slide-in menu.

mod mobile_menu;

use dioxus::prelude::*;
use gztechiz_core::links::category_href;
use gztechiz_core::theme::toggle_theme;

use crate::browser::{apply_theme, LocalStore};
use crate::search::SearchBox;
use crate::state::*;
pub use mobile_menu::MobileMenu;

const NAV_LINKS: [(&str, &str); 4] = [("/", "Home"), ("/blog", "Blog"), ("/about", "About"), ("/contact", "Contact")];

#[component]
pub fn Navbar() -> Element {
    let site = site_data();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-container",
                a { class: "navbar-brand", href: "/", "{site.site_name}" }

                ul {
                    class: "navbar-links",
                    for (href, label) in NAV_LINKS {
                        li { a { href, "{label}" } }
                    }
                    if !site.categories.is_empty() {
                        li { CategoriesDropdown {} }
                    }
                }

                SearchBox {}

                div {
                    class: "navbar-actions",
                    ThemeToggle {}
                    button {
                        class: "mobile-menu-toggle",
                        aria_label: "Open menu",
                        onclick: move |_| MOBILE.write().open(),
                        i { class: "fas fa-bars" }
                    }
                }
            }
        }
        MobileMenu {}
    }
}

#[component]
fn CategoriesDropdown() -> Element {
    let menus = *MENUS.read();
    let site = site_data();
    let open = menus.is_open(CATEGORIES_MENU);

    rsx! {
        div {
            class: "navbar-dropdown",
            button {
                class: "navbar-dropdown-toggle",
                onclick: move |_| MENUS.write().toggle(CATEGORIES_MENU),
                "Categories "
                i { class: menus.chevron_class(CATEGORIES_MENU) }
            }
            div {
                class: "navbar-dropdown-menu",
                display: if open { "block" } else { "none" },
                for category in site.categories.iter() {
                    a {
                        key: "{category.slug}",
                        class: "navbar-dropdown-item",
                        href: category_href(&category.slug),
                        "{category.name}"
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let theme = *THEME.read();

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle theme",
            onclick: move |_| {
                let next = toggle_theme(&LocalStore, &site_config().theme_storage_key, theme);
                apply_theme(next);
                *THEME.write() = next;
            },
            i { class: theme.icon_class() }
        }
    }
}
