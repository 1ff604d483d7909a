//! Global application state using Dioxus signals.

use std::sync::OnceLock;

use dioxus::prelude::*;
use gztechiz_core::client::HttpSearchClient;
use gztechiz_core::nav::{MobileMenu, NavMenus};
use gztechiz_core::notice::NoticeBoard;
use gztechiz_core::suggest::{SuggestionController, SuggestionSettings};
use gztechiz_core::theme::{initial_theme, Theme};
use gztechiz_core::types::{NoticeKind, SiteData};
use gztechiz_core::{load_site_config, SiteConfig};

use crate::browser::{self, LocalStore};

/// Menu id of the categories dropdown.
pub const CATEGORIES_MENU: usize = 0;

// ---------------------------------------------------------------------------
// Boot-time data (parsed once, never changes)
// ---------------------------------------------------------------------------

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();
static SITE_DATA: OnceLock<SiteData> = OnceLock::new();

/// Settings from `site.toml`, embedded at build time.
pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(|| load_site_config(include_str!("../site.toml")))
}

/// Categories and flash messages the server rendered into `#site-data`.
pub fn site_data() -> &'static SiteData {
    SITE_DATA.get_or_init(|| SiteData::parse(browser::site_data_json().as_deref()))
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Live-search controller behind the navbar search box
pub static SEARCH: GlobalSignal<SuggestionController> =
    Signal::global(|| SuggestionController::new(SuggestionSettings::from(site_config())));

/// `/api/search` client (cheap to clone)
pub static CLIENT: GlobalSignal<HttpSearchClient> =
    Signal::global(|| HttpSearchClient::from_config(site_config(), &browser::origin()));

/// Navbar dropdown open state
pub static MENUS: GlobalSignal<NavMenus> = Signal::global(NavMenus::default);

/// Mobile slide-in menu
pub static MOBILE: GlobalSignal<MobileMenu> = Signal::global(MobileMenu::default);

/// Active theme. A stored preference wins over the server-rendered attribute.
pub static THEME: GlobalSignal<Theme> = Signal::global(|| {
    let page = Theme::from_attribute(browser::theme_attribute().as_deref());
    initial_theme(&LocalStore, &site_config().theme_storage_key, page)
});

/// Server flash messages
pub static FLASHES: GlobalSignal<NoticeBoard> = Signal::global(|| {
    let mut board = NoticeBoard::new();
    for flash in &site_data().flashes {
        board.push(NoticeKind::from_category(&flash.category), flash.message.clone());
    }
    board
});

/// Client-side toasts
pub static TOASTS: GlobalSignal<NoticeBoard> = Signal::global(NoticeBoard::new);

/// Whether the scroll-to-top button is shown
pub static SCROLL_VISIBLE: GlobalSignal<bool> = Signal::global(|| false);
