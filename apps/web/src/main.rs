//! Gztechiz blog chrome: navbar, live search, theme, notices and page helpers,
//! mounted over the server-rendered page.

mod app;
mod browser;
mod enhance;
mod navbar;
mod notices;
mod scroll_top;
mod search;
mod state;
mod timer;

use app::App;

fn main() {
    // Tracing subscriber writing to the browser console; a second init is a no-op.
    let _ = dioxus::logger::init(tracing::Level::INFO);

    dioxus::launch(App);
}
