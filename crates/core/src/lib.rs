//! Gztechiz: client-side behavior for the blog front-end.
//!
//! Everything here is platform-free so it can be driven from the Dioxus web app,
//! the `gz` probe binary, and host-side tests alike.
//!
//! # Modules
//!
//! - [`suggest`]: debounced live-search suggestion controller with stale-response guard
//! - [`client`]: the `SearchBackend` trait and the reqwest-backed `/api/search` client
//! - [`links`]: navigation targets (`/post/…`, `/search?q=…`, `/category/…`)
//! - [`config`]: `SiteConfig` loading from TOML with key validation
//! - [`types`]: wire and boot-payload types shared across crates
//! - [`theme`]: dark/light theme preference
//! - [`notice`]: flash message and toast lifecycle
//! - [`nav`]: navbar dropdowns and the mobile menu
//! - [`page`]: comment reply drafts, required-field checks, scroll-to-top threshold

pub mod client;
pub mod config;
pub mod links;
pub mod nav;
pub mod notice;
pub mod page;
pub mod suggest;
pub mod theme;
pub mod types;

pub use config::{load_site_config, load_site_config_file, SiteConfig};
