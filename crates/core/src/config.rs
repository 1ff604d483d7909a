//! `site.toml` loading.
//!
//! Every key is optional; missing keys keep their defaults. Unknown keys are
//! reported with a typo suggestion instead of failing the load.

use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Known keys in `site.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &[
    "api_base",
    "search_path",
    "debounce_ms",
    "min_query_chars",
    "outside_click_grace_ms",
    "notice_timeout_ms",
    "notice_fade_ms",
    "scroll_top_threshold",
    "theme_storage_key",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Origin prepended to `search_path`. Empty means "same origin as the page".
    pub api_base: String,
    pub search_path: String,
    pub debounce_ms: u64,
    pub min_query_chars: usize,
    pub outside_click_grace_ms: u64,
    pub notice_timeout_ms: u64,
    pub notice_fade_ms: u64,
    pub scroll_top_threshold: u32,
    pub theme_storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            search_path: "/api/search".to_string(),
            debounce_ms: 300,
            min_query_chars: 2,
            outside_click_grace_ms: 200,
            notice_timeout_ms: 5000,
            notice_fade_ms: 300,
            scroll_top_threshold: 300,
            theme_storage_key: "theme".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn outside_click_grace(&self) -> Duration {
        Duration::from_millis(self.outside_click_grace_ms)
    }

    pub fn notice_timeout(&self) -> Duration {
        Duration::from_millis(self.notice_timeout_ms)
    }

    pub fn notice_fade(&self) -> Duration {
        Duration::from_millis(self.notice_fade_ms)
    }

    /// Render the effective config back to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| e.to_string())
    }
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Closest known key, if it is within typo distance.
fn suggest_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .copied()
        .min_by_key(|k| edit_distance(key, k))
        .filter(|k| edit_distance(key, k) <= 3)
}

fn read_string(table: &toml::Table, key: &str, slot: &mut String) {
    match table.get(key) {
        Some(toml::Value::String(s)) => *slot = s.clone(),
        Some(other) => warn!(key, found = other.type_str(), "Expected a string in site.toml"),
        None => {}
    }
}

fn read_u64(table: &toml::Table, key: &str, slot: &mut u64) {
    match table.get(key) {
        Some(toml::Value::Integer(n)) if *n >= 0 => *slot = *n as u64,
        Some(other) => warn!(key, found = %other, "Expected a non-negative integer in site.toml"),
        None => {}
    }
}

/// Parse `site.toml` content into a [`SiteConfig`].
///
/// Content that is not valid TOML yields the defaults with a warning.
pub fn load_site_config(content: &str) -> SiteConfig {
    let mut config = SiteConfig::default();

    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "Failed to parse site.toml, using defaults");
            return config;
        }
    };

    // Warn on unknown keys
    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        match suggest_key(key) {
            Some(suggestion) => warn!(
                key = key.as_str(),
                suggestion,
                "Unknown key in site.toml, did you mean '{suggestion}'?"
            ),
            None => warn!(
                key = key.as_str(),
                "Unknown key in site.toml (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            ),
        }
    }

    read_string(&table, "api_base", &mut config.api_base);
    read_string(&table, "search_path", &mut config.search_path);
    read_string(&table, "theme_storage_key", &mut config.theme_storage_key);
    read_u64(&table, "debounce_ms", &mut config.debounce_ms);
    read_u64(&table, "outside_click_grace_ms", &mut config.outside_click_grace_ms);
    read_u64(&table, "notice_timeout_ms", &mut config.notice_timeout_ms);
    read_u64(&table, "notice_fade_ms", &mut config.notice_fade_ms);

    let mut min_chars = config.min_query_chars as u64;
    read_u64(&table, "min_query_chars", &mut min_chars);
    config.min_query_chars = (min_chars as usize).max(1);

    let mut threshold = u64::from(config.scroll_top_threshold);
    read_u64(&table, "scroll_top_threshold", &mut threshold);
    config.scroll_top_threshold = u32::try_from(threshold).unwrap_or(u32::MAX);

    if !config.search_path.starts_with('/') {
        config.search_path.insert(0, '/');
    }
    config.api_base = config.api_base.trim_end_matches('/').to_string();

    debug!(?config, "Loaded site config");
    config
}

/// Read and parse a `site.toml` file. Only I/O problems are errors.
pub fn load_site_config_file(path: &Path) -> Result<SiteConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
    Ok(load_site_config(&content))
}
