//! Types shared across the front-end: search suggestions from `/api/search`,
//! the `#site-data` boot payload, and notice kinds.

use serde::{Deserialize, Serialize};
use tracing::warn;

// ---------------------------------------------------------------------------
// Search suggestions
// ---------------------------------------------------------------------------

/// One entry of the `/api/search` response, in server relevance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
}

// ---------------------------------------------------------------------------
// Notice kinds (flash categories + toast types)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    Danger,
    Warning,
    Info,
}

impl NoticeKind {
    /// Map a server flash category (`success`, `danger`, `error`, …) to a kind.
    /// Unknown categories fall back to `Info`. `danger` keeps its own class.
    pub fn from_category(category: &str) -> Self {
        match category.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "danger" => Self::Danger,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Font Awesome icon shown next to a toast. Only `error` gets the
    /// exclamation mark; every non-success kind besides it shows the info icon.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
            Self::Danger | Self::Warning | Self::Info => "fas fa-info-circle",
        }
    }
}

// ---------------------------------------------------------------------------
// Boot payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLink {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashPayload {
    #[serde(default = "default_flash_category")]
    pub category: String,
    pub message: String,
}

fn default_flash_category() -> String {
    "info".to_string()
}

/// Data the server template embeds in `<script id="site-data" type="application/json">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(default = "default_site_name")]
    pub site_name: String,
    #[serde(default)]
    pub categories: Vec<CategoryLink>,
    #[serde(default)]
    pub flashes: Vec<FlashPayload>,
}

fn default_site_name() -> String {
    "Gztechiz".to_string()
}

impl Default for SiteData {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            categories: Vec::new(),
            flashes: Vec::new(),
        }
    }
}

impl SiteData {
    /// Parse the boot payload. A missing or malformed payload yields defaults.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, "Malformed #site-data payload, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_without_excerpt_defaults_to_empty() {
        let parsed: Vec<SuggestionResult> =
            serde_json::from_str(r#"[{"slug":"a","title":"A"}]"#).unwrap();
        assert_eq!(parsed[0].excerpt, "");
    }

    #[test]
    fn danger_keeps_its_own_class() {
        assert_eq!(NoticeKind::from_category("danger"), NoticeKind::Danger);
        assert_eq!(NoticeKind::from_category("danger").as_str(), "danger");
        assert_eq!(NoticeKind::from_category("ERROR"), NoticeKind::Error);
        assert_eq!(NoticeKind::from_category("message"), NoticeKind::Info);
    }

    #[test]
    fn only_error_toasts_get_the_exclamation_icon() {
        assert_eq!(NoticeKind::Success.icon_class(), "fas fa-check-circle");
        assert_eq!(NoticeKind::Error.icon_class(), "fas fa-exclamation-circle");
        for kind in [NoticeKind::Warning, NoticeKind::Danger, NoticeKind::Info] {
            assert_eq!(kind.icon_class(), "fas fa-info-circle", "{kind:?}");
        }
    }

    #[test]
    fn site_data_falls_back_on_garbage() {
        assert_eq!(SiteData::parse(Some("{not json")), SiteData::default());
        assert_eq!(SiteData::parse(None), SiteData::default());
    }

    #[test]
    fn site_data_reads_categories_and_flashes() {
        let data = SiteData::parse(Some(
            r#"{"categories":[{"name":"Rust","slug":"rust"}],
                "flashes":[{"category":"success","message":"Saved"},{"message":"Hi"}]}"#,
        ));
        assert_eq!(data.site_name, "Gztechiz");
        assert_eq!(data.categories.len(), 1);
        assert_eq!(data.flashes[1].category, "info");
    }
}
