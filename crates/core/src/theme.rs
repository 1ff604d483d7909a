//! Dark/light theme preference.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value found in browser storage. Anything unrecognised is ignored.
    pub fn from_stored(value: Option<&str>) -> Option<Self> {
        match value.map(str::trim) {
            Some("dark") => Some(Self::Dark),
            Some("light") => Some(Self::Light),
            _ => None,
        }
    }

    /// The `data-theme` attribute value on `<html>`; absent counts as light.
    pub fn from_attribute(value: Option<&str>) -> Self {
        if value == Some("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The toggle shows the icon of the theme you'd switch to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-sun",
            Self::Light => "fas fa-moon",
        }
    }
}

/// Key/value persistence for preferences (browser `localStorage` in the web app).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Theme to apply at page load: the stored one if valid, else what the page has.
pub fn initial_theme(store: &impl PreferenceStore, key: &str, page: Theme) -> Theme {
    Theme::from_stored(store.get(key).as_deref()).unwrap_or(page)
}

/// Flip `current`, persist it, and return the new theme.
pub fn toggle_theme(store: &impl PreferenceStore, key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    store.set(key, next.as_str());
    next
}
