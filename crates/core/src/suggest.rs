//! Live-search suggestion controller.
//!
//! The controller owns the dropdown state and decides, for every browser event,
//! what happens next. It never sleeps or performs I/O itself: the caller runs the
//! timers and the request, then hands the results back through the `on_*` methods.
//!
//! ```text
//! keystroke ──on_input──▶ Schedule(ticket) ──(debounce)──▶ on_debounce_elapsed
//!                                                              │ Some(tag)
//!                                                              ▼
//!                         on_response(tag, result) ◀──── search(tag.query)
//! ```
//!
//! Two counters keep late events harmless:
//! - the debounce generation, bumped per keystroke, drops superseded timers;
//! - the request sequence, bumped per dispatch, drops responses that are not
//!   for the current request.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, trace};

use crate::client::SearchError;
use crate::config::SiteConfig;
use crate::links::{post_href, search_href};
use crate::types::SuggestionResult;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionSettings {
    pub debounce: Duration,
    pub min_chars: usize,
    pub grace: Duration,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self::from(&SiteConfig::default())
    }
}

impl From<&SiteConfig> for SuggestionSettings {
    fn from(config: &SiteConfig) -> Self {
        Self {
            debounce: config.debounce(),
            min_chars: config.min_query_chars,
            grace: config.outside_click_grace(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tickets and tags handed to the caller
// ---------------------------------------------------------------------------

/// A scheduled query. Only the ticket from the latest keystroke is honoured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
    query: String,
    raw: String,
    delay: Duration,
}

impl DebounceTicket {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Identity of one outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTag {
    seq: u64,
    query: String,
    raw: String,
}

impl RequestTag {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Trimmed query sent to the endpoint.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// A pending grace-period hide after an outside click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket {
    epoch: u64,
    delay: Duration,
}

impl HideTicket {
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Query too short: nothing to schedule, dropdown already hidden.
    Hide,
    /// Sleep for `ticket.delay()`, then call `on_debounce_elapsed`.
    Schedule(DebounceTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    Rendered(usize),
    Emptied,
    Failed,
    /// Not for the current request; ignored.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryRejection {
    Empty,
    TooShort { min: usize },
}

impl std::fmt::Display for QueryRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a search query"),
            Self::TooShort { min } => write!(f, "Please enter at least {min} characters to search"),
        }
    }
}

// ---------------------------------------------------------------------------
// Render model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionLink {
    pub href: String,
    pub title: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewAllLink {
    pub href: String,
    pub label: String,
}

/// Dropdown contents: one link per result plus the trailing "view all" link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionList {
    pub items: Vec<SuggestionLink>,
    pub view_all: ViewAllLink,
}

impl SuggestionList {
    /// `None` for an empty result set; an empty dropdown is never shown.
    pub fn build(results: Vec<SuggestionResult>, raw_query: &str) -> Option<Self> {
        if results.is_empty() {
            return None;
        }
        let items = results
            .into_iter()
            .map(|r| SuggestionLink {
                href: post_href(&r.slug),
                title: r.title,
                excerpt: r.excerpt,
            })
            .collect();
        Some(Self {
            items,
            view_all: ViewAllLink {
                href: search_href(raw_query),
                label: format!("View all results for \"{raw_query}\""),
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

fn query_len(query: &str) -> usize {
    query.chars().count()
}

#[derive(Debug, Default)]
pub struct SuggestionController {
    settings: SuggestionSettings,
    /// Bumped on every keystroke.
    generation: u64,
    /// Last sequence number handed out.
    issued: u64,
    /// Request whose response is still wanted.
    current: Option<u64>,
    /// Bumped whenever the dropdown becomes visible.
    epoch: u64,
    list: Option<SuggestionList>,
    visible: bool,
    stale_discarded: u64,
}

impl SuggestionController {
    pub fn new(settings: SuggestionSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Visible dropdown contents, if any.
    pub fn dropdown(&self) -> Option<&SuggestionList> {
        if self.visible {
            self.list.as_ref()
        } else {
            None
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dropdown().is_some()
    }

    /// Responses dropped because a newer request was current.
    pub fn stale_discarded(&self) -> u64 {
        self.stale_discarded
    }

    fn is_searchable(&self, trimmed: &str) -> bool {
        query_len(trimmed) >= self.settings.min_chars
    }

    fn show(&mut self) {
        self.visible = true;
        self.epoch += 1;
    }

    fn clear(&mut self) {
        self.visible = false;
        self.list = None;
    }

    /// A keystroke. Any previously scheduled query is superseded.
    pub fn on_input(&mut self, raw: &str) -> InputAction {
        self.generation += 1;
        let trimmed = raw.trim();

        if !self.is_searchable(trimmed) {
            // Retire the in-flight request so a late answer can't reopen the dropdown.
            self.current = None;
            self.clear();
            return InputAction::Hide;
        }

        InputAction::Schedule(DebounceTicket {
            generation: self.generation,
            query: trimmed.to_string(),
            raw: raw.to_string(),
            delay: self.settings.debounce,
        })
    }

    /// The debounce timer for `ticket` fired. Returns the request to issue,
    /// or `None` if a later keystroke superseded it.
    pub fn on_debounce_elapsed(&mut self, ticket: &DebounceTicket) -> Option<RequestTag> {
        if ticket.generation != self.generation {
            trace!(query = ticket.query.as_str(), "Debounce superseded");
            return None;
        }
        self.issued += 1;
        self.current = Some(self.issued);
        debug!(seq = self.issued, query = ticket.query.as_str(), "Dispatching suggestion query");
        Some(RequestTag {
            seq: self.issued,
            query: ticket.query.clone(),
            raw: ticket.raw.clone(),
        })
    }

    /// A request finished. Only the current request may touch the dropdown.
    pub fn on_response(
        &mut self,
        tag: &RequestTag,
        result: Result<Vec<SuggestionResult>, SearchError>,
    ) -> ResponseOutcome {
        if self.current != Some(tag.seq) {
            self.stale_discarded += 1;
            debug!(seq = tag.seq, current = ?self.current, "Discarding stale suggestions");
            return ResponseOutcome::Stale;
        }
        self.current = None;

        match result {
            Ok(results) => match SuggestionList::build(results, &tag.raw) {
                Some(list) => {
                    let count = list.items.len();
                    self.list = Some(list);
                    self.show();
                    ResponseOutcome::Rendered(count)
                }
                None => {
                    self.clear();
                    ResponseOutcome::Emptied
                }
            },
            Err(_) => {
                // Already logged by the dispatcher.
                self.clear();
                ResponseOutcome::Failed
            }
        }
    }

    /// Click outside the search control. Returns a ticket to honour after the
    /// grace delay, or `None` if nothing is showing.
    pub fn on_outside_click(&self) -> Option<HideTicket> {
        self.is_visible().then(|| HideTicket {
            epoch: self.epoch,
            delay: self.settings.grace,
        })
    }

    /// The grace delay elapsed. Ignored if the dropdown was re-shown meanwhile.
    pub fn on_grace_elapsed(&mut self, ticket: &HideTicket) {
        if ticket.epoch == self.epoch {
            self.visible = false;
        }
    }

    /// Field focused: re-show the last list if the query still qualifies.
    pub fn on_focus(&mut self, raw: &str) {
        if !self.visible && self.list.is_some() && self.is_searchable(raw.trim()) {
            self.show();
        }
    }

    /// Whether the enclosing form may submit `raw`.
    pub fn check_submit(&self, raw: &str) -> Result<(), QueryRejection> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(QueryRejection::Empty)
        } else if !self.is_searchable(trimmed) {
            Err(QueryRejection::TooShort { min: self.settings.min_chars })
        } else {
            Ok(())
        }
    }
}
