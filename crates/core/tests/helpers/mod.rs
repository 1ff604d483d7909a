//! Test harness for the suggestion flow.
//!
//! Wires a `SuggestionController` to a scripted `MockBackend` exactly the way the
//! web app's search box does, on a tokio `LocalSet` with paused time so debounce
//! and grace timers run deterministically on a single thread.

pub mod fixtures;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gztechiz_core::client::{dispatch, SearchBackend, SearchError};
use gztechiz_core::suggest::{InputAction, SuggestionController, SuggestionSettings};
use gztechiz_core::types::SuggestionResult;

type Scripted = (Duration, Result<Vec<SuggestionResult>, SearchError>);

/// Backend answering from a script, recording every query it receives.
#[derive(Default)]
pub struct MockBackend {
    script: HashMap<String, Scripted>,
    calls: RefCell<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, query: &str, delay_ms: u64, results: Vec<SuggestionResult>) -> Self {
        self.script.insert(query.to_string(), (Duration::from_millis(delay_ms), Ok(results)));
        self
    }

    pub fn fail(mut self, query: &str, delay_ms: u64, error: SearchError) -> Self {
        self.script.insert(query.to_string(), (Duration::from_millis(delay_ms), Err(error)));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl SearchBackend for MockBackend {
    async fn search(&self, query: &str) -> Result<Vec<SuggestionResult>, SearchError> {
        self.calls.borrow_mut().push(query.to_string());
        let (delay, result) =
            self.script.get(query).cloned().unwrap_or((Duration::ZERO, Ok(Vec::new())));
        tokio::time::sleep(delay).await;
        result
    }
}

pub struct TestHarness {
    pub controller: Rc<RefCell<SuggestionController>>,
    pub backend: Rc<MockBackend>,
}

impl TestHarness {
    pub fn new(backend: MockBackend) -> Self {
        Self {
            controller: Rc::new(RefCell::new(SuggestionController::new(
                SuggestionSettings::default(),
            ))),
            backend: Rc::new(backend),
        }
    }

    /// One `input` event with the field's full value. Must run inside a `LocalSet`.
    pub fn type_text(&self, raw: &str) {
        let action = self.controller.borrow_mut().on_input(raw);
        let InputAction::Schedule(ticket) = action else {
            return;
        };
        let controller = Rc::clone(&self.controller);
        let backend = Rc::clone(&self.backend);
        tokio::task::spawn_local(async move {
            tokio::time::sleep(ticket.delay()).await;
            let Some(tag) = controller.borrow_mut().on_debounce_elapsed(&ticket) else {
                return;
            };
            let (tag, result) = dispatch(&*backend, tag).await;
            controller.borrow_mut().on_response(&tag, result);
        });
    }

    /// Click somewhere outside the search form.
    pub fn click_outside(&self) {
        let Some(ticket) = self.controller.borrow().on_outside_click() else {
            return;
        };
        let controller = Rc::clone(&self.controller);
        tokio::task::spawn_local(async move {
            tokio::time::sleep(ticket.delay()).await;
            controller.borrow_mut().on_grace_elapsed(&ticket);
        });
    }

    pub fn focus(&self, raw: &str) {
        self.controller.borrow_mut().on_focus(raw);
    }

    /// Titles in the visible dropdown, `None` when hidden.
    pub fn titles(&self) -> Option<Vec<String>> {
        self.controller
            .borrow()
            .dropdown()
            .map(|list| list.items.iter().map(|i| i.title.clone()).collect())
    }

    pub fn hrefs(&self) -> Option<Vec<String>> {
        self.controller.borrow().dropdown().map(|list| {
            list.items
                .iter()
                .map(|i| i.href.clone())
                .chain(std::iter::once(list.view_all.href.clone()))
                .collect()
        })
    }

    pub fn stale_discarded(&self) -> u64 {
        self.controller.borrow().stale_discarded()
    }
}

pub async fn wait_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
