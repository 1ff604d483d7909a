//! End-to-end timing tests for the live-search suggestion flow.
//!
//! Each test types into a harness-driven controller on paused tokio time and
//! checks which requests reached the backend and what the dropdown shows.

mod helpers;

use gztechiz_core::client::SearchError;
use helpers::fixtures::{hello_world, result, rust_posts};
use helpers::{wait_ms, MockBackend, TestHarness};
use tokio::task::LocalSet;

// ---------------------------------------------------------------------------
// Debounce
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn test_short_queries_never_reach_backend() {
    LocalSet::new()
        .run_until(async {
            let h = TestHarness::new(MockBackend::new());
            for raw in ["h", " a ", "", "   "] {
                h.type_text(raw);
                wait_ms(50).await;
            }
            wait_ms(1000).await;
            assert!(h.backend.calls().is_empty());
            assert_eq!(h.titles(), None);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_keystrokes_within_quiet_period_coalesce() {
    LocalSet::new()
        .run_until(async {
            let h = TestHarness::new(MockBackend::new().respond("hello", 20, hello_world()));
            for raw in ["h", "he", "hel", "hell", "hello"] {
                h.type_text(raw);
                wait_ms(120).await;
            }
            wait_ms(1000).await;
            assert_eq!(h.backend.calls(), ["hello"]);
            assert_eq!(h.titles(), Some(vec!["Hello World".to_string()]));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_one_request_per_quiet_period() {
    LocalSet::new()
        .run_until(async {
            let h = TestHarness::new(MockBackend::new());
            h.type_text("rust");
            wait_ms(350).await;
            h.type_text("rusty");
            wait_ms(100).await;
            h.type_text("rusty n");
            wait_ms(350).await;
            assert_eq!(h.backend.calls(), ["rust", "rusty n"]);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_request_fires_only_after_full_quiet_period() {
    LocalSet::new()
        .run_until(async {
            let h = TestHarness::new(MockBackend::new());
            h.type_text("rust");
            wait_ms(299).await;
            assert!(h.backend.calls().is_empty());
            wait_ms(2).await;
            assert_eq!(h.backend.calls(), ["rust"]);
        })
        .await;
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn test_hello_renders_post_link_and_view_all() {
    LocalSet::new()
        .run_until(async {
            let h = TestHarness::new(MockBackend::new().respond("hello", 10, hello_world()));
            h.type_text("hello");
            wait_ms(500).await;
            assert_eq!(
                h.hrefs(),
                Some(vec!["/post/hello-world".to_string(), "/search?q=hello".to_string()])
            );
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_empty_results_keep_dropdown_hidden() {
    LocalSet::new()
        .run_until(async {
            let h = TestHarness::new(
                MockBackend::new().respond("rust", 10, rust_posts()).respond("rustacean", 10, vec![]),
            );
            h.type_text("rust");
            wait_ms(500).await;
            assert!(h.titles().is_some());

            h.type_text("rustacean");
            wait_ms(500).await;
            assert_eq!(h.titles(), None);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_network_error_is_recovered() {
    LocalSet::new()
        .run_until(async {
            let h = TestHarness::new(MockBackend::new().fail(
                "hello",
                10,
                SearchError::Network("connection refused".into()),
            ));
            h.type_text("hello");
            wait_ms(500).await;
            assert_eq!(h.backend.calls(), ["hello"]);
            assert_eq!(h.titles(), None);

            // The box keeps working after a failure.
            h.type_text("hello!");
            wait_ms(500).await;
            assert_eq!(h.backend.calls(), ["hello", "hello!"]);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_malformed_response_is_recovered() {
    LocalSet::new()
        .run_until(async {
            let h = TestHarness::new(MockBackend::new().fail(
                "hello",
                10,
                SearchError::Decode("expected value at line 1 column 1".into()),
            ));
            h.type_text("hello");
            wait_ms(500).await;
            assert_eq!(h.titles(), None);
        })
        .await;
}

// ---------------------------------------------------------------------------
// Out-of-order responses
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn test_slow_older_response_never_overwrites_newer() {
    LocalSet::new()
        .run_until(async {
            let h = TestHarness::new(
                MockBackend::new()
                    .respond("ru", 800, vec![result("ruby", "Ruby Tips")])
                    .respond("rust", 50, rust_posts()),
            );
            h.type_text("ru");
            wait_ms(350).await; // "ru" dispatched, answer due at ~1100ms
            h.type_text("rust");
            wait_ms(400).await; // "rust" dispatched and answered
            assert_eq!(h.titles().unwrap()[0], "Understanding Ownership");

            wait_ms(1000).await; // "ru" answer arrives late
            assert_eq!(h.titles().unwrap()[0], "Understanding Ownership");
            assert_eq!(h.stale_discarded(), 1);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_older_response_arriving_first_is_discarded() {
    LocalSet::new()
        .run_until(async {
            let h = TestHarness::new(
                MockBackend::new()
                    .respond("ru", 500, vec![result("ruby", "Ruby Tips")])
                    .respond("rust", 700, rust_posts()),
            );
            h.type_text("ru");
            wait_ms(350).await;
            h.type_text("rust");
            wait_ms(500).await; // "ru" answered at ~800ms while "rust" is current
            assert_eq!(h.titles(), None);

            wait_ms(1000).await;
            assert_eq!(h.titles().unwrap().len(), 2);
            assert_eq!(h.stale_discarded(), 1);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_clearing_input_drops_inflight_answer() {
    LocalSet::new()
        .run_until(async {
            let h = TestHarness::new(MockBackend::new().respond("rust", 300, rust_posts()));
            h.type_text("rust");
            wait_ms(350).await;
            h.type_text("r");
            wait_ms(1000).await;
            assert_eq!(h.titles(), None);
        })
        .await;
}

// ---------------------------------------------------------------------------
// Outside click and focus
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn test_outside_click_hides_after_grace_delay() {
    LocalSet::new()
        .run_until(async {
            let h = TestHarness::new(MockBackend::new().respond("hello", 10, hello_world()));
            h.type_text("hello");
            wait_ms(500).await;

            h.click_outside();
            wait_ms(150).await;
            // Links are still mounted, so a click on a suggestion navigates.
            assert!(h.titles().is_some());
            wait_ms(100).await;
            assert_eq!(h.titles(), None);

            h.focus("hello");
            assert!(h.titles().is_some());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_new_results_survive_earlier_outside_click() {
    LocalSet::new()
        .run_until(async {
            let h = TestHarness::new(
                MockBackend::new().respond("hello", 10, hello_world()).respond("rust", 10, rust_posts()),
            );
            h.type_text("hello");
            wait_ms(500).await;
            h.type_text("rust"); // dispatched at ~800ms, rendered at ~810ms
            wait_ms(250).await;
            h.click_outside(); // armed against the "hello" render, due at ~950ms
            wait_ms(500).await;
            assert_eq!(h.titles().unwrap().len(), 2);
        })
        .await;
}
