//! Canned search results used across integration tests.

use gztechiz_core::types::SuggestionResult;

pub fn result(slug: &str, title: &str) -> SuggestionResult {
    SuggestionResult {
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: "...".to_string(),
    }
}

pub fn hello_world() -> Vec<SuggestionResult> {
    vec![result("hello-world", "Hello World")]
}

pub fn rust_posts() -> Vec<SuggestionResult> {
    vec![
        result("rust-ownership", "Understanding Ownership"),
        result("rust-async", "Async Rust in Practice"),
    ]
}
