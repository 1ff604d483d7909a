//! Navigation targets rendered by the front-end.
//!
//! Components are escaped like `encodeURIComponent`: everything except ASCII
//! alphanumerics and `- _ . ! ~ * ' ( )` is percent-encoded.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// `/post/{slug}`
pub fn post_href(slug: &str) -> String {
    format!("/post/{}", encode_component(slug))
}

/// `/search?q={query}`. The query is used as typed, not re-trimmed.
pub fn search_href(raw_query: &str) -> String {
    format!("/search?q={}", encode_component(raw_query))
}

/// `/category/{slug}`
pub fn category_href(slug: &str) -> String {
    format!("/category/{}", encode_component(slug))
}
