mod attendance;
mod calendar;
pub mod client;
mod notifications;
mod projects;
mod session;
mod stats;
mod tasks;
mod team;
pub mod types;

pub use client::*;
pub use types::*;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escapes an id or value for use as a single path segment or query value.
pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
