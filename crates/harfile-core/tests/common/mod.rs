//! Shared helpers for the integration tests.

#![allow(dead_code)]

pub mod failing_sink;
pub mod fixtures;
pub mod schema;

/// Parse a written document, panicking with the raw text on failure.
pub fn parse(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap_or_else(|e| {
        panic!(
            "output is not valid JSON ({e}):\n{}",
            String::from_utf8_lossy(bytes)
        )
    })
}
