//! Per-phase timings of a request/response round trip, in milliseconds.

use serde::{Deserialize, Serialize};

use super::{not_measured, serialize_number, NOT_MEASURED};

/// Timings of one entry. The optional phases are always written and use
/// [`NOT_MEASURED`] (`-1`) when they do not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timings {
    #[serde(serialize_with = "serialize_number")]
    pub send: f64,
    #[serde(serialize_with = "serialize_number")]
    pub wait: f64,
    #[serde(serialize_with = "serialize_number")]
    pub receive: f64,
    /// Time spent queued waiting for a network connection.
    #[serde(default = "not_measured", serialize_with = "serialize_number")]
    pub blocked: f64,
    #[serde(default = "not_measured", serialize_with = "serialize_number")]
    pub dns: f64,
    #[serde(default = "not_measured", serialize_with = "serialize_number")]
    pub connect: f64,
    /// TLS negotiation; when measured it is also included in `connect`.
    #[serde(default = "not_measured", serialize_with = "serialize_number")]
    pub ssl: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Timings {
    pub fn new(send: f64, wait: f64, receive: f64) -> Self {
        Self {
            send,
            wait,
            receive,
            blocked: NOT_MEASURED,
            dns: NOT_MEASURED,
            connect: NOT_MEASURED,
            ssl: NOT_MEASURED,
            comment: None,
        }
    }

    pub fn with_blocked(mut self, blocked: f64) -> Self {
        self.blocked = blocked;
        self
    }

    pub fn with_dns(mut self, dns: f64) -> Self {
        self.dns = dns;
        self
    }

    pub fn with_connect(mut self, connect: f64) -> Self {
        self.connect = connect;
        self
    }

    pub fn with_ssl(mut self, ssl: f64) -> Self {
        self.ssl = ssl;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

}

