//! One recorded HTTP transaction.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize, Serializer};

use super::{serialize_number, Cache, Request, Response, Timings};

/// A single `log.entries[]` item.
///
/// Key order on the wire is the field order below; `timings` precedes the
/// optional `cache`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Start of the request, written with an explicit `±HH:MM` offset.
    #[serde(serialize_with = "serialize_started")]
    pub started_date_time: DateTime<FixedOffset>,
    /// Total elapsed time in milliseconds.
    #[serde(serialize_with = "serialize_number")]
    pub time: f64,
    pub request: Request,
    pub response: Response,
    pub timings: Timings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<Cache>,
    #[serde(
        rename = "serverIPAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub server_ip_address: Option<String>,
    /// Client or server port number / connection id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Entry {
    pub fn new(
        started_date_time: impl Into<DateTime<FixedOffset>>,
        time: f64,
        request: Request,
        response: Response,
        timings: Timings,
    ) -> Self {
        Self {
            started_date_time: started_date_time.into(),
            time,
            request,
            response,
            timings,
            cache: None,
            server_ip_address: None,
            connection: None,
            comment: None,
        }
    }

    pub fn with_cache(mut self, cache: Cache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_server_ip_address(mut self, address: impl Into<String>) -> Self {
        self.server_ip_address = Some(address.into());
        self
    }

    pub fn with_connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

fn serialize_started<S: Serializer>(
    value: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, false))
}
