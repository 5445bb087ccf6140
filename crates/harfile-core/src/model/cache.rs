//! Browser cache state around a request.

use serde::{Deserialize, Serialize};

/// Cache info for an entry. Both halves are optional; an all-`None` value
/// still serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cache {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_request: Option<CacheEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_request: Option<CacheEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_before_request(mut self, entry: CacheEntry) -> Self {
        self.before_request = Some(entry);
        self
    }

    pub fn with_after_request(mut self, entry: CacheEntry) -> Self {
        self.after_request = Some(entry);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// State of a single cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub expires: String,
    /// Last time the entry was opened.
    pub last_access: String,
    pub e_tag: String,
    pub hit_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CacheEntry {
    pub fn new(
        expires: impl Into<String>,
        last_access: impl Into<String>,
        e_tag: impl Into<String>,
        hit_count: i64,
    ) -> Self {
        Self {
            expires: expires.into(),
            last_access: last_access.into(),
            e_tag: e_tag.into(),
            hit_count,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
