//! Response side of an entry.

use serde::{Deserialize, Serialize};

use super::{serialize_opt_number, unknown_size, Cookie, Record, UNKNOWN_SIZE};

/// Detailed info about the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status: u16,
    pub status_text: String,
    pub http_version: String,
    #[serde(default)]
    pub cookies: Vec<Cookie>,
    #[serde(default)]
    pub headers: Vec<Record>,
    pub content: Content,
    /// Target of the `Location` header; empty when there is none.
    #[serde(rename = "redirectURL", default)]
    pub redirect_url: String,
    #[serde(default = "unknown_size")]
    pub headers_size: i64,
    /// Received body size in bytes; `-1` if unknown, `0` for cache hits.
    #[serde(default = "unknown_size")]
    pub body_size: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Response {
    pub fn new(
        status: u16,
        status_text: impl Into<String>,
        http_version: impl Into<String>,
        content: Content,
    ) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            http_version: http_version.into(),
            cookies: Vec::new(),
            headers: Vec::new(),
            content,
            redirect_url: String::new(),
            headers_size: UNKNOWN_SIZE,
            body_size: UNKNOWN_SIZE,
            comment: None,
        }
    }

    pub fn with_cookies(mut self, cookies: Vec<Cookie>) -> Self {
        self.cookies = cookies;
        self
    }

    pub fn with_headers(mut self, headers: Vec<Record>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = redirect_url.into();
        self
    }

    pub fn with_headers_size(mut self, headers_size: i64) -> Self {
        self.headers_size = headers_size;
        self
    }

    pub fn with_body_size(mut self, body_size: i64) -> Self {
        self.body_size = body_size;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Response body details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Length of the returned content in bytes.
    #[serde(default)]
    pub size: i64,
    /// Bytes saved by compression.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_number"
    )]
    pub compression: Option<f64>,
    /// Value of the `Content-Type` header, charset included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Decoded text, or the body in the representation named by `encoding`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Content {
    pub fn new(size: i64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_compression(mut self, compression: f64) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
