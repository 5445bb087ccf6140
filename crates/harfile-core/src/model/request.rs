//! Request side of an entry.

use serde::{Deserialize, Serialize};

use super::{unknown_size, Cookie, Record, UNKNOWN_SIZE};

/// Detailed info about the performed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub method: String,
    /// Absolute URL without the fragment.
    pub url: String,
    pub http_version: String,
    #[serde(default)]
    pub cookies: Vec<Cookie>,
    #[serde(default)]
    pub headers: Vec<Record>,
    #[serde(default)]
    pub query_string: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_data: Option<PostData>,
    /// Bytes from the start of the request up to and including the blank line
    /// before the body; `-1` if unknown.
    #[serde(default = "unknown_size")]
    pub headers_size: i64,
    /// Request body size in bytes; `-1` if unknown.
    #[serde(default = "unknown_size")]
    pub body_size: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Request {
    pub fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        http_version: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            http_version: http_version.into(),
            cookies: Vec::new(),
            headers: Vec::new(),
            query_string: Vec::new(),
            post_data: None,
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

    pub fn with_query_string(mut self, query_string: Vec<Record>) -> Self {
        self.query_string = query_string;
        self
    }

    pub fn with_post_data(mut self, post_data: PostData) -> Self {
        self.post_data = Some(post_data);
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

/// Posted body. Either `params` (URL-encoded or multipart) or `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<PostParameter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl PostData {
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            params: None,
            text: None,
            comment: None,
        }
    }

    pub fn with_params(mut self, params: Vec<PostParameter>) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// One posted parameter, possibly an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostParameter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl PostParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            file_name: None,
            content_type: None,
            comment: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
