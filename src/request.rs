//! Request template types

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// An immutable HTTP request definition reused by every attempt
///
/// The dispatcher never interprets these fields; it hands the template
/// to the [`Transport`](crate::traits::Transport) once per attempt.
/// Build the template once, then run it as many times as the budget
/// allows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestTemplate {
    /// HTTP method (e.g. "GET", "POST")
    pub method: String,

    /// Absolute request URL
    pub url: String,

    /// Header name/value pairs, applied in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<(String, String)>,

    /// Optional request body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Bytes>,
}

impl RequestTemplate {
    /// Create a template with the given method and URL
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Create a GET template
    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    /// Create a POST template
    pub fn post(url: impl Into<String>) -> Self {
        Self::new("POST", url)
    }

    /// Append a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request body
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_construction() {
        let template = RequestTemplate::post("https://example.com/ingest")
            .with_header("content-type", "application/json")
            .with_body(r#"{"ping":true}"#);

        assert_eq!(template.method, "POST");
        assert_eq!(template.url, "https://example.com/ingest");
        assert_eq!(template.headers.len(), 1);
        assert_eq!(
            template.body.as_deref(),
            Some(r#"{"ping":true}"#.as_bytes())
        );
    }

    #[test]
    fn test_get_template_has_no_body() {
        let template = RequestTemplate::get("https://example.com/health");

        assert_eq!(template.method, "GET");
        assert!(template.headers.is_empty());
        assert!(template.body.is_none());
    }
}
