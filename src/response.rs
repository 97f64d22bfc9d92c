//! Transport response types

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Response captured from one attempt
///
/// Status, headers, and body are carried through exactly as the
/// transport produced them; interpreting any of it is the consumer's
/// concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Response header name/value pairs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<(String, String)>,

    /// Full response body
    pub body: Bytes,
}

impl TransportResponse {
    /// Check whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up the first header with the given name, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
