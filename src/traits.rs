//! Transport capability trait
//!
//! The trait is defined here so alternative transports (and test mocks)
//! can be injected into the dispatcher; the default reqwest-backed
//! implementation lives in [`crate::transport`].

use async_trait::async_trait;

use crate::request::RequestTemplate;
use crate::response::TransportResponse;

/// Capability to perform one attempt of the request template
#[async_trait]
pub trait Transport: Send + Sync {
    /// Transport identifier used in logs
    fn name(&self) -> &str;

    /// Perform a single attempt
    ///
    /// Non-2xx statuses are responses, not errors. An `Err` means the
    /// transport failed before a response could be captured.
    async fn perform(
        &self,
        request: &RequestTemplate,
    ) -> Result<TransportResponse, TransportError>;
}

/// Transport-level errors
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP/network error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The template could not be turned into a wire request
    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    /// Failure raised by a non-HTTP transport implementation
    #[error("transport error: {0}")]
    Other(String),
}
