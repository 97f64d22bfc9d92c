//! Builder pattern for Dispatcher construction

use std::sync::Arc;

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::request::RequestTemplate;
use crate::traits::Transport;

use super::executor::Dispatcher;

/// Builder for creating a `Dispatcher`
///
/// Validates the configuration and rejects missing components before
/// any worker can be launched.
///
/// # Example
/// ```ignore
/// let dispatcher = DispatcherBuilder::new()
///     .transport(Arc::new(HttpTransport::new()))
///     .request(RequestTemplate::get("https://example.com/health"))
///     .total(100)
///     .concurrency(8)
///     .build()?;
/// ```
pub struct DispatcherBuilder {
    config: RunConfig,
    transport: Option<Arc<dyn Transport>>,
    request: Option<RequestTemplate>,
}

impl DispatcherBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
            transport: None,
            request: None,
        }
    }

    /// Set the full run configuration
    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the total attempt count
    pub fn total(mut self, total: usize) -> Self {
        self.config.total = total;
        self
    }

    /// Set the concurrency level
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    /// Set the transport capability
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the request template
    pub fn request(mut self, request: RequestTemplate) -> Self {
        self.request = Some(request);
        self
    }

    /// Build the dispatcher
    ///
    /// # Errors
    ///
    /// Returns an error if transport or request are missing, or if the
    /// configuration is invalid.
    pub fn build(self) -> Result<Dispatcher> {
        let transport = self
            .transport
            .ok_or(Error::MissingComponent("transport"))?;
        let request = self.request.ok_or(Error::MissingComponent("request"))?;

        self.config.validate()?;

        Ok(Dispatcher::new(self.config, transport, request))
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
