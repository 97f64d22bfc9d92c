//! volley: bounded-concurrency repeater for a single HTTP request template
//!
//! Give volley one request definition, a total attempt count N, and a
//! worker concurrency C, and it performs exactly N attempts with at
//! most C in flight, delivering every outcome — response or per-attempt
//! error — into a channel sized for the whole run.
//!
//! - The [`Dispatcher`] owns the shared invocation budget and the
//!   worker tasks that drain it
//! - The [`ProgressReporter`] is a read-only view over the same counter
//! - The [`Transport`] trait is the injected "perform one request"
//!   capability; [`HttpTransport`] is the reqwest-backed default
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use volley::{DispatcherBuilder, HttpTransport, RequestTemplate};
//!
//! let dispatcher = DispatcherBuilder::new()
//!     .transport(Arc::new(HttpTransport::new()))
//!     .request(RequestTemplate::get("https://example.com/health"))
//!     .total(100)
//!     .concurrency(8)
//!     .build()?;
//!
//! let mut outcomes = dispatcher.run().await?;
//! while let Some(outcome) = outcomes.recv().await {
//!     println!("ok={}", outcome.is_success());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod outcome;
pub mod request;
pub mod response;
pub mod traits;
pub mod transport;

pub use config::*;
pub use dispatcher::{Dispatcher, DispatcherBuilder, ProgressReporter};
pub use error::*;
pub use outcome::*;
pub use request::*;
pub use response::*;
pub use traits::*;
pub use transport::*;
