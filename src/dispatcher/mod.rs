//! Dispatcher for bounded-concurrency request repetition
//!
//! The Dispatcher is the core execution unit of volley: it owns one
//! run's invocation budget and drains it with a fixed pool of worker
//! tasks. Each worker loops **claim -> perform -> publish -> repeat**:
//!
//! 1. Atomically claims one unit of work from the shared counter
//! 2. Performs one attempt via the injected [`Transport`](crate::traits::Transport)
//! 3. Publishes the outcome into a channel sized to the full budget
//! 4. Repeats until the budget is exhausted
//!
//! The run entry point spawns exactly `concurrency` workers, joins all
//! of them, and only then closes and returns the outcome channel — so a
//! returned channel always holds exactly `total` outcomes.
//!
//! # Example
//!
//! ```ignore
//! use volley::{DispatcherBuilder, HttpTransport, RequestTemplate};
//!
//! let dispatcher = DispatcherBuilder::new()
//!     .transport(Arc::new(HttpTransport::new()))
//!     .request(RequestTemplate::get("https://example.com/health"))
//!     .total(100)
//!     .concurrency(8)
//!     .build()?;
//!
//! let progress = dispatcher.progress_reporter();
//! let mut outcomes = dispatcher.run().await?;
//! while let Some(outcome) = outcomes.recv().await {
//!     println!("ok={} ({:.0}%)", outcome.is_success(), progress.progress());
//! }
//! ```

mod builder;
mod executor;
mod progress;
mod worker;

pub use builder::DispatcherBuilder;
pub use executor::Dispatcher;
pub use progress::ProgressReporter;
