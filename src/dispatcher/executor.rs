//! Dispatcher execution logic

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::config::RunConfig;
use crate::error::Result;
use crate::outcome::AttemptOutcome;
use crate::request::RequestTemplate;
use crate::traits::Transport;

use super::progress::ProgressReporter;
use super::worker::run_worker;

/// Dispatcher owns one run's invocation budget
///
/// Spawns `concurrency` worker tasks that claim attempts from a shared
/// counter, performs each attempt through the injected transport, and
/// collects every outcome into a channel sized to the full budget.
pub struct Dispatcher {
    pub(crate) config: RunConfig,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) request: Arc<RequestTemplate>,
    pub(crate) claimed: Arc<AtomicUsize>,
}

impl Dispatcher {
    /// Create a new dispatcher
    ///
    /// Use [`DispatcherBuilder`](super::DispatcherBuilder) for a more
    /// ergonomic, validated construction.
    pub fn new(config: RunConfig, transport: Arc<dyn Transport>, request: RequestTemplate) -> Self {
        Self {
            config,
            transport,
            request: Arc::new(request),
            claimed: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the run configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Get a read-only progress view over this dispatcher's counter
    ///
    /// Callable at any time after construction; safe to poll while a
    /// run is in flight.
    pub fn progress_reporter(&self) -> ProgressReporter {
        ProgressReporter::new(Arc::clone(&self.claimed), self.config.total)
    }

    /// Current progress percentage
    ///
    /// Shorthand for [`ProgressReporter::progress`].
    pub fn progress(&self) -> f64 {
        self.progress_reporter().progress()
    }

    /// Perform every attempt in the budget and return the outcomes
    ///
    /// Spawns the worker pool, waits for every worker to terminate,
    /// then closes the outcome channel and returns it: a finite,
    /// fully-populated sequence of exactly `total` outcomes (per run).
    /// Transport failures never abort the run; each becomes a
    /// [`AttemptOutcome::Failure`] entry.
    ///
    /// Calling `run` again on the same dispatcher observes the already
    /// exhausted budget and returns an empty, closed channel.
    ///
    /// # Errors
    ///
    /// Fails fast on an invalid configuration, before any worker is
    /// launched.
    pub async fn run(&self) -> Result<mpsc::Receiver<AttemptOutcome>> {
        self.config.validate()?;

        let start = Instant::now();
        let total = self.config.total;

        // Capacity covers the whole budget so producers never block on
        // the consumer; tokio channels need a capacity of at least 1.
        let (outcome_tx, outcome_rx) = mpsc::channel(total.max(1));

        tracing::info!(
            total,
            concurrency = self.config.concurrency,
            transport = self.transport.name(),
            "starting run"
        );

        let mut handles = Vec::with_capacity(self.config.concurrency);
        for worker_id in 0..self.config.concurrency {
            let transport = Arc::clone(&self.transport);
            let request = Arc::clone(&self.request);
            let claimed = Arc::clone(&self.claimed);
            let outcome_tx = outcome_tx.clone();

            handles.push(tokio::spawn(async move {
                run_worker(worker_id, transport, request, claimed, total, outcome_tx).await
            }));
        }
        drop(outcome_tx);

        // Completion barrier: every worker must terminate before the
        // channel is handed back closed.
        let mut performed = 0usize;
        for (worker_id, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(count) => {
                    performed += count;
                }
                Err(e) => {
                    tracing::error!(worker_id, error = %e, "worker task panicked");
                }
            }
        }

        tracing::info!(
            performed,
            elapsed_secs = start.elapsed().as_secs_f64(),
            "run complete"
        );

        Ok(outcome_rx)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("transport", &self.transport.name())
            .field("request", &self.request)
            .finish()
    }
}
