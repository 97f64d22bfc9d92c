//! Worker claim loop

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::mpsc;

use crate::outcome::AttemptOutcome;
use crate::request::RequestTemplate;
use crate::traits::Transport;

/// Claim-and-perform loop for one worker task
///
/// Runs until the shared budget is exhausted and returns the number of
/// attempts this worker performed.
pub(super) async fn run_worker(
    worker_id: usize,
    transport: Arc<dyn Transport>,
    request: Arc<RequestTemplate>,
    claimed: Arc<AtomicUsize>,
    total: usize,
    outcomes: mpsc::Sender<AttemptOutcome>,
) -> usize {
    tracing::debug!(worker_id, "worker started");

    let mut performed = 0usize;

    loop {
        if !try_claim(&claimed, total) {
            break;
        }

        // The attempt runs outside the claim; workers never serialize
        // on each other while a transport call is in flight.
        let outcome = match transport.perform(&request).await {
            Ok(response) => AttemptOutcome::Success(response),
            Err(error) => {
                tracing::warn!(worker_id, error = %error, "attempt failed");
                AttemptOutcome::Failure(error)
            }
        };
        performed += 1;

        // Channel capacity matches the budget, so this never waits for
        // the consumer. A send error means the receiver is gone and
        // there is nothing left to publish to.
        if outcomes.send(outcome).await.is_err() {
            tracing::debug!(worker_id, "outcome channel closed, worker stopping");
            break;
        }
    }

    tracing::debug!(worker_id, performed, "worker finished");

    performed
}

/// Atomically claim one unit of work
///
/// Returns `false` once the budget is exhausted. The compare-and-swap
/// keeps the counter bounded above by `total` at every instant, so a
/// concurrent progress read never observes an over-claim.
fn try_claim(claimed: &AtomicUsize, total: usize) -> bool {
    claimed
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
            (n < total).then_some(n + 1)
        })
        .is_ok()
}
