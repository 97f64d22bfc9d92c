//! Progress reporting over the shared claim counter

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Read-only view over a run's claim counter
///
/// Cheap to clone and safe to poll from any task while the run is in
/// flight. The counter increments when a worker *claims* a unit, so the
/// reported fraction covers claimed and in-flight work, not only
/// finished attempts; once the run returns the two coincide.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    claimed: Arc<AtomicUsize>,
    total: usize,
}

impl ProgressReporter {
    pub(super) fn new(claimed: Arc<AtomicUsize>, total: usize) -> Self {
        Self { claimed, total }
    }

    /// Units claimed so far, between 0 and `total` inclusive
    pub fn claimed(&self) -> usize {
        self.claimed.load(Ordering::SeqCst)
    }

    /// Total units for this run
    pub fn total(&self) -> usize {
        self.total
    }

    /// Percentage of units claimed, from 0.0 to 100.0
    ///
    /// Computed fresh on every call. A zero-total run reports 0.0
    /// rather than dividing by zero.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        self.claimed() as f64 / self.total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reporter(claimed: usize, total: usize) -> ProgressReporter {
        ProgressReporter::new(Arc::new(AtomicUsize::new(claimed)), total)
    }

    #[test]
    fn test_progress_empty_run() {
        assert_eq!(reporter(0, 0).progress(), 0.0);
    }

    #[test]
    fn test_progress_partial() {
        assert!((reporter(3, 10).progress() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_complete() {
        assert!((reporter(10, 10).progress() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_tracks_counter() {
        let counter = Arc::new(AtomicUsize::new(0));
        let reporter = ProgressReporter::new(Arc::clone(&counter), 4);

        assert_eq!(reporter.claimed(), 0);
        counter.store(2, Ordering::SeqCst);
        assert!((reporter.progress() - 50.0).abs() < f64::EPSILON);
    }
}
