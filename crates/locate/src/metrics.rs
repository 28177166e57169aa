// Metrics hooks for the `locate` crate.
//
// Callers install a global `LocateMetrics` implementation via
// [`set_locate_metrics`]; every locate call then reports its latency, how
// many candidates were seeded and whether a span was found.
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use once_cell::sync::OnceCell;

/// Metrics observer for locate calls.
pub trait LocateMetrics: Send + Sync {
    /// Record the outcome of one locate call.
    ///
    /// `candidates` is the number of anchor occurrences that seeded a path,
    /// `found` is whether a span was returned.
    fn record_locate(&self, latency: Duration, candidates: usize, found: bool);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn LocateMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn LocateMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn LocateMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global locate metrics recorder.
pub fn set_locate_metrics(recorder: Option<Arc<dyn LocateMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

pub(crate) struct MetricsSpan {
    recorder: Arc<dyn LocateMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    pub(crate) fn finish(self, candidates: usize, found: bool) {
        self.recorder
            .record_locate(self.start.elapsed(), candidates, found);
    }
}
