//! Metrics collection for cascade deletion.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Metrics collector for cascade deletion.
///
/// Cheap to clone; clones share counters.
#[derive(Debug, Clone)]
pub struct CascadeMetrics {
    inner: Arc<CascadeMetricsInner>,
}

#[derive(Debug)]
struct CascadeMetricsInner {
    events_handled: AtomicU64,
    records_deleted: AtomicU64,

    // Per-item failure counts
    artifact_failures: AtomicU64,
    record_failures: AtomicU64,
    lookup_failures: AtomicU64,

    last_completion: parking_lot::Mutex<Option<Instant>>,
}

impl Default for CascadeMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl CascadeMetrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(CascadeMetricsInner {
                events_handled: AtomicU64::new(0),
                records_deleted: AtomicU64::new(0),
                artifact_failures: AtomicU64::new(0),
                record_failures: AtomicU64::new(0),
                lookup_failures: AtomicU64::new(0),
                last_completion: parking_lot::Mutex::new(None),
            }),
        }
    }

    /// Records a fully handled event.
    pub fn record_event_handled(&self) {
        self.inner.events_handled.fetch_add(1, Ordering::Relaxed);
        *self.inner.last_completion.lock() = Some(Instant::now());
    }

    /// Records an artifact and its record both removed.
    pub fn record_deleted(&self) {
        self.inner.records_deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an artifact that could not be deleted.
    pub fn record_artifact_failure(&self) {
        self.inner.artifact_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a record that could not be deleted after its artifact was.
    pub fn record_record_failure(&self) {
        self.inner.record_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a failed lookup of a product's records.
    pub fn record_lookup_failure(&self) {
        self.inner.lookup_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets handled event count.
    pub fn events_handled(&self) -> u64 {
        self.inner.events_handled.load(Ordering::Relaxed)
    }

    /// Gets deleted record count.
    pub fn records_deleted(&self) -> u64 {
        self.inner.records_deleted.load(Ordering::Relaxed)
    }

    /// Gets artifact failure count.
    pub fn artifact_failures(&self) -> u64 {
        self.inner.artifact_failures.load(Ordering::Relaxed)
    }

    /// Gets record failure count.
    pub fn record_failures(&self) -> u64 {
        self.inner.record_failures.load(Ordering::Relaxed)
    }

    /// Gets lookup failure count.
    pub fn lookup_failures(&self) -> u64 {
        self.inner.lookup_failures.load(Ordering::Relaxed)
    }

    /// Gets time since the last event completed.
    pub fn time_since_completion(&self) -> Option<Duration> {
        self.inner
            .last_completion
            .lock()
            .map(|instant| instant.elapsed())
    }

    /// Creates a serializable snapshot of current metrics.
    pub fn snapshot(&self) -> CascadeMetricsSnapshot {
        CascadeMetricsSnapshot {
            events_handled: self.events_handled(),
            records_deleted: self.records_deleted(),
            artifact_failures: self.artifact_failures(),
            record_failures: self.record_failures(),
            lookup_failures: self.lookup_failures(),
            seconds_since_completion: self.time_since_completion().map(|d| d.as_secs()),
        }
    }
}

/// Serializable snapshot of cascade metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeMetricsSnapshot {
    /// Events whose records were all attempted
    pub events_handled: u64,
    /// Records removed together with their artifact
    pub records_deleted: u64,
    /// Artifact deletions that failed (record left in place)
    pub artifact_failures: u64,
    /// Record deletions that failed after the artifact was removed
    pub record_failures: u64,
    /// Product lookups that failed
    pub lookup_failures: u64,
    /// Seconds since the last event completed
    pub seconds_since_completion: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_counters() {
        let metrics = CascadeMetrics::new();
        let clone = metrics.clone();

        clone.record_deleted();
        clone.record_artifact_failure();
        assert_eq!(metrics.records_deleted(), 1);
        assert_eq!(metrics.artifact_failures(), 1);
        assert_eq!(metrics.time_since_completion(), None);

        metrics.record_event_handled();
        let snapshot = clone.snapshot();
        assert_eq!(snapshot.events_handled, 1);
        assert_eq!(snapshot.seconds_since_completion, Some(0));
    }
}
