//! Application metrics collection and reporting.

use metrics::{counter, histogram};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Upload outcome classes reported as the `outcome` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    Stored,
    Rejected,
    Failed,
}

impl UploadOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadOutcome::Stored => "stored",
            UploadOutcome::Rejected => "rejected",
            UploadOutcome::Failed => "failed",
        }
    }
}

/// Metrics collector for the weather image API.
///
/// Keeps local counters alongside the Prometheus recorder so totals can
/// be read back without scraping.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    pub uploads_stored: AtomicU64,
    pub uploads_rejected: AtomicU64,
    pub uploads_failed: AtomicU64,
    pub entries_listed: AtomicU64,
    pub query_failures: AtomicU64,
}

/// Point-in-time copy of the collector's counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub uploads_stored: u64,
    pub uploads_rejected: u64,
    pub uploads_failed: u64,
    pub entries_listed: u64,
    pub query_failures: u64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one upload request.
    pub fn record_upload(&self, outcome: UploadOutcome, image_bytes: usize) {
        let local = match outcome {
            UploadOutcome::Stored => &self.uploads_stored,
            UploadOutcome::Rejected => &self.uploads_rejected,
            UploadOutcome::Failed => &self.uploads_failed,
        };
        local.fetch_add(1, Ordering::Relaxed);

        counter!("uploads_total", "outcome" => outcome.as_str()).increment(1);
        histogram!("upload_bytes").record(image_bytes as f64);
    }

    /// Record a successful listing of `count` entries.
    pub fn record_entries_listed(&self, count: usize) {
        self.entries_listed.fetch_add(count as u64, Ordering::Relaxed);
        counter!("entries_listed_total").increment(count as u64);
    }

    /// Record a failed listing.
    pub fn record_query_failure(&self) {
        self.query_failures.fetch_add(1, Ordering::Relaxed);
        counter!("query_failures_total").increment(1);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            uploads_stored: self.uploads_stored.load(Ordering::Relaxed),
            uploads_rejected: self.uploads_rejected.load(Ordering::Relaxed),
            uploads_failed: self.uploads_failed.load(Ordering::Relaxed),
            entries_listed: self.entries_listed.load(Ordering::Relaxed),
            query_failures: self.query_failures.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_outcome() {
        let metrics = MetricsCollector::new();
        metrics.record_upload(UploadOutcome::Stored, 100);
        metrics.record_upload(UploadOutcome::Stored, 200);
        metrics.record_upload(UploadOutcome::Rejected, 10);
        metrics.record_entries_listed(3);
        metrics.record_query_failure();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.uploads_stored, 2);
        assert_eq!(snapshot.uploads_rejected, 1);
        assert_eq!(snapshot.uploads_failed, 0);
        assert_eq!(snapshot.entries_listed, 3);
        assert_eq!(snapshot.query_failures, 1);
    }
}
