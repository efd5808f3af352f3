//! Metrics registry for the platform advisor
//!
//! - Counters only (no gauges, no histograms)
//! - Monotonic increase
//! - Reset only on process start
//! - Thread-safe but lock-minimal

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::recommender::PlatformLabel;

/// Metrics registry containing all operational counters
///
/// Owned by the transport layer. The recommender never reads it.
///
/// # Thread Safety
///
/// All counters use atomic operations with Relaxed ordering.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Successful recommendations
    recommendations_issued: AtomicU64,
    /// Requests rejected before reaching the recommender
    requests_rejected: AtomicU64,
    /// Recommendations per label, indexed like `PlatformLabel::ALL`
    per_platform: [AtomicU64; PlatformLabel::COUNT],
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one recommendation for `label`
    pub fn record_recommendation(&self, label: PlatformLabel) {
        self.recommendations_issued.fetch_add(1, Ordering::Relaxed);
        self.per_platform[Self::slot(label)].fetch_add(1, Ordering::Relaxed);
    }

    /// Increment rejected requests
    pub fn increment_requests_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn recommendations_issued(&self) -> u64 {
        self.recommendations_issued.load(Ordering::Relaxed)
    }

    pub fn requests_rejected(&self) -> u64 {
        self.requests_rejected.load(Ordering::Relaxed)
    }

    /// Recommendations issued for one label
    pub fn recommendations_for(&self, label: PlatformLabel) -> u64 {
        self.per_platform[Self::slot(label)].load(Ordering::Relaxed)
    }

    /// Take a point-in-time snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            recommendations_issued: self.recommendations_issued(),
            requests_rejected: self.requests_rejected(),
            per_platform: PlatformLabel::ALL
                .iter()
                .map(|label| PlatformCount {
                    platform: *label,
                    count: self.recommendations_for(*label),
                })
                .collect(),
        }
    }

    // Discriminants follow `PlatformLabel::ALL` order
    fn slot(label: PlatformLabel) -> usize {
        label as usize
    }
}

/// Point-in-time view of the counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub recommendations_issued: u64,
    pub requests_rejected: u64,
    pub per_platform: Vec<PlatformCount>,
}

/// Count for one platform label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformCount {
    pub platform: PlatformLabel,
    pub count: u64,
}
