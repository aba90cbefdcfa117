//! Filter statistics collection.
//!
//! Counters are atomic so a reporter task can take snapshots while the
//! pipeline keeps processing:
//! - Lines received, emitted and rejected
//! - Sentences dropped by type selection or rate limiting
//! - Emission rate over the last measurement window

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStatistics {
    pub received: u64,
    pub emitted: u64,
    pub rejected: u64,
    pub filtered_by_type: u64,
    pub rate_limited: u64,
    /// Sentences emitted per second over the last measurement window.
    pub emit_rate: f64,
    /// Seconds since the collector was created.
    pub uptime: u64,
}

/// Collects pipeline counters.
pub struct StatisticsCollector {
    start_time: Instant,
    received: AtomicU64,
    emitted: AtomicU64,
    rejected: AtomicU64,
    filtered_by_type: AtomicU64,
    rate_limited: AtomicU64,

    /// Emitted sentences in current measurement window.
    window_emitted: AtomicU64,

    /// Last calculated emit rate, per second.
    emit_rate: AtomicU64, // Stored as f64 bits
}

impl StatisticsCollector {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            received: AtomicU64::new(0),
            emitted: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            filtered_by_type: AtomicU64::new(0),
            rate_limited: AtomicU64::new(0),
            window_emitted: AtomicU64::new(0),
            emit_rate: AtomicU64::new(0),
        }
    }

    pub fn record_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
        self.window_emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_filtered_by_type(&self) {
        self.filtered_by_type.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rate_limited(&self) {
        self.rate_limited.fetch_add(1, Ordering::Relaxed);
    }

    /// Close the current measurement window of length `window`.
    pub fn update_rate(&self, window: Duration) {
        let count = self.window_emitted.swap(0, Ordering::Relaxed);
        let seconds = window.as_secs_f64();
        let rate = if seconds > 0.0 { count as f64 / seconds } else { 0.0 };
        self.emit_rate.store(rate.to_bits(), Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> FilterStatistics {
        FilterStatistics {
            received: self.received.load(Ordering::Relaxed),
            emitted: self.emitted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            filtered_by_type: self.filtered_by_type.load(Ordering::Relaxed),
            rate_limited: self.rate_limited.load(Ordering::Relaxed),
            emit_rate: f64::from_bits(self.emit_rate.load(Ordering::Relaxed)),
            uptime: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for StatisticsCollector {
    fn default() -> Self {
        Self::new()
    }
}
