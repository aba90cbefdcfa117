//! Per-type rate limiting.
//!
//! Receivers often report several times per second while consumers only
//! need an occasional update. The limiter remembers when each sentence type
//! last passed and blocks that type until the minimum period has elapsed.
//! The state belongs to the caller; nothing here is global.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Timestamp table of the last emitted sentence per type code.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_period: Duration,
    last_pass: HashMap<String, Instant>,
}

impl RateLimiter {
    /// Create a limiter. A zero period lets everything through.
    pub fn new(min_period: Duration) -> Self {
        Self {
            min_period,
            last_pass: HashMap::new(),
        }
    }

    pub fn min_period(&self) -> Duration {
        self.min_period
    }

    /// Decide whether a sentence of type `key` may pass at `now`.
    ///
    /// A type is blocked while no more than `min_period` has elapsed since
    /// it last passed. Blocked calls do not move the window.
    pub fn pass(&mut self, key: &str, now: Instant) -> bool {
        if self.min_period.is_zero() {
            return true;
        }

        if let Some(last) = self.last_pass.get(key) {
            if now.saturating_duration_since(*last) <= self.min_period {
                return false;
            }
        }

        self.last_pass.insert(key.to_string(), now);
        true
    }

    /// Forget all recorded timestamps.
    pub fn reset(&mut self) {
        self.last_pass.clear();
    }

    /// Number of types seen so far.
    pub fn tracked_types(&self) -> usize {
        self.last_pass.len()
    }
}
