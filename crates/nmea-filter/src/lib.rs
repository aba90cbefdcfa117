//! # nmea-filter
//!
//! Stream filtering on top of the NMEA 0183 codec.
//!
//! This crate provides:
//! - Sentence type selection
//! - Per-type rate limiting with caller-owned state
//! - Talker rewriting, e.g. presenting GLONASS or combined fixes as GPS
//! - JSON configuration and processing statistics
//!
//! It performs no I/O of its own beyond reading a configuration file; the
//! caller feeds lines in and writes emitted sentences out.

pub mod config;
pub mod pipeline;
pub mod rate_limit;
pub mod selection;
pub mod statistics;

pub use config::{ConfigError, FilterConfig};
pub use pipeline::{Outcome, Pipeline, SkipReason};
pub use rate_limit::RateLimiter;
pub use selection::TypeSelection;
pub use statistics::{FilterStatistics, StatisticsCollector};
