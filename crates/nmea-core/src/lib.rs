//! # nmea-core
//!
//! NMEA 0183 sentence codec.
//!
//! This crate provides:
//! - Checksum computation and validation
//! - Decoding of `$TTSSS,...*CC` sentences into typed values
//! - Field layouts for `GGA` (position fix) and `RMC` (recommended minimum)
//! - Coordinate and date/time decoding
//! - Re-encoding, including talker rewriting
//!
//! The codec is synchronous and keeps no state between calls, so it can be
//! used from any thread or runtime. It never logs; every failure is
//! returned to the caller as an [`NmeaError`].
//!
//! ```
//! use nmea_core::{decode, encode, LatLon};
//!
//! let mut sentence =
//!     decode("$GNGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*59").unwrap();
//! let fix = sentence.as_fix().unwrap();
//! assert!((fix.latitude().unwrap().value() - 48.1173).abs() < 1e-4);
//!
//! sentence.set_talker("GP");
//! assert!(encode(&sentence).ends_with("*47"));
//! ```

pub mod checksum;
pub mod coordinate;
pub mod error;
pub mod layout;
pub mod sentence;
pub mod talker;
pub mod types;

pub use coordinate::Coordinate;
pub use error::{NmeaError, Result};
pub use layout::{combine_date_time, Dated, Fields, LatLon, Time};
pub use sentence::{decode, encode, RawSentence, Sentence};
pub use types::{Fix, FixQuality, FixStatus, RecommendedMinimumC, SentenceType, Unknown};
