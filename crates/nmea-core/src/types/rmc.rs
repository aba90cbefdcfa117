//! `RMC`: recommended minimum specific GNSS data.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::layout::{Dated, Fields, LatLon, Time};
use crate::sentence::RawSentence;

/// Receiver status (field 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixStatus {
    /// `A`: data valid.
    Ok,
    /// `V`: navigation receiver warning.
    Warning,
    Other(String),
}

impl FixStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "A" => FixStatus::Ok,
            "V" => FixStatus::Warning,
            other => FixStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for FixStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixStatus::Ok => f.write_str("OK"),
            FixStatus::Warning => f.write_str("Warning"),
            FixStatus::Other(code) => write!(f, "status {}", code),
        }
    }
}

/// A recommended minimum sentence.
///
/// Layout: 0 time, 1 status, 2/3 latitude + N/S, 4/5 longitude + E/W,
/// 6 speed over ground (knots), 7 track angle, 8 date, 9/10 magnetic
/// variation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecommendedMinimumC {
    pub(crate) raw: RawSentence,
}

impl RecommendedMinimumC {
    pub const TYPE: &'static str = "RMC";
    pub const TYPE_NAME: &'static str = "Rec. Minimum C";

    const STATUS: usize = 1;
    const GROUND_SPEED: usize = 6;

    pub fn new<S: Into<String>>(talker: &str, fields: Vec<S>) -> Result<Self> {
        RawSentence::new(talker, Self::TYPE, fields).map(Self::from_raw)
    }

    pub(crate) fn from_raw(raw: RawSentence) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &RawSentence {
        &self.raw
    }

    pub fn set_talker(&mut self, talker: &str) -> &mut Self {
        self.raw.set_talker(talker);
        self
    }

    pub fn raw_status(&self) -> Result<&str> {
        self.field(Self::STATUS)
    }

    pub fn status(&self) -> Result<FixStatus> {
        self.raw_status().map(FixStatus::from_code)
    }

    pub fn raw_ground_speed(&self) -> Result<&str> {
        self.field(Self::GROUND_SPEED)
    }

    /// Speed over ground in knots.
    pub fn ground_speed(&self) -> Result<f64> {
        self.number_field(Self::GROUND_SPEED)
    }

    pub(crate) fn summary(&self) -> Result<String> {
        Ok(format!(
            "{},{}, {:.1}kps @{} ({})",
            self.latitude()?,
            self.longitude()?,
            self.ground_speed()?,
            self.date_time()?.format("%Y-%m-%dT%H:%M:%S%.3f"),
            self.status()?
        ))
    }
}

impl Fields for RecommendedMinimumC {
    fn fields(&self) -> &[String] {
        self.raw.fields()
    }
}

impl LatLon for RecommendedMinimumC {
    const RAW_LATITUDE: usize = 2;
    const NS: usize = 3;
    const RAW_LONGITUDE: usize = 4;
    const EW: usize = 5;
}

impl Time for RecommendedMinimumC {
    const RAW_TIME: usize = 0;
}

impl Dated for RecommendedMinimumC {
    const RAW_DATE: usize = 8;
}
