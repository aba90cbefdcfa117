//! `GGA`: global positioning system fix data.

use std::fmt;

use serde::Serialize;

use crate::error::{NmeaError, Result};
use crate::layout::{Fields, LatLon, Time};
use crate::sentence::RawSentence;

/// Quality indicator of a position fix (field 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixQuality {
    NoFix,
    Gnss,
    Differential,
    Pps,
    Rtk,
    FloatRtk,
    Estimated,
    ManualInput,
    Simulation,
    /// A code outside 0-8.
    Other(u8),
}

impl FixQuality {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => FixQuality::NoFix,
            1 => FixQuality::Gnss,
            2 => FixQuality::Differential,
            3 => FixQuality::Pps,
            4 => FixQuality::Rtk,
            5 => FixQuality::FloatRtk,
            6 => FixQuality::Estimated,
            7 => FixQuality::ManualInput,
            8 => FixQuality::Simulation,
            other => FixQuality::Other(other),
        }
    }
}

impl fmt::Display for FixQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FixQuality::NoFix => "no fix",
            FixQuality::Gnss => "GNSS",
            FixQuality::Differential => "differential",
            FixQuality::Pps => "PPS",
            FixQuality::Rtk => "RTK",
            FixQuality::FloatRtk => "float RTK",
            FixQuality::Estimated => "estimated",
            FixQuality::ManualInput => "manual input",
            FixQuality::Simulation => "simulation",
            FixQuality::Other(code) => return write!(f, "quality {}", code),
        };
        f.write_str(name)
    }
}

/// A position fix sentence.
///
/// Layout: 0 time, 1/2 latitude + N/S, 3/4 longitude + E/W, 5 quality,
/// 6 satellites in use, 7 HDOP, 8 elevation, 9 elevation unit, ...
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Fix {
    pub(crate) raw: RawSentence,
}

impl Fix {
    pub const TYPE: &'static str = "GGA";
    pub const TYPE_NAME: &'static str = "Fix";

    const QUALITY: usize = 5;
    const HORIZONTAL_DOP: usize = 7;
    const ELEVATION: usize = 8;

    /// Build a fix sentence from raw field values.
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

    /// The numeric quality code.
    pub fn quality_code(&self) -> Result<u8> {
        let raw = self.field(Self::QUALITY)?;
        raw.trim()
            .parse()
            .map_err(|_| NmeaError::Parse(format!("invalid fix quality: {:?}", raw)))
    }

    pub fn quality(&self) -> Result<FixQuality> {
        self.quality_code().map(FixQuality::from_code)
    }

    /// Horizontal dilution of precision.
    pub fn horizontal_dop(&self) -> Result<f64> {
        self.number_field(Self::HORIZONTAL_DOP)
    }

    /// Antenna elevation above mean sea level, in meters.
    pub fn elevation(&self) -> Result<f64> {
        self.number_field(Self::ELEVATION)
    }

    pub(crate) fn summary(&self) -> Result<String> {
        Ok(format!(
            "{},{} ±{:.2}, {:.1}m @{} ({})",
            self.latitude()?,
            self.longitude()?,
            self.horizontal_dop()?,
            self.elevation()?,
            self.raw_time()?,
            self.quality()?
        ))
    }
}

impl Fields for Fix {
    fn fields(&self) -> &[String] {
        self.raw.fields()
    }
}

impl LatLon for Fix {
    const RAW_LATITUDE: usize = 1;
    const NS: usize = 2;
    const RAW_LONGITUDE: usize = 3;
    const EW: usize = 4;
}

impl Time for Fix {
    const RAW_TIME: usize = 0;
}
