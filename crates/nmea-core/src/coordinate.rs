//! Latitude/longitude values.
//!
//! NMEA encodes coordinates as degrees followed by decimal minutes
//! (`DDDMM.mmmm`), with the hemisphere carried in a separate field. This
//! module converts between that encoding and signed decimal degrees.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{NmeaError, Result};

fn coordinate_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^(?P<sign>[+-]?)(?P<deg>[0-9]{1,3})(?P<min>[0-9]{2}\.[0-9]+)$")
            .expect("coordinate regex to compile")
    })
}

/// A latitude or longitude in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinate {
    decimal_degrees: f64,
}

impl Coordinate {
    /// Wrap a value that is already in decimal degrees.
    pub fn new(decimal_degrees: f64) -> Self {
        Self { decimal_degrees }
    }

    /// Parse the NMEA `[sign]DDDMM.mmmm` encoding.
    ///
    /// A leading `-` negates the whole value, minutes included.
    pub fn parse(text: &str) -> Result<Self> {
        let caps = coordinate_regex()
            .captures(text)
            .ok_or_else(|| NmeaError::Parse(format!("could not parse coordinate value: {}", text)))?;

        let invalid = || NmeaError::Parse(format!("could not parse coordinate value: {}", text));
        let degrees: f64 = caps["deg"].parse().map_err(|_| invalid())?;
        let minutes: f64 = caps["min"].parse().map_err(|_| invalid())?;

        let magnitude = degrees + minutes / 60.0;
        let decimal_degrees = if &caps["sign"] == "-" {
            -magnitude
        } else {
            magnitude
        };

        Ok(Self { decimal_degrees })
    }

    /// Parse an unsigned raw value and apply a hemisphere.
    ///
    /// `positive` is true for `N`/`E`. Anything else negates the value.
    pub fn with_hemisphere(raw: &str, positive: bool) -> Result<Self> {
        if positive {
            Self::parse(raw)
        } else {
            Self::parse(&format!("-{}", raw))
        }
    }

    /// The value in signed decimal degrees.
    pub fn value(&self) -> f64 {
        self.decimal_degrees
    }

    /// Render with seven decimal places.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.7}", self.decimal_degrees)
    }
}

impl FromStr for Coordinate {
    type Err = NmeaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Coordinate> for f64 {
    fn from(c: Coordinate) -> Self {
        c.decimal_degrees
    }
}
