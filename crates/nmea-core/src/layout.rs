//! Field layouts shared between sentence types.
//!
//! Several sentence types carry the same kind of information at different
//! field positions. Each trait here holds the decoding logic once; a
//! sentence type only declares where its fields live.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use crate::coordinate::Coordinate;
use crate::error::{NmeaError, Result};

/// Positional access to the raw fields of a sentence.
pub trait Fields {
    /// All raw fields, excluding talker/type and checksum.
    fn fields(&self) -> &[String];

    /// The raw field at `index`.
    ///
    /// Reading past the end is an error rather than an empty value, so a
    /// truncated sentence can be told apart from one with empty fields.
    fn field(&self, index: usize) -> Result<&str> {
        let fields = self.fields();
        fields
            .get(index)
            .map(String::as_str)
            .ok_or(NmeaError::FieldOutOfRange {
                index,
                len: fields.len(),
            })
    }

    /// The field at `index` parsed as a decimal number.
    fn number_field(&self, index: usize) -> Result<f64> {
        let raw = self.field(index)?;
        raw.trim()
            .parse()
            .map_err(|_| NmeaError::Parse(format!("field {} is not a number: {:?}", index, raw)))
    }
}

/// Sentences carrying a latitude/longitude pair.
pub trait LatLon: Fields {
    const RAW_LATITUDE: usize;
    const NS: usize;
    const RAW_LONGITUDE: usize;
    const EW: usize;

    fn raw_latitude(&self) -> Result<&str> {
        self.field(Self::RAW_LATITUDE)
    }

    /// Hemisphere indicator for the latitude (`N` or `S`).
    fn ns(&self) -> Result<&str> {
        self.field(Self::NS)
    }

    fn raw_longitude(&self) -> Result<&str> {
        self.field(Self::RAW_LONGITUDE)
    }

    /// Hemisphere indicator for the longitude (`E` or `W`).
    fn ew(&self) -> Result<&str> {
        self.field(Self::EW)
    }

    /// Signed latitude; southern values are negative.
    fn latitude(&self) -> Result<Coordinate> {
        Coordinate::with_hemisphere(self.raw_latitude()?, self.ns()? == "N")
    }

    /// Signed longitude; western values are negative.
    fn longitude(&self) -> Result<Coordinate> {
        Coordinate::with_hemisphere(self.raw_longitude()?, self.ew()? == "E")
    }
}

/// Sentences carrying a UTC time of day (`HHMMSS[.ffffff]`).
pub trait Time: Fields {
    const RAW_TIME: usize;

    fn raw_time(&self) -> Result<&str> {
        self.field(Self::RAW_TIME)
    }
}

/// Sentences carrying a date (`DDMMYY`) in addition to the time of day.
pub trait Dated: Time {
    const RAW_DATE: usize;

    fn raw_date(&self) -> Result<&str> {
        self.field(Self::RAW_DATE)
    }

    /// Date and time combined into an absolute UTC timestamp.
    fn date_time(&self) -> Result<chrono::DateTime<Utc>> {
        combine_date_time(self.raw_date()?, self.raw_time()?)
    }
}

fn two_digits(text: &str, at: usize) -> Option<u32> {
    text.get(at..at + 2)?.parse().ok()
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Combine a raw `DDMMYY` date and a raw `HHMMSS[.ffffff]` time.
///
/// Fractional seconds are right-padded to microseconds. Two-digit years
/// 70-99 map to 19xx, 00-69 to 20xx.
pub fn combine_date_time(raw_date: &str, raw_time: &str) -> Result<chrono::DateTime<Utc>> {
    let invalid = || {
        NmeaError::Parse(format!(
            "could not parse date/time: {} {}",
            raw_date, raw_time
        ))
    };

    if raw_date.len() != 6 || !all_digits(raw_date) {
        return Err(invalid());
    }
    let day = two_digits(raw_date, 0).ok_or_else(invalid)?;
    let month = two_digits(raw_date, 2).ok_or_else(invalid)?;
    let yy = two_digits(raw_date, 4).ok_or_else(invalid)? as i32;
    let year = if yy >= 70 { 1900 + yy } else { 2000 + yy };

    let (clock, fraction) = match raw_time.split_once('.') {
        Some((clock, fraction)) => (clock, fraction),
        None => (raw_time, ""),
    };
    if clock.len() != 6 || !all_digits(clock) || fraction.len() > 6 || !all_digits(fraction) {
        return Err(invalid());
    }
    let hour = two_digits(clock, 0).ok_or_else(invalid)?;
    let minute = two_digits(clock, 2).ok_or_else(invalid)?;
    let second = two_digits(clock, 4).ok_or_else(invalid)?;
    let micro: u32 = format!("{:0<6}", fraction).parse().map_err(|_| invalid())?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
    let time = NaiveTime::from_hms_micro_opt(hour, minute, second, micro).ok_or_else(invalid)?;

    Ok(Utc.from_utc_datetime(&date.and_time(time)))
}
