//! NMEA 0183 checksums.
//!
//! The checksum is the XOR of every byte between the leading `$` and the
//! `*` separator, written as two upper-case hexadecimal digits.

/// Compute the checksum of a payload.
///
/// `payload` must contain only the checksummed part of a sentence:
/// talker and type ids, the comma and the comma-separated fields. Neither
/// the leading `$` nor the `*CC` suffix belong in it. An empty payload
/// yields `"00"`.
pub fn compute(payload: &str) -> String {
    let checksum = payload.bytes().fold(0u8, |acc, byte| acc ^ byte);
    format!("{:02X}", checksum)
}

/// Check a payload against an expected checksum.
///
/// The comparison is case-sensitive: `expected` must be upper-case hex.
pub fn validate(payload: &str, expected: &str) -> bool {
    compute(payload) == expected
}
