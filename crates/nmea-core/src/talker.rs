//! Talker ids.
//!
//! The first two characters after `$` identify the system that produced a
//! sentence. Multi-constellation receivers emit a different talker per
//! satellite system, which some consumers cannot handle; see
//! [`Sentence::set_talker`](crate::Sentence::set_talker).

/// BeiDou (Chinese satellite navigation system).
pub const BEIDOU: &str = "BD";
/// Alternative BeiDou id with a "G" prefix.
pub const BEIDOU_G: &str = "GB";
/// Galileo (European satellite navigation system).
pub const GALILEO: &str = "GA";
/// GLONASS (Russian satellite navigation system).
pub const GLONASS: &str = "GL";
/// Generic GNSS, used when several systems contribute to a solution.
pub const GNSS: &str = "GN";
/// GPS (US satellite navigation system).
pub const GPS: &str = "GP";

/// Normalize a talker id to exactly two upper-case characters.
///
/// Longer input is truncated, shorter input is right-padded with `?`.
pub fn normalize(talker: &str) -> String {
    let mut id: String = talker
        .chars()
        .take(2)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    while id.chars().count() < 2 {
        id.push('?');
    }
    id
}

/// Human-readable name of a talker id, or `[Talker XX]` if it is not known.
pub fn name(talker: &str) -> String {
    let known = match talker {
        BEIDOU | BEIDOU_G => "BeiDou",
        GALILEO => "Galileo",
        GLONASS => "GLONASS",
        GNSS => "GNSS",
        GPS => "GPS",
        _ => return format!("[Talker {}]", talker),
    };
    known.to_string()
}
