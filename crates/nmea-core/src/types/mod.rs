//! Supported sentence types.
//!
//! The set of types is closed: a 3-letter code either names one of the
//! layouts below or falls back to [`Unknown`], which keeps the raw fields
//! without interpreting them.

pub mod fix;
pub mod rmc;
pub mod unknown;

pub use fix::{Fix, FixQuality};
pub use rmc::{FixStatus, RecommendedMinimumC};
pub use unknown::Unknown;

/// Sentence type, resolved from the 3-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceType {
    /// `GGA`: position fix.
    Fix,
    /// `RMC`: recommended minimum specific GNSS data.
    RecommendedMinimumC,
    /// Any other code.
    Unknown,
}

impl SentenceType {
    /// The types with a dedicated field layout.
    pub const KNOWN: [SentenceType; 2] = [SentenceType::Fix, SentenceType::RecommendedMinimumC];

    /// Resolve a 3-letter code. Unrecognized codes map to `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            Fix::TYPE => SentenceType::Fix,
            RecommendedMinimumC::TYPE => SentenceType::RecommendedMinimumC,
            _ => SentenceType::Unknown,
        }
    }

    /// The 3-letter code, if this type has a fixed one.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            SentenceType::Fix => Some(Fix::TYPE),
            SentenceType::RecommendedMinimumC => Some(RecommendedMinimumC::TYPE),
            SentenceType::Unknown => None,
        }
    }

    /// Human-readable name of the type.
    pub fn name(&self) -> &'static str {
        match self {
            SentenceType::Fix => Fix::TYPE_NAME,
            SentenceType::RecommendedMinimumC => RecommendedMinimumC::TYPE_NAME,
            SentenceType::Unknown => Unknown::TYPE_NAME,
        }
    }
}

impl std::fmt::Display for SentenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(SentenceType::from_code("GGA"), SentenceType::Fix);
        assert_eq!(
            SentenceType::from_code("RMC"),
            SentenceType::RecommendedMinimumC
        );
        assert_eq!(SentenceType::from_code("GSV"), SentenceType::Unknown);
        assert_eq!(SentenceType::from_code("gga"), SentenceType::Unknown);
    }

    #[test]
    fn test_known_codes_round_trip() {
        for kind in SentenceType::KNOWN {
            let code = kind.code().unwrap();
            assert_eq!(SentenceType::from_code(code), kind);
        }
        assert_eq!(SentenceType::Unknown.code(), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(SentenceType::Fix.name(), "Fix");
        assert_eq!(SentenceType::RecommendedMinimumC.to_string(), "Rec. Minimum C");
    }
}
