//! Errors produced by the codec.

use thiserror::Error;

/// Errors that can occur while decoding, constructing or reading a sentence.
///
/// None of these are fatal: the caller decides whether to skip the input,
/// log it or abort.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NmeaError {
    /// The text did not have the expected structure (sentence, coordinate,
    /// number or date/time).
    #[error("Parse error: {0}")]
    Parse(String),

    /// The sentence was well-formed but its checksum did not match.
    #[error("Checksum is {actual}, expected {expected}")]
    Checksum {
        /// Checksum present in the sentence text.
        actual: String,
        /// Checksum computed over the payload.
        expected: String,
    },

    /// A semantic accessor referenced a field beyond the decoded fields.
    #[error("Field {index} out of range ({len} fields present)")]
    FieldOutOfRange { index: usize, len: usize },

    /// A field value cannot be written to the wire.
    #[error("Field {index} contains a reserved character: {value:?}")]
    InvalidField { index: usize, value: String },
}

/// Result alias used throughout the codec.
pub type Result<T> = std::result::Result<T, NmeaError>;
