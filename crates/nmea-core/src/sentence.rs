//! Sentence decoding and encoding.
//!
//! A sentence on the wire looks like `$TTSSS,f1,f2,...,fn*CC`: a two
//! character talker id, a three letter type code, comma-separated fields
//! and an XOR checksum over everything between `$` and `*`.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::checksum;
use crate::error::{NmeaError, Result};
use crate::layout::Fields;
use crate::talker;
use crate::types::{Fix, RecommendedMinimumC, SentenceType, Unknown};

fn sentence_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"\$(?P<checksummed>(?P<talker>[A-Z]{2})(?P<type>[A-Z]{3}),(?P<fields>.*?))(?:\*(?P<checksum>[0-9A-F]{2}))?$",
        )
        .expect("sentence regex to compile")
    })
}

/// Characters that delimit or terminate fields on the wire.
const RESERVED: [char; 5] = [',', '*', '$', '\r', '\n'];

/// The untyped parts of a sentence.
///
/// Every sentence type wraps one of these. The talker is always two
/// upper-case characters and the type code always three.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSentence {
    talker: String,
    #[serde(rename = "type")]
    sentence_type: String,
    fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_text: Option<String>,
}

impl RawSentence {
    /// Build a sentence from scratch.
    ///
    /// The talker is normalized (see [`talker::normalize`]) and must then be
    /// two letters. Fails if the type code is not three upper-case letters,
    /// if there are no fields, or if a field contains a character that would
    /// break the wire format.
    pub fn new<S: Into<String>>(talker: &str, sentence_type: &str, fields: Vec<S>) -> Result<Self> {
        let talker = talker::normalize(talker);
        if !talker.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(NmeaError::Parse(format!(
                "talker must be two letters: {:?}",
                talker
            )));
        }

        if sentence_type.len() != 3 || !sentence_type.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(NmeaError::Parse(format!(
                "sentence type must be three upper-case letters: {:?}",
                sentence_type
            )));
        }

        // An empty list would encode the same as a single empty field
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(NmeaError::Parse(format!(
                "{}{} sentence needs at least one field",
                talker, sentence_type
            )));
        }
        if let Some((index, value)) = fields
            .iter()
            .enumerate()
            .find(|(_, value)| value.contains(RESERVED))
        {
            return Err(NmeaError::InvalidField {
                index,
                value: value.clone(),
            });
        }

        Ok(Self {
            talker,
            sentence_type: sentence_type.to_string(),
            fields,
            original_text: None,
        })
    }

    /// Split a sentence string into its parts and verify the checksum.
    ///
    /// Surrounding whitespace is ignored. A missing checksum is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let caps = sentence_regex().captures(text).ok_or_else(|| {
            NmeaError::Parse(format!("could not recognize NMEA structure in: {}", text))
        })?;

        let actual = caps
            .name("checksum")
            .ok_or_else(|| NmeaError::Parse(format!("missing checksum in: {}", text)))?
            .as_str();
        let expected = checksum::compute(&caps["checksummed"]);
        if actual != expected {
            return Err(NmeaError::Checksum {
                actual: actual.to_string(),
                expected,
            });
        }

        Ok(Self {
            talker: caps["talker"].to_string(),
            sentence_type: caps["type"].to_string(),
            fields: caps["fields"].split(',').map(String::from).collect(),
            original_text: Some(text.to_string()),
        })
    }

    pub fn talker(&self) -> &str {
        &self.talker
    }

    /// Replace the talker id, normalized to two upper-case characters.
    pub fn set_talker(&mut self, talker: &str) -> &mut Self {
        self.talker = talker::normalize(talker);
        self
    }

    /// The 3-letter type code.
    pub fn sentence_type(&self) -> &str {
        &self.sentence_type
    }

    /// The text this sentence was decoded from, if any.
    pub fn original_text(&self) -> Option<&str> {
        self.original_text.as_deref()
    }

    /// `$` + talker + type + `,` + fields, without checksum.
    pub fn to_wire_without_checksum(&self) -> String {
        format!(
            "${}{},{}",
            self.talker,
            self.sentence_type,
            self.fields.join(",")
        )
    }

    /// The checksum of the encoded sentence.
    pub fn checksum(&self) -> String {
        let payload = self.to_wire_without_checksum();
        checksum::compute(&payload[1..])
    }

    /// The complete, checksummed wire representation.
    pub fn to_wire(&self) -> String {
        let payload = self.to_wire_without_checksum();
        let checksum = checksum::compute(&payload[1..]);
        format!("{}*{}", payload, checksum)
    }
}

impl Fields for RawSentence {
    fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// A decoded or constructed sentence of one of the supported types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Sentence {
    Fix(Fix),
    RecommendedMinimumC(RecommendedMinimumC),
    Unknown(Unknown),
}

impl Sentence {
    /// Decode a sentence string.
    ///
    /// Fails on structural or checksum errors only; unrecognized types
    /// decode to [`Sentence::Unknown`].
    pub fn decode(text: &str) -> Result<Self> {
        RawSentence::parse(text).map(Self::from_raw)
    }

    /// Wrap raw parts in the variant registered for their type code.
    pub fn from_raw(raw: RawSentence) -> Self {
        match SentenceType::from_code(raw.sentence_type()) {
            SentenceType::Fix => Sentence::Fix(Fix::from_raw(raw)),
            SentenceType::RecommendedMinimumC => {
                Sentence::RecommendedMinimumC(RecommendedMinimumC::from_raw(raw))
            }
            SentenceType::Unknown => Sentence::Unknown(Unknown::from_raw(raw)),
        }
    }

    pub fn kind(&self) -> SentenceType {
        match self {
            Sentence::Fix(_) => SentenceType::Fix,
            Sentence::RecommendedMinimumC(_) => SentenceType::RecommendedMinimumC,
            Sentence::Unknown(_) => SentenceType::Unknown,
        }
    }

    pub fn raw(&self) -> &RawSentence {
        match self {
            Sentence::Fix(s) => s.raw(),
            Sentence::RecommendedMinimumC(s) => s.raw(),
            Sentence::Unknown(s) => s.raw(),
        }
    }

    fn raw_mut(&mut self) -> &mut RawSentence {
        match self {
            Sentence::Fix(s) => &mut s.raw,
            Sentence::RecommendedMinimumC(s) => &mut s.raw,
            Sentence::Unknown(s) => &mut s.raw,
        }
    }

    pub fn as_fix(&self) -> Option<&Fix> {
        match self {
            Sentence::Fix(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_recommended_minimum(&self) -> Option<&RecommendedMinimumC> {
        match self {
            Sentence::RecommendedMinimumC(s) => Some(s),
            _ => None,
        }
    }

    pub fn talker(&self) -> &str {
        self.raw().talker()
    }

    /// Rewrite the talker id, leaving every field untouched.
    ///
    /// Used to present sentences from GLONASS, Galileo, BeiDou or combined
    /// receivers as GPS to consumers that only accept `GP`.
    pub fn set_talker(&mut self, talker: &str) -> &mut Self {
        self.raw_mut().set_talker(talker);
        self
    }

    pub fn sentence_type(&self) -> &str {
        self.raw().sentence_type()
    }

    pub fn original_text(&self) -> Option<&str> {
        self.raw().original_text()
    }

    pub fn talker_name(&self) -> String {
        talker::name(self.talker())
    }

    /// Human-readable type name; unknown types render as `[Type XXX]`.
    pub fn type_name(&self) -> String {
        match self {
            Sentence::Unknown(s) => s.type_name(),
            other => other.kind().name().to_string(),
        }
    }

    /// Talker and type names, e.g. `GPS Fix`.
    pub fn talker_and_type_names(&self) -> String {
        format!("{} {}", self.talker_name(), self.type_name())
    }

    /// Short human-readable rendering of the fields.
    ///
    /// Typed sentences whose fields cannot be interpreted fall back to the
    /// comma-separated raw fields.
    pub fn summary(&self) -> String {
        let typed = match self {
            Sentence::Fix(s) => s.summary(),
            Sentence::RecommendedMinimumC(s) => s.summary(),
            Sentence::Unknown(_) => return self.fields().join(","),
        };
        typed.unwrap_or_else(|_| self.fields().join(","))
    }

    pub fn to_wire_without_checksum(&self) -> String {
        self.raw().to_wire_without_checksum()
    }

    pub fn to_wire(&self) -> String {
        self.raw().to_wire()
    }

    pub fn checksum(&self) -> String {
        self.raw().checksum()
    }
}

impl Fields for Sentence {
    fn fields(&self) -> &[String] {
        self.raw().fields()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary();
        if summary.is_empty() {
            write!(f, "{}", self.talker_and_type_names())
        } else {
            write!(f, "{}: {}", self.talker_and_type_names(), summary)
        }
    }
}

impl FromStr for Sentence {
    type Err = NmeaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl From<Fix> for Sentence {
    fn from(s: Fix) -> Self {
        Sentence::Fix(s)
    }
}

impl From<RecommendedMinimumC> for Sentence {
    fn from(s: RecommendedMinimumC) -> Self {
        Sentence::RecommendedMinimumC(s)
    }
}

impl From<Unknown> for Sentence {
    fn from(s: Unknown) -> Self {
        Sentence::Unknown(s)
    }
}

/// Decode a single sentence string.
pub fn decode(text: &str) -> Result<Sentence> {
    Sentence::decode(text)
}

/// Encode a sentence to its checksummed wire form.
pub fn encode(sentence: &Sentence) -> String {
    sentence.to_wire()
}
