//! Catch-all for sentence types without a dedicated layout.

use serde::Serialize;

use crate::error::{NmeaError, Result};
use crate::layout::Fields;
use crate::sentence::RawSentence;
use crate::types::SentenceType;

/// A sentence whose type code is not recognized. Fields are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Unknown {
    pub(crate) raw: RawSentence,
}

impl Unknown {
    pub const TYPE_NAME: &'static str = "[unknown type]";

    /// Build a sentence of an unrecognized type.
    ///
    /// Codes with a dedicated layout are refused; use that type instead.
    pub fn new<S: Into<String>>(talker: &str, sentence_type: &str, fields: Vec<S>) -> Result<Self> {
        let kind = SentenceType::from_code(sentence_type);
        if kind != SentenceType::Unknown {
            return Err(NmeaError::Parse(format!(
                "{} is a {} sentence, not an unknown type",
                sentence_type,
                kind.name()
            )));
        }
        RawSentence::new(talker, sentence_type, fields).map(Self::from_raw)
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

    /// `[Type XXX]`, with XXX being the type code.
    pub fn type_name(&self) -> String {
        format!("[Type {}]", self.raw.sentence_type())
    }
}

impl Fields for Unknown {
    fn fields(&self) -> &[String] {
        self.raw.fields()
    }
}
