//! Sentence type selection.
//!
//! A selection is a list of 3-letter type codes. The single wildcard `*`
//! selects every type, including ones the codec has no layout for.

use nmea_core::Sentence;

/// Selects every sentence type.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, PartialEq)]
enum TypePattern {
    /// Exact type code
    Code(String),
    /// `*`
    Any,
}

/// The set of sentence types a pipeline lets through.
#[derive(Debug, Clone)]
pub struct TypeSelection {
    patterns: Vec<TypePattern>,
}

impl TypeSelection {
    pub fn new<S: AsRef<str>>(codes: &[S]) -> Self {
        let patterns = codes
            .iter()
            .map(|code| match code.as_ref() {
                WILDCARD => TypePattern::Any,
                code => TypePattern::Code(code.to_string()),
            })
            .collect();
        Self { patterns }
    }

    /// A selection matching every type.
    pub fn all() -> Self {
        Self {
            patterns: vec![TypePattern::Any],
        }
    }

    /// Check whether a type code is selected.
    pub fn matches(&self, code: &str) -> bool {
        self.patterns.iter().any(|pattern| match pattern {
            TypePattern::Any => true,
            TypePattern::Code(c) => c == code,
        })
    }

    /// Check whether a sentence's type is selected.
    pub fn selects(&self, sentence: &Sentence) -> bool {
        self.matches(sentence.sentence_type())
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
