//! Line processing pipeline.
//!
//! Each input line goes through the same steps:
//! decode → type selection → rate limit → talker rewrite → emit.
//! Lines that fail to decode are reported back to the caller, which
//! decides whether to log them; the pipeline itself keeps going.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use nmea_core::{NmeaError, Sentence};

use crate::config::FilterConfig;
use crate::rate_limit::RateLimiter;
use crate::selection::TypeSelection;
use crate::statistics::StatisticsCollector;

/// Why a decoded line was not emitted.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The line was empty or whitespace only.
    Blank,
    /// The sentence type is not selected.
    Type(String),
    /// A sentence of the same type was emitted too recently.
    RateLimited(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Blank => write!(f, "blank line"),
            SkipReason::Type(code) => write!(f, "type {} not selected", code),
            SkipReason::RateLimited(code) => write!(f, "type {} rate limited", code),
        }
    }
}

/// Result of processing one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The sentence should be written out. The talker is already rewritten.
    Emit(Sentence),
    Skipped(SkipReason),
    /// The line could not be decoded.
    Rejected(NmeaError),
}

/// Filters and rewrites a stream of sentence lines.
pub struct Pipeline {
    config: FilterConfig,
    selection: TypeSelection,
    limiter: RateLimiter,
    stats: Arc<StatisticsCollector>,
}

impl Pipeline {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            selection: TypeSelection::new(config.types.as_slice()),
            limiter: RateLimiter::new(config.min_period()),
            stats: Arc::new(StatisticsCollector::new()),
            config,
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Shared handle to the pipeline's counters.
    pub fn statistics(&self) -> Arc<StatisticsCollector> {
        Arc::clone(&self.stats)
    }

    /// Process one input line observed at `now`.
    pub fn process(&mut self, line: &str, now: Instant) -> Outcome {
        if line.trim().is_empty() {
            return Outcome::Skipped(SkipReason::Blank);
        }
        self.stats.record_received();

        let mut sentence = match Sentence::decode(line) {
            Ok(sentence) => sentence,
            Err(e) => {
                self.stats.record_rejected();
                return Outcome::Rejected(e);
            }
        };

        let code = sentence.sentence_type().to_string();

        if !self.selection.selects(&sentence) {
            tracing::trace!(sentence_type = %code, "Type not selected");
            self.stats.record_filtered_by_type();
            return Outcome::Skipped(SkipReason::Type(code));
        }

        if !self.limiter.pass(&code, now) {
            tracing::trace!(sentence_type = %code, "Rate limited");
            self.stats.record_rate_limited();
            return Outcome::Skipped(SkipReason::RateLimited(code));
        }

        if let Some(talker) = &self.config.talker {
            if sentence.talker() != talker {
                tracing::trace!(from = %sentence.talker(), to = %talker, "Rewriting talker");
                sentence.set_talker(talker);
            }
        }

        self.stats.record_emitted();
        tracing::debug!("Emitting {}", sentence);
        Outcome::Emit(sentence)
    }

    /// The output line for an emitted sentence: prefix + wire format.
    pub fn render(&self, sentence: &Sentence) -> String {
        format!("{}{}", self.config.prefix, sentence.to_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    const GGA: &str = "$GNGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*59";
    const GGA_AS_GPS: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";

    fn emitted(outcome: Outcome) -> Sentence {
        match outcome {
            Outcome::Emit(sentence) => sentence,
            other => panic!("Expected Emit, got {:?}", other),
        }
    }

    #[test]
    fn test_emits_with_rewritten_talker() {
        let mut pipeline = Pipeline::new(FilterConfig::default());
        let sentence = emitted(pipeline.process(GGA, Instant::now()));

        assert_eq!(sentence.talker(), "GP");
        assert_eq!(pipeline.render(&sentence), format!("geo nmea {}", GGA_AS_GPS));
    }

    #[test]
    fn test_keeps_talker_without_rewrite() {
        let config = FilterConfig {
            talker: None,
            prefix: String::new(),
            ..Default::default()
        };
        let mut pipeline = Pipeline::new(config);
        let sentence = emitted(pipeline.process(GGA, Instant::now()));

        assert_eq!(pipeline.render(&sentence), GGA);
    }

    #[test]
    fn test_skips_unselected_type() {
        let mut pipeline = Pipeline::new(FilterConfig::default());
        let outcome = pipeline.process("$GPZZZ,1,2,3*51", Instant::now());

        assert_eq!(outcome, Outcome::Skipped(SkipReason::Type("ZZZ".to_string())));
        assert_eq!(pipeline.statistics().snapshot().filtered_by_type, 1);
    }

    #[test]
    fn test_rate_limits_per_type() {
        let mut pipeline = Pipeline::new(FilterConfig::default());
        let start = Instant::now();

        emitted(pipeline.process(GGA, start));
        assert_eq!(
            pipeline.process(GGA, start + Duration::from_millis(200)),
            Outcome::Skipped(SkipReason::RateLimited("GGA".to_string()))
        );
        emitted(pipeline.process(GGA, start + Duration::from_millis(700)));
    }

    #[test]
    fn test_rejects_bad_checksum() {
        let mut pipeline = Pipeline::new(FilterConfig::default());
        let outcome = pipeline.process(&GGA.replace("*59", "*58"), Instant::now());

        assert!(matches!(
            outcome,
            Outcome::Rejected(NmeaError::Checksum { .. })
        ));
        assert_eq!(pipeline.statistics().snapshot().rejected, 1);
    }

    #[test]
    fn test_blank_lines_are_not_counted() {
        let mut pipeline = Pipeline::new(FilterConfig::default());
        assert_eq!(
            pipeline.process("  \r\n", Instant::now()),
            Outcome::Skipped(SkipReason::Blank)
        );
        assert_eq!(pipeline.statistics().snapshot().received, 0);
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(
            SkipReason::RateLimited("RMC".to_string()).to_string(),
            "type RMC rate limited"
        );
    }
}
