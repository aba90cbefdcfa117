//! Integration tests for the filter pipeline.
//!
//! These replay a short receiver capture with synthetic arrival times and
//! check what a downstream consumer would see.

use std::time::{Duration, Instant};

use nmea_core::{decode, NmeaError};
use nmea_filter::{FilterConfig, Outcome, Pipeline, SkipReason};
use pretty_assertions::assert_eq;

/// (milliseconds since start, line)
const CAPTURE: &[(u64, &str)] = &[
    (0, "$GLGGA,112053.00,5230.1234,N,01322.5678,E,1,12,0.78,41.3,M,44.9,M,,*79"),
    (5, "$GARMC,112053.00,A,5230.1234,N,01322.5678,E,0.02,,200918,,,A*5B"),
    (10, "$GPGSV,3,1,11,03,03,111,00,04,15,270,00,06,01,010,00,13,06,292,00*74"),
    (200, "$GLGGA,112053.20,5230.1234,N,01322.5678,E,1,12,0.78,41.3,M,44.9,M,,*7B"),
    (300, "$GLGGA,112053.30,5230.1234,N,01322.5678,E,1,12,0.78,41.3,M,44.9,M,,*00"),
    (400, "garbage"),
    (800, "$GLGGA,112053.80,5230.1234,N,01322.5678,E,1,12,0.78,41.3,M,44.9,M,,*71"),
    (805, "$GARMC,112053.80,A,5230.1234,N,01322.5678,E,0.02,,200918,,,A*53"),
];

fn replay(pipeline: &mut Pipeline) -> Vec<Outcome> {
    let start = Instant::now();
    CAPTURE
        .iter()
        .map(|(offset, line)| pipeline.process(line, start + Duration::from_millis(*offset)))
        .collect()
}

fn emitted_lines(pipeline: &mut Pipeline) -> Vec<String> {
    replay(pipeline)
        .into_iter()
        .filter_map(|outcome| match outcome {
            Outcome::Emit(sentence) => Some(pipeline.render(&sentence)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_default_configuration() {
    let mut pipeline = Pipeline::new(FilterConfig::default());
    let lines = emitted_lines(&mut pipeline);

    assert_eq!(
        lines,
        vec![
            "geo nmea $GPGGA,112053.00,5230.1234,N,01322.5678,E,1,12,0.78,41.3,M,44.9,M,,*65",
            "geo nmea $GPRMC,112053.00,A,5230.1234,N,01322.5678,E,0.02,,200918,,,A*4A",
            "geo nmea $GPGGA,112053.80,5230.1234,N,01322.5678,E,1,12,0.78,41.3,M,44.9,M,,*6D",
            "geo nmea $GPRMC,112053.80,A,5230.1234,N,01322.5678,E,0.02,,200918,,,A*42",
        ]
    );

    let stats = pipeline.statistics().snapshot();
    assert_eq!(stats.received, 8);
    assert_eq!(stats.emitted, 4);
    assert_eq!(stats.rejected, 2);
    assert_eq!(stats.filtered_by_type, 1);
    assert_eq!(stats.rate_limited, 1);
}

#[test]
fn test_emitted_lines_decode() {
    let mut pipeline = Pipeline::new(FilterConfig {
        prefix: String::new(),
        ..Default::default()
    });

    for line in emitted_lines(&mut pipeline) {
        let sentence = decode(&line).unwrap();
        assert_eq!(sentence.talker(), "GP");
    }
}

#[test]
fn test_rejections_carry_the_error() {
    let mut pipeline = Pipeline::new(FilterConfig::default());
    let outcomes = replay(&mut pipeline);

    assert!(matches!(
        outcomes[4],
        Outcome::Rejected(NmeaError::Checksum { .. })
    ));
    assert!(matches!(outcomes[5], Outcome::Rejected(NmeaError::Parse(_))));
    assert_eq!(
        outcomes[3],
        Outcome::Skipped(SkipReason::RateLimited("GGA".to_string()))
    );
}

#[test]
fn test_pass_everything() {
    let config = FilterConfig::from_json(
        r#"{"types": ["*"], "minPeriodMs": 0, "talker": null, "prefix": ""}"#,
    )
    .unwrap();
    let mut pipeline = Pipeline::new(config);
    let lines = emitted_lines(&mut pipeline);

    let expected: Vec<&str> = CAPTURE
        .iter()
        .map(|(_, line)| *line)
        .filter(|line| decode(line).is_ok())
        .collect();
    assert_eq!(lines, expected);
}
