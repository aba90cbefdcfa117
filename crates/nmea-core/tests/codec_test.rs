//! End-to-end tests for the codec boundary: `decode` and `encode`.

use nmea_core::{
    checksum, decode, encode, talker, Dated, Fields, Fix, FixQuality, LatLon, NmeaError,
    RecommendedMinimumC, Sentence, SentenceType, Time, Unknown,
};
use pretty_assertions::assert_eq;

/// Sentences captured from a multi-constellation receiver.
const CAPTURE: &[&str] = &[
    "$GNRMC,112053.421,A,5230.1234,N,01322.5678,E,0.02,,200918,,,A*63",
    "$GNGGA,112053.421,5230.1234,N,01322.5678,E,1,12,0.78,41.3,M,44.9,M,,*4C",
    "$GPGSV,3,1,11,03,03,111,00,04,15,270,00,06,01,010,00,13,06,292,00*74",
    "$GLGSA,A,3,71,72,,,,,,,,,,,1.35,0.78,1.10*15",
];

fn with_valid_checksum(payload: &str) -> String {
    format!("${}*{}", payload, checksum::compute(payload))
}

#[test]
fn test_capture_decodes() {
    let kinds: Vec<SentenceType> = CAPTURE
        .iter()
        .map(|line| decode(line).unwrap().kind())
        .collect();

    assert_eq!(
        kinds,
        vec![
            SentenceType::RecommendedMinimumC,
            SentenceType::Fix,
            SentenceType::Unknown,
            SentenceType::Unknown,
        ]
    );
}

#[test]
fn test_decode_encode_round_trip() {
    let constructed: Vec<Sentence> = vec![
        Fix::new(
            "GL",
            vec![
                "092750.000", "5321.6802", "N", "00630.3372", "W", "1", "8", "1.03", "61.7", "M",
                "55.2", "M", "", "",
            ],
        )
        .unwrap()
        .into(),
        RecommendedMinimumC::new(
            "GA",
            vec![
                "092750.000", "A", "5321.6802", "N", "00630.3372", "W", "0.02", "31.66", "280511",
                "", "", "A",
            ],
        )
        .unwrap()
        .into(),
        Unknown::new("BD", "VTG", vec!["", "T", "", "M", "0.00", "N", "0.00", "K", "A"])
            .unwrap()
            .into(),
        Unknown::new("GP", "TXT", vec![""]).unwrap().into(),
    ];

    for sentence in constructed {
        let wire = encode(&sentence);
        let decoded = decode(&wire).unwrap();

        assert_eq!(decoded.talker(), sentence.talker());
        assert_eq!(decoded.sentence_type(), sentence.sentence_type());
        assert_eq!(decoded.fields(), sentence.fields());
        assert_eq!(decoded.kind(), sentence.kind());
        assert_eq!(decoded.original_text(), Some(wire.as_str()));
        assert_eq!(sentence.original_text(), None);
    }
}

#[test]
fn test_constructors_refuse_sentences_that_would_not_decode() {
    let gga = vec!["123519", "4807.038", "N"];

    assert!(Fix::new("G1", gga.clone()).is_err());
    assert!(Fix::new(",*", gga.clone()).is_err());
    assert!(Fix::new("X", gga).is_err());
    assert!(Unknown::new("GP", "ZZZ", Vec::<String>::new()).is_err());
    assert!(Unknown::new("GP", "GGA", vec!["1"]).is_err());

    let empty = Unknown::new("GP", "ZZZ", vec![""]).unwrap();
    let decoded = decode(&empty.raw().to_wire()).unwrap();
    assert_eq!(decoded.kind(), SentenceType::Unknown);
    assert_eq!(decoded.fields(), empty.fields());
}

#[test]
fn test_reference_fix_example() {
    let sentence =
        decode("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47").unwrap();
    let fix = sentence.as_fix().expect("GGA decodes to a fix");

    assert_eq!(sentence.type_name(), "Fix");
    assert_eq!(fix.quality().unwrap().to_string(), "GNSS");
    assert_eq!(fix.elevation().unwrap(), 545.4);
    assert_eq!(fix.raw_time().unwrap(), "123519");
    assert_eq!(fix.longitude().unwrap().to_text(), "11.5166667");
}

#[test]
fn test_altered_checksum_digit() {
    let err = decode("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*46")
        .unwrap_err();
    assert_eq!(
        err,
        NmeaError::Checksum {
            actual: "46".to_string(),
            expected: "47".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Checksum is 46, expected 47");
}

#[test]
fn test_unknown_type_keeps_raw_fields() {
    let sentence = decode(&with_valid_checksum("GPZZZ,1,2,3")).unwrap();
    assert!(matches!(sentence, Sentence::Unknown(_)));
    assert_eq!(sentence.fields(), &["1", "2", "3"]);
    assert_eq!(sentence.type_name(), "[Type ZZZ]");
}

#[test]
fn test_rmc_fractional_time() {
    let sentence = decode(&with_valid_checksum(
        "GNRMC,112053.421,A,5230.1234,N,01322.5678,E,0.02,,200918,,,A",
    ))
    .unwrap();
    let rmc = sentence.as_recommended_minimum().unwrap();

    assert_eq!(
        rmc.date_time().unwrap().format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
        "2018-09-20T11:20:53.421"
    );
    assert_eq!(sentence.talker_name(), "GNSS");
}

#[test]
fn test_talker_rewrite_keeps_fields() {
    let mut sentence = decode(&with_valid_checksum(
        "GLGGA,112053.421,5230.1234,N,01322.5678,E,1,12,0.78,41.3,M,44.9,M,,",
    ))
    .unwrap();
    let fields = sentence.fields().to_vec();

    sentence.set_talker(talker::GPS);

    assert_eq!(sentence.talker(), "GP");
    assert_eq!(sentence.fields(), fields.as_slice());
    assert!(encode(&sentence).starts_with("$GPGGA,112053.421,"));
    assert_eq!(decode(&encode(&sentence)).unwrap().talker(), "GP");
}

#[test]
fn test_no_fix_sentence() {
    let sentence = decode(&with_valid_checksum("GPGGA,002153.000,,,,,0,00,,,M,,M,,")).unwrap();
    let fix = sentence.as_fix().unwrap();

    assert_eq!(fix.quality().unwrap(), FixQuality::NoFix);
    assert!(matches!(fix.latitude(), Err(NmeaError::Parse(_))));
    assert!(matches!(fix.elevation(), Err(NmeaError::Parse(_))));
    assert_eq!(sentence.to_string(), "GPS Fix: 002153.000,,,,,0,00,,,M,,M,,");
}

#[test]
fn test_sentences_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Sentence>();

    let handles: Vec<_> = CAPTURE
        .iter()
        .map(|line| {
            let line = line.to_string();
            std::thread::spawn(move || encode(&decode(&line).unwrap()) == line)
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
