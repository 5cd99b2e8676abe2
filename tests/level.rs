//! Tests for severity levels and relation validation.

use twinlog::{Error, RELATIONS, Severity, normalize_level, validate_level};

#[test]
fn relation_keys_are_fixed() {
    let keys: Vec<&str> = RELATIONS.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, vec!["debug", "info", "warning", "error", "critical"]);
}

#[test]
fn severity_ordering_and_ranks() {
    assert!(Severity::Debug < Severity::Info);
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Error);
    assert!(Severity::Error < Severity::Critical);

    let ranks: Vec<u8> = Severity::all().iter().map(|s| s.rank()).collect();
    assert_eq!(ranks, vec![10, 20, 30, 40, 50]);
}

#[test]
fn severity_display_and_label() {
    assert_eq!(Severity::Warning.to_string(), "warning");
    assert_eq!(Severity::Warning.label(), "WARNING");
    assert_eq!(Severity::Critical.label(), "CRITICAL");
    assert_eq!(Severity::default(), Severity::Debug);
}

#[test]
fn validate_accepts_any_case() {
    for (key, severity) in RELATIONS {
        assert_eq!(validate_level(key).unwrap(), severity);
        assert_eq!(validate_level(&key.to_uppercase()).unwrap(), severity);
    }
    assert_eq!(validate_level("Info").unwrap(), Severity::Info);
    assert_eq!(validate_level("wArNiNg").unwrap(), Severity::Warning);
    assert_eq!("CRITICAL".parse::<Severity>().unwrap(), Severity::Critical);
}

#[test]
fn validate_rejects_unknown_with_normalized_relation() {
    for (input, expected) in [("trace", "trace"), ("", ""), ("INFO ", "info "), ("Warn", "warn")] {
        match validate_level(input) {
            Err(Error::InvalidRelation { relation }) => assert_eq!(relation, expected),
            other => panic!("expected InvalidRelation for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn normalize_only_lowercases() {
    assert_eq!(normalize_level(" DeBug "), " debug ");
}

#[test]
fn invalid_relation_display_names_the_value() {
    let err = validate_level("Verbose").unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("verbose -> "));
    assert!(text.contains("debug, info, warning, error, critical"));
}

#[test]
fn severity_serde_uses_relation_keys() {
    let json = serde_json::to_string(&Severity::Error).unwrap();
    assert_eq!(json, "\"error\"");

    let parsed: Severity = serde_json::from_str("\"WARNING\"").unwrap();
    assert_eq!(parsed, Severity::Warning);

    assert!(serde_json::from_str::<Severity>("\"trace\"").is_err());
}
