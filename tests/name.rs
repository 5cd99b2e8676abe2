//! Tests for logger name resolution.

use twinlog::{Error, FALLBACK_NAME, NameArg, resolve_name};

#[test]
fn absent_name_uses_fallback() {
    assert_eq!(resolve_name(None).unwrap(), FALLBACK_NAME);
}

#[test]
fn text_name_is_used_as_given() {
    let name = NameArg::from("worker-1");
    assert_eq!(resolve_name(Some(&name)).unwrap(), "worker-1");
}

#[test]
fn empty_name_is_rejected() {
    match resolve_name(Some(&NameArg::from(""))) {
        Err(Error::InvalidNameType {
            name,
            observed_type,
        }) => {
            assert_eq!(name, "");
            assert_eq!(observed_type, "str");
        }
        other => panic!("expected InvalidNameType, got {other:?}"),
    }
}

#[test]
fn non_text_names_are_rejected_with_their_type() {
    let cases = [
        (NameArg::from(123_i64), "123", "int"),
        (NameArg::from(1.5_f64), "1.5", "float"),
        (NameArg::from(true), "true", "bool"),
    ];

    for (arg, value, ty) in cases {
        match resolve_name(Some(&arg)) {
            Err(Error::InvalidNameType {
                name,
                observed_type,
            }) => {
                assert_eq!(name, value);
                assert_eq!(observed_type, ty);
            }
            other => panic!("expected InvalidNameType for {arg:?}, got {other:?}"),
        }
    }
}

#[test]
fn invalid_name_display_shows_type_and_value() {
    let err = resolve_name(Some(&NameArg::from(123_i64))).unwrap_err();
    assert!(err.to_string().starts_with("Type(int) 123 -> "));
}
