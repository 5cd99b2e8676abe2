//! Tests for line templates and time stamps.

use chrono::{Local, TimeZone};
use twinlog::fmt::{
    DEFAULT_FILE_STAMP_FORMAT, FormatSegment, FormatTemplate, FormatValues, LineFormat,
    Placeholder, file_stamp,
};
use twinlog::{LogRecord, Severity};

fn record(message: &str) -> LogRecord {
    LogRecord {
        severity: Severity::Info,
        name: "worker-1".to_string(),
        line: 42,
        message: message.to_string(),
        timestamp: Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 33)
            .single()
            .unwrap(),
    }
}

#[test]
fn parse_mixed_placeholders_and_literals() {
    let template = FormatTemplate::parse("A{name}B{unknown}C{msg}D");

    assert_eq!(
        template.segments(),
        &[
            FormatSegment::Literal("A".to_string()),
            FormatSegment::Placeholder(Placeholder::Name),
            FormatSegment::Literal("B{unknown}C".to_string()),
            FormatSegment::Placeholder(Placeholder::Msg),
            FormatSegment::Literal("D".to_string()),
        ]
    );
}

#[test]
fn parse_unclosed_brace_is_literal() {
    let template = FormatTemplate::parse("start {msg");
    let values = FormatValues::new().msg("M");

    assert_eq!(template.render(&values), "start {msg");
}

#[test]
fn render_replaces_known_placeholders() {
    let template = FormatTemplate::parse("[{line}] {level}: {msg}");
    let values = FormatValues::new().line(7).level("INFO").msg("hi");

    assert_eq!(template.render(&values), "[7] INFO: hi");
}

#[test]
fn default_line_format() {
    let line = LineFormat::default().render(&record("hello"));
    assert_eq!(
        line,
        "2024-03-09 14:05:33,000 - worker-1 - [42] - INFO - hello"
    );
}

#[test]
fn message_is_inserted_verbatim() {
    let message = "{msg} 100% - [x] {name} \t ünïcode";
    let line = LineFormat::default().render(&record(message));
    assert!(line.ends_with(&format!("- INFO - {message}")));
}

#[test]
fn custom_timestamp_format() {
    let format = LineFormat::new("{timestamp}|{msg}", "%H:%M");
    assert_eq!(format.render(&record("m")), "14:05|m");
}

#[test]
fn file_stamp_is_month_day_year_time() {
    let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 33).single().unwrap();
    assert_eq!(
        file_stamp(&now, DEFAULT_FILE_STAMP_FORMAT),
        "03_09_2024_14_05_33"
    );
}
