//! Both sinks must render identical lines, so the layout lives in one pre-parsed template
//! that the console and file sinks share instead of each formatting on its own.

use crate::output::LogRecord;
use chrono::{DateTime, Local};
use std::fmt::Write;

/// `timestamp - logger_name - [line_number] - LEVEL - message`.
pub const DEFAULT_LINE_TEMPLATE: &str = "{timestamp} - {name} - [{line}] - {level} - {msg}";

/// Date, time and milliseconds, e.g. `2024-03-09 14:05:33,412`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Month, day, year, hour, minute, second, used as the log file stem.
pub const DEFAULT_FILE_STAMP_FORMAT: &str = "%m_%d_%Y_%H_%M_%S";

/// Closed set of known substitution tokens; unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Timestamp,
    Name,
    Line,
    Level,
    Msg,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Name => "name",
            Self::Line => "line",
            Self::Level => "level",
            Self::Msg => "msg",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Timestamp,
        Self::Name,
        Self::Line,
        Self::Level,
        Self::Msg,
    ];
}

/// Parsing into segments once avoids re-scanning the template on every log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators and unknown `{names}` pass through untouched.
    Literal(String),
    /// Known tokens are substituted at render time.
    Placeholder(Placeholder),
}

/// Pre-parsed template: parse once, render many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// Turns `"{timestamp} - {msg}"` into a segment list. An unclosed `{` is literal text.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };

            current.push_str(&rest[..open]);
            let name = &rest[open + 1..close];

            match Self::match_placeholder(name) {
                Some(ph) => {
                    if !current.is_empty() {
                        segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                    }
                    segments.push(FormatSegment::Placeholder(ph));
                }
                None => current.push_str(&rest[open..=close]),
            }

            rest = &rest[close + 1..];
        }

        current.push_str(rest);
        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self { segments }
    }

    fn match_placeholder(name: &str) -> Option<Placeholder> {
        Placeholder::ALL
            .iter()
            .copied()
            .find(|ph| ph.as_str() == name)
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Substitutes values into the pre-parsed segments. Values are inserted verbatim.
    #[must_use]
    pub fn render(&self, values: &FormatValues) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => {
                    let value = match ph {
                        Placeholder::Timestamp => &values.timestamp,
                        Placeholder::Name => &values.name,
                        Placeholder::Line => &values.line,
                        Placeholder::Level => &values.level,
                        Placeholder::Msg => &values.msg,
                    };
                    result.push_str(value);
                }
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_LINE_TEMPLATE)
    }
}

/// Typed value bag. Every placeholder has a field, so there are no key typos at runtime.
#[derive(Debug, Clone, Default)]
pub struct FormatValues {
    pub timestamp: String,
    pub name: String,
    pub line: String,
    pub level: String,
    pub msg: String,
}

impl FormatValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn line(mut self, line: u32) -> Self {
        self.line = line.to_string();
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }
}

/// A template plus the strftime format for its `{timestamp}` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormat {
    template: FormatTemplate,
    timestamp_format: String,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_TEMPLATE, DEFAULT_TIMESTAMP_FORMAT)
    }
}

impl LineFormat {
    #[must_use]
    pub fn new(template: &str, timestamp_format: impl Into<String>) -> Self {
        Self {
            template: FormatTemplate::parse(template),
            timestamp_format: timestamp_format.into(),
        }
    }

    /// Renders one record into one line, without the trailing newline.
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> String {
        let values = FormatValues::new()
            .timestamp(format_time(&record.timestamp, &self.timestamp_format))
            .name(record.name.as_str())
            .line(record.line)
            .level(record.severity.label())
            .msg(record.message.as_str());

        self.template.render(&values)
    }
}

/// Filename stem for a file sink opened at `now`.
#[must_use]
pub fn file_stamp(now: &DateTime<Local>, format: &str) -> String {
    format_time(now, format)
}

/// `DelayedFormat`'s `to_string` panics on a malformed strftime string; fall back to RFC 3339 instead.
fn format_time(time: &DateTime<Local>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(format)).is_err() {
        return time.to_rfc3339();
    }
    out
}
