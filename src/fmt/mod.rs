//! Line layout and time stamps shared by every sink.

mod format;

pub use format::{
    DEFAULT_FILE_STAMP_FORMAT, DEFAULT_LINE_TEMPLATE, DEFAULT_TIMESTAMP_FORMAT, FormatSegment,
    FormatTemplate, FormatValues, LineFormat, Placeholder, file_stamp,
};
