//! Tests for the crate's diagnostics logger. The logger is process-global, so everything
//! lives in one test that controls the order of initialization.

mod common;

use common::Captured;
use twinlog::{Severity, internal};

#[test]
fn silent_until_init_then_first_init_wins() {
    assert!(!internal::is_initialized());
    assert_eq!(internal::level(), None);
    internal::warn("TEST", "before init");

    let first = Captured::default();
    internal::init_with_writer(Severity::Info, first.clone());
    assert!(internal::is_initialized());
    assert_eq!(internal::level(), Some(Severity::Info));

    let second = Captured::default();
    internal::init_with_writer(Severity::Debug, second.clone());
    internal::init(Severity::Debug);
    assert_eq!(internal::level(), Some(Severity::Info));

    internal::debug("TEST", "below threshold");
    internal::info("TEST", "routed");
    internal::warn("TEST", "careful");
    internal::error("TEST", "broken");

    let lines = first.lines();
    assert_eq!(lines.len(), 3, "{lines:?}");
    assert!(lines[0].contains(" - twinlog - "));
    assert!(lines[0].ends_with("- INFO - TEST: routed"));
    assert!(lines[1].ends_with("- WARNING - TEST: careful"));
    assert!(lines[2].ends_with("- ERROR - TEST: broken"));
    assert!(!first.contents().contains("before init"));
    assert!(second.contents().is_empty());
}
