//! Tests for the deduplicating warning sink.
//!
//! The sink is process-global, so everything lives in one test.

use stoffe_common::warning::{clear_warnings, has_warned, warn_once, warning_count};

#[test]
fn test_warnings_dedup_and_clear() {
    clear_warnings();

    warn_once("Test", "first");
    warn_once("Test", "first");
    warn_once("Other", "first");
    assert!(has_warned("Test", "first"));
    assert!(has_warned("Other", "first"));
    assert!(!has_warned("Test", "second"));
    assert_eq!(warning_count(), 2);

    clear_warnings();
    assert!(!has_warned("Test", "first"));
    assert_eq!(warning_count(), 0);

    warn_once("Test", "first");
    assert!(has_warned("Test", "first"));
}
