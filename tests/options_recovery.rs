//! Unit tests for schema-less option recovery
//!
//! Options are recovered from a directive's raw block text because no option
//! schema is ever known ahead of time. These tests pin down the recovery
//! walk: base indentation, multi-line values, the contiguous-prefix rule,
//! and the tolerant handling of stray lines.

use stanza::stanza::building::recover_options;

#[test]
fn test_options_01_no_markers_yields_empty_mapping() {
    // A body without field markers recovers nothing.
    let options = recover_options(".. note:: heads up\n\n   Just body text.\n");
    assert!(options.is_empty());
}

#[test]
fn test_options_02_recovery_is_idempotent() {
    // Repeated calls over the same block agree; the input is never mutated.
    let block = ".. figure:: chart.png\n   :alt: A chart\n   :width: 400\n";
    let first = recover_options(block);
    let second = recover_options(block);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_options_03_multiline_value() {
    // `:key: a` followed by deeper lines `b` and `c` at matching
    // indentation accumulates "a\nb\nc".
    let options = recover_options(".. directive::\n   :key: a\n      b\n      c\n");
    assert_eq!(options.get("key"), Some("a\nb\nc"));
}

#[test]
fn test_options_04_options_occupy_contiguous_prefix() {
    // The first non-field line at base indentation ends recovery; markers
    // after it are content, not options.
    let options = recover_options(".. directive::\n   :alt: chart\n   body line\n   :late: ignored\n");
    assert_eq!(options.len(), 1);
    assert_eq!(options.get("alt"), Some("chart"));
    assert_eq!(options.get("late"), None);
}

#[test]
fn test_options_05_duplicate_key_last_write_wins() {
    let options = recover_options(".. directive::\n   :key: one\n   :key: two\n");
    assert_eq!(options.len(), 1);
    assert_eq!(options.get("key"), Some("two"));
}

#[test]
fn test_options_06_blank_lines_keep_active_key() {
    // A blank line inside an option block does not reset the active key;
    // the deeper line after it still extends the value.
    let options = recover_options(".. directive::\n   :key: a\n\n      b\n");
    assert_eq!(options.get("key"), Some("a\nb"));
}

#[test]
fn test_options_07_pre_marker_lines_unclassified() {
    // Body lines ahead of the first field marker are never classified as
    // options; a block opening with plain content recovers nothing at all,
    // not even markers further down.
    let options = recover_options(".. directive::\n   leading text\n   :key: value\n");
    assert!(options.is_empty());
}

#[test]
fn test_options_08_invocation_only_block() {
    let options = recover_options(".. include:: intro.txt");
    assert!(options.is_empty());
}

#[test]
fn test_options_09_deeper_marker_starts_new_key() {
    // A field marker is recognized at any indentation, even deeper than the
    // block's base.
    let options = recover_options(".. directive::\n   :outer: 1\n      :inner: 2\n");
    assert_eq!(options.get("outer"), Some("1"));
    assert_eq!(options.get("inner"), Some("2"));
}

#[test]
fn test_options_10_ordered_by_first_appearance() {
    let options = recover_options(".. directive::\n   :beta: 2\n   :alpha: 1\n");
    let keys: Vec<&str> = options.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["beta", "alpha"]);
}
