//! Wire-level tests for the bracket-path key grammar. This grammar is the
//! interop contract with HTML form submission conventions, so the cases
//! below are exact, not illustrative.

use formpath::path::{child_key, is_index, parse_index, split_key};
use formpath::{decode, FormData, Value};

#[test]
fn test_segment_boundaries_are_bracket_runs() {
    assert_eq!(split_key("a[b][0][c]"), vec!["a", "b", "0", "c"]);
    // a run of mixed brackets is a single boundary
    assert_eq!(split_key("a][b"), vec!["a", "b"]);
    assert_eq!(split_key("a[[b"), vec!["a", "b"]);
    assert_eq!(split_key("a]]["), vec!["a"]);
}

#[test]
fn test_empty_segments_are_dropped() {
    assert_eq!(split_key("a[][b]"), vec!["a", "b"]);
    assert_eq!(split_key("a[b][]"), vec!["a", "b"]);
    assert_eq!(split_key("[x]"), vec!["x"]);
    assert!(split_key("[]").is_empty());
    assert!(split_key("").is_empty());
}

#[test]
fn test_index_classification_is_all_ascii_digits() {
    for yes in ["0", "1", "42", "007", "10"] {
        assert!(is_index(yes), "{} should be index-like", yes);
    }
    for no in ["", "-1", "+1", "1.0", "0x1", " 1", "1 ", "a1", "１"] {
        assert!(!is_index(no), "{} should be name-like", no);
    }
}

#[test]
fn test_parse_index_values() {
    assert_eq!(parse_index("0"), Some(0));
    assert_eq!(parse_index("12"), Some(12));
    assert_eq!(parse_index("012"), Some(12));
    assert_eq!(parse_index("999999999999999999999999999999"), None);
}

#[test]
fn test_child_key_composition() {
    let key = child_key(&child_key("user", "addresses"), "0");
    assert_eq!(key, "user[addresses][0]");
    assert_eq!(split_key(&key), vec!["user", "addresses", "0"]);
}

#[test]
fn test_decoder_consumes_php_style_keys() {
    // the `name[]` append convention has empty segments; they drop, so the
    // repeated writes collapse onto the same scalar slot (last write wins)
    let mut form = FormData::new();
    form.append("tags[]", "a");
    form.append("tags[]", "b");
    let map = decode(&form).unwrap();
    assert_eq!(map.get("tags").and_then(Value::as_str), Some("b"));
}

#[test]
fn test_keyless_entries_are_skipped() {
    let mut form = FormData::new();
    form.append("", "nothing");
    form.append("][", "nothing");
    form.append("real", "kept");
    let map = decode(&form).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("real").and_then(Value::as_str), Some("kept"));
}
