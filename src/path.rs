//! The bracket-path key grammar shared by the flattener and the
//! reconstructor.
//!
//! A key like `a[b][0][c]` decomposes into the ordered segments
//! `["a", "b", "0", "c"]`. The grammar is the wire-level contract with HTML
//! form submission conventions and must stay bit-exact:
//!
//! - a segment boundary is any run of `[` and/or `]` characters;
//! - empty segments (consecutive delimiters, trailing brackets) are dropped,
//!   so malformed keys like `a[][b]` degrade gracefully;
//! - a segment matching `^\d+$` is numeric-index-like, everything else is
//!   name-like.
//!
//! Digit runs too long to fit in `usize` cannot address a `Vec` slot and are
//! treated as name-like.
//!
//! ## Examples
//!
//! ```rust
//! use formpath::path::{is_index, split_key};
//!
//! assert_eq!(split_key("a[b][0][c]"), vec!["a", "b", "0", "c"]);
//! assert_eq!(split_key("a[][b]"), vec!["a", "b"]);
//! assert!(is_index("42"));
//! assert!(!is_index("4x2"));
//! ```

/// Splits a bracket-path key into its ordered segments, dropping empties.
#[must_use]
pub fn split_key(key: &str) -> Vec<&str> {
    key.split(|c: char| c == '[' || c == ']')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Returns `true` if the segment is numeric-index-like.
#[inline]
#[must_use]
pub fn is_index(segment: &str) -> bool {
    parse_index(segment).is_some()
}

/// Parses a numeric-index-like segment into its 0-based position.
///
/// Leading zeros are accepted (`"07"` is index 7). Returns `None` for
/// name-like segments and for digit runs that overflow `usize`.
#[must_use]
pub fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Builds the bracket-path key for a child segment under `prefix`.
#[inline]
#[must_use]
pub fn child_key(prefix: &str, segment: &str) -> String {
    format!("{}[{}]", prefix, segment)
}
