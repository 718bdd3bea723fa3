//! Reconstructing nested values from flat bracket-path entries.
//!
//! The reconstructor replays a [`FormData`] in entry order. For every entry
//! it splits the key into path segments (see [`crate::path`]) and walks the
//! tree from the root mapping, creating intermediate containers lazily: a
//! container's kind is decided the first time its prefix is visited, by
//! looking at the *next* segment of the path being inserted: an array if
//! that segment is numeric-index-like, a plain mapping otherwise. Once
//! created, a container's kind is fixed for the rest of the call.
//!
//! Collisions resolve deterministically, never by raising:
//!
//! - a container always wins over a scalar occupying the same slot, in both
//!   arrival orders (`a=1` then `a[b]=2` replaces the scalar; `a[b]=2` then
//!   `a=1` discards the scalar write);
//! - pure scalar collisions on the same exact key are last-write-wins;
//! - an entry that disagrees with an already-fixed container kind (a
//!   name-like segment against an array) is silently dropped;
//! - sparse index writes pad the gap with nulls, up to
//!   [`DecodeOptions::max_index`]; an entry addressing a slot past the cap
//!   is dropped whole, so a single short key cannot force an allocation
//!   proportional to its index.
//!
//! Decoded leaves are always strings or blobs; nothing re-infers numbers,
//! booleans, or dates. Text whose trimmed form is empty goes through the
//! [`EmptyString`] policy.

use crate::options::EmptyString;
use crate::{path, DecodeOptions, FormData, FormValue, RecordMap, Value};

/// Rebuilds a nested mapping from the flat multi-map.
pub(crate) fn decode_form(form: &FormData, options: &DecodeOptions) -> RecordMap {
    let mut root = Value::Object(RecordMap::new());
    for (key, raw) in form.iter() {
        let segments = path::split_key(key);
        if segments.is_empty() {
            continue;
        }
        insert_entry(&mut root, &segments, raw, options);
    }
    match root {
        Value::Object(map) => map,
        _ => RecordMap::new(),
    }
}

fn insert_entry(root: &mut Value, segments: &[&str], raw: &FormValue, options: &DecodeOptions) {
    let mut current = root;
    for i in 0..segments.len() - 1 {
        let next_is_index = path::is_index(segments[i + 1]);
        match child_container(current, segments[i], next_is_index, options) {
            Some(node) => current = node,
            // Kind conflict along the path; the whole entry is dropped.
            None => return,
        }
    }
    assign_leaf(current, segments[segments.len() - 1], raw, options);
}

fn new_container(sequence: bool) -> Value {
    if sequence {
        Value::Array(Vec::new())
    } else {
        Value::Object(RecordMap::new())
    }
}

/// Descends one segment into `parent`, creating the child container if the
/// slot is vacant or holds a scalar. Returns `None` when the segment cannot
/// address `parent` (name-like segment on an array, index overflow, index
/// past the materialization cap).
fn child_container<'a>(
    parent: &'a mut Value,
    segment: &str,
    next_is_index: bool,
    options: &DecodeOptions,
) -> Option<&'a mut Value> {
    match parent {
        Value::Object(map) => {
            let slot = map
                .entry(segment.to_string())
                .or_insert_with(|| new_container(next_is_index));
            if !slot.is_container() {
                *slot = new_container(next_is_index);
            }
            Some(slot)
        }
        Value::Array(items) => {
            let index = path::parse_index(segment)?;
            if index > options.max_index {
                return None;
            }
            if items.len() <= index {
                items.resize(index + 1, Value::Null);
            }
            let slot = &mut items[index];
            if !slot.is_container() {
                *slot = new_container(next_is_index);
            }
            Some(slot)
        }
        _ => None,
    }
}

/// Writes the transformed leaf at the final segment. A slot already holding
/// a container is never overwritten by a scalar.
fn assign_leaf(container: &mut Value, segment: &str, raw: &FormValue, options: &DecodeOptions) {
    let leaf = leaf_value(raw, options);
    match container {
        Value::Object(map) => {
            if map.get(segment).is_some_and(Value::is_container) {
                return;
            }
            match leaf {
                Some(value) => {
                    map.insert(segment.to_string(), value);
                }
                None => {
                    map.shift_remove(segment);
                }
            }
        }
        Value::Array(items) => {
            let index = match path::parse_index(segment) {
                Some(index) if index <= options.max_index => index,
                _ => return,
            };
            if items.len() <= index {
                items.resize(index + 1, Value::Null);
            }
            if items[index].is_container() {
                return;
            }
            items[index] = leaf.unwrap_or(Value::Null);
        }
        _ => {}
    }
}

fn leaf_value(raw: &FormValue, options: &DecodeOptions) -> Option<Value> {
    match raw {
        FormValue::Text(s) if s.trim().is_empty() => match options.empty_string {
            EmptyString::Preserve => Some(Value::String(s.clone())),
            EmptyString::SetNull => Some(Value::Null),
            EmptyString::SetUndefined => None,
        },
        FormValue::Text(s) => Some(Value::String(s.clone())),
        FormValue::Blob(b) => Some(Value::Blob(b.clone())),
    }
}
