//! The ordered flat multi-map that flattening produces and reconstruction
//! consumes.
//!
//! [`FormData`] mirrors the shape of an HTML form submission: an ordered
//! list of (bracket-path key, leaf value) entries where the same key may
//! appear any number of times. Entry order is significant: the flattener
//! appends in traversal order and the reconstructor replays entries in that
//! order, which is what makes its collision policies deterministic.
//!
//! A leaf is a [`FormValue`]: either text or an opaque binary [`Blob`].
//!
//! ## Examples
//!
//! ```rust
//! use formpath::FormData;
//!
//! let mut form = FormData::new();
//! form.append("user[name]", "Alice");
//! form.append("tags[0]", "rust");
//! form.append("tags[0]", "forms"); // repeated keys are kept
//!
//! assert_eq!(form.len(), 3);
//! assert_eq!(form.get("user[name]").and_then(|v| v.as_text()), Some("Alice"));
//! assert_eq!(form.get_all("tags[0]").count(), 2);
//! ```

use crate::Blob;

/// A single leaf value in a flat multi-map: text or a binary blob.
///
/// Leaves are never containers, and text leaves carry no type information;
/// numbers, booleans, and dates all arrive here already stringified.
#[derive(Clone, Debug, PartialEq)]
pub enum FormValue {
    Text(String),
    Blob(Blob),
}

impl FormValue {
    /// Returns `true` if this leaf is text.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, FormValue::Text(_))
    }

    /// Returns `true` if this leaf is a binary blob.
    #[inline]
    #[must_use]
    pub const fn is_blob(&self) -> bool {
        matches!(self, FormValue::Blob(_))
    }

    /// If this leaf is text, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// If this leaf is a blob, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_blob(&self) -> Option<&Blob> {
        match self {
            FormValue::Blob(b) => Some(b),
            _ => None,
        }
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<Blob> for FormValue {
    fn from(value: Blob) -> Self {
        FormValue::Blob(value)
    }
}

/// An ordered multi-map of bracket-path keys to leaf values.
///
/// Construction is append-only; nothing reorders or deduplicates entries.
///
/// # Examples
///
/// ```rust
/// use formpath::{decode, FormData};
///
/// let mut form = FormData::new();
/// form.append("items[0]", "first");
/// form.append("items[1]", "second");
///
/// let map = decode(&form).unwrap();
/// assert_eq!(map.get("items").and_then(|v| v.as_array()).map(Vec::len), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FormData {
    entries: Vec<(String, FormValue)>,
}

impl FormData {
    /// Creates an empty `FormData`.
    #[must_use]
    pub fn new() -> Self {
        FormData {
            entries: Vec::new(),
        }
    }

    /// Creates an empty `FormData` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FormData {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends an entry. Existing entries under the same key are kept.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<FormValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Returns the first value under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns all values under `key`, in entry order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a FormValue> {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` if at least one entry exists under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Returns the number of entries (not distinct keys).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries, in append order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns an iterator over the keys, in append order. Repeated keys
    /// appear once per entry.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl IntoIterator for FormData {
    type Item = (String, FormValue);
    type IntoIter = std::vec::IntoIter<(String, FormValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, FormValue)> for FormData {
    fn from_iter<T: IntoIterator<Item = (String, FormValue)>>(iter: T) -> Self {
        FormData {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, FormValue)> for FormData {
    fn extend<T: IntoIterator<Item = (String, FormValue)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order_and_duplicates() {
        let mut form = FormData::new();
        form.append("a", "1");
        form.append("b", "2");
        form.append("a", "3");

        let keys: Vec<_> = form.keys().collect();
        assert_eq!(keys, vec!["a", "b", "a"]);
        assert_eq!(form.get("a").and_then(|v| v.as_text()), Some("1"));

        let all: Vec<_> = form.get_all("a").filter_map(|v| v.as_text()).collect();
        assert_eq!(all, vec!["1", "3"]);
    }

    #[test]
    fn test_blob_entries() {
        let blob = Blob::new(vec![1u8, 2, 3], "application/pdf");
        let mut form = FormData::new();
        form.append("file", blob.clone());

        assert!(form.get("file").unwrap().is_blob());
        assert_eq!(form.get("file").and_then(|v| v.as_blob()), Some(&blob));
    }

    #[test]
    fn test_from_iterator() {
        let form: FormData = vec![
            ("x".to_string(), FormValue::from("1")),
            ("y".to_string(), FormValue::from("2")),
        ]
        .into_iter()
        .collect();

        assert_eq!(form.len(), 2);
        assert!(form.contains_key("y"));
        assert!(!form.contains_key("z"));
    }
}
