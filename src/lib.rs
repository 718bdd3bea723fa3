//! # formpath
//!
//! Convert between nested key/value data and the flat multi-map shape of an
//! HTML form submission, where keys encode nesting via bracket paths
//! (`address[city]`, `tags[0]`).
//!
//! ## The two directions
//!
//! - **Flattening** ([`encode`]): walk a nested [`Value`] depth-first and
//!   emit ordered `(bracket-path key, leaf)` pairs into a [`FormData`]
//!   multi-map, the shape a multipart or urlencoded body builder wants.
//! - **Reconstruction** ([`decode`]): replay ordered flat entries and
//!   rebuild the nested structure, inferring at every nesting level whether
//!   the container is an array (numeric-index segments) or a mapping
//!   (name segments), and resolving collisions deterministically.
//!
//! Both directions are pure, stateless, and synchronous; each call owns its
//! inputs and outputs, so invocations are freely concurrent.
//!
//! ## Quick Start
//!
//! ```rust
//! use formpath::{decode, encode, record, Value};
//!
//! let profile = record!({
//!     "name": "Alice",
//!     "address": { "city": "Paris", "zip": "75018" },
//!     "tags": ["rust", "forms"]
//! });
//!
//! let form = encode(&profile).unwrap();
//! let keys: Vec<_> = form.keys().collect();
//! assert_eq!(
//!     keys,
//!     vec!["name", "address[city]", "address[zip]", "tags[0]", "tags[1]"]
//! );
//!
//! let back = decode(&form).unwrap();
//! let address = back.get("address").and_then(Value::as_object).unwrap();
//! assert_eq!(address.get("city").and_then(Value::as_str), Some("Paris"));
//! ```
//!
//! ## From typed data
//!
//! Any `T: Serialize` can be bridged into the dynamic [`Value`] model and
//! flattened in one step:
//!
//! ```rust
//! use formpath::to_form;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Signup {
//!     email: String,
//!     newsletter: bool,
//! }
//!
//! let form = to_form(&Signup {
//!     email: "a@example.com".to_string(),
//!     newsletter: true,
//! })
//! .unwrap();
//! assert_eq!(form.get("newsletter").and_then(|v| v.as_text()), Some("true"));
//! ```
//!
//! ## What this is not
//!
//! Flat leaves carry no type tags: every scalar flattens to a string (blobs
//! stay opaque bytes), and decoding never re-infers numbers, booleans, or
//! dates; a decoded leaf is always a string or a blob. Transport concerns
//! (multipart framing, percent-encoding, HTTP) live outside this crate.

pub mod decode;
pub mod encode;
pub mod error;
pub mod form;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod value;

pub use encode::ValueSerializer;
pub use error::{Error, Result};
pub use form::{FormData, FormValue};
pub use map::RecordMap;
pub use options::{
    DateFormat, DecodeOptions, EmptyString, EncodeOptions, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INDEX,
};
pub use value::{Blob, Number, Value};

use serde::Serialize;

/// Flattens a plain mapping into an ordered flat multi-map.
///
/// # Examples
///
/// ```rust
/// use formpath::{encode, record};
///
/// let value = record!({ "user": { "name": "Alice" } });
/// let form = encode(&value).unwrap();
/// assert_eq!(form.get("user[name]").and_then(|v| v.as_text()), Some("Alice"));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `value` is not a plain mapping, before
/// emitting any entry, and [`Error::DepthLimit`] if nesting exceeds the
/// default depth bound.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(value: &Value) -> Result<FormData> {
    encode_with_options(value, EncodeOptions::default())
}

/// Flattens a plain mapping with custom options.
///
/// # Examples
///
/// ```rust
/// use formpath::{encode_with_options, record, DateFormat, EncodeOptions};
///
/// let value = record!({ "name": "Alice" });
/// let options = EncodeOptions::new().with_date_format(DateFormat::Timestamp);
/// let form = encode_with_options(&value, options).unwrap();
/// assert_eq!(form.len(), 1);
/// ```
///
/// # Errors
///
/// Same conditions as [`encode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options(value: &Value, options: EncodeOptions) -> Result<FormData> {
    encode::encode_value(value, &options)
}

/// Rebuilds a nested mapping from an ordered flat multi-map.
///
/// Container kinds are inferred per nesting level from the key segments;
/// collisions and malformed keys resolve by deterministic policy (see the
/// [`mod@crate::decode`] module docs) rather than by raising.
///
/// # Examples
///
/// ```rust
/// use formpath::{decode, FormData, Value};
///
/// let mut form = FormData::new();
/// form.append("items[0]", "first");
/// form.append("items[1]", "second");
///
/// let map = decode(&form).unwrap();
/// let items = map.get("items").and_then(Value::as_array).unwrap();
/// assert_eq!(items.len(), 2);
/// ```
///
/// # Errors
///
/// Reconstruction itself never fails; the `Result` return keeps the
/// signature uniform with [`encode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(form: &FormData) -> Result<RecordMap> {
    decode_with_options(form, DecodeOptions::default())
}

/// Rebuilds a nested mapping with custom options.
///
/// # Examples
///
/// ```rust
/// use formpath::{decode_with_options, DecodeOptions, EmptyString, FormData, Value};
///
/// let mut form = FormData::new();
/// form.append("note", "");
///
/// let options = DecodeOptions::new().with_empty_string(EmptyString::SetNull);
/// let map = decode_with_options(&form, options).unwrap();
/// assert_eq!(map.get("note"), Some(&Value::Null));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_options(form: &FormData, options: DecodeOptions) -> Result<RecordMap> {
    Ok(decode::decode_form(form, &options))
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// Useful when the structure isn't known at compile time, or as the first
/// half of [`to_form`].
///
/// # Examples
///
/// ```rust
/// use formpath::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (non-string map keys,
/// enum variants with payloads).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serializes any `T: Serialize` and flattens it in one step.
///
/// # Examples
///
/// ```rust
/// use formpath::to_form;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let form = to_form(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(form.get("x").and_then(|v| v.as_text()), Some("1"));
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or if the serialized value is
/// not a plain mapping at the root.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_form<T>(value: &T) -> Result<FormData>
where
    T: ?Sized + Serialize,
{
    to_form_with_options(value, EncodeOptions::default())
}

/// Serializes and flattens with custom options.
///
/// # Errors
///
/// Same conditions as [`to_form`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_form_with_options<T>(value: &T, options: EncodeOptions) -> Result<FormData>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    encode_with_options(&value, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Address {
        city: String,
        zip: Option<String>,
    }

    #[derive(Serialize)]
    struct User {
        name: String,
        active: bool,
        address: Address,
        tags: Vec<String>,
    }

    #[test]
    fn test_struct_to_form_and_back() {
        let user = User {
            name: "Alice".to_string(),
            active: true,
            address: Address {
                city: "Paris".to_string(),
                zip: None,
            },
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let form = to_form(&user).unwrap();
        let keys: Vec<_> = form.keys().collect();
        // zip is None, so it is omitted entirely
        assert_eq!(
            keys,
            vec!["name", "active", "address[city]", "tags[0]", "tags[1]"]
        );

        let map = decode(&form).unwrap();
        assert_eq!(map.get("name").and_then(Value::as_str), Some("Alice"));
        assert_eq!(map.get("active").and_then(Value::as_str), Some("true"));
        let tags = map.get("tags").and_then(Value::as_array).unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_scalar_roundtrip_stringifies_leaves() {
        let value = record!({ "n": 7, "ok": false, "s": "text" });
        let map = decode(&encode(&value).unwrap()).unwrap();
        assert_eq!(map.get("n").and_then(Value::as_str), Some("7"));
        assert_eq!(map.get("ok").and_then(Value::as_str), Some("false"));
        assert_eq!(map.get("s").and_then(Value::as_str), Some("text"));
    }

    #[test]
    fn test_to_value_rejects_non_string_keys() {
        use std::collections::BTreeMap;
        let mut map = BTreeMap::new();
        map.insert(1u32, "one");
        assert!(to_value(&map).is_err());
    }

    #[test]
    fn test_blob_identity_through_roundtrip() {
        let blob = Blob::new(vec![1u8, 2, 3, 4], "application/pdf");
        let mut map = RecordMap::new();
        map.insert("file".to_string(), Value::Blob(blob.clone()));

        let form = encode(&Value::Object(map)).unwrap();
        let back = decode(&form).unwrap();
        let decoded = back.get("file").and_then(Value::as_blob).unwrap();
        // same allocation, threaded through both directions
        assert_eq!(decoded.data().as_ptr(), blob.data().as_ptr());
        assert_eq!(decoded.content_type(), "application/pdf");
    }

    #[test]
    fn test_value_serde_json_interop() {
        let value = record!({ "name": "Alice", "age": 30, "tags": ["x"] });
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"name":"Alice","age":30,"tags":["x"]}"#);

        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }
}
