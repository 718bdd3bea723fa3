//! Flattening nested values into flat bracket-path entries.
//!
//! The flattener walks a plain mapping depth-first, pre-order, and appends
//! one [`FormData`] entry per leaf, composing keys as `prefix[segment]`:
//!
//! - plain mappings recurse by key, in insertion order;
//! - arrays recurse by 0-based position;
//! - strings and blobs are emitted verbatim;
//! - numbers and booleans are emitted via their `Display` form;
//! - dates are stringified per [`DateFormat`];
//! - nulls emit nothing at all.
//!
//! Most users should go through [`crate::encode()`] /
//! [`crate::encode_with_options`]:
//!
//! ```rust
//! use formpath::{encode, record};
//!
//! let value = record!({
//!     "name": "Alice",
//!     "address": { "city": "Paris" },
//!     "tags": ["rust", "forms"]
//! });
//!
//! let form = encode(&value).unwrap();
//! let keys: Vec<_> = form.keys().collect();
//! assert_eq!(keys, vec!["name", "address[city]", "tags[0]", "tags[1]"]);
//! ```
//!
//! This module also houses [`ValueSerializer`], the serde `Serializer` that
//! turns any `T: Serialize` into a [`Value`] tree so it can be flattened
//! (see [`crate::to_value`] and [`crate::to_form`]).

use crate::options::DateFormat;
use crate::{path, Error, FormData, Number, RecordMap, Result, Value};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{ser, Serialize};

/// Flattens a plain mapping into an ordered flat multi-map.
///
/// Fails fast with [`Error::InvalidInput`] before emitting anything if the
/// root is not a plain mapping.
pub(crate) fn encode_value(root: &Value, options: &crate::EncodeOptions) -> Result<FormData> {
    let map = match root {
        Value::Object(map) => map,
        other => {
            return Err(Error::invalid_input(format!(
                "encode root must be a plain mapping, found {}",
                other.kind()
            )))
        }
    };

    let mut out = FormData::new();
    for (key, value) in map.iter() {
        flatten_into(&mut out, key.clone(), value, options, 1)?;
    }
    Ok(out)
}

fn flatten_into(
    out: &mut FormData,
    key: String,
    value: &Value,
    options: &crate::EncodeOptions,
    depth: usize,
) -> Result<()> {
    if depth > options.max_depth {
        return Err(Error::DepthLimit(options.max_depth));
    }
    match value {
        // Absent fields do not appear in the flat representation.
        Value::Null => {}
        Value::Object(map) => {
            for (child, v) in map.iter() {
                flatten_into(out, path::child_key(&key, child), v, options, depth + 1)?;
            }
        }
        Value::Array(items) => {
            for (index, v) in items.iter().enumerate() {
                let child = path::child_key(&key, &index.to_string());
                flatten_into(out, child, v, options, depth + 1)?;
            }
        }
        Value::String(s) => out.append(key, s.clone()),
        Value::Blob(b) => out.append(key, b.clone()),
        Value::Bool(b) => out.append(key, b.to_string()),
        Value::Number(n) => out.append(key, n.to_string()),
        Value::Date(dt) => out.append(key, format_date(dt, &options.date_format)),
    }
    Ok(())
}

fn format_date(dt: &DateTime<Utc>, format: &DateFormat) -> String {
    match format {
        DateFormat::Iso => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        DateFormat::Timestamp => dt.timestamp_millis().to_string(),
        DateFormat::String => dt.to_string(),
    }
}

/// A serde `Serializer` that produces a [`Value`] tree.
///
/// Used by [`crate::to_value`] to bridge arbitrary `Serialize` types into
/// the dynamic value model before flattening. Map keys must be strings;
/// enum variants with payloads have no form representation and are
/// rejected with [`Error::UnsupportedType`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: RecordMap,
    current_key: Option<String>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Number(Number::Integer(v as i64)))
        } else {
            Ok(Value::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Blob(crate::Blob::new(
            v.to_vec(),
            "application/octet-stream",
        )))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: RecordMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match key.serialize(ValueSerializer)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => Err(Error::custom(format!(
                "map keys must be strings, found {}",
                other.kind()
            ))),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}
