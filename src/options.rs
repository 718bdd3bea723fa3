//! Configuration options for flattening and reconstruction.
//!
//! This module provides:
//!
//! - [`EncodeOptions`]: date stringification strategy and nesting depth bound
//! - [`DecodeOptions`]: policy for degenerate (empty-string) leaf values and
//!   a cap on the largest array index the decoder will materialize
//!
//! ## Examples
//!
//! ```rust
//! use formpath::{DateFormat, DecodeOptions, EmptyString, EncodeOptions};
//!
//! // Dates as epoch milliseconds instead of ISO-8601
//! let encode = EncodeOptions::new().with_date_format(DateFormat::Timestamp);
//!
//! // Blank submissions become nulls instead of empty strings
//! let decode = DecodeOptions::new().with_empty_string(EmptyString::SetNull);
//! # let _ = (encode, decode);
//! ```

/// Default bound on input nesting depth during flattening.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default bound on the largest array index the decoder will materialize.
pub const DEFAULT_MAX_INDEX: usize = 10_000;

/// Strategy for stringifying date leaves during flattening.
///
/// # Examples
///
/// ```rust
/// use formpath::DateFormat;
///
/// assert_eq!(DateFormat::default(), DateFormat::Iso);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum DateFormat {
    /// RFC 3339 / ISO-8601 with millisecond precision and `Z` suffix
    /// (`2026-08-26T10:00:00.000Z`). The default.
    #[default]
    Iso,
    /// Milliseconds since the Unix epoch, as a decimal string.
    Timestamp,
    /// chrono's default textual form (`2026-08-26 10:00:00 UTC`).
    String,
}

/// Policy for text leaves whose trimmed form is empty, applied during
/// reconstruction.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum EmptyString {
    /// Keep the raw string unchanged. The default.
    #[default]
    Preserve,
    /// Store an explicit null.
    SetNull,
    /// Erase the slot: the key is omitted from a mapping, an array slot is
    /// left as a null hole.
    SetUndefined,
}

/// Configuration for [`crate::encode()`].
///
/// # Examples
///
/// ```rust
/// use formpath::{DateFormat, EncodeOptions};
///
/// let options = EncodeOptions::new()
///     .with_date_format(DateFormat::Timestamp)
///     .with_max_depth(16);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    pub date_format: DateFormat,
    pub max_depth: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            date_format: DateFormat::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EncodeOptions {
    /// Creates default options (ISO dates, depth bound of
    /// [`DEFAULT_MAX_DEPTH`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date stringification strategy.
    #[must_use]
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Sets the bound on input nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Configuration for [`crate::decode()`].
///
/// # Examples
///
/// ```rust
/// use formpath::{DecodeOptions, EmptyString};
///
/// let options = DecodeOptions::new()
///     .with_empty_string(EmptyString::SetNull)
///     .with_max_index(100);
/// assert_eq!(options.empty_string, EmptyString::SetNull);
/// assert_eq!(options.max_index, 100);
/// ```
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    pub empty_string: EmptyString,
    /// Largest array index the decoder will materialize. Keys pushed far
    /// beyond the cap cannot force an allocation proportional to the index;
    /// an entry addressing a slot past the cap is dropped whole, like one
    /// whose index overflows `usize`.
    pub max_index: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            empty_string: EmptyString::default(),
            max_index: DEFAULT_MAX_INDEX,
        }
    }
}

impl DecodeOptions {
    /// Creates default options (empty strings preserved, index cap of
    /// [`DEFAULT_MAX_INDEX`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the empty-string policy.
    #[must_use]
    pub fn with_empty_string(mut self, empty_string: EmptyString) -> Self {
        self.empty_string = empty_string;
        self
    }

    /// Sets the bound on the largest materialized array index.
    #[must_use]
    pub fn with_max_index(mut self, max_index: usize) -> Self {
        self.max_index = max_index;
        self
    }
}
