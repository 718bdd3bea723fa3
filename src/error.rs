//! Error types for form flattening and reconstruction.
//!
//! The error surface is deliberately small: malformed bracket keys, key
//! collisions, and sparse array indexes are all resolved by deterministic
//! policy during decoding (see [`mod@crate::decode`]) rather than by raising.
//! The only fail-fast condition is handing the encoder a root value that is
//! not a plain mapping, plus two guards for the edges: `DepthLimit` for
//! pathological nesting and `UnsupportedType` for serde bridge inputs that
//! have no form representation.
//!
//! ## Examples
//!
//! ```rust
//! use formpath::{encode, Error, Value};
//!
//! // Only plain mappings can be flattened.
//! let result = encode(&Value::Null);
//! assert!(matches!(result, Err(Error::InvalidInput(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The encoder was given a root value that is not a plain mapping.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Nesting depth of the input exceeded the configured bound.
    #[error("nesting depth exceeds the limit of {0}")]
    DepthLimit(usize),

    /// The serde bridge was given a type with no form representation.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error raised through the serde error traits.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid-input error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formpath::Error;
    ///
    /// let err = Error::invalid_input("root must be a plain mapping");
    /// assert!(err.to_string().contains("plain mapping"));
    /// ```
    pub fn invalid_input<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidInput(msg.to_string())
    }

    /// Creates an unsupported-type error for values the serde bridge cannot
    /// express as form data.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
