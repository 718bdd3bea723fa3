/// Builds a [`crate::Value`] from a JSON-like literal.
///
/// ```rust
/// use formpath::{record, Value};
///
/// let data = record!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["rust", "forms"],
///     "address": { "city": "Paris" }
/// });
/// assert!(data.is_object());
/// ```
#[macro_export]
macro_rules! record {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::record!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::RecordMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::RecordMap::new();
        $(
            object.insert($key.to_string(), $crate::record!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any expression
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}
