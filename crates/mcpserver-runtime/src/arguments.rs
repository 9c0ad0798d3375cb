//! Typed access to tool call arguments.
//!
//! Singular parsing is lenient and never fails: a missing, `null` or
//! unparseable argument yields the caller's default. Numbers may arrive as
//! JSON numbers or numeric strings; integers must be integral and within the
//! target range.

use crate::JsonObject;
use serde_json::Value;
use std::str::FromStr;

/// Arguments of a single tool call.
///
/// # Examples
///
/// ```
/// use mcpserver_runtime::{Arguments, coerce};
/// use serde_json::json;
///
/// let args = Arguments::from_value(json!({"a": 2, "b": "3", "tags": ["x", 1, "y"]}));
///
/// assert_eq!(args.parse_i32("a", 0), 2);
/// assert_eq!(args.parse_i32("b", 0), 3);
/// assert_eq!(args.parse_i32("missing", 7), 7);
/// assert_eq!(args.repeated("tags", coerce::string), vec!["x", "y"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: JsonObject,
}

impl Arguments {
    /// Wraps an argument object.
    #[must_use]
    pub const fn new(values: JsonObject) -> Self {
        Self { values }
    }

    /// Wraps a JSON value; anything other than an object yields no arguments.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self { values },
            _ => Self::default(),
        }
    }

    /// Returns the raw argument, treating `null` as absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    /// Returns `true` if no arguments were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads a boolean (`true`/`false` or the strings `"true"`/`"false"`).
    #[must_use]
    pub fn parse_bool(&self, name: &str, default: bool) -> bool {
        self.get(name)
            .and_then(|value| match value {
                Value::Bool(b) => Some(*b),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
            .unwrap_or(default)
    }

    /// Reads a signed 32-bit integer.
    #[must_use]
    pub fn parse_i32(&self, name: &str, default: i32) -> i32 {
        self.get(name).and_then(lenient_integer).unwrap_or(default)
    }

    /// Reads an unsigned 32-bit integer.
    #[must_use]
    pub fn parse_u32(&self, name: &str, default: u32) -> u32 {
        self.get(name).and_then(lenient_integer).unwrap_or(default)
    }

    /// Reads a signed 64-bit integer.
    #[must_use]
    pub fn parse_i64(&self, name: &str, default: i64) -> i64 {
        self.get(name).and_then(lenient_integer).unwrap_or(default)
    }

    /// Reads an unsigned 64-bit integer.
    #[must_use]
    pub fn parse_u64(&self, name: &str, default: u64) -> u64 {
        self.get(name).and_then(lenient_integer).unwrap_or(default)
    }

    /// Reads a 32-bit float.
    #[must_use]
    pub fn parse_f32(&self, name: &str, default: f32) -> f32 {
        self.get(name)
            .and_then(|value| match value {
                Value::String(s) => s.trim().parse().ok(),
                other => crate::coerce::f32(other),
            })
            .unwrap_or(default)
    }

    /// Reads a 64-bit float.
    #[must_use]
    pub fn parse_f64(&self, name: &str, default: f64) -> f64 {
        self.get(name)
            .and_then(|value| match value {
                Value::String(s) => s.trim().parse().ok(),
                other => crate::coerce::f64(other),
            })
            .unwrap_or(default)
    }

    /// Reads a string; numbers and booleans are stringified.
    #[must_use]
    pub fn parse_string(&self, name: &str, default: String) -> String {
        self.get(name)
            .and_then(|value| match value {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .unwrap_or(default)
    }

    /// Reads a string-keyed object; a string holding a JSON object is accepted.
    #[must_use]
    pub fn parse_object(&self, name: &str, default: JsonObject) -> JsonObject {
        self.get(name)
            .and_then(|value| match value {
                Value::Object(map) => Some(map.clone()),
                Value::String(s) => match serde_json::from_str(s) {
                    Ok(Value::Object(map)) => Some(map),
                    _ => None,
                },
                _ => None,
            })
            .unwrap_or(default)
    }

    /// Reads a sequence, converting each element with `coerce`.
    ///
    /// Elements that fail conversion are skipped; a missing or non-array
    /// argument yields an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcpserver_runtime::{Arguments, coerce};
    /// use serde_json::json;
    ///
    /// let args = Arguments::from_value(json!({"ids": [1, -2, "3", 4.5]}));
    /// assert_eq!(args.repeated("ids", coerce::u32), vec![1]);
    /// assert!(args.repeated("absent", coerce::u32).is_empty());
    /// ```
    pub fn repeated<T, F>(&self, name: &str, coerce: F) -> Vec<T>
    where
        F: Fn(&Value) -> Option<T>,
    {
        let Some(Value::Array(items)) = self.get(name) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match coerce(item) {
                Some(value) => out.push(value),
                None => tracing::debug!(
                    argument = name,
                    index,
                    "Skipping array element that does not match the field type"
                ),
            }
        }
        out
    }
}

impl From<JsonObject> for Arguments {
    fn from(values: JsonObject) -> Self {
        Self::new(values)
    }
}

impl From<Option<JsonObject>> for Arguments {
    fn from(values: Option<JsonObject>) -> Self {
        values.map(Self::new).unwrap_or_default()
    }
}

fn lenient_integer<T>(value: &Value) -> Option<T>
where
    T: TryFrom<i64> + TryFrom<u64> + FromStr,
{
    match value {
        Value::String(s) => s.trim().parse().ok(),
        other => crate::coerce::integer(other),
    }
}
