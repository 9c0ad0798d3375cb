//! Text rendering of response fields.
//!
//! Every function mirrors a parser in [`crate::Arguments`]: integers render in
//! decimal and floats in shortest round-trip notation without exponent, so
//! parsing a rendered number yields the original value.
//!
//! # Examples
//!
//! ```
//! use mcpserver_runtime::format;
//!
//! assert_eq!(format::integer(&5), "5");
//! assert_eq!(format::float(&10.5), "10.5");
//! assert_eq!(format::boolean(&true), "true");
//! assert_eq!(format::string_list(&["x".to_string(), "y".to_string()]), r#"["x", "y"]"#);
//! assert_eq!(format::list::<i32>(&[]), "[]");
//! ```

#![allow(clippy::trivially_copy_pass_by_ref)]

use crate::JsonObject;
use std::fmt::Display;

/// Renders `true` or `false`.
#[must_use]
pub fn boolean(value: &bool) -> String {
    value.to_string()
}

/// Renders an integer in decimal.
#[must_use]
pub fn integer<T: Display>(value: &T) -> String {
    value.to_string()
}

/// Renders a float in fixed-point notation.
#[must_use]
pub fn float<T: Display>(value: &T) -> String {
    value.to_string()
}

/// Renders a string verbatim.
#[must_use]
pub fn text(value: &str) -> String {
    value.to_string()
}

/// Renders an object as compact JSON.
#[must_use]
pub fn object(value: &JsonObject) -> String {
    serde_json::Value::Object(value.clone()).to_string()
}

/// Renders a sequence of displayable values as `[a, b]`.
#[must_use]
pub fn list<T: Display>(values: &[T]) -> String {
    bracketed(values.iter().map(ToString::to_string))
}

/// Renders a sequence of strings quoted and escaped, as `["a", "b"]`.
#[must_use]
pub fn string_list(values: &[String]) -> String {
    bracketed(values.iter().map(|v| format!("{v:?}")))
}

/// Renders a sequence of objects as `[{...}, {...}]`.
#[must_use]
pub fn object_list(values: &[JsonObject]) -> String {
    bracketed(values.iter().map(object))
}

fn bracketed(items: impl Iterator<Item = String>) -> String {
    let mut out = String::from("[");
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&item);
    }
    out.push(']');
    out
}
