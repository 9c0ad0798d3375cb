//! Strict element coercion for repeated arguments.
//!
//! Each function accepts exactly one JSON shape and returns `None` for
//! anything else. Integer coercers accept JSON numbers that are integral and
//! in range for the target type; unsigned targets reject negatives.

use crate::JsonObject;
use serde_json::Value;

/// Accepts JSON strings.
#[must_use]
pub fn string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

/// Accepts JSON booleans.
#[must_use]
pub const fn boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        _ => None,
    }
}

/// Accepts integral JSON numbers within `i32` range.
#[must_use]
pub fn i32(value: &Value) -> Option<i32> {
    integer(value)
}

/// Accepts integral, non-negative JSON numbers within `u32` range.
#[must_use]
pub fn u32(value: &Value) -> Option<u32> {
    integer(value)
}

/// Accepts integral JSON numbers within `i64` range.
#[must_use]
pub fn i64(value: &Value) -> Option<i64> {
    integer(value)
}

/// Accepts integral, non-negative JSON numbers within `u64` range.
#[must_use]
pub fn u64(value: &Value) -> Option<u64> {
    integer(value)
}

/// Accepts any JSON number, narrowed to `f32`.
///
/// Finite values too large for `f32` are rejected rather than becoming
/// infinite.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f32(value: &Value) -> Option<f32> {
    let wide = value.as_f64()?;
    let narrow = wide as f32;
    (narrow.is_finite() || !wide.is_finite()).then_some(narrow)
}

/// Accepts any JSON number.
#[must_use]
pub fn f64(value: &Value) -> Option<f64> {
    value.as_f64()
}

/// Accepts JSON objects.
#[must_use]
pub fn object(value: &Value) -> Option<JsonObject> {
    value.as_object().cloned()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn integer<T>(value: &Value) -> Option<T>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return T::try_from(i).ok();
    }
    if let Some(u) = n.as_u64() {
        return T::try_from(u).ok();
    }
    let f = n.as_f64()?;
    if f.fract() != 0.0 || f < i64::MIN as f64 || f >= i64::MAX as f64 {
        return None;
    }
    T::try_from(f as i64).ok()
}
