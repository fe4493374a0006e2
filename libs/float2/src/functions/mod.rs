//! Free functions over structural points.
//!
//! Constructors and converters build [`Float2`] values; the metric functions
//! are pure and accept any [`HasXY`]. The `*_flat` variants take unpacked
//! components for hot paths that already hold bare coordinates.

use crate::{Float2, Float2Result, HasXY};
use serde_json::Value;

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Builds a vector from two components. No validation.
pub fn vec(x: f64, y: f64) -> Float2 {
    Float2::new(x, y)
}

/// `(0, 0)`.
pub fn zero() -> Float2 {
    Float2::ZERO
}

/// `(1, 1)`.
pub fn one() -> Float2 {
    Float2::ONE
}

/// Builds a vector from the first two elements of `values`.
///
/// # Errors
///
/// `InvalidArgument` when fewer than two elements are present.
///
/// # Examples
/// ```
/// use float2::{from_array, vec};
/// assert!(from_array(&[1.0, 2.0, 3.0]).unwrap().equals(vec(1.0, 2.0)));
/// assert!(from_array(&[1.0]).is_err());
/// ```
pub fn from_array(values: &[f64]) -> Float2Result<Float2> {
    Float2::from_array(values)
}

/// Builds a vector from a decoded `{x, y}` record.
///
/// # Errors
///
/// `InvalidArgument` when either field is missing or not a number.
pub fn from_json(json: &Value) -> Float2Result<Float2> {
    Float2::from_json(json)
}

/// Alias of [`from_json`].
pub fn as_float2(json: &Value) -> Float2Result<Float2> {
    Float2::from_json(json)
}

/// Returns true when both `x` and `y` of `json` are numbers. Never fails.
///
/// # Examples
/// ```
/// use float2::is_point;
/// use serde_json::json;
///
/// assert!(is_point(&json!({"x": 1, "y": 2.5})));
/// assert!(!is_point(&json!({"x": "1", "y": 2})));
/// ```
pub fn is_point(json: &Value) -> bool {
    json.get("x").is_some_and(Value::is_number) && json.get("y").is_some_and(Value::is_number)
}

// =============================================================================
// METRICS
// =============================================================================

/// `a.x * b.x + a.y * b.y`
pub fn dot(a: impl HasXY, b: impl HasXY) -> f64 {
    dot_flat(a.x(), a.y(), b.x(), b.y())
}

/// [`dot`] with unpacked components.
pub fn dot_flat(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    (ax * bx) + (ay * by)
}

/// Euclidean distance between two points.
pub fn distance(a: impl HasXY, b: impl HasXY) -> f64 {
    distance_squared(a, b).sqrt()
}

/// Squared Euclidean distance between two points.
pub fn distance_squared(a: impl HasXY, b: impl HasXY) -> f64 {
    mag_squared_flat(a.x() - b.x(), a.y() - b.y())
}

/// Length of `p`.
pub fn mag(p: impl HasXY) -> f64 {
    mag_flat(p.x(), p.y())
}

/// Length of `(x, y)`.
pub fn mag_flat(x: f64, y: f64) -> f64 {
    mag_squared_flat(x, y).sqrt()
}

/// Squared length of `(x, y)`.
pub fn mag_squared_flat(x: f64, y: f64) -> f64 {
    (x * x) + (y * y)
}

#[cfg(test)]
mod tests;
