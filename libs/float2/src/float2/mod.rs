//! The [`Float2`] vector type.
//!
//! Construction and conversion live here; behavior is split across
//! `mutators` (in-place, chainable), `queries` (read-only), `assertions`
//! (opt-in validation) and `ops` (pure operator forms).

mod assertions;
mod mutators;
mod ops;
mod queries;

use crate::format::{check_decimals, format_number, render_fixed};
use crate::{Float2Error, Float2Result, HasXY};
use config::constants::{Float2Config, MIN_ARRAY_COMPONENTS, SHORT_STRING_DECIMALS};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A mutable two-dimensional `f64` vector.
///
/// Components are public and unchecked: NaN and infinities are legal values.
/// Derived `PartialEq` is exact; use [`Float2::equals`] for the
/// epsilon-tolerant comparison.
///
/// Serializes as the plain record `{"x": .., "y": ..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Float2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Float2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Builds a vector from two components. No validation.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Copies the components of any point.
    pub fn from_point(p: impl HasXY) -> Self {
        Self::new(p.x(), p.y())
    }

    /// Builds a vector from the first two elements of `values`; the rest are
    /// ignored.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when fewer than two elements are present.
    pub fn from_array(values: &[f64]) -> Float2Result<Self> {
        match values {
            [x, y, ..] => Ok(Self::new(*x, *y)),
            _ => {
                log::debug!("from_array rejected {} element(s)", values.len());
                Err(Float2Error::InvalidArgument(format!(
                    "arr must have at least {MIN_ARRAY_COMPONENTS} elements"
                )))
            }
        }
    }

    /// Builds a vector from a decoded `{x, y}` record.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when either field is missing or not a number.
    ///
    /// # Examples
    /// ```
    /// use float2::Float2;
    /// use serde_json::json;
    ///
    /// let v = Float2::from_json(&json!({"x": 1, "y": 2.5})).unwrap();
    /// assert_eq!(v, Float2::new(1.0, 2.5));
    /// assert!(Float2::from_json(&json!({"x": "1", "y": 2})).is_err());
    /// ```
    pub fn from_json(json: &Value) -> Float2Result<Self> {
        let x = number_field(json, "x")?;
        let y = number_field(json, "y")?;
        Ok(Self::new(x, y))
    }

    /// Renders the vector as a `{"x": .., "y": ..}` record.
    ///
    /// Non-finite components become `null`.
    pub fn to_json(&self) -> Value {
        serde_json::json!({ "x": self.x, "y": self.y })
    }

    /// `[x, y]`
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Returns an independent vector with the same components.
    pub fn copy(&self) -> Self {
        *self
    }

    /// `"x,y"` with each component fixed to two decimals.
    ///
    /// # Examples
    /// ```
    /// use float2::vec;
    /// assert_eq!(vec(1.0, 2.0 / 3.0).to_short_string(), "1.00,0.67");
    /// ```
    pub fn to_short_string(&self) -> String {
        self.render_fixed_pair(SHORT_STRING_DECIMALS)
    }

    /// `"x,y"` with each component fixed to `decimals` places.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `decimals` exceeds `MAX_FIXED_DECIMALS`.
    ///
    /// # Examples
    /// ```
    /// use float2::vec;
    /// assert_eq!(vec(2.5, 0.5).to_fixed_string(0).unwrap(), "3,1");
    /// assert!(vec(1.0, 2.0).to_fixed_string(70_000).is_err());
    /// ```
    pub fn to_fixed_string(&self, decimals: usize) -> Float2Result<String> {
        check_decimals(decimals)?;
        Ok(self.render_fixed_pair(decimals))
    }

    /// Fixed-point rendering using the precision from `config`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `config.short_decimals` was set past
    /// `MAX_FIXED_DECIMALS` without going through `Float2Config::new`.
    pub fn to_string_with(&self, config: &Float2Config) -> Float2Result<String> {
        self.to_fixed_string(config.short_decimals)
    }

    fn render_fixed_pair(&self, decimals: usize) -> String {
        format!(
            "{},{}",
            render_fixed(self.x, decimals),
            render_fixed(self.y, decimals)
        )
    }
}

/// Renders as `"x,y"` with default number formatting.
impl fmt::Display for Float2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", format_number(self.x), format_number(self.y))
    }
}

fn number_field(json: &Value, key: &str) -> Float2Result<f64> {
    match json.get(key) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| Float2Error::InvalidArgument(format!("not a number: {n}"))),
        other => {
            let shown = other.map_or_else(|| "undefined".to_string(), Value::to_string);
            log::debug!("from_json rejected field {key}: {shown}");
            Err(Float2Error::InvalidArgument(format!("not a number: {shown}")))
        }
    }
}
