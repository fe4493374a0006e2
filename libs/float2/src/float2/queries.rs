//! Read-only queries.

use super::Float2;
use crate::{functions, HasXY};
use config::constants::{approx_equal, approx_zero, Float2Config, EPSILON};

impl Float2 {
    // =========================================================================
    // PREDICATES
    // =========================================================================

    /// Both components within epsilon of zero.
    pub fn is_zero(&self) -> bool {
        approx_zero(self.x) && approx_zero(self.y)
    }

    /// Both components within `tolerance` of zero.
    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.x.abs() < tolerance && self.y.abs() < tolerance
    }

    /// Both components within epsilon of `v`'s.
    pub fn equals(&self, v: impl HasXY) -> bool {
        approx_equal(v.x(), self.x) && approx_equal(v.y(), self.y)
    }

    /// Both components within `tolerance` of `v`'s.
    pub fn equals_within(&self, v: impl HasXY, tolerance: f64) -> bool {
        (v.x() - self.x).abs() < tolerance && (v.y() - self.y).abs() < tolerance
    }

    /// [`Float2::equals_within`] using the tolerance from `config`.
    pub fn equals_with(&self, v: impl HasXY, config: &Float2Config) -> bool {
        self.equals_within(v, config.tolerance)
    }

    /// Neither component is NaN. Infinities are ok.
    pub fn is_ok(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }

    /// Both components are integers representable as `i32`.
    ///
    /// Integral values outside the `i32` range report false.
    pub fn is_ints(&self) -> bool {
        is_i32(self.x) && is_i32(self.y)
    }

    /// True when the length is NOT within epsilon of one.
    ///
    /// The sense is inverted relative to the name and is kept as-is for
    /// existing call sites. Use [`Float2::is_normalized`] for the plain
    /// unit-length check.
    ///
    /// # Examples
    /// ```
    /// use float2::vec;
    /// assert!(vec(3.0, 4.0).is_unit());
    /// assert!(!vec(1.0, 0.0).is_unit());
    /// ```
    pub fn is_unit(&self) -> bool {
        (1.0 - self.mag()).abs() > EPSILON
    }

    /// Length within epsilon of one.
    pub fn is_normalized(&self) -> bool {
        (1.0 - self.mag()).abs() < EPSILON
    }

    /// Both components `>= 0`.
    pub fn is_positive(&self) -> bool {
        self.x >= 0.0 && self.y >= 0.0
    }

    /// Both components strictly less than `p`'s.
    pub fn is_less_than(&self, p: impl HasXY) -> bool {
        self.x < p.x() && self.y < p.y()
    }

    /// Both components strictly greater than `p`'s.
    pub fn is_greater_than(&self, p: impl HasXY) -> bool {
        self.x > p.x() && self.y > p.y()
    }

    // =========================================================================
    // METRICS
    // =========================================================================

    /// Dot product with `v`.
    pub fn dot(&self, v: impl HasXY) -> f64 {
        functions::dot(self, v)
    }

    /// Dot product with `(x, y)`.
    pub fn dot_flat(&self, x: f64, y: f64) -> f64 {
        functions::dot_flat(self.x, self.y, x, y)
    }

    /// Length.
    pub fn mag(&self) -> f64 {
        functions::mag(self)
    }

    /// Squared length.
    pub fn mag_squared(&self) -> f64 {
        functions::mag_squared_flat(self.x, self.y)
    }

    /// Distance to `p`.
    pub fn distance(&self, p: impl HasXY) -> f64 {
        functions::distance(self, p)
    }

    /// Squared distance to `p`.
    pub fn distance_squared(&self, p: impl HasXY) -> f64 {
        functions::distance_squared(self, p)
    }

    /// Distance to `(x, y)`.
    pub fn distance_flat(&self, x: f64, y: f64) -> f64 {
        functions::mag_flat(self.x - x, self.y - y)
    }

    /// Squared distance to `(x, y)`.
    pub fn distance_squared_flat(&self, x: f64, y: f64) -> f64 {
        functions::mag_squared_flat(self.x - x, self.y - y)
    }

    /// `x * y`
    pub fn area(&self) -> f64 {
        self.x * self.y
    }
}

fn is_i32(value: f64) -> bool {
    // `as` saturates and maps NaN to 0, so any lossy cast fails the comparison
    f64::from(value as i32) == value
}
