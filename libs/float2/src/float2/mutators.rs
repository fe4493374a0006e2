//! In-place mutators. Each returns `&mut Self` so calls chain.

use super::Float2;
use crate::{Float2Error, Float2Result, HasXY};
use config::constants::approx_zero;

impl Float2 {
    // =========================================================================
    // ASSIGNMENT
    // =========================================================================

    /// Copies both components from `v`.
    pub fn set(&mut self, v: impl HasXY) -> &mut Self {
        self.set_flat(v.x(), v.y())
    }

    /// Assigns both components.
    pub fn set_flat(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Assigns `x`.
    pub fn set_x(&mut self, v: f64) -> &mut Self {
        self.x = v;
        self
    }

    /// Assigns `y`.
    pub fn set_y(&mut self, v: f64) -> &mut Self {
        self.y = v;
        self
    }

    // =========================================================================
    // ARITHMETIC
    // =========================================================================

    /// `self += v`
    ///
    /// # Examples
    /// ```
    /// use float2::vec;
    /// assert!(vec(1.0, 2.0).add(vec(3.0, 4.0)).equals(vec(4.0, 6.0)));
    /// ```
    pub fn add(&mut self, v: impl HasXY) -> &mut Self {
        self.add_flat(v.x(), v.y())
    }

    /// `self += (x, y)`
    pub fn add_flat(&mut self, x: f64, y: f64) -> &mut Self {
        self.x += x;
        self.y += y;
        self
    }

    /// `self.x += v`
    pub fn add_x(&mut self, v: f64) -> &mut Self {
        self.x += v;
        self
    }

    /// `self.y += v`
    pub fn add_y(&mut self, v: f64) -> &mut Self {
        self.y += v;
        self
    }

    /// `self += s * v` for a scalar `s`.
    pub fn add_scaled(&mut self, s: f64, v: impl HasXY) -> &mut Self {
        self.x += s * v.x();
        self.y += s * v.y();
        self
    }

    /// Component-wise multiply-accumulate: `self += s ⊙ v`.
    ///
    /// Unlike [`Float2::add_scaled`], `s` is a point, not a scalar.
    pub fn add_multiplied(&mut self, s: impl HasXY, v: impl HasXY) -> &mut Self {
        self.x += s.x() * v.x();
        self.y += s.y() * v.y();
        self
    }

    /// `self -= v`
    pub fn sub(&mut self, v: impl HasXY) -> &mut Self {
        self.x -= v.x();
        self.y -= v.y();
        self
    }

    /// Multiplies both components by `s`.
    pub fn scale(&mut self, s: f64) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self
    }

    /// Component-wise multiply.
    pub fn multiply(&mut self, v: impl HasXY) -> &mut Self {
        self.multiply_flat(v.x(), v.y())
    }

    /// Component-wise multiply by `(x, y)`.
    pub fn multiply_flat(&mut self, x: f64, y: f64) -> &mut Self {
        self.x *= x;
        self.y *= y;
        self
    }

    /// Component-wise divide. Zero divisors yield infinities or NaN.
    pub fn divide(&mut self, v: impl HasXY) -> &mut Self {
        self.x /= v.x();
        self.y /= v.y();
        self
    }

    /// Flips the sign of both components.
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    // =========================================================================
    // COMPONENT-WISE
    // =========================================================================

    /// Component-wise minimum. A NaN on either side yields NaN.
    pub fn min(&mut self, v: impl HasXY) -> &mut Self {
        self.x = min_propagating_nan(self.x, v.x());
        self.y = min_propagating_nan(self.y, v.y());
        self
    }

    /// Component-wise maximum. A NaN on either side yields NaN.
    pub fn max(&mut self, v: impl HasXY) -> &mut Self {
        self.x = max_propagating_nan(self.x, v.x());
        self.y = max_propagating_nan(self.y, v.y());
        self
    }

    /// Rounds both components toward negative infinity.
    pub fn floor(&mut self) -> &mut Self {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self
    }

    /// Rounds both components toward positive infinity.
    pub fn ceil(&mut self) -> &mut Self {
        self.x = self.x.ceil();
        self.y = self.y.ceil();
        self
    }

    /// Absolute value of both components.
    pub fn abs(&mut self) -> &mut Self {
        self.x = self.x.abs();
        self.y = self.y.abs();
        self
    }

    /// Scales to unit length.
    ///
    /// A zero vector is not guarded against and ends up with NaN components.
    pub fn normalize(&mut self) -> &mut Self {
        let s = 1.0 / self.mag();
        self.scale(s)
    }

    /// Replaces each component with its reciprocal.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when either component is within epsilon of zero; the
    /// vector is left untouched.
    ///
    /// # Examples
    /// ```
    /// use float2::vec;
    /// assert!(vec(2.0, 5.0).invert().unwrap().equals(vec(0.5, 0.2)));
    /// assert!(vec(0.0, 5.0).invert().is_err());
    /// ```
    pub fn invert(&mut self) -> Float2Result<&mut Self> {
        if approx_zero(self.x) {
            log::debug!("invert rejected zero x component: {self}");
            return Err(Float2Error::DivisionByZero(format!(
                "cannot invert, x is zero: {self}"
            )));
        }
        if approx_zero(self.y) {
            log::debug!("invert rejected zero y component: {self}");
            return Err(Float2Error::DivisionByZero(format!(
                "cannot invert, y is zero: {self}"
            )));
        }
        self.x = 1.0 / self.x;
        self.y = 1.0 / self.y;
        Ok(self)
    }
}

fn min_propagating_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn max_propagating_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
