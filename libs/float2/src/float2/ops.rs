//! Pure operator forms.
//!
//! These return new values and leave their operands alone, for call sites
//! where in-place mutation would alias.

use super::Float2;
use crate::{Float2Result, HasXY};

impl<P: HasXY> std::ops::Add<P> for Float2 {
    type Output = Float2;

    fn add(self, rhs: P) -> Float2 {
        Float2::new(self.x + rhs.x(), self.y + rhs.y())
    }
}

impl<P: HasXY> std::ops::AddAssign<P> for Float2 {
    fn add_assign(&mut self, rhs: P) {
        self.add_flat(rhs.x(), rhs.y());
    }
}

impl<P: HasXY> std::ops::Sub<P> for Float2 {
    type Output = Float2;

    fn sub(self, rhs: P) -> Float2 {
        Float2::new(self.x - rhs.x(), self.y - rhs.y())
    }
}

impl<P: HasXY> std::ops::SubAssign<P> for Float2 {
    fn sub_assign(&mut self, rhs: P) {
        self.add_flat(-rhs.x(), -rhs.y());
    }
}

impl std::ops::Mul<f64> for Float2 {
    type Output = Float2;

    fn mul(self, rhs: f64) -> Float2 {
        Float2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::Mul<Float2> for f64 {
    type Output = Float2;

    fn mul(self, rhs: Float2) -> Float2 {
        rhs * self
    }
}

impl std::ops::MulAssign<f64> for Float2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}

impl std::ops::Div<f64> for Float2 {
    type Output = Float2;

    fn div(self, rhs: f64) -> Float2 {
        Float2::new(self.x / rhs, self.y / rhs)
    }
}

impl std::ops::Neg for Float2 {
    type Output = Float2;

    fn neg(self) -> Float2 {
        Float2::new(-self.x, -self.y)
    }
}

// =============================================================================
// BY-VALUE HELPERS
// =============================================================================

impl Float2 {
    /// Unit-length copy. A zero vector yields NaN components.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Sign-flipped copy.
    pub fn negated(mut self) -> Self {
        self.negate();
        self
    }

    /// Floored copy.
    pub fn floored(mut self) -> Self {
        self.floor();
        self
    }

    /// Ceiled copy.
    pub fn ceiled(mut self) -> Self {
        self.ceil();
        self
    }

    /// Copy with absolute components.
    pub fn absolute(mut self) -> Self {
        self.abs();
        self
    }

    /// Reciprocal copy.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` under the same condition as [`Float2::invert`].
    pub fn inverted(mut self) -> Float2Result<Self> {
        self.invert()?;
        Ok(self)
    }
}
