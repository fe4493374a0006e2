//! Structural point interface.
//!
//! Anything with numeric `x` and `y` can stand in for a vector argument:
//! tuples, two-element arrays, `glam::DVec2` and [`Float2`] itself.

use crate::Float2;
use glam::DVec2;

/// A value exposing `x` and `y` components.
///
/// # Examples
/// ```
/// use float2::{dot, HasXY};
///
/// struct Pixel { col: u32, row: u32 }
///
/// impl HasXY for Pixel {
///     fn x(&self) -> f64 { f64::from(self.col) }
///     fn y(&self) -> f64 { f64::from(self.row) }
/// }
///
/// assert_eq!(dot(Pixel { col: 2, row: 3 }, (1.0, 1.0)), 5.0);
/// ```
pub trait HasXY {
    /// Horizontal component.
    fn x(&self) -> f64;
    /// Vertical component.
    fn y(&self) -> f64;
}

impl<T: HasXY + ?Sized> HasXY for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl HasXY for Float2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl HasXY for DVec2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl HasXY for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl HasXY for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<DVec2> for Float2 {
    fn from(v: DVec2) -> Self {
        Float2::new(v.x, v.y)
    }
}

impl From<Float2> for DVec2 {
    fn from(v: Float2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Float2 {
    fn from((x, y): (f64, f64)) -> Self {
        Float2::new(x, y)
    }
}

impl From<[f64; 2]> for Float2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Float2::new(x, y)
    }
}

impl From<Float2> for [f64; 2] {
    fn from(v: Float2) -> Self {
        v.to_array()
    }
}

#[cfg(test)]
mod tests;
