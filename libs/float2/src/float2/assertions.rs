//! Opt-in validation. Each check returns `&Self` on success.

use super::Float2;
use crate::{Float2Error, Float2Result};

impl Float2 {
    /// Fails unless [`Float2::is_ok`].
    ///
    /// # Examples
    /// ```
    /// use float2::vec;
    /// assert!(vec(1.0, 2.0).assert_ok().is_ok());
    /// assert!(vec(f64::NAN, 2.0).assert_ok().is_err());
    /// ```
    pub fn assert_ok(&self) -> Float2Result<&Self> {
        self.check(self.is_ok(), "not ok:")
    }

    /// Fails unless [`Float2::is_positive`].
    pub fn assert_positive(&self) -> Float2Result<&Self> {
        self.check(self.is_positive(), "not positive")
    }

    /// Fails unless [`Float2::is_ints`].
    pub fn assert_ints(&self) -> Float2Result<&Self> {
        self.check(self.is_ints(), "not ints:")
    }

    /// Fails unless [`Float2::is_unit`], inheriting its inverted sense.
    pub fn assert_unit(&self) -> Float2Result<&Self> {
        self.check(self.is_unit(), "not a unit vector:")
    }

    fn check(&self, passed: bool, label: &str) -> Float2Result<&Self> {
        if passed {
            return Ok(self);
        }
        log::debug!("assertion failed: {label} {self}");
        Err(Float2Error::InvalidState(format!("{label} {self}")))
    }
}
