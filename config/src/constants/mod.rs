//! Centralized configuration values shared by the vector library.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream code can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for floating-point comparisons.
///
/// This is the machine epsilon of `f64`: the difference between `1.0` and the
/// next representable value. Component comparisons treat values closer than
/// this as equal.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!((0.1 + 0.2 - 0.3_f64).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = f64::EPSILON;

// =============================================================================
// CONVERSION CONSTANTS
// =============================================================================

/// Minimum number of elements a sequence needs to build a vector.
///
/// # Examples
/// ```
/// use config::constants::MIN_ARRAY_COMPONENTS;
/// let input = [1.0, 2.0, 3.0];
/// assert!(input.len() >= MIN_ARRAY_COMPONENTS);
/// ```
pub const MIN_ARRAY_COMPONENTS: usize = 2;

// =============================================================================
// FORMATTING CONSTANTS
// =============================================================================

/// Decimal places used by the short string rendering (`"1.00,2.00"`).
///
/// # Examples
/// ```
/// use config::constants::SHORT_STRING_DECIMALS;
/// assert_eq!(format!("{:.*}", SHORT_STRING_DECIMALS, 1.0), "1.00");
/// ```
pub const SHORT_STRING_DECIMALS: usize = 2;

/// Upper bound on the decimals accepted for fixed-point rendering.
///
/// Matches the range accepted by the `toFixed` rendering the short string
/// format comes from.
///
/// # Examples
/// ```
/// use config::constants::MAX_FIXED_DECIMALS;
/// assert_eq!(MAX_FIXED_DECIMALS, 100);
/// ```
pub const MAX_FIXED_DECIMALS: usize = 100;

// =============================================================================
// HELPERS
// =============================================================================

/// Returns true when `a` and `b` differ by less than [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
/// assert!(approx_equal(1.0, 1.0));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true when `value` lies within [`EPSILON`] of zero.
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
/// assert!(approx_zero(0.0));
/// ```
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// CONFIG SNAPSHOT
// =============================================================================

/// Immutable snapshot of tolerance and formatting settings.
///
/// # Examples
/// ```
/// use config::constants::Float2Config;
/// let config = Float2Config::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float2Config {
    /// Tolerance for component comparisons.
    pub tolerance: f64,
    /// Decimal places for fixed-point rendering.
    pub short_decimals: usize,
}

impl Float2Config {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and decimal count.
    ///
    /// # Examples
    /// ```
    /// use config::constants::Float2Config;
    /// let cfg = Float2Config::new(1.0e-6, 3).expect("valid config");
    /// assert_eq!(cfg.short_decimals, 3);
    /// ```
    pub fn new(tolerance: f64, short_decimals: usize) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if short_decimals > MAX_FIXED_DECIMALS {
            return Err(ConfigError::InvalidDecimals(short_decimals));
        }
        Ok(Self {
            tolerance,
            short_decimals,
        })
    }
}

impl Default for Float2Config {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            short_decimals: SHORT_STRING_DECIMALS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative, or not finite.
    InvalidTolerance(f64),
    /// Raised when more decimals are requested than an `f64` can carry.
    InvalidDecimals(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidDecimals(value) => {
                write!(f, "short_decimals must be <= {MAX_FIXED_DECIMALS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
