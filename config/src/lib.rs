//! # Config Crate
//!
//! Centralized numeric constants for the `float2` vector library. Tolerances,
//! formatting precision, and conversion limits live here so the vector code
//! never carries literal magic numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, SHORT_STRING_DECIMALS};
//!
//! let value: f64 = 1.0e-17;
//! assert!(value.abs() < EPSILON);
//! assert_eq!(SHORT_STRING_DECIMALS, 2);
//! ```

pub mod constants;

#[cfg(test)]
mod tests;
