//! # Error Types
//!
//! Errors raised by vector construction, inversion and assertions.
//!
//! ## Error Policy
//!
//! - Converters reject malformed input with `InvalidArgument`
//! - `assert_*` methods reject the current state with `InvalidState`
//! - `invert` rejects near-zero components with `DivisionByZero`
//! - Everything else propagates NaN/Infinity silently

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during vector operations.
///
/// ## Example
///
/// ```rust
/// use float2::{from_array, Float2Error};
///
/// match from_array(&[1.0]) {
///     Err(Float2Error::InvalidArgument(msg)) => assert!(msg.contains("at least 2")),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Float2Error {
    /// Input failed a structural or type precondition.
    ///
    /// Raised by `from_array`, `from_json` and `as_float2`.
    #[error("{0}")]
    InvalidArgument(String),

    /// The current vector violates an asserted property.
    ///
    /// Raised by `assert_ok`, `assert_positive`, `assert_ints` and `assert_unit`.
    #[error("{0}")]
    InvalidState(String),

    /// A component is within epsilon of zero and cannot be inverted.
    #[error("{0}")]
    DivisionByZero(String),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for vector operations.
pub type Float2Result<T> = Result<T, Float2Error>;

// =============================================================================
// TESTS
// =============================================================================
