//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_machine_epsilon() {
    assert_eq!(EPSILON, f64::EPSILON);
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_approx_equal_within_epsilon() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(0.0, EPSILON / 2.0));
    assert!(!approx_equal(1.0, 1.0 + 4.0 * EPSILON));
}

#[test]
fn test_approx_equal_is_strict() {
    // exactly EPSILON apart is not "equal"
    assert!(!approx_equal(0.0, EPSILON));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-0.0));
    assert!(!approx_zero(1.0e-10));
    assert!(!approx_zero(f64::NAN));
}

// =============================================================================
// CONVERSION / FORMATTING TESTS
// =============================================================================

#[test]
fn test_min_array_components() {
    assert_eq!(MIN_ARRAY_COMPONENTS, 2);
}

#[test]
fn test_short_string_decimals() {
    assert_eq!(SHORT_STRING_DECIMALS, 2);
    assert!(SHORT_STRING_DECIMALS <= MAX_FIXED_DECIMALS);
}
