//! Tests for the free functions.

use super::*;
use approx::assert_relative_eq;
use serde_json::json;

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn test_constants() {
    assert_eq!(zero(), Float2::new(0.0, 0.0));
    assert_eq!(one(), Float2::new(1.0, 1.0));
    assert_eq!(vec(2.0, -3.0), Float2::new(2.0, -3.0));
}

#[test]
fn test_from_array_ignores_extra_elements() {
    let v = from_array(&[1.0, 2.0, 3.0]).unwrap();
    assert!(v.equals(vec(1.0, 2.0)));
}

#[test]
fn test_from_array_too_short() {
    assert!(matches!(
        from_array(&[1.0]),
        Err(crate::Float2Error::InvalidArgument(_))
    ));
    assert!(from_array(&[]).is_err());
}

#[test]
fn test_is_point() {
    assert!(is_point(&json!({"x": 0, "y": -1.5})));
    assert!(is_point(&json!({"x": 1, "y": 2, "z": "ignored"})));
    assert!(!is_point(&json!({"x": 1})));
    assert!(!is_point(&json!({"x": null, "y": 2})));
    assert!(!is_point(&json!([1, 2])));
    assert!(!is_point(&json!("1,2")));
}

#[test]
fn test_as_float2_matches_from_json() {
    let record = json!({"x": 4, "y": 5});
    assert_eq!(as_float2(&record).unwrap(), from_json(&record).unwrap());
}

// =============================================================================
// METRICS
// =============================================================================

#[test]
fn test_dot() {
    assert_eq!(dot(vec(1.0, 2.0), vec(3.0, 4.0)), 11.0);
    assert_eq!(dot_flat(1.0, 2.0, 3.0, 4.0), 11.0);
    assert_eq!(dot((1.0, 0.0), [0.0, 1.0]), 0.0);
}

#[test]
fn test_dot_is_symmetric() {
    let a = vec(1.25, -7.5);
    let b = vec(-3.0, 0.125);
    assert_eq!(dot(a, b), dot(b, a));
}

#[test]
fn test_distance() {
    let a = vec(1.0, 1.0);
    let b = vec(4.0, 5.0);
    assert_eq!(distance(a, b), 5.0);
    assert_eq!(distance(b, a), 5.0);
    assert_eq!(distance_squared(a, b), 25.0);
}

#[test]
fn test_distance_squared_matches_distance() {
    let a = vec(0.3, -1.7);
    let b = vec(2.9, 0.4);
    assert_relative_eq!(distance_squared(a, b), distance(a, b).powi(2), epsilon = 1e-12);
}

#[test]
fn test_mag() {
    assert_eq!(mag(vec(3.0, 4.0)), 5.0);
    assert_eq!(mag_flat(3.0, 4.0), 5.0);
    assert_eq!(mag_squared_flat(3.0, 4.0), 25.0);
    assert_eq!(mag(zero()), 0.0);
}
