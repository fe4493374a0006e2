//! Behavioral properties of the public API.

use approx::assert_relative_eq;
use float2::{distance, distance_squared, dot, from_array, vec, Float2, Float2Error};

fn samples() -> Vec<Float2> {
    vec![
        vec(0.0, 0.0),
        vec(1.0, 2.0),
        vec(-3.5, 4.25),
        vec(1.0e6, -2.0e-3),
        vec(0.1, 0.7),
    ]
}

#[test]
fn array_round_trip() {
    for v in samples() {
        assert_eq!(v.to_array(), [v.x, v.y]);
        let back = from_array(&[v.x, v.y, 99.0]).unwrap();
        assert!(back.equals(v));
    }
}

#[test]
fn distance_is_symmetric() {
    for a in samples() {
        for b in samples() {
            assert_eq!(distance(a, b), distance(b, a));
            assert_relative_eq!(
                distance_squared(a, b),
                distance(a, b).powi(2),
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn dot_is_symmetric() {
    for a in samples() {
        for b in samples() {
            assert_eq!(dot(a, b), dot(b, a));
        }
    }
}

#[test]
fn copy_is_equal_and_independent() {
    for v in samples() {
        let mut c = v.copy();
        assert!(c.equals(v));
        c.scale(2.0).add_flat(1.0, 1.0);
        assert_ne!(c, v);
    }
}

#[test]
fn three_four_five() {
    assert_eq!(vec(3.0, 4.0).mag(), 5.0);
}

#[test]
fn chained_add() {
    assert!(vec(1.0, 2.0).add(vec(3.0, 4.0)).equals(vec(4.0, 6.0)));
}

#[test]
fn invert_checks_zero_components() {
    assert!(matches!(
        vec(0.0, 5.0).invert(),
        Err(Float2Error::DivisionByZero(_))
    ));
    assert!(vec(2.0, 5.0).invert().unwrap().equals(vec(0.5, 0.2)));
}

#[test]
fn from_array_length_check() {
    assert!(matches!(
        from_array(&[1.0]),
        Err(Float2Error::InvalidArgument(_))
    ));
    assert_eq!(from_array(&[1.0, 2.0, 3.0]).unwrap(), vec(1.0, 2.0));
}

#[test]
fn positivity() {
    assert!(vec(1.0, 1.0).is_positive());
    assert!(!vec(-1.0, 1.0).is_positive());
}

#[test]
fn floor_is_idempotent() {
    for v in samples() {
        let once = v.floored();
        assert_eq!(once.floored(), once);
    }
}
