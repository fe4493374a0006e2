use super::*;

#[test]
fn test_tuple_and_array_components() {
    assert_eq!((1.5_f64, -2.0_f64).x(), 1.5);
    assert_eq!((1.5_f64, -2.0_f64).y(), -2.0);
    assert_eq!([3.0_f64, 4.0].x(), 3.0);
    assert_eq!([3.0_f64, 4.0].y(), 4.0);
}

#[test]
fn test_reference_forwards() {
    let v = Float2::new(7.0, 8.0);
    let r = &v;
    assert_eq!(HasXY::x(&r), 7.0);
    assert_eq!(HasXY::y(&r), 8.0);
}

#[test]
fn test_glam_round_trip() {
    let v: Float2 = DVec2::new(1.0, 2.0).into();
    assert_eq!(v, Float2::new(1.0, 2.0));

    let d: DVec2 = v.into();
    assert_eq!(d, DVec2::new(1.0, 2.0));
}

#[test]
fn test_from_tuple_and_array() {
    assert_eq!(Float2::from((1.0, 2.0)), Float2::new(1.0, 2.0));
    assert_eq!(Float2::from([5.0, 6.0]), Float2::new(5.0, 6.0));

    let arr: [f64; 2] = Float2::new(9.0, 10.0).into();
    assert_eq!(arr, [9.0, 10.0]);
}

#[test]
fn test_float2_mixes_with_glam() {
    let mut v = Float2::new(1.0, 1.0);
    v.add(DVec2::new(2.0, 3.0));
    assert_eq!(v, Float2::new(3.0, 4.0));
}
