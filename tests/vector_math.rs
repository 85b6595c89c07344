//! Normalisation and distance helpers.
use forager::vec_normalize;
use forager::vector_math::{distance_sq, with_magnitude};
use glam::Vec2;
use rstest::rstest;

#[test]
fn normalize_returns_zero_for_nan() {
    assert_eq!(vec_normalize(Vec2::new(f32::NAN, 1.0)), Vec2::ZERO);
}

#[test]
fn normalize_returns_zero_for_infinity() {
    assert_eq!(vec_normalize(Vec2::new(f32::INFINITY, 0.0)), Vec2::ZERO);
}

#[test]
fn normalize_returns_normalized_vector() {
    assert_eq!(vec_normalize(Vec2::new(3.0, 0.0)), Vec2::new(1.0, 0.0));
}

#[rstest]
#[case(Vec2::ZERO, Vec2::new(3.0, 4.0), 25.0)]
#[case(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0), 8.0)]
#[case(Vec2::ONE, Vec2::ONE, 0.0)]
fn squared_distance(#[case] a: Vec2, #[case] b: Vec2, #[case] expected: f32) {
    assert!((distance_sq(a, b) - expected).abs() < 1e-6);
}

#[test]
fn with_magnitude_keeps_zero() {
    assert_eq!(with_magnitude(Vec2::ZERO, 5.0), Vec2::ZERO);
}

#[test]
fn with_magnitude_rescales() {
    let v = with_magnitude(Vec2::new(0.0, -0.25), 5.0);
    assert_eq!(v, Vec2::new(0.0, -5.0));
}
