//! Utility helpers for tests.
//!
//! Constructors for meteors, actors and arenas so integration tests can set
//! up a scene in a line or two.

pub mod fixtures;

/// Assert that two points are within `tolerance` of each other.
///
/// # Panics
/// Panics with both points in the message when they are too far apart.
pub fn assert_near(actual: glam::Vec2, expected: glam::Vec2, tolerance: f32) {
    assert!(
        actual.distance(expected) <= tolerance,
        "expected {expected:?}, got {actual:?} (tolerance {tolerance})"
    );
}
