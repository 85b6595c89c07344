//! Small 2D helpers shared by targeting and steering.
use glam::Vec2;

/// Squared Euclidean distance between two points.
///
/// # Examples
/// ```
/// use forager::vector_math::distance_sq;
/// use glam::Vec2;
/// assert!((distance_sq(Vec2::ZERO, Vec2::new(3.0, 4.0)) - 25.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn distance_sq(a: Vec2, b: Vec2) -> f32 {
    a.distance_squared(b)
}

/// Returns the unit vector in the direction of `vector`.
///
/// Non-finite and zero vectors yield [`Vec2::ZERO`] instead of `NaN`.
///
/// # Examples
///
/// ```
/// use forager::vec_normalize;
/// use glam::Vec2;
/// let n = vec_normalize(Vec2::new(3.0, 4.0));
/// assert!((n.x - 0.6).abs() < 1e-6);
/// assert!((n.y - 0.8).abs() < 1e-6);
///
/// assert_eq!(vec_normalize(Vec2::ZERO), Vec2::ZERO);
/// ```
#[must_use]
pub fn vec_normalize(vector: Vec2) -> Vec2 {
    if !vector.is_finite() {
        return Vec2::ZERO;
    }
    vector.try_normalize().unwrap_or(Vec2::ZERO)
}

/// Rescales `vector` to `magnitude`, keeping its direction.
///
/// The zero vector stays zero.
#[must_use]
pub fn with_magnitude(vector: Vec2, magnitude: f32) -> Vec2 {
    vec_normalize(vector) * magnitude
}
