//! Physics helper functions.
//!
//! Provides the mass-scaled acceleration used by the steering controller.

use glam::Vec2;

/// Smallest acceptable mass to avoid numerically unstable accelerations.
const MIN_MASS: f32 = 1e-6;

/// Computes acceleration from a force vector and a mass.
///
/// Returns `None` if `mass` is non-positive or effectively zero (see
/// [`MIN_MASS`]). The calculation applies `F=ma` to both components.
///
/// # Examples
///
/// ```
/// use forager::applied_acceleration;
/// use glam::Vec2;
/// let a = applied_acceleration(Vec2::new(7.0, -14.0), 7.0).unwrap();
/// assert!((a.x - 1.0).abs() < 1e-6);
/// assert!((a.y + 2.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn applied_acceleration(force: Vec2, mass: f32) -> Option<Vec2> {
    (mass > MIN_MASS).then(|| force / mass)
}
