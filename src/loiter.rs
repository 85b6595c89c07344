//! Hold position used while waiting for a meteor to grow.
use glam::Vec2;

use crate::vector_math::vec_normalize;

/// Point `distance` away from `target`, on the line towards `rival`.
///
/// If the two positions coincide the target itself is returned.
///
/// # Examples
/// ```
/// use forager::loiter_position;
/// use glam::Vec2;
/// let p = loiter_position(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0);
/// assert!((p - Vec2::new(2.0, 0.0)).length() < 1e-6);
/// ```
#[must_use]
pub fn loiter_position(target: Vec2, rival: Vec2, distance: f32) -> Vec2 {
    target + vec_normalize(rival - target) * distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Vec2::new(1.0, 1.0), Vec2::new(-3.0, 4.0), 1.5)]
    #[case(Vec2::new(-2.0, 0.5), Vec2::new(0.0, -7.0), 0.25)]
    #[case(Vec2::ZERO, Vec2::new(0.0, 0.1), 3.0)]
    fn lies_on_target_rival_axis(#[case] target: Vec2, #[case] rival: Vec2, #[case] distance: f32) {
        let p = loiter_position(target, rival, distance);
        assert_relative_eq!(p.distance(target), distance, epsilon = 1e-5);
        let along = (p - target).normalize();
        let towards_rival = (rival - target).normalize();
        assert_relative_eq!(along.dot(towards_rival), 1.0, epsilon = 1e-5);
    }

    #[rstest]
    fn coincident_positions_hold_target() {
        let target = Vec2::new(3.0, -1.0);
        assert_eq!(loiter_position(target, target, 2.0), target);
    }
}
