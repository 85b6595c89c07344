//! Boundary predicate for the arena.
//!
//! The decision core only ever asks whether a point lies inside the play
//! area; how that is answered belongs to the host.

use glam::Vec2;

/// Answers whether a point lies inside the play area.
///
/// Implementations must be pure: the predicate is queried several times per
/// tick.
pub trait PlayArea {
    /// `true` when `point` is inside the play area.
    fn contains(&self, point: Vec2) -> bool;
}

impl<F> PlayArea for F
where
    F: Fn(Vec2) -> bool,
{
    fn contains(&self, point: Vec2) -> bool {
        self(point)
    }
}

/// Axis-aligned rectangular play area with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPlayArea {
    min: Vec2,
    max: Vec2,
}

impl RectPlayArea {
    /// Creates an area from two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates an area centred on the origin.
    ///
    /// # Examples
    /// ```
    /// use forager::{PlayArea, RectPlayArea};
    /// use glam::Vec2;
    /// let area = RectPlayArea::centered(4.0, 2.0);
    /// assert!(area.contains(Vec2::new(4.0, -2.0)));
    /// assert!(!area.contains(Vec2::new(4.1, 0.0)));
    /// ```
    #[must_use]
    pub fn centered(half_width: f32, half_height: f32) -> Self {
        let half = Vec2::new(half_width.abs(), half_height.abs());
        Self::from_corners(-half, half)
    }

    /// Lower-left corner.
    #[must_use]
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Upper-right corner.
    #[must_use]
    pub const fn max(&self) -> Vec2 {
        self.max
    }
}

impl PlayArea for RectPlayArea {
    fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::centre(Vec2::ZERO, true)]
    #[case::corner(Vec2::new(-2.0, 1.0), true)]
    #[case::outside_x(Vec2::new(2.5, 0.0), false)]
    #[case::outside_y(Vec2::new(0.0, -1.01), false)]
    #[case::nan(Vec2::new(f32::NAN, 0.0), false)]
    fn rect_bounds_are_inclusive(#[case] point: Vec2, #[case] inside: bool) {
        let area = RectPlayArea::from_corners(Vec2::new(2.0, 1.0), Vec2::new(-2.0, -1.0));
        assert_eq!(area.contains(point), inside);
    }

    #[rstest]
    fn corners_are_normalised() {
        let area = RectPlayArea::from_corners(Vec2::new(3.0, -1.0), Vec2::new(-3.0, 4.0));
        assert_eq!(area.min(), Vec2::new(-3.0, -1.0));
        assert_eq!(area.max(), Vec2::new(3.0, 4.0));
    }

    #[rstest]
    fn closures_act_as_areas() {
        let right_half = |p: Vec2| p.x >= 0.0;
        assert!(right_half.contains(Vec2::new(1.0, 9.0)));
        assert!(!right_half.contains(Vec2::new(-1.0, 0.0)));
    }
}
