//! Convenience constructors for records used in tests.

use forager::{
    Actor, ActorRole, Arena, ForagerConfig, GrowthStage, Meteor, MeteorColor, MeteorId,
    MeteorRegistry, PlayArea, RectPlayArea, ScoreCard,
};
use glam::Vec2;

/// Point in the arena accepted by the constructors below.
#[derive(Clone, Copy, Debug)]
pub struct Coords2D {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Coords2D {
    /// Create new 2D coordinates.
    ///
    /// # Examples
    /// ```
    /// use test_utils::fixtures::Coords2D;
    /// let c = Coords2D::new(1.0, 2.0);
    /// assert_eq!(c.x, 1.0);
    /// ```
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Coords2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for Coords2D {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Coords2D> for Vec2 {
    fn from(c: Coords2D) -> Self {
        Self::new(c.x, c.y)
    }
}

/// A stationary small meteor.
///
/// # Examples
/// ```rust
/// use forager::MeteorColor;
/// use test_utils::fixtures::meteor;
/// let m = meteor(1, MeteorColor::Red, (0.0, 1.0));
/// assert_eq!(m.id.into_inner(), 1);
/// assert_eq!(m.position.y, 1.0);
/// ```
pub fn meteor<C>(id: u64, color: MeteorColor, at: C) -> Meteor
where
    C: Into<Coords2D>,
{
    let at: Coords2D = at.into();
    let mut m = Meteor::new(MeteorId(id), at.into(), Vec2::ZERO, color);
    m.visible = true;
    m
}

/// A small meteor moving with `velocity`.
pub fn moving_meteor<C, V>(id: u64, color: MeteorColor, at: C, velocity: V) -> Meteor
where
    C: Into<Coords2D>,
    V: Into<Coords2D>,
{
    let velocity: Coords2D = velocity.into();
    let mut m = meteor(id, color, at);
    m.velocity = velocity.into();
    m
}

/// A grown meteor.
pub fn grown_meteor<C>(id: u64, color: MeteorColor, at: C) -> Meteor
where
    C: Into<Coords2D>,
{
    meteor(id, color, at).with_stage(GrowthStage::Grown)
}

/// Registry holding `meteors` in the given order.
pub fn registry<I>(meteors: I) -> MeteorRegistry
where
    I: IntoIterator<Item = Meteor>,
{
    meteors.into_iter().collect()
}

/// Score card from `[red, green, blue]`.
#[must_use]
pub fn scores(points: [u32; 3]) -> ScoreCard {
    let [red, green, blue] = points;
    ScoreCard::from_pairs([
        (MeteorColor::Red, red),
        (MeteorColor::Green, green),
        (MeteorColor::Blue, blue),
    ])
}

/// A stationary actor.
pub fn actor<C>(role: ActorRole, at: C, points: [u32; 3]) -> Actor
where
    C: Into<Coords2D>,
{
    let at: Coords2D = at.into();
    Actor::new(role, at.into()).with_scores(scores(points))
}

/// A play area accepting every point.
#[must_use]
pub fn open_area() -> impl PlayArea {
    |_: Vec2| true
}

/// The default rectangular arena, large enough for most scenes.
#[must_use]
pub fn wide_area() -> RectPlayArea {
    RectPlayArea::centered(50.0, 50.0)
}

/// A default-configured arena over [`wide_area`].
#[must_use]
pub fn arena() -> Arena {
    arena_with(ForagerConfig::default())
}

/// An arena over [`wide_area`] with `config`.
#[must_use]
pub fn arena_with(config: ForagerConfig) -> Arena {
    Arena::new(config, wide_area())
}
