//! Meteor records shared by the registry, targeting and the arena.

use glam::Vec2;
use serde::Serialize;

use crate::color::MeteorColor;

/// Stable identifier of a spawned meteor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MeteorId(pub u64);

impl MeteorId {
    /// Raw identifier value.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl From<u64> for MeteorId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Two-valued growth stage of a meteor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GrowthStage {
    /// Freshly spawned and worth the small value.
    #[default]
    Small,
    /// Grown and worth the full value.
    Grown,
}

/// A collectible meteor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meteor {
    /// Identifier assigned at spawn.
    pub id: MeteorId,
    /// World position.
    pub position: Vec2,
    /// Velocity in world units per second.
    pub velocity: Vec2,
    /// Score bucket the meteor credits.
    pub color: MeteorColor,
    /// Current growth stage.
    pub stage: GrowthStage,
    /// Set once the meteor has first been seen inside the play area.
    pub visible: bool,
}

impl Meteor {
    /// Creates a small, not yet visible meteor.
    ///
    /// # Examples
    /// ```
    /// use forager::{GrowthStage, Meteor, MeteorColor, MeteorId};
    /// use glam::Vec2;
    /// let m = Meteor::new(MeteorId(1), Vec2::ZERO, Vec2::X, MeteorColor::Red);
    /// assert_eq!(m.stage, GrowthStage::Small);
    /// assert!(!m.visible);
    /// ```
    #[must_use]
    pub const fn new(id: MeteorId, position: Vec2, velocity: Vec2, color: MeteorColor) -> Self {
        Self {
            id,
            position,
            velocity,
            color,
            stage: GrowthStage::Small,
            visible: false,
        }
    }

    /// Builder-style override of the growth stage.
    #[must_use]
    pub const fn with_stage(mut self, stage: GrowthStage) -> Self {
        self.stage = stage;
        self
    }

    /// `true` once the meteor has grown.
    #[must_use]
    pub fn is_grown(&self) -> bool {
        self.stage == GrowthStage::Grown
    }

    /// Moves the meteor along its velocity for `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}
