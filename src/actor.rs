//! The two competing actors.
use glam::Vec2;
use log::debug;
use serde::Serialize;

use crate::color::{MeteorColor, ScoreCard};

/// Which side of the duel an actor plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActorRole {
    /// The autonomous forager steered by this crate.
    Agent,
    /// The opponent, driven externally.
    Rival,
}

/// Kinematic and scoring state of one actor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Actor {
    /// Side this actor plays.
    pub role: ActorRole,
    /// World position.
    pub position: Vec2,
    /// Measured velocity over the last tick.
    pub velocity: Vec2,
    /// Accumulated score per color.
    pub scores: ScoreCard,
}

impl Actor {
    /// Creates a stationary actor with an empty score card.
    #[must_use]
    pub fn new(role: ActorRole, position: Vec2) -> Self {
        debug!("Creating {role:?} at {position:?}");
        Self {
            role,
            position,
            velocity: Vec2::ZERO,
            scores: ScoreCard::default(),
        }
    }

    /// Builder-style override of the score card.
    #[must_use]
    pub const fn with_scores(mut self, scores: ScoreCard) -> Self {
        self.scores = scores;
        self
    }

    /// Builder-style override of the velocity.
    #[must_use]
    pub const fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Squared magnitude of the current velocity.
    #[must_use]
    pub fn speed_sq(&self) -> f32 {
        self.velocity.length_squared()
    }

    /// Moves to `position`, deriving the velocity from the displacement over
    /// `dt` seconds.
    pub fn move_to(&mut self, position: Vec2, dt: f32) {
        self.velocity = if dt > 0.0 {
            (position - self.position) / dt
        } else {
            Vec2::ZERO
        };
        self.position = position;
    }

    /// Records that the actor held still this tick.
    pub fn hold(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Credits a collected meteor.
    pub fn credit(&mut self, color: MeteorColor, points: u32) {
        self.scores.add(color, points);
        debug!("{:?} scored {points} {color}: {}", self.role, self.scores);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    fn move_to_measures_velocity() {
        let mut actor = Actor::new(ActorRole::Rival, Vec2::ZERO);
        actor.move_to(Vec2::new(0.1, -0.2), 0.02);
        assert_relative_eq!(actor.velocity.x, 5.0, epsilon = 1e-4);
        assert_relative_eq!(actor.velocity.y, -10.0, epsilon = 1e-4);
        actor.hold();
        assert_relative_eq!(actor.speed_sq(), 0.0);
    }

    #[rstest]
    fn credit_accumulates_by_color() {
        let mut actor = Actor::new(ActorRole::Agent, Vec2::ZERO);
        actor.credit(MeteorColor::Green, 1);
        actor.credit(MeteorColor::Green, 3);
        assert_eq!(actor.scores.get(MeteorColor::Green), 4);
        assert_eq!(actor.scores.lowest(), (MeteorColor::Red, 0));
    }
}
