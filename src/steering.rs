//! Seek-plus-repulsion steering.
//!
//! Each tick the controller adds a mass-scaled seek force and a repulsion
//! from the rival to its persistent velocity, rescales the result to the
//! travel speed and requests a move unless the velocity is negligible.

use glam::Vec2;
use log::trace;

use crate::config::AgentConfig;
use crate::physics::applied_acceleration;
use crate::vector_math::{distance_sq, vec_normalize, with_magnitude};

/// Result of a single steering step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringOutput {
    /// Velocity after force integration and normalisation.
    pub velocity: Vec2,
    /// Requested position, or `None` when movement was skipped this tick.
    pub next_position: Option<Vec2>,
}

/// Velocity integrator for the agent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SteeringController {
    velocity: Vec2,
}

impl SteeringController {
    /// Creates a controller at rest.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
        }
    }

    /// Creates a controller carrying `velocity` from earlier ticks.
    #[must_use]
    pub const fn with_velocity(velocity: Vec2) -> Self {
        Self { velocity }
    }

    /// Integrated velocity.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Classic seek: desired velocity towards `target` minus current velocity.
    #[must_use]
    pub fn seek(&self, position: Vec2, target: Vec2, speed: f32) -> Vec2 {
        vec_normalize(target - position) * speed - self.velocity
    }

    /// Step the controller towards `target` over `dt` seconds.
    ///
    /// The velocity persists across calls, even when movement is skipped.
    pub fn step(
        &mut self,
        config: &AgentConfig,
        position: Vec2,
        target: Vec2,
        rival: RivalContext,
        dt: f32,
    ) -> SteeringOutput {
        let seek = self.seek(position, target, config.speed);
        let accel = applied_acceleration(seek, config.mass).unwrap_or(Vec2::ZERO);
        let repulsion = rival_repulsion(config, position, rival);

        self.velocity += accel + repulsion;
        self.velocity = with_magnitude(self.velocity, config.speed);

        if self.velocity.length_squared() < config.min_move {
            trace!("Velocity {:?} below minimum, holding", self.velocity);
            return SteeringOutput {
                velocity: self.velocity,
                next_position: None,
            };
        }

        let next = position + self.velocity * dt;
        trace!("Steering to {next:?} (seek {seek:?}, repulsion {repulsion:?})");
        SteeringOutput {
            velocity: self.velocity,
            next_position: Some(next),
        }
    }
}

/// Rival-related inputs to one steering step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RivalContext {
    /// Rival position.
    pub position: Vec2,
    /// Rival squared speed.
    pub speed_sq: f32,
    /// Agent squared speed, measured over the last tick.
    pub agent_speed_sq: f32,
}

/// Push away from the rival.
///
/// Zero while the agent is slower than the rival, outside the squared
/// repulsion range, or when both occupy the same point. Otherwise the force
/// points away from the rival with magnitude `force / distance²`.
#[must_use]
pub fn rival_repulsion(config: &AgentConfig, position: Vec2, rival: RivalContext) -> Vec2 {
    if rival.agent_speed_sq < rival.speed_sq {
        return Vec2::ZERO;
    }
    repulsion(
        position,
        rival.position,
        config.rival_repulsion_range,
        config.rival_repulsive_force,
    )
}

/// Inverse-square repulsion of `position` from `source`.
///
/// `range` is compared against the squared distance.
#[must_use]
pub fn repulsion(position: Vec2, source: Vec2, range: f32, force: f32) -> Vec2 {
    let d2 = distance_sq(position, source);
    if d2 > range || d2 <= f32::EPSILON {
        return Vec2::ZERO;
    }
    vec_normalize(position - source) * (force / d2)
}
