//! The forager's per-tick decision pass.
//!
//! [`ForagerAgent::tick`] runs the pipeline in order: pick the best meteor,
//! decide whether to wait for it, compute the point to steer towards and
//! hand that to the [`SteeringController`]. Needs must already be refreshed
//! for the tick; see [`NeedTracker::refresh`].

use glam::Vec2;
use log::debug;
use serde::Serialize;

use crate::actor::{Actor, ActorRole};
use crate::config::AgentConfig;
use crate::loiter::loiter_position;
use crate::meteor::{Meteor, MeteorId};
use crate::needs::NeedTracker;
use crate::play_area::PlayArea;
use crate::registry::MeteorRegistry;
use crate::steering::{RivalContext, SteeringController, SteeringOutput};
use crate::targeting::TargetSelector;
use crate::wait::{WaitDecision, WaitPolicy};

/// Read-only view of the session consumed by one decision pass.
#[derive(Clone, Copy)]
pub struct ArenaView<'a> {
    /// Registered meteors.
    pub registry: &'a MeteorRegistry,
    /// The agent's own actor state.
    pub agent: &'a Actor,
    /// The rival.
    pub rival: &'a Actor,
    /// Needs refreshed for this tick.
    pub needs: &'a NeedTracker,
    /// Boundary predicate.
    pub area: &'a dyn PlayArea,
}

/// What the agent decided to do with its target this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetDecision {
    /// No meteor is registered; hold at the arena origin.
    Hold,
    /// Head straight for the meteor.
    Chase(MeteorId),
    /// Loiter between the meteor and the rival until it grows.
    Loiter(MeteorId),
}

/// A decision and the point it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetPlan {
    /// Chosen behaviour.
    pub decision: TargetDecision,
    /// Point to steer towards.
    pub point: Vec2,
}

/// Output of a full agent tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentStep {
    /// Target chosen this tick.
    pub plan: TargetPlan,
    /// Steering result for that target.
    pub steering: SteeringOutput,
}

/// The autonomous forager.
#[derive(Debug, Clone, Default)]
pub struct ForagerAgent {
    config: AgentConfig,
    steering: SteeringController,
}

impl ForagerAgent {
    /// Creates an agent at rest.
    #[must_use]
    pub const fn new(config: AgentConfig) -> Self {
        Self {
            config,
            steering: SteeringController::new(),
        }
    }

    /// Agent tuning.
    #[must_use]
    pub const fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Steering integrator state.
    #[must_use]
    pub const fn steering(&self) -> &SteeringController {
        &self.steering
    }

    /// The registered meteor most worth chasing, if any.
    #[must_use]
    pub fn best_meteor<'a>(&self, view: &ArenaView<'a>) -> Option<&'a Meteor> {
        TargetSelector::new(view.registry, view.agent.position).best(
            view.needs.needed(ActorRole::Agent),
            view.needs.needed(ActorRole::Rival),
        )
    }

    /// Wait policy bound to this tick's view.
    #[must_use]
    pub fn wait_policy<'a>(&'a self, view: &ArenaView<'a>) -> WaitPolicy<'a> {
        WaitPolicy {
            config: &self.config,
            agent_position: view.agent.position,
            rival_position: view.rival.position,
            rival_need: view.needs.needed(ActorRole::Rival),
            registered: view.registry.len(),
            area: view.area,
        }
    }

    /// Where the agent should head this tick.
    ///
    /// With no registered meteor the agent holds at the origin.
    #[must_use]
    pub fn determine_target_position(&self, view: &ArenaView<'_>) -> TargetPlan {
        let Some(meteor) = self.best_meteor(view) else {
            return TargetPlan {
                decision: TargetDecision::Hold,
                point: Vec2::ZERO,
            };
        };

        match self.wait_policy(view).evaluate(meteor) {
            WaitDecision::Wait => TargetPlan {
                decision: TargetDecision::Loiter(meteor.id),
                point: loiter_position(
                    meteor.position,
                    view.rival.position,
                    self.config.loiter_distance,
                ),
            },
            WaitDecision::Go(reason) => {
                debug!("Chasing meteor {:?} ({reason:?})", meteor.id);
                TargetPlan {
                    decision: TargetDecision::Chase(meteor.id),
                    point: meteor.position,
                }
            }
        }
    }

    /// Steers towards `target` for one tick of `dt` seconds.
    pub fn steer(&mut self, view: &ArenaView<'_>, target: Vec2, dt: f32) -> SteeringOutput {
        let rival = RivalContext {
            position: view.rival.position,
            speed_sq: view.rival.speed_sq(),
            agent_speed_sq: view.agent.speed_sq(),
        };
        self.steering
            .step(&self.config, view.agent.position, target, rival, dt)
    }

    /// Runs the full decision and steering pass for one tick.
    pub fn tick(&mut self, view: &ArenaView<'_>, dt: f32) -> AgentStep {
        let plan = self.determine_target_position(view);
        let steering = self.steer(view, plan.point, dt);
        AgentStep { plan, steering }
    }
}
