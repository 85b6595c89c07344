//! Whether to collect the chosen meteor now or loiter until it grows.
//!
//! The checks run in a fixed order and the first one that fires decides.
//! Reordering them changes behaviour: the play-area predicate, for example,
//! is only consulted once every cheaper check has passed.

use glam::Vec2;
use log::debug;
use serde::Serialize;

use crate::color::MeteorColor;
use crate::config::AgentConfig;
use crate::meteor::Meteor;
use crate::play_area::PlayArea;
use crate::vector_math::{distance_sq, vec_normalize};

/// Why the agent heads straight for its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GoReason {
    /// The target is the rival's needed color; denying it gains nothing by waiting.
    DenyRival,
    /// Enough meteors are registered that this one need not be protected.
    PlentyOfMeteors,
    /// The target has already grown.
    AlreadyGrown,
    /// The agent is too far away to loiter usefully.
    TooFar,
    /// The rival is close enough to contest the target.
    RivalClose,
    /// The target is about to leave the play area.
    LeavingArea,
}

/// Outcome of the wait policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WaitDecision {
    /// Loiter near the target.
    Wait,
    /// Go for the target immediately.
    Go(GoReason),
}

impl WaitDecision {
    /// `true` for [`WaitDecision::Wait`].
    #[must_use]
    pub const fn is_wait(self) -> bool {
        matches!(self, Self::Wait)
    }
}

/// Inputs to the wait policy for one tick.
#[derive(Clone, Copy)]
pub struct WaitPolicy<'a> {
    /// Agent tuning.
    pub config: &'a AgentConfig,
    /// Agent position.
    pub agent_position: Vec2,
    /// Rival position.
    pub rival_position: Vec2,
    /// The rival's needed color.
    pub rival_need: MeteorColor,
    /// Number of registered meteors.
    pub registered: usize,
    /// Boundary predicate.
    pub area: &'a dyn PlayArea,
}

impl WaitPolicy<'_> {
    /// Runs the checks in order and reports the first that fires.
    #[must_use]
    pub fn evaluate(&self, target: &Meteor) -> WaitDecision {
        let cfg = self.config;
        if target.color == self.rival_need {
            return WaitDecision::Go(GoReason::DenyRival);
        }
        if self.registered > cfg.plenty_of_meteors {
            return WaitDecision::Go(GoReason::PlentyOfMeteors);
        }
        if target.is_grown() {
            return WaitDecision::Go(GoReason::AlreadyGrown);
        }
        if distance_sq(self.agent_position, target.position) > cfg.collection_distance {
            return WaitDecision::Go(GoReason::TooFar);
        }
        let rival_d2 = distance_sq(self.rival_position, target.position);
        if rival_d2 * cfg.closeness_factor < cfg.collection_distance {
            return WaitDecision::Go(GoReason::RivalClose);
        }
        let ahead = target.position + vec_normalize(target.velocity) * cfg.meteor_lookahead;
        if !self.area.contains(ahead) {
            return WaitDecision::Go(GoReason::LeavingArea);
        }
        debug!("Waiting for meteor {:?} to grow", target.id);
        WaitDecision::Wait
    }

    /// `true` when the agent should loiter rather than collect `target` now.
    #[must_use]
    pub fn should_wait(&self, target: &Meteor) -> bool {
        self.evaluate(target).is_wait()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meteor::{GrowthStage, MeteorId};
    use crate::play_area::RectPlayArea;
    use rstest::{fixture, rstest};

    #[fixture]
    fn config() -> AgentConfig {
        AgentConfig {
            collection_distance: 9.0,
            closeness_factor: 2.0,
            meteor_lookahead: 1.0,
            plenty_of_meteors: 3,
            ..AgentConfig::default()
        }
    }

    fn waiting_target() -> Meteor {
        Meteor::new(MeteorId(1), Vec2::new(1.0, 0.0), Vec2::Y, MeteorColor::Red)
    }

    #[rstest]
    #[case::deny(MeteorColor::Red, 1, GrowthStage::Small, Vec2::ZERO, GoReason::DenyRival)]
    #[case::plenty(MeteorColor::Blue, 4, GrowthStage::Small, Vec2::ZERO, GoReason::PlentyOfMeteors)]
    #[case::grown(MeteorColor::Blue, 1, GrowthStage::Grown, Vec2::ZERO, GoReason::AlreadyGrown)]
    #[case::too_far(MeteorColor::Blue, 1, GrowthStage::Small, Vec2::new(-5.0, 0.0), GoReason::TooFar)]
    fn first_firing_check_decides(
        config: AgentConfig,
        #[case] rival_need: MeteorColor,
        #[case] registered: usize,
        #[case] stage: GrowthStage,
        #[case] agent_position: Vec2,
        #[case] expected: GoReason,
    ) {
        let area = RectPlayArea::centered(10.0, 10.0);
        let policy = WaitPolicy {
            config: &config,
            agent_position,
            rival_position: Vec2::new(9.0, 9.0),
            rival_need,
            registered,
            area: &area,
        };
        let target = waiting_target().with_stage(stage);
        assert_eq!(policy.evaluate(&target), WaitDecision::Go(expected));
    }

    #[rstest]
    fn waits_when_every_check_passes(config: AgentConfig) {
        let area = RectPlayArea::centered(10.0, 10.0);
        let policy = WaitPolicy {
            config: &config,
            agent_position: Vec2::ZERO,
            rival_position: Vec2::new(9.0, 9.0),
            rival_need: MeteorColor::Blue,
            registered: 3,
            area: &area,
        };
        assert!(policy.should_wait(&waiting_target()));
    }
}
