//! Which color each actor currently needs most.
//!
//! The rival simply needs its lowest-scoring color. The agent does the same
//! while it trails, skipping to its second-ranked color when nothing of the
//! lowest color is registered. Once the agent's lowest score exceeds the
//! rival's it switches to denial and needs whatever the rival needs.

use log::debug;
use serde::Serialize;

use crate::actor::ActorRole;
use crate::color::{MeteorColor, ScoreCard};
use crate::registry::MeteorRegistry;

/// Need of the rival together with the score that defines it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RivalNeed {
    /// Lowest-scoring color of the rival.
    pub color: MeteorColor,
    /// The rival's score in that color.
    pub lowest_score: u32,
}

/// The rival's needed color: its lowest-scoring one.
///
/// # Examples
/// ```
/// use forager::{needs::rival_need, MeteorColor, ScoreCard};
/// let scores = ScoreCard::from_pairs([(MeteorColor::Red, 2), (MeteorColor::Green, 2)]);
/// assert_eq!(rival_need(&scores).color, MeteorColor::Blue);
/// ```
#[must_use]
pub fn rival_need(scores: &ScoreCard) -> RivalNeed {
    let (color, lowest_score) = scores.lowest();
    RivalNeed {
        color,
        lowest_score,
    }
}

/// The agent's needed color given the rival's current need.
#[must_use]
pub fn agent_need(scores: &ScoreCard, rival: RivalNeed, registry: &MeteorRegistry) -> MeteorColor {
    let ranked = scores.ranked();
    let [lowest, second, ..] = ranked;
    if scores.get(lowest) > rival.lowest_score {
        return rival.color;
    }
    if registry.contains_color(lowest) {
        lowest
    } else {
        second
    }
}

/// Cached need state, refreshed once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NeedTracker {
    agent: MeteorColor,
    rival: RivalNeed,
}

impl Default for NeedTracker {
    fn default() -> Self {
        let [first, ..] = MeteorColor::ALL;
        Self {
            agent: first,
            rival: RivalNeed {
                color: first,
                lowest_score: 0,
            },
        }
    }
}

impl NeedTracker {
    /// Recomputes both needs. The rival is refreshed first so the agent's
    /// denial check sees this tick's rival state.
    pub fn refresh(
        &mut self,
        agent_scores: &ScoreCard,
        rival_scores: &ScoreCard,
        registry: &MeteorRegistry,
    ) {
        self.rival = rival_need(rival_scores);
        let agent = agent_need(agent_scores, self.rival, registry);
        if agent != self.agent {
            debug!("Agent need changed {} -> {agent}", self.agent);
        }
        self.agent = agent;
    }

    /// Needed color of `role` as of the last refresh.
    #[must_use]
    pub const fn needed(&self, role: ActorRole) -> MeteorColor {
        match role {
            ActorRole::Agent => self.agent,
            ActorRole::Rival => self.rival.color,
        }
    }

    /// The rival's need including its defining score.
    #[must_use]
    pub const fn rival(&self) -> RivalNeed {
        self.rival
    }
}
