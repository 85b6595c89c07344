//! Selection of the single meteor the agent pursues.
//!
//! The registry is scanned fresh on every call; no candidate is cached
//! between ticks.

use glam::Vec2;
use ordered_float::OrderedFloat;

use crate::color::MeteorColor;
use crate::meteor::Meteor;
use crate::registry::MeteorRegistry;
use crate::vector_math::distance_sq;

/// Read-only view of the registry from the agent's position.
#[derive(Debug, Clone, Copy)]
pub struct TargetSelector<'a> {
    registry: &'a MeteorRegistry,
    origin: Vec2,
}

impl<'a> TargetSelector<'a> {
    /// Creates a selector measuring distances from `origin`.
    #[must_use]
    pub const fn new(registry: &'a MeteorRegistry, origin: Vec2) -> Self {
        Self { registry, origin }
    }

    fn closest<I>(&self, candidates: I) -> Option<&'a Meteor>
    where
        I: IntoIterator<Item = &'a Meteor>,
    {
        // `min_by_key` keeps the first of equally distant candidates.
        candidates
            .into_iter()
            .min_by_key(|m| OrderedFloat(distance_sq(self.origin, m.position)))
    }

    /// Closest registered meteor of `color`, or the closest of any color
    /// when none of `color` is registered. `None` only for an empty registry.
    #[must_use]
    pub fn closest_of_color(&self, color: MeteorColor) -> Option<&'a Meteor> {
        let registry = self.registry;
        self.closest(registry.iter().filter(|m| m.color == color))
            .or_else(|| self.closest(registry.iter()))
    }

    /// The meteor to chase given both actors' needs.
    ///
    /// Takes the closest meteor for each need and returns whichever is nearer
    /// the agent. The agent's candidate wins only when strictly closer.
    #[must_use]
    pub fn best(&self, agent_need: MeteorColor, rival_need: MeteorColor) -> Option<&'a Meteor> {
        let for_agent = self.closest_of_color(agent_need);
        let for_rival = self.closest_of_color(rival_need);
        match (for_agent, for_rival) {
            (None, None) => None,
            (Some(mine), None) => Some(mine),
            (None, Some(theirs)) => Some(theirs),
            (Some(mine), Some(theirs)) => {
                let d_mine = distance_sq(self.origin, mine.position);
                let d_theirs = distance_sq(self.origin, theirs.position);
                Some(if d_mine < d_theirs { mine } else { theirs })
            }
        }
    }
}
