//! Simulation session owning the registry, both actors and the agent.
//!
//! One [`Arena::step`] is one fixed tick. Within a tick every registry
//! mutation (timers, exits, collections) happens either before or after the
//! agent's decision pass, never during it, so targeting never observes a
//! meteor mid-destruction.

use bevy::prelude::Resource;
use glam::Vec2;
use hashbrown::HashMap;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::actor::{Actor, ActorRole};
use crate::agent::{ArenaView, ForagerAgent, TargetPlan};
use crate::color::{MeteorColor, ScoreCard};
use crate::config::ForagerConfig;
use crate::meteor::{GrowthStage, Meteor, MeteorId};
use crate::needs::NeedTracker;
use crate::play_area::{PlayArea, RectPlayArea};
use crate::registry::MeteorRegistry;
use crate::schedule::{Tick, Transition, TransitionSchedule};
use crate::vector_math::distance_sq;

/// A meteor leaving play during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Removal {
    /// Picked up by an actor.
    Collected {
        /// The meteor.
        meteor: MeteorId,
        /// Who picked it up.
        by: ActorRole,
        /// Points credited.
        points: u32,
    },
    /// Left the play area and was destroyed.
    Exited {
        /// The meteor.
        meteor: MeteorId,
    },
    /// Never entered the play area within the unseen lifetime.
    Expired {
        /// The meteor.
        meteor: MeteorId,
    },
}

/// Summary of one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    /// Tick that was simulated.
    pub tick: Tick,
    /// The agent's target decision.
    pub plan: TargetPlan,
    /// Agent position after the tick.
    pub agent_position: Vec2,
    /// Whether the agent moved.
    pub moved: bool,
    /// Meteors that were collected or destroyed.
    pub removals: Vec<Removal>,
}

/// A running duel.
#[derive(Resource)]
pub struct Arena {
    config: ForagerConfig,
    area: Box<dyn PlayArea + Send + Sync>,
    registry: MeteorRegistry,
    /// Spawned meteors not yet registered.
    pending: HashMap<MeteorId, Meteor>,
    schedule: TransitionSchedule,
    agent: Actor,
    rival: Actor,
    brain: ForagerAgent,
    needs: NeedTracker,
    rng: StdRng,
    tick: Tick,
    next_id: u64,
}

impl Arena {
    /// Creates a session with a custom boundary predicate.
    #[must_use]
    pub fn new<A>(config: ForagerConfig, area: A) -> Self
    where
        A: PlayArea + Send + Sync + 'static,
    {
        info!("Arena created ({}s ticks)", config.tick_seconds);
        Self {
            area: Box::new(area),
            registry: MeteorRegistry::new(),
            pending: HashMap::new(),
            schedule: TransitionSchedule::new(),
            agent: Actor::new(ActorRole::Agent, Vec2::ZERO),
            rival: Actor::new(ActorRole::Rival, Vec2::ZERO),
            brain: ForagerAgent::new(config.agent),
            needs: NeedTracker::default(),
            rng: StdRng::seed_from_u64(config.arena.seed),
            tick: Tick::default(),
            next_id: 0,
            config,
        }
    }

    /// Creates a session over the rectangular area described by `config`.
    ///
    /// # Examples
    /// ```
    /// use forager::{Arena, ForagerConfig, TargetDecision};
    /// let mut arena = Arena::with_rect(ForagerConfig::default());
    /// let report = arena.step();
    /// assert_eq!(report.plan.decision, TargetDecision::Hold);
    /// ```
    #[must_use]
    pub fn with_rect(config: ForagerConfig) -> Self {
        let area = RectPlayArea::centered(config.arena.half_width, config.arena.half_height);
        Self::new(config, area)
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ForagerConfig {
        &self.config
    }

    /// Ticks simulated so far.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }

    /// Registered meteors.
    #[must_use]
    pub const fn registry(&self) -> &MeteorRegistry {
        &self.registry
    }

    /// Actor state for `role`.
    #[must_use]
    pub const fn actor(&self, role: ActorRole) -> &Actor {
        match role {
            ActorRole::Agent => &self.agent,
            ActorRole::Rival => &self.rival,
        }
    }

    fn actor_mut(&mut self, role: ActorRole) -> &mut Actor {
        match role {
            ActorRole::Agent => &mut self.agent,
            ActorRole::Rival => &mut self.rival,
        }
    }

    /// Needed color of `role` as of the last tick.
    #[must_use]
    pub const fn needed_color(&self, role: ActorRole) -> MeteorColor {
        self.needs.needed(role)
    }

    /// The agent's decision logic.
    #[must_use]
    pub const fn agent_brain(&self) -> &ForagerAgent {
        &self.brain
    }

    /// `true` if `id` is alive, registered or not.
    #[must_use]
    pub fn is_alive(&self, id: MeteorId) -> bool {
        self.registry.contains(id) || self.pending.contains_key(&id)
    }

    /// Teleports the agent, clearing its measured velocity.
    pub fn place_agent(&mut self, position: Vec2) {
        self.agent.position = position;
        self.agent.hold();
    }

    /// Sets the rival's position and velocity as reported by its controller.
    pub fn set_rival_motion(&mut self, position: Vec2, velocity: Vec2) {
        self.rival.position = position;
        self.rival.velocity = velocity;
    }

    /// Overwrites the score card of `role`, e.g. when resuming a match.
    pub fn set_scores(&mut self, role: ActorRole, scores: ScoreCard) {
        self.actor_mut(role).scores = scores;
    }

    /// Moves the rival, deriving its velocity over one tick.
    pub fn move_rival(&mut self, position: Vec2) {
        self.rival.move_to(position, self.config.tick_seconds);
    }

    /// Spawns a small meteor. It becomes a target once it has been inside
    /// the play area for the registration delay, and grows after a random
    /// delay. A meteor that has not entered the area within the unseen
    /// lifetime is destroyed.
    pub fn spawn_meteor(&mut self, position: Vec2, velocity: Vec2, color: MeteorColor) -> MeteorId {
        let id = MeteorId(self.next_id);
        self.next_id += 1;

        let arena = &self.config.arena;
        let (low, high) = (arena.min_growth_delay, arena.max_growth_delay);
        let delay = if low < high {
            self.rng.gen_range(low..=high)
        } else {
            low
        };
        let due = self
            .tick
            .after(Tick::ticks_for(delay, self.config.tick_seconds));
        self.schedule.schedule(due, id, Transition::Grow);
        let expiry = Tick::ticks_for(arena.unseen_lifetime, self.config.tick_seconds);
        self.schedule
            .schedule(self.tick.after(expiry), id, Transition::Expire);

        debug!("Spawned {color} meteor {id:?} at {position:?}, grows at {due:?}");
        self.pending
            .insert(id, Meteor::new(id, position, velocity, color));
        id
    }

    /// Registers `meteor` immediately, bypassing the spawn lifecycle. Its
    /// growth is left to the caller.
    pub fn register_meteor(&mut self, mut meteor: Meteor) -> MeteorId {
        let id = meteor.id;
        meteor.visible = true;
        self.next_id = self.next_id.max(id.into_inner().saturating_add(1));
        self.pending.remove(&id);
        self.schedule.cancel(id);
        self.registry.register(meteor);
        id
    }

    fn destroy(&mut self, id: MeteorId) -> Option<Meteor> {
        self.schedule.cancel(id);
        self.registry
            .remove(id)
            .or_else(|| self.pending.remove(&id))
    }

    /// Credits `role` with the registered meteor `id` and removes it.
    ///
    /// Returns the points awarded, or `None` if `id` is not registered.
    pub fn collect(&mut self, role: ActorRole, id: MeteorId) -> Option<u32> {
        if !self.registry.contains(id) {
            return None;
        }
        let meteor = self.destroy(id)?;
        let points = match meteor.stage {
            GrowthStage::Small => self.config.arena.small_value,
            GrowthStage::Grown => self.config.arena.grown_value,
        };
        self.actor_mut(role).credit(meteor.color, points);
        Some(points)
    }

    fn apply_transitions(&mut self, removals: &mut Vec<Removal>) {
        for due in self.schedule.drain_due(self.tick) {
            match due.kind {
                Transition::Grow => {
                    let meteor = self
                        .registry
                        .get_mut(due.meteor)
                        .or_else(|| self.pending.get_mut(&due.meteor));
                    if let Some(m) = meteor {
                        m.stage = GrowthStage::Grown;
                        trace!("Meteor {:?} grew", m.id);
                    }
                }
                Transition::Register => {
                    if let Some(m) = self.pending.remove(&due.meteor) {
                        debug!("Registered meteor {:?}", m.id);
                        self.registry.register(m);
                    }
                }
                Transition::Expire => {
                    let unseen = self.pending.get(&due.meteor).is_some_and(|m| !m.visible);
                    if unseen && self.destroy(due.meteor).is_some() {
                        debug!("Meteor {:?} never entered the arena", due.meteor);
                        removals.push(Removal::Expired { meteor: due.meteor });
                    }
                }
            }
        }
    }

    fn advance_meteors(&mut self, removals: &mut Vec<Removal>) {
        let dt = self.config.tick_seconds;
        let area = &self.area;

        for meteor in self.registry.iter_mut() {
            meteor.advance(dt);
        }
        for gone in self.registry.drain_where(|m| !area.contains(m.position)) {
            self.schedule.cancel(gone.id);
            debug!("Meteor {:?} left the arena", gone.id);
            removals.push(Removal::Exited { meteor: gone.id });
        }

        let mut pending_ids: Vec<MeteorId> = self.pending.keys().copied().collect();
        pending_ids.sort_unstable();
        let delay = Tick::ticks_for(self.config.arena.registration_delay, dt);
        let mut exited = Vec::new();
        for id in pending_ids {
            let Some(meteor) = self.pending.get_mut(&id) else {
                continue;
            };
            meteor.advance(dt);
            let inside = area.contains(meteor.position);
            if meteor.visible {
                if !inside {
                    exited.push(id);
                }
            } else if inside {
                meteor.visible = true;
                self.schedule
                    .schedule(self.tick.after(delay), id, Transition::Register);
            }
        }

        for id in exited {
            if self.destroy(id).is_some() {
                debug!("Meteor {id:?} left the arena before registering");
                removals.push(Removal::Exited { meteor: id });
            }
        }
        // Zero-delay registrations land before this tick's decision pass.
        self.apply_transitions(removals);
    }

    fn collect_nearby(&mut self, removals: &mut Vec<Removal>) {
        let radius_sq = self.config.arena.pickup_radius * self.config.arena.pickup_radius;
        for role in [ActorRole::Agent, ActorRole::Rival] {
            let position = self.actor(role).position;
            let reached: Vec<MeteorId> = self
                .registry
                .iter()
                .filter(|m| distance_sq(position, m.position) <= radius_sq)
                .map(|m| m.id)
                .collect();
            for meteor in reached {
                if let Some(points) = self.collect(role, meteor) {
                    removals.push(Removal::Collected {
                        meteor,
                        by: role,
                        points,
                    });
                }
            }
        }
    }

    /// Advances the session by one fixed tick.
    ///
    /// Order: due timers, meteor motion and boundary checks, need refresh,
    /// the agent's decision and steering, then collections.
    pub fn step(&mut self) -> TickReport {
        self.tick = self.tick.after(1);
        let dt = self.config.tick_seconds;
        let mut removals = Vec::new();

        self.apply_transitions(&mut removals);
        self.advance_meteors(&mut removals);
        self.needs
            .refresh(&self.agent.scores, &self.rival.scores, &self.registry);

        let view = ArenaView {
            registry: &self.registry,
            agent: &self.agent,
            rival: &self.rival,
            needs: &self.needs,
            area: self.area.as_ref(),
        };
        let step = self.brain.tick(&view, dt);
        let moved = match step.steering.next_position {
            Some(next) => {
                self.agent.move_to(next, dt);
                true
            }
            None => {
                self.agent.hold();
                false
            }
        };

        self.collect_nearby(&mut removals);

        TickReport {
            tick: self.tick,
            plan: step.plan,
            agent_position: self.agent.position,
            moved,
            removals,
        }
    }
}
