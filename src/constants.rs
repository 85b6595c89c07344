//! Default tuning constants for the forager and its arena.
//!
//! Distances marked "squared" are compared directly against squared
//! Euclidean distances and are never square-rooted.

/// Fixed travel speed of the agent in world units per second.
pub const TRAVEL_SPEED: f32 = 5.0;
/// Agent mass dividing the seek force.
pub const AGENT_MASS: f32 = 2.0;
/// Squared velocity magnitude below which a tick produces no movement.
pub const MIN_MOVE: f32 = 0.01;
/// Squared distance within which the rival repels the agent.
pub const RIVAL_REPULSION_RANGE: f32 = 4.0;
/// Scale of the rival repulsion force.
pub const RIVAL_REPULSIVE_FORCE: f32 = 2.0;
/// Squared distance inside which the agent is close enough to loiter.
pub const COLLECTION_DISTANCE: f32 = 9.0;
/// Multiplier on the rival's squared distance when judging contests.
pub const CLOSENESS_FACTOR: f32 = 2.0;
/// Offset from the target towards the rival while loitering.
pub const LOITER_DISTANCE: f32 = 1.5;
/// Distance ahead of a meteor sampled to predict it leaving the arena.
pub const METEOR_LOOKAHEAD: f32 = 3.0;
/// Registered meteor count above which waiting is never worthwhile.
pub const PLENTY_OF_METEORS: usize = 3;
/// Squared range of meteor repulsion (carried, not consumed by steering).
pub const METEOR_REPULSION_RANGE: f32 = 1.0;
/// Meteor repulsion force (carried, not consumed by steering).
pub const METEOR_REPULSIVE_FORCE: f32 = 0.5;
/// Fixed simulation step in seconds.
pub const TICK_SECONDS: f32 = 0.02;

/// Half width of the default rectangular arena.
pub const ARENA_HALF_WIDTH: f32 = 8.0;
/// Half height of the default rectangular arena.
pub const ARENA_HALF_HEIGHT: f32 = 5.0;
/// Seconds a meteor must spend inside the arena before it is registered.
pub const REGISTRATION_DELAY: f32 = 0.5;
/// Seconds a spawned meteor may spend without ever entering the arena.
pub const UNSEEN_LIFETIME: f32 = 10.0;
/// Shortest delay in seconds before a meteor grows.
pub const MIN_GROWTH_DELAY: f32 = 2.0;
/// Longest delay in seconds before a meteor grows.
pub const MAX_GROWTH_DELAY: f32 = 5.0;
/// Distance at which an actor picks up a registered meteor.
pub const PICKUP_RADIUS: f32 = 0.5;
/// Points credited for a small meteor.
pub const SMALL_METEOR_VALUE: u32 = 1;
/// Points credited for a grown meteor.
pub const GROWN_METEOR_VALUE: u32 = 3;
/// Seed for growth-delay sampling when none is configured.
pub const DEFAULT_SEED: u64 = 0x6d65_7465_6f72;
