//! Tuning configuration for the agent and its arena.
//!
//! Every field has a default taken from [`crate::constants`], so a JSON file
//! only needs to list the values it overrides:
//!
//! ```
//! use forager::ForagerConfig;
//! let cfg = ForagerConfig::from_json_str(r#"{ "agent": { "speed": 7.5 } }"#).unwrap();
//! assert!((cfg.agent.speed - 7.5).abs() < f32::EPSILON);
//! assert!((cfg.agent.mass - forager::AGENT_MASS).abs() < f32::EPSILON);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    AGENT_MASS, ARENA_HALF_HEIGHT, ARENA_HALF_WIDTH, CLOSENESS_FACTOR, COLLECTION_DISTANCE,
    DEFAULT_SEED, GROWN_METEOR_VALUE, LOITER_DISTANCE, MAX_GROWTH_DELAY, METEOR_LOOKAHEAD,
    METEOR_REPULSION_RANGE, METEOR_REPULSIVE_FORCE, MIN_GROWTH_DELAY, MIN_MOVE, PICKUP_RADIUS,
    PLENTY_OF_METEORS, REGISTRATION_DELAY, RIVAL_REPULSION_RANGE, RIVAL_REPULSIVE_FORCE,
    SMALL_METEOR_VALUE, TICK_SECONDS, TRAVEL_SPEED, UNSEEN_LIFETIME,
};

/// Failure loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration text is not valid JSON for [`ForagerConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value parsed but is outside its allowed range.
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Steering and targeting constants for the agent.
///
/// Fields documented as squared are compared against squared distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    /// Fixed travel speed.
    pub speed: f32,
    /// Mass dividing the seek force.
    pub mass: f32,
    /// Squared speed below which a tick's movement is skipped.
    pub min_move: f32,
    /// Squared distance within which the rival repels the agent.
    pub rival_repulsion_range: f32,
    /// Rival repulsion strength.
    pub rival_repulsive_force: f32,
    /// Squared distance inside which loitering is considered.
    pub collection_distance: f32,
    /// Multiplier on the rival's squared distance to a contested meteor.
    pub closeness_factor: f32,
    /// Offset from the target towards the rival while loitering.
    pub loiter_distance: f32,
    /// Lookahead along a meteor's heading used to predict it leaving.
    pub meteor_lookahead: f32,
    /// Registered meteor count above which the agent never waits.
    pub plenty_of_meteors: usize,
    /// Squared meteor repulsion range. Reserved; steering ignores it.
    pub meteor_repulsion_range: f32,
    /// Meteor repulsion force. Reserved; steering ignores it.
    pub meteor_repulsive_force: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            speed: TRAVEL_SPEED,
            mass: AGENT_MASS,
            min_move: MIN_MOVE,
            rival_repulsion_range: RIVAL_REPULSION_RANGE,
            rival_repulsive_force: RIVAL_REPULSIVE_FORCE,
            collection_distance: COLLECTION_DISTANCE,
            closeness_factor: CLOSENESS_FACTOR,
            loiter_distance: LOITER_DISTANCE,
            meteor_lookahead: METEOR_LOOKAHEAD,
            plenty_of_meteors: PLENTY_OF_METEORS,
            meteor_repulsion_range: METEOR_REPULSION_RANGE,
            meteor_repulsive_force: METEOR_REPULSIVE_FORCE,
        }
    }
}

/// Arena geometry and meteor lifecycle settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    /// Half width of the rectangular play area centred on the origin.
    pub half_width: f32,
    /// Half height of the rectangular play area centred on the origin.
    pub half_height: f32,
    /// Seconds inside the area before a meteor is registered.
    pub registration_delay: f32,
    /// Seconds after spawning at which a meteor that never entered the area
    /// is destroyed.
    pub unseen_lifetime: f32,
    /// Lower bound of the random growth delay in seconds.
    pub min_growth_delay: f32,
    /// Upper bound of the random growth delay in seconds.
    pub max_growth_delay: f32,
    /// Distance at which an actor collects a registered meteor.
    pub pickup_radius: f32,
    /// Points for collecting a small meteor.
    pub small_value: u32,
    /// Points for collecting a grown meteor.
    pub grown_value: u32,
    /// Seed for growth-delay sampling.
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            half_width: ARENA_HALF_WIDTH,
            half_height: ARENA_HALF_HEIGHT,
            registration_delay: REGISTRATION_DELAY,
            unseen_lifetime: UNSEEN_LIFETIME,
            min_growth_delay: MIN_GROWTH_DELAY,
            max_growth_delay: MAX_GROWTH_DELAY,
            pickup_radius: PICKUP_RADIUS,
            small_value: SMALL_METEOR_VALUE,
            grown_value: GROWN_METEOR_VALUE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Complete simulation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForagerConfig {
    /// Fixed tick duration in seconds.
    pub tick_seconds: f32,
    /// Agent tuning.
    pub agent: AgentConfig,
    /// Arena tuning.
    pub arena: ArenaConfig,
}

impl Default for ForagerConfig {
    fn default() -> Self {
        Self {
            tick_seconds: TICK_SECONDS,
            agent: AgentConfig::default(),
            arena: ArenaConfig::default(),
        }
    }
}

fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be non-negative, got {value}"),
        ))
    }
}

impl ForagerConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// the errors of [`ForagerConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks that every value is usable by the simulation.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("tick_seconds", self.tick_seconds)?;

        let agent = &self.agent;
        require_positive("agent.speed", agent.speed)?;
        require_positive("agent.mass", agent.mass)?;
        require_non_negative("agent.min_move", agent.min_move)?;
        require_non_negative("agent.rival_repulsion_range", agent.rival_repulsion_range)?;
        require_non_negative("agent.rival_repulsive_force", agent.rival_repulsive_force)?;
        require_non_negative("agent.collection_distance", agent.collection_distance)?;
        require_non_negative("agent.closeness_factor", agent.closeness_factor)?;
        require_non_negative("agent.loiter_distance", agent.loiter_distance)?;
        require_non_negative("agent.meteor_lookahead", agent.meteor_lookahead)?;
        require_non_negative("agent.meteor_repulsion_range", agent.meteor_repulsion_range)?;
        require_non_negative("agent.meteor_repulsive_force", agent.meteor_repulsive_force)?;
        if agent.min_move > agent.speed * agent.speed {
            return Err(ConfigError::invalid(
                "agent.min_move",
                "exceeds the squared travel speed, so the agent could never move",
            ));
        }

        let arena = &self.arena;
        require_positive("arena.half_width", arena.half_width)?;
        require_positive("arena.half_height", arena.half_height)?;
        require_non_negative("arena.registration_delay", arena.registration_delay)?;
        require_non_negative("arena.unseen_lifetime", arena.unseen_lifetime)?;
        require_non_negative("arena.min_growth_delay", arena.min_growth_delay)?;
        require_non_negative("arena.max_growth_delay", arena.max_growth_delay)?;
        require_non_negative("arena.pickup_radius", arena.pickup_radius)?;
        if arena.min_growth_delay > arena.max_growth_delay {
            return Err(ConfigError::invalid(
                "arena.min_growth_delay",
                format!(
                    "{} is greater than max_growth_delay {}",
                    arena.min_growth_delay, arena.max_growth_delay
                ),
            ));
        }
        Ok(())
    }
}
