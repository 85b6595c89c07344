#![cfg_attr(docsrs, feature(doc_cfg))]
//! Decision-and-movement core of a competitive meteor-foraging agent.
//!
//! Two actors, the agent and a rival, collect colored meteors inside a
//! bounded arena. Every fixed tick the agent works out which color each side
//! needs, picks a single meteor, decides whether to take it now or loiter
//! until it grows, and steers towards the resulting point while keeping clear
//! of the rival. [`Arena`] runs that pass together with the meteor
//! lifecycle; the individual stages are usable on their own.
pub mod actor;
pub mod agent;
pub mod arena;
pub mod color;
pub mod config;
pub mod constants;
pub mod logging;
pub mod loiter;
pub mod meteor;
pub mod needs;
pub mod physics;
pub mod play_area;
pub mod plugin;
pub mod registry;
pub mod schedule;
pub mod steering;
pub mod targeting;
pub mod vector_math;
pub mod wait;
pub use constants::*;

// Re-export commonly used items
pub use actor::{Actor, ActorRole};
pub use agent::{AgentStep, ArenaView, ForagerAgent, TargetDecision, TargetPlan};
pub use arena::{Arena, Removal, TickReport};
pub use color::{MeteorColor, ScoreCard};
pub use config::{AgentConfig, ArenaConfig, ConfigError, ForagerConfig};
pub use logging::init as init_logging;
pub use loiter::loiter_position;
pub use meteor::{GrowthStage, Meteor, MeteorId};
pub use needs::{NeedTracker, RivalNeed};
pub use physics::applied_acceleration;
pub use play_area::{PlayArea, RectPlayArea};
pub use plugin::{step_arena_system, ForagerPlugin};
pub use registry::MeteorRegistry;
pub use schedule::{Tick, Transition, TransitionSchedule};
pub use steering::{RivalContext, SteeringController, SteeringOutput};
pub use targeting::TargetSelector;
pub use vector_math::vec_normalize;
pub use wait::{GoReason, WaitDecision, WaitPolicy};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use forager::prelude::*;
    //! ```

    pub use crate::{
        Actor, ActorRole, Arena, ForagerAgent, ForagerConfig, GrowthStage, Meteor, MeteorColor,
        MeteorId, MeteorRegistry, PlayArea, RectPlayArea, ScoreCard, TargetDecision,
    };
    pub use glam::Vec2;
}
