//! Bevy plugin stepping an [`Arena`] on the fixed timestep.

use bevy::prelude::*;
use log::trace;

use crate::arena::Arena;
use crate::config::ForagerConfig;

/// Installs an [`Arena`] resource and advances it once per `FixedUpdate`.
///
/// The fixed timestep is set to the configured tick duration so the arena's
/// internal clock and Bevy's stay in lockstep.
#[derive(Default)]
pub struct ForagerPlugin {
    /// Configuration used to build the arena.
    pub config: ForagerConfig,
}

impl ForagerPlugin {
    /// Creates a plugin for `config`.
    #[must_use]
    pub const fn new(config: ForagerConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ForagerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_seconds(f64::from(
            self.config.tick_seconds,
        )));
        app.insert_resource(Arena::with_rect(self.config));
        app.add_systems(FixedUpdate, step_arena_system);
    }
}

/// Advances the arena by one tick.
pub fn step_arena_system(mut arena: ResMut<Arena>) {
    let report = arena.step();
    trace!(
        "Tick {:?}: {:?} -> {:?}",
        report.tick,
        report.plan.decision,
        report.agent_position
    );
}
