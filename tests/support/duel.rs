//! Shared fixture wrapping an [`Arena`] for behavioural tests.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use forager::{Arena, TickReport};

/// An arena plus the report of the most recent step.
#[derive(Clone)]
pub struct Duel {
    arena: Arc<Mutex<Arena>>,
    last: Arc<Mutex<Option<TickReport>>>,
}

impl fmt::Debug for Duel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duel")
            .field("last", &self.last_report())
            .finish_non_exhaustive()
    }
}

impl Duel {
    /// Wraps `arena` after `scene` has set it up.
    pub fn new(mut arena: Arena, scene: impl FnOnce(&mut Arena)) -> Self {
        scene(&mut arena);
        Self {
            arena: Arc::new(Mutex::new(arena)),
            last: Arc::new(Mutex::new(None)),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Arena> {
        self.arena.lock().expect("arena lock")
    }

    /// Runs `f` against the arena.
    pub fn with<R>(&self, f: impl FnOnce(&mut Arena) -> R) -> R {
        f(&mut self.guard())
    }

    /// Steps the arena `n` times, keeping the last report.
    pub fn step(&self, n: usize) {
        let report = self.with(|arena| (0..n).map(|_| arena.step()).last());
        *self.last.lock().expect("report lock") = report;
    }

    /// Report of the most recent step.
    pub fn last_report(&self) -> Option<TickReport> {
        self.last.lock().expect("report lock").clone()
    }
}
