//! Fire-once timers for deferred meteor transitions.
//!
//! Growth and registration are scheduled against the tick counter and polled
//! once per tick. Timers belonging to a destroyed meteor are voided with
//! [`TransitionSchedule::cancel`] so a stale handle is never acted on.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::meteor::MeteorId;

const TICK_ROUNDING_SLACK: f64 = 1e-4;

/// Simulation tick counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Tick(pub u64);

impl Tick {
    /// Raw tick value.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// The tick `ticks` after this one.
    #[must_use]
    pub const fn after(self, ticks: u64) -> Self {
        Self(self.0.saturating_add(ticks))
    }

    /// Converts a delay in seconds into whole ticks, rounding up so a timer
    /// never fires early. Non-positive or non-finite delays map to zero.
    ///
    /// # Examples
    /// ```
    /// use forager::Tick;
    /// assert_eq!(Tick::ticks_for(0.05, 0.02), 3);
    /// assert_eq!(Tick::ticks_for(-1.0, 0.02), 0);
    /// ```
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "The tick count is clamped to the u64 domain before casting."
    )]
    pub fn ticks_for(seconds: f32, tick_seconds: f32) -> u64 {
        if !seconds.is_finite() || seconds <= 0.0 {
            return 0;
        }
        if !tick_seconds.is_finite() || tick_seconds <= 0.0 {
            return 0;
        }
        // f32 steps such as 0.02 are not exact; absorb the representation error.
        let ratio = f64::from(seconds) / f64::from(tick_seconds);
        let ticks = (ratio - TICK_ROUNDING_SLACK).ceil().max(0.0);
        ticks.min(u64::MAX as f64) as u64
    }
}

/// Deferred state change applied to a meteor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Transition {
    /// The meteor becomes visible to targeting.
    Register,
    /// The meteor moves from small to grown.
    Grow,
    /// The meteor is destroyed unless it has entered the play area.
    Expire,
}

/// A due timer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduledTransition {
    /// Tick at which the transition fires.
    pub due: Tick,
    /// Scheduling sequence; keeps equal-due entries in insertion order.
    seq: u64,
    /// Meteor the transition applies to.
    pub meteor: MeteorId,
    /// What happens when it fires.
    pub kind: Transition,
}

/// Poll-driven timer queue keyed by due tick.
#[derive(Debug, Clone, Default)]
pub struct TransitionSchedule {
    queue: BinaryHeap<Reverse<ScheduledTransition>>,
    next_seq: u64,
}

impl TransitionSchedule {
    /// Creates an empty schedule.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedules `kind` for `meteor` at tick `due`.
    pub fn schedule(&mut self, due: Tick, meteor: MeteorId, kind: Transition) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.queue.push(Reverse(ScheduledTransition {
            due,
            seq,
            meteor,
            kind,
        }));
    }

    /// Voids every pending timer for `meteor`, returning how many were dropped.
    pub fn cancel(&mut self, meteor: MeteorId) -> usize {
        let before = self.queue.len();
        self.queue.retain(|Reverse(entry)| entry.meteor != meteor);
        before - self.queue.len()
    }

    /// `true` if `meteor` has a pending `kind` timer.
    #[must_use]
    pub fn is_pending(&self, meteor: MeteorId, kind: Transition) -> bool {
        self.queue
            .iter()
            .any(|Reverse(entry)| entry.meteor == meteor && entry.kind == kind)
    }

    /// Removes and returns every entry due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Tick) -> Vec<ScheduledTransition> {
        let mut due = Vec::new();
        while self
            .queue
            .peek()
            .is_some_and(|Reverse(entry)| entry.due <= now)
        {
            if let Some(Reverse(entry)) = self.queue.pop() {
                due.push(entry);
            }
        }
        due
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// `true` when no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
