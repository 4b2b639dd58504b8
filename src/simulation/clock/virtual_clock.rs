//! Deterministic tick driver on virtual time
//!
//! Applies the same firing policy as the browser driver without real timers:
//! - interval cadence fires at delay, 2*delay, ... for as long as the clock lives
//! - one-shot cadence arms a tick `delay` after input when no chain is running
//!   and re-arms only while the tick reports `Continue`
//!
//! Handy for headless runs and for tests that need exact frame timing.

use crate::domain::mode::{Cadence, TickOutcome};

use super::EngineCore;

pub struct VirtualClock {
    engine: EngineCore,
    cadence: Cadence,
    delay_ms: u64,
    now_ms: u64,
    next_due_ms: Option<u64>,
    ticks_fired: u64,
}

impl VirtualClock {
    pub fn new(engine: EngineCore) -> Self {
        let cadence = engine.mode().cadence();
        let delay_ms = u64::from(engine.config().delay_ms.max(1));
        let next_due_ms = match cadence {
            Cadence::Interval => Some(delay_ms),
            Cadence::OneShot => None,
        };

        let mut clock = Self {
            engine,
            cadence,
            delay_ms,
            now_ms: 0,
            next_due_ms,
            ticks_fired: 0,
        };
        clock.arm_chain();
        clock
    }

    pub fn engine(&self) -> &EngineCore {
        &self.engine
    }

    pub fn into_engine(self) -> EngineCore {
        self.engine
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn ticks_fired(&self) -> u64 {
        self.ticks_fired
    }

    /// Time of the next scheduled tick, `None` when nothing is armed
    pub fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Forward a click to the engine and arm the one-shot chain if needed
    pub fn interact(&mut self, row: u32, col: u32) -> bool {
        let queued = self.engine.interact(row, col);
        self.arm_chain();
        queued
    }

    pub fn clear(&mut self) {
        self.engine.clear();
        if self.cadence == Cadence::OneShot {
            self.next_due_ms = None;
        }
    }

    /// Move virtual time forward by `ms`, firing every tick that falls due.
    /// Returns the number of ticks fired.
    pub fn advance(&mut self, ms: u64) -> u64 {
        let until = self.now_ms + ms;
        let mut fired = 0;

        while let Some(due) = self.next_due_ms {
            if due > until {
                break;
            }
            self.now_ms = due;
            let outcome = self.engine.tick();
            fired += 1;

            self.next_due_ms = match self.cadence {
                Cadence::Interval => Some(due + self.delay_ms),
                Cadence::OneShot => (outcome == TickOutcome::Continue).then_some(due + self.delay_ms),
            };
        }

        self.now_ms = until;
        self.ticks_fired += fired;
        fired
    }

    /// Fire ticks one delay apart until the engine has nothing left to do or
    /// `max_ticks` is reached. Returns the number of ticks fired.
    pub fn run_until_settled(&mut self, max_ticks: u64) -> u64 {
        let mut fired = 0;
        while fired < max_ticks && self.engine.has_pending_work() {
            let step = self.advance(self.delay_ms);
            if step == 0 {
                break;
            }
            fired += step;
        }
        fired
    }

    fn arm_chain(&mut self) {
        if self.cadence == Cadence::OneShot
            && self.next_due_ms.is_none()
            && self.engine.has_pending_work()
        {
            self.next_due_ms = Some(self.now_ms + self.delay_ms);
        }
    }
}
