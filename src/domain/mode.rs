//! Spread modes - the three strategy variants of the engine
//!
//! Each mode decides three things: which neighbours are eligible, how the
//! pending set merges duplicates, and how a seed is written into a cell.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::core::grid::ACTIVE;
use crate::core::pending::MergeRule;

/// Depth used when a bounded config omits it
pub const DEFAULT_DEPTH: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SpreadMode {
    /// Depth-limited breadth-first spread, one wave per tick window of clicks
    Bounded {
        #[serde(default = "default_depth")]
        depth: u32,
    },
    /// Click-counter strengths, stronger activations overwrite weaker cells
    Precedence,
    /// Binary occupancy, spreads until nothing reachable is left
    Unbounded,
}

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

impl Default for SpreadMode {
    fn default() -> Self {
        SpreadMode::Bounded { depth: DEFAULT_DEPTH }
    }
}

/// How the tick driver fires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cadence {
    /// Self-chaining one-shot delay, armed by input, stops when exhausted
    OneShot,
    /// Fixed interval for the lifetime of the driver
    Interval,
}

// Numeric codes shared with JS
pub const MODE_BOUNDED: u8 = 0;
pub const MODE_PRECEDENCE: u8 = 1;
pub const MODE_UNBOUNDED: u8 = 2;

impl SpreadMode {
    #[inline]
    pub fn carries_strength(&self) -> bool {
        matches!(self, SpreadMode::Precedence)
    }

    pub fn merge_rule(&self) -> MergeRule {
        if self.carries_strength() {
            MergeRule::KeepMax
        } else {
            MergeRule::KeepExisting
        }
    }

    pub fn cadence(&self) -> Cadence {
        match self {
            SpreadMode::Bounded { .. } => Cadence::OneShot,
            SpreadMode::Precedence | SpreadMode::Unbounded => Cadence::Interval,
        }
    }

    /// May a neighbour in `state` receive an activation of `strength`?
    /// Binary: anything not yet active. Precedence: strictly weaker cells only,
    /// ties stay with the occupant.
    #[inline]
    pub fn is_eligible(&self, state: u32, strength: u32) -> bool {
        match self {
            SpreadMode::Precedence => state < strength,
            SpreadMode::Bounded { .. } | SpreadMode::Unbounded => state != ACTIVE,
        }
    }

    /// New cell value when a seed of `strength` lands on a cell.
    /// Precedence writes the seed strength as is: a click repaints its cell
    /// even over a stronger random start value, and spread seeds only ever
    /// target strictly weaker cells.
    #[inline]
    pub fn written_state(&self, strength: u32) -> u32 {
        match self {
            SpreadMode::Precedence => strength,
            SpreadMode::Bounded { .. } | SpreadMode::Unbounded => ACTIVE,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            SpreadMode::Bounded { .. } => MODE_BOUNDED,
            SpreadMode::Precedence => MODE_PRECEDENCE,
            SpreadMode::Unbounded => MODE_UNBOUNDED,
        }
    }
}

/// Result of one tick, also what the driver uses to decide on rescheduling
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Work remains for the next tick
    Continue = 0,
    /// Interval modes: nothing pending, keep firing and wait for input
    Idle = 1,
    /// Bounded mode: every wave is exhausted, the chain stops
    Finished = 2,
}
