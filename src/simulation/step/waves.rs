use crate::core::grid::Grid;
use crate::core::pending::PendingSet;
use crate::domain::mode::SpreadMode;

use super::tick::expand;

/// One bounded spread: a frontier plus the expansions it may still make.
///
/// Waves never merge. A later click starts its own wave, so it cannot extend
/// or revive one that already ran out of depth.
#[derive(Clone, Debug)]
pub(crate) struct Wave {
    frontier: PendingSet,
    remaining_depth: u32,
}

impl Wave {
    pub(crate) fn new(frontier: PendingSet, remaining_depth: u32) -> Self {
        Self { frontier, remaining_depth }
    }

    pub(crate) fn frontier(&self) -> &PendingSet {
        &self.frontier
    }

    pub(crate) fn remaining_depth(&self) -> u32 {
        self.remaining_depth
    }

    /// Step past a tick whose snapshot already holds this frontier.
    /// Depth zero is a hard stop even with a non-empty frontier.
    pub(crate) fn advance(self, committed: &Grid, mode: &SpreadMode) -> Option<Wave> {
        if self.remaining_depth == 0 {
            return None;
        }

        let next = expand(&self.frontier, committed, mode);
        if next.is_empty() {
            return None;
        }

        Some(Wave {
            frontier: next,
            remaining_depth: self.remaining_depth - 1,
        })
    }
}
