//! Pending set - seeds waiting for the next tick
//!
//! At most one entry per cell. The merge rule decides what a second insert of
//! the same cell does, and both rules make merging commutative and idempotent,
//! so the final content never depends on whether input or expansion got there
//! first.

use indexmap::map::Entry;
use indexmap::IndexMap;

use super::{Cell, Seed};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeRule {
    /// Binary modes: the first entry wins, repeats are ignored
    KeepExisting,
    /// Precedence mode: the strongest entry wins
    KeepMax,
}

#[derive(Clone, Debug)]
pub struct PendingSet {
    rule: MergeRule,
    entries: IndexMap<Cell, u32>,
}

impl PendingSet {
    pub fn new(rule: MergeRule) -> Self {
        Self {
            rule,
            entries: IndexMap::new(),
        }
    }

    #[inline]
    pub fn rule(&self) -> MergeRule {
        self.rule
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.entries.contains_key(&cell)
    }

    pub fn strength(&self, cell: Cell) -> Option<u32> {
        self.entries.get(&cell).copied()
    }

    /// Insert under the merge rule. Returns true if the set changed.
    pub fn insert(&mut self, seed: Seed) -> bool {
        match self.entries.entry(seed.cell) {
            Entry::Vacant(slot) => {
                slot.insert(seed.strength);
                true
            }
            Entry::Occupied(mut slot) => match self.rule {
                MergeRule::KeepExisting => false,
                MergeRule::KeepMax => {
                    if seed.strength > *slot.get() {
                        slot.insert(seed.strength);
                        true
                    } else {
                        false
                    }
                }
            },
        }
    }

    /// Fold every seed of `other` into this set.
    pub fn merge(&mut self, other: PendingSet) {
        debug_assert_eq!(self.rule, other.rule, "merging pending sets with different rules");
        for seed in other.iter() {
            self.insert(seed);
        }
    }

    /// Hand the current content to the caller and leave an empty set with the
    /// same rule behind, so new input accumulates into a fresh set.
    pub fn take(&mut self) -> PendingSet {
        let rule = self.rule;
        std::mem::replace(self, PendingSet::new(rule))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Seeds in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Seed> + '_ {
        self.entries
            .iter()
            .map(|(cell, strength)| Seed::new(*cell, *strength))
    }

    pub fn to_vec(&self) -> Vec<Seed> {
        self.iter().collect()
    }
}

impl Extend<Seed> for PendingSet {
    fn extend<T: IntoIterator<Item = Seed>>(&mut self, iter: T) {
        for seed in iter {
            self.insert(seed);
        }
    }
}
