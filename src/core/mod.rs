//! Core data types: grid snapshots, cells, seeds, and the pending set.

pub mod grid;
pub mod pending;
pub mod random;

/// Grid position (row, col)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A cell queued for activation together with the state it will carry.
///
/// Binary modes always use strength 1 (the active state); precedence mode
/// carries the stamped click strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seed {
    pub cell: Cell,
    pub strength: u32,
}

impl Seed {
    #[inline]
    pub const fn new(cell: Cell, strength: u32) -> Self {
        Self { cell, strength }
    }
}
