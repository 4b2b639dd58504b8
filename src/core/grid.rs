//! Grid - immutable row-major snapshot of cell states
//!
//! A snapshot is never written in place. Every update goes through
//! `Grid::stamped`, which copies the cells and hands back a new grid, so a
//! renderer holding the previous snapshot keeps seeing a consistent frame.
//!
//! Cell meaning depends on the spread mode:
//!   binary modes:    0 = inactive, 1 = active
//!   precedence mode: strength (0..), displayed as strength % palette size

use super::Seed;

mod indexing;
mod neighbors;

pub use neighbors::{neighbors, NEIGHBOR_OFFSETS};

/// State written by the binary modes
pub const ACTIVE: u32 = 1;
pub const INACTIVE: u32 = 0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<u32>,
}

impl Grid {
    /// All-inactive grid
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![INACTIVE; (width as usize) * (height as usize)],
        }
    }

    /// Grid where each cell is produced by `fill(row, col)`
    pub fn from_fn<F>(width: u32, height: u32, mut fill: F) -> Self
    where
        F: FnMut(u32, u32) -> u32,
    {
        let mut cells = Vec::with_capacity((width as usize) * (height as usize));
        for row in 0..height {
            for col in 0..width {
                cells.push(fill(row, col));
            }
        }
        Self { width, height, cells }
    }

    /// Copy of this grid with every seed written through `write(old, seed)`.
    ///
    /// Out-of-bounds seeds are skipped.
    pub fn stamped<I, W>(&self, seeds: I, mut write: W) -> Grid
    where
        I: IntoIterator<Item = Seed>,
        W: FnMut(u32, Seed) -> u32,
    {
        let mut next = self.clone();
        for seed in seeds {
            let Some(idx) = self.checked_index(seed.cell.row, seed.cell.col) else {
                continue;
            };
            next.cells[idx] = write(self.cells[idx], seed);
        }
        next
    }

    /// Cell state, `None` when out of bounds
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Flat row-major view
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        // zero-width grids have no cells, the max(1) only keeps chunks() from panicking
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Number of non-zero cells
    pub fn count_active(&self) -> u32 {
        self.cells.iter().filter(|&&c| c != INACTIVE).count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    #[test]
    fn from_fn_is_row_major() {
        let grid = Grid::from_fn(3, 2, |row, col| row * 10 + col);
        assert_eq!(grid.to_rows(), vec![vec![0, 1, 2], vec![10, 11, 12]]);
        assert_eq!(grid.get(1, 2), Some(12));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn stamped_copies_and_leaves_source_untouched() {
        let grid = Grid::new(3, 3);
        let seeds = [Seed::new(Cell::new(1, 1), 7), Seed::new(Cell::new(0, 2), 3)];

        let next = grid.stamped(seeds, |_, seed| seed.strength);

        assert_eq!(grid.count_active(), 0);
        assert_eq!(next.get(1, 1), Some(7));
        assert_eq!(next.get(0, 2), Some(3));
        assert_eq!(next.count_active(), 2);
    }

    #[test]
    fn stamped_skips_out_of_bounds_seeds() {
        let grid = Grid::new(2, 2);
        let seeds = [Seed::new(Cell::new(5, 0), 1)];
        let next = grid.stamped(seeds, |_, _| ACTIVE);
        assert_eq!(next, grid);
    }

    #[test]
    fn stamped_passes_old_value_to_writer() {
        let grid = Grid::from_fn(2, 1, |_, col| col * 5);
        let seeds = [Seed::new(Cell::new(0, 0), 3), Seed::new(Cell::new(0, 1), 3)];
        let next = grid.stamped(seeds, |old, seed| old.max(seed.strength));
        assert_eq!(next.cells(), &[3, 5]);
    }
}
