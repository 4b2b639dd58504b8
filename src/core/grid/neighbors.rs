use smallvec::SmallVec;

use super::*;
use crate::core::Cell;

/// (drow, dcol) in expansion order: down, right, up, left
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// 4-connected neighbours of `source` that may receive its activation.
///
/// `eligible(neighbour_state, source_strength)` decides per neighbour; out of
/// bounds candidates are dropped silently. Each result carries the source
/// strength.
pub fn neighbors<E>(grid: &Grid, source: &Seed, mut eligible: E) -> SmallVec<[Seed; 4]>
where
    E: FnMut(u32, u32) -> bool,
{
    let mut out = SmallVec::new();
    for (drow, dcol) in NEIGHBOR_OFFSETS {
        let row = source.cell.row as i32 + drow;
        let col = source.cell.col as i32 + dcol;
        if grid.is_oob(row, col) {
            continue;
        }

        let (row, col) = (row as u32, col as u32);
        let state = grid.cells[grid.index(row, col)];
        if eligible(state, source.strength) {
            out.push(Seed::new(Cell::new(row, col), source.strength));
        }
    }
    out
}
