use crate::core::grid::Grid;
use crate::domain::mode::SpreadMode;
use crate::domain::palette::{Palette, BG_COLOR};

use super::EngineCore;

/// Paint `grid` into `out` (ABGR, row-major). `out` must hold one entry per cell.
pub fn colorize_into(grid: &Grid, palette: &Palette, mode: &SpreadMode, out: &mut [u32]) {
    debug_assert_eq!(out.len(), grid.size(), "colour buffer size mismatch");
    for (dst, &state) in out.iter_mut().zip(grid.cells()) {
        *dst = palette.color_of(mode, state);
    }
}

pub fn colorize(grid: &Grid, palette: &Palette, mode: &SpreadMode) -> Vec<u32> {
    let mut out = vec![BG_COLOR; grid.size()];
    colorize_into(grid, palette, mode, &mut out);
    out
}

pub(super) fn extract_colors(engine: &mut EngineCore) -> &[u32] {
    let grid = engine.store.snapshot();
    engine.colors.resize(grid.size(), BG_COLOR);
    colorize_into(&grid, &engine.palette, &engine.config.mode, &mut engine.colors);
    &engine.colors
}
