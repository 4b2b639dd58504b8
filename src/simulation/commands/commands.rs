use crate::core::grid::{Grid, ACTIVE};
use crate::core::{Cell, Seed};
use crate::domain::mode::SpreadMode;

use super::EngineCore;

pub(super) fn interact(engine: &mut EngineCore, row: u32, col: u32) -> bool {
    let Some(state) = engine.store.current().get(row, col) else {
        tracing::debug!(row, col, "click outside grid ignored");
        return false;
    };
    let cell = Cell::new(row, col);

    match engine.config.mode {
        SpreadMode::Precedence => stamp_click(engine, cell, state),
        SpreadMode::Bounded { .. } | SpreadMode::Unbounded => {
            let queued = engine.pending.insert(Seed::new(cell, ACTIVE));
            if !queued {
                tracing::debug!(row, col, "click already pending");
            }
            queued
        }
    }
}

/// Precedence click: every click advances the counter, even a skipped one.
/// Skips when the cell already shows the colour the click would paint; only
/// the displayed colour is compared, not the raw strength.
fn stamp_click(engine: &mut EngineCore, cell: Cell, state: u32) -> bool {
    engine.click_counter = engine.click_counter.saturating_add(1);
    let strength = engine.click_counter;

    if engine.palette.display_index(state) == engine.palette.display_index(strength) {
        tracing::debug!(
            row = cell.row,
            col = cell.col,
            strength,
            "click matches displayed colour, skipped"
        );
        return false;
    }

    engine.pending.insert(Seed::new(cell, strength))
}

pub(super) fn clear(engine: &mut EngineCore) {
    engine
        .store
        .replace(|grid| Grid::new(grid.width(), grid.height()));
    engine.pending.clear();
    engine.waves.clear();
    engine.frame = 0;
    engine.active_cells = 0;
}
