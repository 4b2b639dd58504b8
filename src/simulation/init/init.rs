use crate::core::pending::PendingSet;
use crate::core::random::random_fill;
use crate::domain::config::EngineConfig;
use crate::domain::palette::{Palette, BG_COLOR};

use super::perf_stats::PerfStats;
use super::store::GridStore;
use super::EngineCore;

pub(super) fn create_engine_core(config: EngineConfig) -> EngineCore {
    let palette = Palette::new(config.palette_size);
    let store = initial_store(&config, &palette);
    let active_cells = store.current().count_active();
    let size = store.current().size();

    EngineCore {
        pending: PendingSet::new(config.mode.merge_rule()),
        waves: Vec::new(),
        click_counter: 0,
        frame: 0,
        active_cells,
        colors: vec![BG_COLOR; size],
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        palette,
        store,
        config,
    }
}

fn initial_store(config: &EngineConfig, palette: &Palette) -> GridStore {
    if !config.random {
        return GridStore::initialize(config.width, config.height, |_, _| 0);
    }

    if !config.mode.carries_strength() {
        tracing::warn!(mode = ?config.mode, "random fill only applies to precedence mode, ignoring");
        return GridStore::initialize(config.width, config.height, |_, _| 0);
    }

    GridStore::initialize(
        config.width,
        config.height,
        random_fill(config.seed, palette.size()),
    )
}
