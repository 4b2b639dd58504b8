//! Engine - spreading activation over a grid of cells
//!
//! One state machine, three strategies (see `SpreadMode`):
//! - input lands in a pending set, never on the grid directly
//! - each tick swaps the pending set out, publishes a new snapshot with it
//!   applied, expands against that snapshot and merges the candidates back
//! - the driver (browser timers or `VirtualClock`) decides when ticks fire
//!
//! Grid storage and publishing live in store/, the tick itself in step/,
//! input in commands/.

use std::sync::Arc;

use crate::core::grid::Grid;
use crate::core::pending::PendingSet;
use crate::domain::config::EngineConfig;
use crate::domain::mode::{SpreadMode, TickOutcome};
use crate::domain::palette::Palette;
use crate::error::EngineError;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "store/store.rs"]
mod store;
#[path = "step/waves.rs"]
mod waves;
#[path = "step/tick.rs"]
mod tick;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "clock/virtual_clock.rs"]
mod virtual_clock;
mod facade;

pub use facade::Engine;
pub use perf_stats::PerfStats;
pub use render_extract::{colorize, colorize_into};
pub use store::{GridStore, Subscriber};
pub use virtual_clock::VirtualClock;

use perf_timer::PerfTimer;
use waves::Wave;

/// The propagation engine
pub struct EngineCore {
    config: EngineConfig,
    palette: Palette,
    store: GridStore,

    // Input accumulator. Bounded mode turns it into a new wave each tick,
    // the continuous modes use it as the live frontier.
    pending: PendingSet,
    waves: Vec<Wave>,

    // State
    click_counter: u32,
    frame: u64,
    active_cells: u32,

    // Render buffer (ABGR, one entry per cell)
    colors: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl EngineCore {
    /// Engine with default settings (bounded mode, depth 2) at the given size
    pub fn new(width: u32, height: u32) -> Self {
        init::create_engine_core(EngineConfig {
            width,
            height,
            ..EngineConfig::default()
        })
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(init::create_engine_core(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self, EngineError> {
        let config = EngineConfig::from_json(json)?;
        Ok(init::create_engine_core(config))
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn mode(&self) -> SpreadMode { self.config.mode }

    pub fn palette(&self) -> &Palette { &self.palette }

    pub fn width(&self) -> u32 { self.store.current().width() }

    pub fn height(&self) -> u32 { self.store.current().height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn active_cells(&self) -> u32 { self.active_cells }

    pub fn click_counter(&self) -> u32 { self.click_counter }

    /// Snapshot version, bumped on every publish
    pub fn version(&self) -> u64 { self.store.version() }

    pub fn pending(&self) -> &PendingSet { &self.pending }

    pub fn pending_len(&self) -> usize { self.pending.len() }

    pub fn wave_count(&self) -> usize { self.waves.len() }

    /// Total frontier size across all live waves
    pub fn wave_frontier_len(&self) -> usize {
        self.waves.iter().map(|w| w.frontier().len()).sum()
    }

    /// Would the next tick do anything?
    pub fn has_pending_work(&self) -> bool {
        !self.pending.is_empty() || !self.waves.is_empty()
    }

    /// Current grid snapshot
    pub fn snapshot(&self) -> Arc<Grid> {
        self.store.snapshot()
    }

    /// Register a renderer callback for every committed snapshot
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.store.subscribe(subscriber);
    }

    /// Queue a click at (row, col). Returns true if it queued new work.
    pub fn interact(&mut self, row: u32, col: u32) -> bool {
        commands::interact(self, row, col)
    }

    /// Clear the grid and drop queued work. The click counter survives.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance one frame
    pub fn tick(&mut self) -> TickOutcome {
        tick::tick(self)
    }

    /// Enable or disable per-tick perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Refresh and return the ABGR colour buffer for the current snapshot
    pub fn colors(&mut self) -> &[u32] {
        render_extract::extract_colors(self)
    }

    /// Pointer to the colour buffer (valid until the next `colors` call)
    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.colors.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
