use wasm_bindgen::prelude::*;

/// Snapshot of the last tick (zeros when perf metrics are disabled)
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) applied: u32,
    pub(super) candidates: u32,
    pub(super) pending_after: u32,
    pub(super) waves: u32,
    pub(super) active_cells: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

impl Default for PerfStats {
    fn default() -> Self {
        PerfStats {
            tick_ms: 0.0,
            applied: 0,
            candidates: 0,
            pending_after: 0,
            waves: 0,
            active_cells: 0,
            frame: 0,
        }
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    /// Seeds written into the grid this tick
    #[wasm_bindgen(getter)]
    pub fn applied(&self) -> u32 { self.applied }
    /// Neighbour candidates produced by the expand phase
    #[wasm_bindgen(getter)]
    pub fn candidates(&self) -> u32 { self.candidates }
    #[wasm_bindgen(getter)]
    pub fn pending_after(&self) -> u32 { self.pending_after }
    #[wasm_bindgen(getter)]
    pub fn waves(&self) -> u32 { self.waves }
    #[wasm_bindgen(getter)]
    pub fn active_cells(&self) -> u32 { self.active_cells }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
