use wasm_bindgen::prelude::*;

use crate::domain::mode::TickOutcome;

use super::perf_stats::PerfStats;
use super::EngineCore;

/// JS-facing engine. Ticks are driven by the caller (or by `Animation`).
#[wasm_bindgen]
pub struct Engine {
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Bounded-mode engine with default settings at the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: EngineCore::new(width, height),
        }
    }

    /// Engine from a JSON config, e.g. `{"width":30,"height":20,"mode":{"kind":"precedence"}}`
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<Engine, JsValue> {
        let core = EngineCore::from_config_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn active_cells(&self) -> u32 { self.core.active_cells() }

    #[wasm_bindgen(getter)]
    pub fn click_counter(&self) -> u32 { self.core.click_counter() }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> u64 { self.core.version() }

    #[wasm_bindgen(getter)]
    pub fn pending_len(&self) -> usize { self.core.pending_len() }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> u8 { self.core.mode().code() }

    /// Tick delay / interval the engine was configured with
    #[wasm_bindgen(getter)]
    pub fn delay_ms(&self) -> u32 { self.core.config().delay_ms }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Cell click from the renderer. Returns true if it queued work.
    pub fn interact(&mut self, row: u32, col: u32) -> bool {
        self.core.interact(row, col)
    }

    pub fn has_pending_work(&self) -> bool {
        self.core.has_pending_work()
    }

    /// Advance one frame
    pub fn tick(&mut self) -> TickOutcome {
        self.core.tick()
    }

    /// Clear the grid (click counter is kept)
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Raw cell states, row-major
    pub fn cells(&self) -> Vec<u32> {
        self.core.snapshot().cells().to_vec()
    }

    /// Cell state, undefined when out of bounds
    pub fn cell(&self, row: u32, col: u32) -> Option<u32> {
        self.core.snapshot().get(row, col)
    }

    /// ABGR colours, row-major, ready for ImageData
    pub fn colors(&mut self) -> Vec<u32> {
        self.core.colors().to_vec()
    }

    /// Refresh the colour buffer and return a pointer into wasm memory
    pub fn colors_ptr(&mut self) -> *const u32 {
        self.core.colors();
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl Engine {
    pub fn core(&self) -> &EngineCore {
        &self.core
    }

    pub fn into_core(self) -> EngineCore {
        self.core
    }
}
