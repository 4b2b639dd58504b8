//! Ripple Engine - spreading activation over a cell grid, in WASM
//!
//! A click seeds a cell; on every tick the activation spreads to the
//! 4-connected neighbours that are allowed to receive it. Three modes:
//! - bounded:    depth-limited waves that stop on their own
//! - precedence: click-counter strengths, stronger colours overwrite weaker
//! - unbounded:  binary spread that runs until nothing is reachable
//!
//! Layout:
//! - core/        - grid snapshots, neighbours, pending set
//! - domain/      - modes, palette, configuration
//! - simulation/  - the engine state machine, store, drivers
//! - api/         - JS surface and browser timers

pub mod core;
pub mod domain;
pub mod error;
pub mod logging;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine. Installs the panic hook so a crash anywhere in a
/// frame is reported to the console instead of failing silently, and routes
/// engine log events (info and above) to the console.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::install(tracing::Level::INFO);

    web_sys::console::log_1(&"Ripple WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default configuration as JSON, a starting point for `Engine.fromConfig`
#[wasm_bindgen]
pub fn default_config_json() -> String {
    domain::config::EngineConfig::default().to_json()
}

// Re-export main types
pub use api::wasm::{Animation, Engine, PerfStats, TickOutcome};
pub use crate::core::grid::Grid;
pub use crate::core::{Cell, Seed};
pub use domain::config::EngineConfig;
pub use domain::mode::{Cadence, SpreadMode};
pub use error::EngineError;
pub use simulation::{EngineCore, VirtualClock};

// Export mode constants for JS
#[wasm_bindgen]
pub fn mode_bounded() -> u8 { domain::mode::MODE_BOUNDED }
#[wasm_bindgen]
pub fn mode_precedence() -> u8 { domain::mode::MODE_PRECEDENCE }
#[wasm_bindgen]
pub fn mode_unbounded() -> u8 { domain::mode::MODE_UNBOUNDED }
