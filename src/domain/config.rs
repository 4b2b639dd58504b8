//! Engine configuration
//!
//! Loaded from JSON (camelCase) by the wasm facade, or built directly in Rust.
//! Defaults: a 30x20 grid, 15ms frames, bounded depth 2.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::mode::SpreadMode;
use super::palette::DEFAULT_PALETTE_SIZE;

pub const DEFAULT_WIDTH: u32 = 30;
pub const DEFAULT_HEIGHT: u32 = 20;
pub const DEFAULT_DELAY_MS: u32 = 15;
pub const DEFAULT_SEED: u32 = 12345;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub mode: SpreadMode,
    /// Randomized initial colouring (precedence mode)
    pub random: bool,
    /// Tick delay (bounded) or interval (continuous modes)
    pub delay_ms: u32,
    pub palette_size: u32,
    /// xorshift seed for the random fill
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mode: SpreadMode::default(),
            random: false,
            delay_ms: DEFAULT_DELAY_MS,
            palette_size: DEFAULT_PALETTE_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

impl EngineConfig {
    pub fn new(width: u32, height: u32, mode: SpreadMode) -> Self {
        Self {
            width,
            height,
            mode,
            ..Self::default()
        }
    }

    pub fn with_random(mut self, random: bool) -> Self {
        self.random = random;
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_palette_size(mut self, palette_size: u32) -> Self {
        self.palette_size = palette_size;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of integers and a tagged enum: serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.palette_size < 2 {
            return Err(EngineError::InvalidPalette(self.palette_size));
        }
        if self.delay_ms == 0 {
            return Err(EngineError::InvalidDelay);
        }
        Ok(())
    }
}
