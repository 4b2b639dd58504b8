//! Display palette
//!
//! Colours are ABGR packed (little-endian 0xAABBGGRR -> bytes [RR,GG,BB,AA])
//! so the buffer can be copied straight into canvas ImageData.

use crate::core::grid::ACTIVE;

use super::mode::SpreadMode;

/// Background, RGB(10,10,10)
pub const BG_COLOR: u32 = 0xFF0A0A0A;
/// Active cell in the binary modes, RGB(64,160,255)
pub const ACTIVE_COLOR: u32 = 0xFFFFA040;

pub const DEFAULT_PALETTE_SIZE: u32 = 8;

// Index 0 is the background; the rest cycle through the click colours.
const BASE_COLORS: [u32; 8] = [
    BG_COLOR,
    0xFF3C3CE6, // red
    0xFF3CB4F0, // amber
    0xFF50C850, // green
    0xFFE6B43C, // cyan
    0xFFE6643C, // blue
    0xFFC850B4, // violet
    0xFF8C8CF0, // pink
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<u32>,
}

impl Palette {
    /// Palette with `size` entries. Sizes beyond the base table repeat it,
    /// but entry 0 is always the background.
    pub fn new(size: u32) -> Self {
        let size = size.max(1) as usize;
        let colors = (0..size)
            .map(|i| {
                if i == 0 {
                    BG_COLOR
                } else {
                    BASE_COLORS[1 + (i - 1) % (BASE_COLORS.len() - 1)]
                }
            })
            .collect();
        Self { colors }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.colors.len() as u32
    }

    /// Palette slot shown for a precedence strength
    #[inline]
    pub fn display_index(&self, strength: u32) -> u32 {
        strength % self.size()
    }

    /// Canvas colour of a cell value under `mode`
    #[inline]
    pub fn color_of(&self, mode: &SpreadMode, state: u32) -> u32 {
        if mode.carries_strength() {
            self.colors[self.display_index(state) as usize]
        } else if state == ACTIVE {
            ACTIVE_COLOR
        } else {
            BG_COLOR
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new(DEFAULT_PALETTE_SIZE)
    }
}
