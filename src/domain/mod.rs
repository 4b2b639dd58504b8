//! Domain rules: spread modes, palette, configuration

pub mod config;
pub mod mode;
pub mod palette;
