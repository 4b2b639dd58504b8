//! Public JS surface

pub mod driver;
pub mod wasm;
