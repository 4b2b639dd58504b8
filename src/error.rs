use thiserror::Error;

/// Errors raised while building an engine. The propagation itself has none:
/// out-of-bounds work is dropped and redundant clicks are no-ops.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("palette needs at least 2 colours, got {0}")]
    InvalidPalette(u32),

    #[error("tick delay must be at least 1ms")]
    InvalidDelay,

    #[error("invalid engine config: {0}")]
    Config(#[from] serde_json::Error),
}
