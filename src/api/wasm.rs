//! Types exported to JS, gathered in one place

pub use crate::api::driver::Animation;
pub use crate::domain::mode::TickOutcome;
pub use crate::simulation::{Engine, PerfStats};
