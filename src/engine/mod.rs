//! Engine module - Reel motion: integration, recycling, deceleration and snapping.

mod reel;
mod slot;
mod stats;
mod symbols;

pub use reel::*;
pub use slot::*;
pub use stats::*;
pub use symbols::*;
