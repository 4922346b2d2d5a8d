//! Schema module - Configuration and scenario types for reel simulations.

mod config;
mod scenario;

pub use config::*;
pub use scenario::*;
