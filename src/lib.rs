//! Reel engine - Frame-driven slot machine reel animation.
//!
//! A reel owns a fixed strip of square symbol slots that scrolls left while
//! spinning. Slots leaving the left edge are recycled to the tail with a new
//! random symbol. Releasing the spin decays speed once per frame until the
//! strip halts and snaps back onto an exact grid.
//!
//! # Architecture
//!
//! - `schema`: Reel tuning and CLI scenario types
//! - `engine`: The reel state machine, slots and symbol selection
//! - `services`: Texture cache, audio and display-list collaborators
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use reel_engine::{
//!     engine::{Reel, ReelEnv, SymbolRng},
//!     schema::ReelConfig,
//!     services::{SilentBackend, SoundBank, TextureAtlas},
//! };
//!
//! let config = ReelConfig::default();
//! let textures = TextureAtlas::from_names(config.symbols.iter().cloned());
//! let env = ReelEnv::new(
//!     Arc::new(textures),
//!     Arc::new(SoundBank::<SilentBackend>::default()),
//!     SymbolRng::new(42),
//! );
//! let mut reel = Reel::new(config, env).unwrap();
//!
//! reel.start_spin();
//! for _ in 0..60 {
//!     reel.update(1.0);
//! }
//! reel.stop_spin();
//! while reel.speed() > 0.0 {
//!     reel.update(1.0);
//! }
//!
//! assert!(reel.is_grid_aligned());
//! ```

pub mod engine;
pub mod schema;
pub mod services;

// Re-export commonly used types
pub use engine::{Reel, ReelEnv, ReelPhase, ReelStats, SymbolRng};
pub use schema::{ConfigError, ReelConfig, Scenario};
