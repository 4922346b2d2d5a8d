//! Reel - Frame-driven horizontal symbol strip.
//!
//! Each `update` integrates slot positions over the frame delta, recycles
//! slots that scrolled off the left edge to the tail of the strip, and
//! while stopping decays speed until the strip halts and snaps to grid.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use super::{Slot, SlotId, SymbolRng};
use crate::schema::{ConfigError, ReelConfig};
use crate::services::{AudioService, Container, TextureCache, TextureHandle, texture_or_empty};

/// Frame deltas are normalized so that 1.0 is one frame at this rate.
pub const FRAMES_PER_SECOND: f32 = 60.0;

/// Convert elapsed wall time to a normalized frame delta.
#[inline]
pub fn frame_delta(elapsed: Duration) -> f32 {
    elapsed.as_secs_f32() * FRAMES_PER_SECOND
}

/// Motion state derived from spin intent and speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReelPhase {
    /// Stationary and grid-aligned.
    Resting,
    /// Scrolling at cruise speed.
    Spinning,
    /// Spin released, speed decaying.
    Decelerating,
}

/// Collaborators injected into a reel.
pub struct ReelEnv {
    pub textures: Arc<dyn TextureCache>,
    pub audio: Arc<dyn AudioService>,
    pub rng: SymbolRng,
}

impl ReelEnv {
    pub fn new(
        textures: Arc<dyn TextureCache>,
        audio: Arc<dyn AudioService>,
        rng: SymbolRng,
    ) -> Self {
        Self {
            textures,
            audio,
            rng,
        }
    }
}

/// A single reel column.
pub struct Reel {
    config: ReelConfig,
    slots: Vec<Slot>,
    /// Display units per second.
    speed: f32,
    spin_intent: bool,
    container: Container,
    textures: Arc<dyn TextureCache>,
    audio: Arc<dyn AudioService>,
    rng: SymbolRng,
}

impl Reel {
    /// Create a grid-aligned reel with randomly chosen symbols.
    pub fn new(config: ReelConfig, env: ReelEnv) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut reel = Self {
            slots: Vec::with_capacity(config.symbol_count),
            config,
            speed: 0.0,
            spin_intent: false,
            container: Container::new(),
            textures: env.textures,
            audio: env.audio,
            rng: env.rng,
        };
        reel.create_slots();

        Ok(reel)
    }

    /// Create a reel with default tuning.
    pub fn with_size(
        symbol_count: usize,
        symbol_size: f32,
        env: ReelEnv,
    ) -> Result<Self, ConfigError> {
        Self::new(ReelConfig::with_size(symbol_count, symbol_size), env)
    }

    /// Rebuild the strip from scratch and bring the reel to rest.
    pub fn reset(&mut self) {
        self.speed = 0.0;
        self.spin_intent = false;
        self.create_slots();
    }

    fn create_slots(&mut self) {
        self.container.remove_children();
        self.slots.clear();

        let size = self.config.symbol_size;
        for i in 0..self.config.symbol_count {
            let (symbol, texture) = self.random_symbol();
            let slot = Slot::new(SlotId(i), i as f32 * size, size, symbol, texture);
            self.container.add_child(slot.id);
            self.slots.push(slot);
        }
    }

    fn random_symbol(&mut self) -> (usize, TextureHandle) {
        let symbol = self.rng.pick(self.config.symbols.len());
        let texture = texture_or_empty(self.textures.as_ref(), &self.config.symbols[symbol]);
        (symbol, texture)
    }

    /// Begin spinning at cruise speed.
    pub fn start_spin(&mut self) {
        if !self.spin_intent {
            log::debug!("Reel spin started at {} units/s", self.config.cruise_speed);
        }
        self.spin_intent = true;
        self.speed = self.config.cruise_speed;
    }

    /// Release the spin. Deceleration happens over subsequent updates.
    pub fn stop_spin(&mut self) {
        if self.spin_intent {
            log::debug!("Reel spin released at {} units/s", self.speed);
        }
        self.spin_intent = false;
    }

    /// Advance the reel by `delta` frames (1.0 = 1/60 s).
    pub fn update(&mut self, delta: f32) {
        if !self.spin_intent && self.speed == 0.0 {
            return;
        }

        // Integrate position
        let seconds = delta.max(0.0) / FRAMES_PER_SECOND;
        let move_amount = self.speed * seconds;
        for slot in &mut self.slots {
            slot.x -= move_amount;
        }

        self.recycle_offscreen();

        // Decay is applied once per call, independent of delta
        if !self.spin_intent && self.speed > 0.0 {
            self.speed *= self.config.decay;

            if self.speed < self.config.stop_threshold {
                self.speed = 0.0;
                self.snap_to_grid();
            }
        }
    }

    /// Move slots past the left boundary to the tail with a fresh symbol.
    fn recycle_offscreen(&mut self) {
        let size = self.config.symbol_size;
        let mut max_x = self
            .slots
            .iter()
            .map(|s| s.x)
            .fold(f32::NEG_INFINITY, f32::max);

        for i in 0..self.slots.len() {
            if self.slots[i].x + size > self.config.recycle_boundary {
                continue;
            }

            let (symbol, texture) = self.random_symbol();
            let slot = &mut self.slots[i];
            slot.x = max_x + size - self.config.overlap;
            slot.symbol = symbol;
            slot.texture = texture;
            max_x = slot.x;

            log::trace!("Recycled slot {:?} to x={}", slot.id, slot.x);
        }
    }

    /// Reorder slots by position and place them exactly on the grid.
    fn snap_to_grid(&mut self) {
        let size = self.config.symbol_size;

        // Stable, so ties keep their current order
        self.slots.sort_by(|a, b| a.x.total_cmp(&b.x));
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.x = i as f32 * size;
        }

        log::debug!("Reel settled on grid");
        self.audio.stop(&self.config.spin_sound);
    }

    /// Current motion phase.
    pub fn phase(&self) -> ReelPhase {
        if self.spin_intent {
            ReelPhase::Spinning
        } else if self.speed > 0.0 {
            ReelPhase::Decelerating
        } else {
            ReelPhase::Resting
        }
    }

    /// Check the grid invariant: sorted positions are exact multiples of the symbol size.
    pub fn is_grid_aligned(&self) -> bool {
        let size = self.config.symbol_size;
        self.sorted_positions()
            .iter()
            .enumerate()
            .all(|(i, &x)| x == i as f32 * size)
    }

    /// Slot positions in ascending order.
    pub fn sorted_positions(&self) -> Vec<f32> {
        let mut xs: Vec<f32> = self.slots.iter().map(|s| s.x).collect();
        xs.sort_by(f32::total_cmp);
        xs
    }

    /// Texture name of the symbol a slot shows.
    pub fn symbol_name(&self, slot: &Slot) -> &str {
        &self.config.symbols[slot.symbol]
    }

    pub fn config(&self) -> &ReelConfig {
        &self.config
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Current speed in display units per second.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Whether a spin is currently commanded.
    pub fn is_spinning(&self) -> bool {
        self.spin_intent
    }

    pub fn symbol_count(&self) -> usize {
        self.config.symbol_count
    }

    pub fn symbol_size(&self) -> f32 {
        self.config.symbol_size
    }

    /// Display list holding this reel's slots.
    pub fn container(&self) -> &Container {
        &self.container
    }
}

impl fmt::Debug for Reel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reel")
            .field("config", &self.config)
            .field("slots", &self.slots)
            .field("speed", &self.speed)
            .field("spin_intent", &self.spin_intent)
            .finish_non_exhaustive()
    }
}
