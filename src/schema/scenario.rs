//! Scenario files driving the `reel-sim` CLI.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConfigError, ReelConfig};

fn default_spin_frames() -> u64 {
    120
}

fn default_max_frames() -> u64 {
    1000
}

fn default_frame_deltas() -> Vec<f32> {
    vec![1.0]
}

/// A scripted spin: cruise for `spin_frames`, then stop and run until rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Reel being driven.
    #[serde(default)]
    pub reel: ReelConfig,
    /// Symbol RNG seed. `None` draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Frames spent at cruise speed before `stop_spin`.
    #[serde(default = "default_spin_frames")]
    pub spin_frames: u64,
    /// Hard cap on total frames.
    #[serde(default = "default_max_frames")]
    pub max_frames: u64,
    /// Frame deltas (1.0 = 1/60 s), cycled for the whole run.
    #[serde(default = "default_frame_deltas")]
    pub frame_deltas: Vec<f32>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            reel: ReelConfig::default(),
            seed: Some(42),
            spin_frames: default_spin_frames(),
            max_frames: default_max_frames(),
            frame_deltas: default_frame_deltas(),
        }
    }
}

impl Scenario {
    /// Read and validate a scenario from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path)?;
        let scenario: Scenario = serde_json::from_str(&text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Validate the embedded reel configuration and frame pattern.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        self.reel.validate()?;
        if self.frame_deltas.is_empty() {
            return Err(ScenarioError::EmptyFrameDeltas);
        }
        if let Some(&bad) = self
            .frame_deltas
            .iter()
            .find(|d| !(d.is_finite() && **d >= 0.0))
        {
            return Err(ScenarioError::InvalidFrameDelta(bad));
        }
        Ok(())
    }

    /// Delta for the given frame number.
    #[inline]
    pub fn delta_at(&self, frame: u64) -> f32 {
        self.frame_deltas[(frame % self.frame_deltas.len() as u64) as usize]
    }
}

/// Errors raised while loading a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid reel configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Scenario needs at least one frame delta")]
    EmptyFrameDeltas,
    #[error("Frame delta must be finite and non-negative, got {0}")]
    InvalidFrameDelta(f32),
}
