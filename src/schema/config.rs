//! Configuration types for reel tuning parameters.

use serde::{Deserialize, Serialize};

/// Default symbol palette, one texture name per symbol.
pub const DEFAULT_SYMBOLS: [&str; 5] = [
    "symbol1.png",
    "symbol2.png",
    "symbol3.png",
    "symbol4.png",
    "symbol5.png",
];

/// Sound alias stopped when a reel settles.
pub const DEFAULT_SPIN_SOUND: &str = "Reel spin";

fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

fn default_cruise_speed() -> f32 {
    3000.0
}

fn default_decay() -> f32 {
    0.90
}

fn default_stop_threshold() -> f32 {
    15.0
}

fn default_recycle_boundary() -> f32 {
    1.0
}

fn default_overlap() -> f32 {
    15.0
}

fn default_spin_sound() -> String {
    DEFAULT_SPIN_SOUND.to_string()
}

/// Geometry and motion tuning for a single reel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelConfig {
    /// Number of slots on the strip.
    pub symbol_count: usize,
    /// Width and height of one tile in display units.
    pub symbol_size: f32,
    /// Texture names symbols are drawn from.
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
    /// Speed applied by `start_spin`, in display units per second.
    #[serde(default = "default_cruise_speed")]
    pub cruise_speed: f32,
    /// Per-update speed multiplier while stopping, in (0, 1).
    #[serde(default = "default_decay")]
    pub decay: f32,
    /// Speed below which a stopping reel halts and snaps.
    #[serde(default = "default_stop_threshold")]
    pub stop_threshold: f32,
    /// A slot recycles once its right edge is at or left of this x.
    #[serde(default = "default_recycle_boundary")]
    pub recycle_boundary: f32,
    /// Seam overlap between a recycled slot and the previous tail.
    #[serde(default = "default_overlap")]
    pub overlap: f32,
    /// Sound alias stopped on snap.
    #[serde(default = "default_spin_sound")]
    pub spin_sound: String,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            symbol_count: 5,
            symbol_size: 100.0,
            symbols: default_symbols(),
            cruise_speed: default_cruise_speed(),
            decay: default_decay(),
            stop_threshold: default_stop_threshold(),
            recycle_boundary: default_recycle_boundary(),
            overlap: default_overlap(),
            spin_sound: default_spin_sound(),
        }
    }
}

impl ReelConfig {
    /// Default tuning with the given strip geometry.
    pub fn with_size(symbol_count: usize, symbol_size: f32) -> Self {
        Self {
            symbol_count,
            symbol_size,
            ..Self::default()
        }
    }

    /// Total strip length when grid-aligned.
    #[inline]
    pub fn strip_length(&self) -> f32 {
        self.symbol_count as f32 * self.symbol_size
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbol_count == 0 {
            return Err(ConfigError::InvalidSymbolCount);
        }
        if !(self.symbol_size.is_finite() && self.symbol_size > 0.0) {
            return Err(ConfigError::InvalidSymbolSize(self.symbol_size));
        }
        if self.symbols.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if !(self.cruise_speed.is_finite() && self.cruise_speed > 0.0) {
            return Err(ConfigError::InvalidCruiseSpeed(self.cruise_speed));
        }
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(ConfigError::InvalidDecay(self.decay));
        }
        if !(self.stop_threshold.is_finite() && self.stop_threshold > 0.0) {
            return Err(ConfigError::InvalidStopThreshold(self.stop_threshold));
        }
        if !(self.overlap >= 0.0 && self.overlap < self.symbol_size) {
            return Err(ConfigError::InvalidOverlap {
                overlap: self.overlap,
                symbol_size: self.symbol_size,
            });
        }
        if !(self.recycle_boundary > 0.0 && self.recycle_boundary < self.symbol_size) {
            return Err(ConfigError::InvalidRecycleBoundary {
                boundary: self.recycle_boundary,
                symbol_size: self.symbol_size,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Symbol count must be non-zero")]
    InvalidSymbolCount,
    #[error("Symbol size must be positive, got {0}")]
    InvalidSymbolSize(f32),
    #[error("Symbol palette must not be empty")]
    EmptyPalette,
    #[error("Cruise speed must be positive, got {0}")]
    InvalidCruiseSpeed(f32),
    #[error("Decay factor must lie in (0, 1), got {0}")]
    InvalidDecay(f32),
    #[error("Stop threshold must be positive, got {0}")]
    InvalidStopThreshold(f32),
    #[error("Overlap {overlap} must be non-negative and below symbol size {symbol_size}")]
    InvalidOverlap { overlap: f32, symbol_size: f32 },
    #[error("Recycle boundary {boundary} must be positive and below symbol size {symbol_size}")]
    InvalidRecycleBoundary { boundary: f32, symbol_size: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ReelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_count() {
        let config = ReelConfig::with_size(0, 100.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidSymbolCount));
    }

    #[test]
    fn test_rejects_non_positive_size() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = ReelConfig::with_size(5, size);
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidSymbolSize(_))),
                "size {} should be rejected",
                size
            );
        }
    }

    #[test]
    fn test_rejects_bad_decay() {
        for decay in [0.0, 1.0, 1.5, -0.2] {
            let config = ReelConfig {
                decay,
                ..ReelConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidDecay(_))
            ));
        }
    }

    #[test]
    fn test_rejects_overlap_wider_than_tile() {
        // Default overlap of 15 cannot close a seam on a 10-unit tile
        let config = ReelConfig::with_size(5, 10.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOverlap { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_recycle_boundary() {
        for recycle_boundary in [f32::NAN, -1.0, 0.0, 100.0, 250.0, f32::INFINITY] {
            let config = ReelConfig {
                recycle_boundary,
                ..ReelConfig::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidRecycleBoundary { .. })
                ),
                "boundary {} should be rejected",
                recycle_boundary
            );
        }
    }

    #[test]
    fn test_rejects_empty_palette() {
        let config = ReelConfig {
            symbols: Vec::new(),
            ..ReelConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyPalette));
    }

    #[test]
    fn test_optional_fields_default_when_deserializing() {
        let config: ReelConfig =
            serde_json::from_str(r#"{"symbol_count": 3, "symbol_size": 64.0}"#).unwrap();
        assert_eq!(config.symbol_count, 3);
        assert_eq!(config.symbol_size, 64.0);
        assert_eq!(config.symbols.len(), DEFAULT_SYMBOLS.len());
        assert_eq!(config.cruise_speed, 3000.0);
        assert_eq!(config.spin_sound, DEFAULT_SPIN_SOUND);
    }

    #[test]
    fn test_strip_length() {
        assert_eq!(ReelConfig::with_size(4, 50.0).strip_length(), 200.0);
    }
}
