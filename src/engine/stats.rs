//! Reel state summaries for logging and CLI output.

use serde::Serialize;

use super::{Reel, ReelPhase};

/// Snapshot of a reel's observable state.
#[derive(Debug, Clone, Serialize)]
pub struct ReelStats {
    pub phase: ReelPhase,
    /// Speed in display units per second.
    pub speed: f32,
    /// Slot positions in strip order (ascending x).
    pub positions: Vec<f32>,
    /// Symbol names in strip order.
    pub symbols: Vec<String>,
    /// Whether the grid invariant currently holds.
    pub grid_aligned: bool,
}

impl ReelStats {
    /// Compute statistics from a reel.
    pub fn from_reel(reel: &Reel) -> Self {
        let mut slots: Vec<_> = reel.slots().iter().collect();
        slots.sort_by(|a, b| a.x.total_cmp(&b.x));

        Self {
            phase: reel.phase(),
            speed: reel.speed(),
            positions: slots.iter().map(|s| s.x).collect(),
            symbols: slots
                .iter()
                .map(|s| reel.symbol_name(s).to_string())
                .collect(),
            grid_aligned: reel.is_grid_aligned(),
        }
    }

    /// Leftmost slot position, i.e. how far the strip has scrolled.
    pub fn offset(&self) -> f32 {
        self.positions.first().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::engine::{ReelEnv, SymbolRng};
    use crate::schema::ReelConfig;
    use crate::services::{SilentBackend, SoundBank, TextureAtlas};

    fn reel() -> Reel {
        let config = ReelConfig::with_size(4, 50.0);
        let env = ReelEnv::new(
            Arc::new(TextureAtlas::from_names(config.symbols.iter().cloned())),
            Arc::new(SoundBank::<SilentBackend>::default()),
            SymbolRng::new(17),
        );
        Reel::new(config, env).unwrap()
    }

    #[test]
    fn test_stats_at_rest() {
        let reel = reel();
        let stats = ReelStats::from_reel(&reel);

        assert_eq!(stats.phase, ReelPhase::Resting);
        assert_eq!(stats.speed, 0.0);
        assert_eq!(stats.positions, vec![0.0, 50.0, 100.0, 150.0]);
        assert_eq!(stats.symbols.len(), 4);
        assert!(stats.grid_aligned);
        assert_eq!(stats.offset(), 0.0);
    }

    #[test]
    fn test_stats_while_spinning() {
        let mut reel = reel();
        reel.start_spin();
        reel.update(0.5);

        let stats = ReelStats::from_reel(&reel);
        assert_eq!(stats.phase, ReelPhase::Spinning);
        assert!(!stats.grid_aligned);
        assert!(stats.offset() < 0.0);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["phase"], "Spinning");
    }
}
