//! Slot - one positioned, textured tile on a reel strip.

use crate::services::TextureHandle;

/// Stable identity assigned to a slot at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

/// A square tile anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// Identity registered with the display container.
    pub id: SlotId,
    /// Left edge in display units.
    pub x: f32,
    /// Top edge. Always 0 for horizontal reels.
    pub y: f32,
    /// Width and height.
    pub size: f32,
    /// Palette index of the symbol shown.
    pub symbol: usize,
    pub texture: TextureHandle,
}

impl Slot {
    pub fn new(id: SlotId, x: f32, size: f32, symbol: usize, texture: TextureHandle) -> Self {
        Self {
            id,
            x,
            y: 0.0,
            size,
            symbol,
            texture,
        }
    }

    /// Right edge in display units.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.size
    }
}
