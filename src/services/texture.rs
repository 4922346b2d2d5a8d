//! Texture lookup by symbol name.

use std::collections::HashMap;

/// Opaque reference to a drawable texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(u32);

impl TextureHandle {
    /// Placeholder used when a lookup fails.
    pub const EMPTY: TextureHandle = TextureHandle(0);

    /// Raw handle value.
    #[inline]
    pub fn id(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

/// Synchronous name-to-texture lookup over a pre-populated cache.
pub trait TextureCache: Send + Sync {
    /// Resolve `name`, returning `None` if it was never loaded.
    fn texture(&self, name: &str) -> Option<TextureHandle>;
}

/// In-memory texture cache keyed by name.
#[derive(Debug, Default, Clone)]
pub struct TextureAtlas {
    handles: HashMap<String, TextureHandle>,
    next_id: u32,
}

impl TextureAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an atlas with one handle per name.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut atlas = Self::new();
        for name in names {
            atlas.register(name);
        }
        atlas
    }

    /// Register a texture, returning its handle. Re-registering a name
    /// returns the existing handle.
    pub fn register(&mut self, name: impl Into<String>) -> TextureHandle {
        let next_id = &mut self.next_id;
        *self.handles.entry(name.into()).or_insert_with(|| {
            // Handle 0 is reserved for EMPTY
            *next_id += 1;
            TextureHandle(*next_id)
        })
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl TextureCache for TextureAtlas {
    fn texture(&self, name: &str) -> Option<TextureHandle> {
        self.handles.get(name).copied()
    }
}

/// Resolve `name`, substituting the placeholder when missing.
pub fn texture_or_empty(cache: &dyn TextureCache, name: &str) -> TextureHandle {
    cache.texture(name).unwrap_or_else(|| {
        log::debug!("Texture {} not in cache, using placeholder", name);
        TextureHandle::EMPTY
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_issues_distinct_non_empty_handles() {
        let mut atlas = TextureAtlas::new();
        let a = atlas.register("a.png");
        let b = atlas.register("b.png");

        assert_ne!(a, b);
        assert!(!a.is_empty());
        assert!(!b.is_empty());
        assert_eq!(atlas.register("a.png"), a);
        assert_eq!(atlas.len(), 2);
    }

    #[test]
    fn test_lookup() {
        let atlas = TextureAtlas::from_names(["symbol1.png", "symbol2.png"]);
        assert!(atlas.texture("symbol1.png").is_some());
        assert!(atlas.texture("background.png").is_none());
    }

    #[test]
    fn test_missing_falls_back_to_empty() {
        let atlas = TextureAtlas::from_names(["symbol1.png"]);
        assert_eq!(texture_or_empty(&atlas, "nope.png"), TextureHandle::EMPTY);
        assert_eq!(
            texture_or_empty(&atlas, "symbol1.png"),
            atlas.texture("symbol1.png").unwrap()
        );
    }
}
