//! Services module - Collaborators a reel consumes: textures, audio and the display list.

mod audio;
mod display;
mod texture;

pub use audio::*;
pub use display::*;
pub use texture::*;
