//! Canvas 2D rendering module
//!
//! A fixed-order, read-only pass over the game state: sky, decorations,
//! ground strip, player, obstacles. Sprites that have not finished
//! loading fall back to flat-colored rectangles.

pub mod assets;
pub mod canvas;

pub use assets::{AssetRegistry, SpriteKey};
pub use canvas::CanvasRenderer;
