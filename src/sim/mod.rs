//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, owned by the state
//! - Viewport injected, never read from the platform
//! - No rendering or platform dependencies

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{
    DecorSymbol, Decoration, GamePhase, GameState, Obstacle, ObstacleKind, Player, Posture,
};
pub use tick::{TickInput, tick};
