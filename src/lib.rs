//! Dash Runner - a side-scrolling obstacle runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, spawning, collisions)
//! - `renderer`: Canvas 2D rendering with sprite fallbacks (wasm only)
//! - `settings`: User preferences

pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Score gained per second of survival
    pub const SCORE_RATE: f32 = 10.0;

    /// Starting horizontal scroll speed (px/s)
    pub const BASE_SCROLL_SPEED: f32 = 200.0;
    /// Scroll speed gained per second (px/s per second)
    pub const SPEED_INCREMENT: f32 = 5.0;

    /// Jump physics
    pub const GRAVITY: f32 = 1000.0;
    pub const JUMP_VELOCITY: f32 = -500.0;
    /// Extra gravity while still rising after an early jump release
    pub const SHORT_HOP_GRAVITY_MULTIPLIER: f32 = 3.0;
    /// Upward velocity kept when the jump is released mid-ascent
    pub const JUMP_RELEASE_DAMPING: f32 = 0.5;

    /// Player dimensions
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_STAND_HEIGHT: f32 = 80.0;
    pub const PLAYER_DUCK_HEIGHT: f32 = 40.0;

    /// Height of the ground strip at the bottom of the view
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Obstacle dimensions
    pub const CACTUS_WIDTH: f32 = 30.0;
    pub const CACTUS_HEIGHT: f32 = 50.0;
    pub const BIRD_SIZE: f32 = 40.0;
    /// Bird altitude tiers, measured up from the ground line to the bird's
    /// bottom edge
    pub const BIRD_TIER_OFFSETS: [f32; 3] = [5.0, 60.0, 120.0];

    /// Spawn schedule: interval decays linearly with score, floored
    pub const SPAWN_INTERVAL_BASE: f32 = 1.5;
    pub const SPAWN_INTERVAL_MIN: f32 = 0.4;
    /// Seconds shaved off the interval per score point
    pub const SPAWN_INTERVAL_DECAY: f32 = 0.002;

    /// Ground-only spawn probability steps (birds fill the remainder)
    pub const GROUND_ONLY_BASE: f32 = 0.8;
    pub const GROUND_ONLY_MID: f32 = 0.6;
    pub const GROUND_ONLY_LATE: f32 = 0.4;
    pub const AIRBORNE_SCORE_MID: u32 = 50;
    pub const AIRBORNE_SCORE_LATE: u32 = 150;

    /// Cactus clustering thresholds and odds
    pub const CHAIN_SCORE_SECOND: u32 = 100;
    pub const CHAIN_SCORE_THIRD: u32 = 300;
    pub const CHAIN_CHANCE_SECOND: f32 = 0.4;
    pub const CHAIN_CHANCE_THIRD: f32 = 0.3;
    /// Gap between chained cacti (uniform range, px)
    pub const CHAIN_GAP_MIN: f32 = 10.0;
    pub const CHAIN_GAP_MAX: f32 = 20.0;

    /// Decorations
    pub const DECOR_SPAWN_CHANCE: f32 = 0.01;
    pub const DECOR_SPEED_MIN: f32 = 0.1;
    pub const DECOR_SPEED_MAX: f32 = 0.6;
    /// Nominal glyph size, used for off-screen pruning
    pub const DECOR_SIZE: f32 = 50.0;

    /// Day/night cycle length in score units (first half is day)
    pub const DAY_NIGHT_PERIOD: u32 = 700;

    /// Largest per-frame elapsed time fed to the simulation; anything
    /// longer (backgrounded tab) would tunnel the player through obstacles
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playable area caps
    pub const MAX_VIEW_WIDTH: f32 = 800.0;
    pub const MAX_VIEW_HEIGHT: f32 = 1000.0;
}

/// The y-coordinate where feet and obstacles rest, for a given view height
#[inline]
pub fn ground_line(view_height: f32) -> f32 {
    view_height - consts::GROUND_HEIGHT
}
