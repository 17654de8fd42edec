//! Game state and core simulation types
//!
//! The whole run lives in one `GameState` value threaded through `tick`,
//! so the simulation is testable without a canvas.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;
use crate::ground_line;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting on the instructions screen, nothing simulated yet
    Ready,
    /// Active run
    Running,
    /// Run ended on a collision; world is frozen
    GameOver,
}

/// The player's stance, which decides hitbox height and sprite
///
/// One tag instead of the on-ground/is-ducking/is-jumping flag triple:
/// ducking mid-air is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Posture {
    Standing,
    Ducking,
    /// In the air; `held` is true while the jump input is still down,
    /// which keeps gravity at its base value during the ascent
    Airborne { held: bool },
}

/// The player character, fixed at one x position
#[derive(Debug, Clone)]
pub struct Player {
    /// Left edge (fixed after init)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    /// Vertical velocity, positive is downward
    pub vel_y: f32,
    pub posture: Posture,
}

impl Player {
    /// Spawn standing on the ground line
    pub fn new(view: Vec2) -> Self {
        Self {
            x: view.x / 4.0,
            y: ground_line(view.y) - PLAYER_STAND_HEIGHT,
            width: PLAYER_WIDTH,
            vel_y: 0.0,
            posture: Posture::Standing,
        }
    }

    /// Current hitbox height, decided by posture
    pub fn height(&self) -> f32 {
        match self.posture {
            Posture::Ducking => PLAYER_DUCK_HEIGHT,
            Posture::Standing | Posture::Airborne { .. } => PLAYER_STAND_HEIGHT,
        }
    }

    pub fn on_ground(&self) -> bool {
        !matches!(self.posture, Posture::Airborne { .. })
    }

    /// Current hitbox
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height())
    }

    /// Jump command: only acts while grounded; ducking un-ducks first so
    /// the arc starts from the standing hitbox
    pub fn press_jump(&mut self) {
        match self.posture {
            Posture::Standing => {}
            Posture::Ducking => self.release_duck(),
            Posture::Airborne { .. } => return,
        }
        self.posture = Posture::Airborne { held: true };
        self.vel_y = JUMP_VELOCITY;
    }

    /// Jump release: halves the remaining upward velocity, but only while
    /// an actively held jump is still ascending
    pub fn release_jump(&mut self) {
        if let Posture::Airborne { held: true } = self.posture {
            if self.vel_y < 0.0 {
                self.vel_y *= JUMP_RELEASE_DAMPING;
                self.posture = Posture::Airborne { held: false };
            }
        }
    }

    /// Duck command: only acts while standing on the ground
    pub fn press_duck(&mut self) {
        if self.posture == Posture::Standing {
            self.posture = Posture::Ducking;
            // Shift down so the feet stay planted
            self.y += PLAYER_STAND_HEIGHT - PLAYER_DUCK_HEIGHT;
        }
    }

    /// Duck release: restores the standing hitbox
    pub fn release_duck(&mut self) {
        if self.posture == Posture::Ducking {
            self.posture = Posture::Standing;
            self.y -= PLAYER_STAND_HEIGHT - PLAYER_DUCK_HEIGHT;
        }
    }

    /// Gravity integration and ground snap
    pub fn integrate(&mut self, dt: f32, view: Vec2) {
        if let Posture::Airborne { held } = self.posture {
            let mut gravity = GRAVITY;
            // Short hop: once the jump is released, the rest of the ascent
            // is cut short by extra gravity
            if !held && self.vel_y < 0.0 {
                gravity *= SHORT_HOP_GRAVITY_MULTIPLIER;
            }
            self.vel_y += gravity * dt;
            self.y += self.vel_y * dt;
        }

        let floor = ground_line(view.y) - self.height();
        if self.y >= floor {
            self.y = floor;
            self.vel_y = 0.0;
            if !self.on_ground() {
                self.posture = Posture::Standing;
            }
        }
    }

    /// Re-plant on the ground line after a viewport change
    pub fn replant(&mut self, view: Vec2) {
        if self.on_ground() {
            self.y = ground_line(view.y) - self.height();
        }
    }
}

/// Obstacle type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Sits on the ground line; jumped over
    Cactus,
    /// Floats at one of the fixed altitude tiers; ducked under or jumped
    Bird,
}

/// A scrolling obstacle
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
}

impl Obstacle {
    /// A cactus with its base on the ground line
    pub fn cactus(x: f32, view: Vec2) -> Self {
        Self {
            kind: ObstacleKind::Cactus,
            rect: Rect::new(
                x,
                ground_line(view.y) - CACTUS_HEIGHT,
                CACTUS_WIDTH,
                CACTUS_HEIGHT,
            ),
        }
    }

    /// A bird at the given altitude tier (index into `BIRD_TIER_OFFSETS`)
    pub fn bird(x: f32, tier: usize, view: Vec2) -> Self {
        let offset = BIRD_TIER_OFFSETS[tier];
        Self {
            kind: ObstacleKind::Bird,
            rect: Rect::new(
                x,
                ground_line(view.y) - BIRD_SIZE - offset,
                BIRD_SIZE,
                BIRD_SIZE,
            ),
        }
    }
}

/// Background glyph, chosen by the day/night state at spawn time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorSymbol {
    Cloud,
    Sparkle,
}

/// Purely cosmetic background element with its own scroll factor
#[derive(Debug, Clone)]
pub struct Decoration {
    pub pos: Vec2,
    pub symbol: DecorSymbol,
    /// Fraction of the world scroll speed this element moves at
    pub speed_factor: f32,
}

/// Complete game state (deterministic given seed, inputs and viewport)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// The only randomness source in the simulation
    pub rng: Pcg32,
    /// Injected playable area; the simulation never reads the window
    pub view: Vec2,
    pub phase: GamePhase,
    /// Survival score, fractional; `floor` of it is what players see
    pub score: f32,
    /// Current scroll speed (px/s)
    pub speed: f32,
    /// Seconds until the next obstacle spawn
    pub spawn_timer: f32,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Active decorations in spawn order
    pub decorations: Vec<Decoration>,
}

impl GameState {
    /// Create a fresh run in the `Ready` phase
    pub fn new(seed: u64, view: Vec2) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            view,
            phase: GamePhase::Ready,
            score: 0.0,
            speed: BASE_SCROLL_SPEED,
            // First obstacle goes out on the first running frame
            spawn_timer: 0.0,
            player: Player::new(view),
            obstacles: Vec::new(),
            decorations: Vec::new(),
        }
    }

    /// Begin the run; only meaningful from the instructions screen.
    /// Restarting after a game over is a fresh `GameState`, not a start.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Ready {
            self.phase = GamePhase::Running;
        }
    }

    /// Resize hook: adopt the new playable area and keep feet planted
    pub fn set_viewport(&mut self, view: Vec2) {
        self.view = view;
        self.player.replant(view);
    }

    /// Integer score shown to the player
    pub fn score_display(&self) -> u32 {
        self.score as u32
    }

    /// Day/night cycle: first half of every period is day
    pub fn is_day(&self) -> bool {
        self.score_display() % DAY_NIGHT_PERIOD < DAY_NIGHT_PERIOD / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_view() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    #[test]
    fn test_player_spawns_grounded() {
        let player = Player::new(test_view());
        assert!(player.on_ground());
        assert_eq!(player.posture, Posture::Standing);
        assert_eq!(player.rect().bottom(), ground_line(600.0));
    }

    #[test]
    fn test_duck_round_trip_identity() {
        let mut player = Player::new(test_view());
        let y_before = player.y;
        let h_before = player.height();

        player.press_duck();
        assert_eq!(player.posture, Posture::Ducking);
        assert_eq!(player.height(), PLAYER_DUCK_HEIGHT);
        // Feet stay on the ground line
        assert_eq!(player.rect().bottom(), ground_line(600.0));

        player.release_duck();
        assert_eq!(player.y, y_before);
        assert_eq!(player.height(), h_before);
    }

    #[test]
    fn test_duck_ignored_while_airborne() {
        let mut player = Player::new(test_view());
        player.press_jump();
        let y = player.y;

        player.press_duck();
        assert_eq!(player.posture, Posture::Airborne { held: true });
        assert_eq!(player.y, y);

        player.release_duck();
        assert_eq!(player.posture, Posture::Airborne { held: true });
    }

    #[test]
    fn test_jump_while_ducking_unducks_first() {
        let mut player = Player::new(test_view());
        player.press_duck();
        player.press_jump();

        assert_eq!(player.posture, Posture::Airborne { held: true });
        assert_eq!(player.vel_y, JUMP_VELOCITY);
        // Arc starts from the standing hitbox
        assert_eq!(player.height(), PLAYER_STAND_HEIGHT);
        assert_eq!(player.rect().bottom(), ground_line(600.0));
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut player = Player::new(test_view());
        player.press_jump();
        player.integrate(0.1, test_view());
        let vel = player.vel_y;

        player.press_jump();
        assert_eq!(player.vel_y, vel);
    }

    #[test]
    fn test_jump_release_halves_upward_velocity() {
        let mut player = Player::new(test_view());
        player.press_jump();
        player.release_jump();

        assert_eq!(player.vel_y, JUMP_VELOCITY * JUMP_RELEASE_DAMPING);
        assert_eq!(player.posture, Posture::Airborne { held: false });

        // Second release is a no-op
        let vel = player.vel_y;
        player.release_jump();
        assert_eq!(player.vel_y, vel);
    }

    #[test]
    fn test_jump_release_noop_while_descending() {
        let mut player = Player::new(test_view());
        player.press_jump();
        // Integrate until the apex has passed
        while player.vel_y < 0.0 {
            player.integrate(1.0 / 120.0, test_view());
        }
        let vel = player.vel_y;
        player.release_jump();
        assert_eq!(player.vel_y, vel);
    }

    #[test]
    fn test_jump_release_noop_while_grounded() {
        let mut player = Player::new(test_view());
        player.release_jump();
        assert_eq!(player.vel_y, 0.0);
        assert!(player.on_ground());
    }

    #[test]
    fn test_airborne_velocity_monotonic_until_snap() {
        let mut player = Player::new(test_view());
        player.press_jump();

        let mut prev_vel = player.vel_y;
        while !player.on_ground() {
            player.integrate(1.0 / 120.0, test_view());
            if !player.on_ground() {
                assert!(player.vel_y > prev_vel);
                prev_vel = player.vel_y;
            }
        }

        // Snap lands exactly on the ground line with velocity cleared
        assert_eq!(player.vel_y, 0.0);
        assert_eq!(player.rect().bottom(), ground_line(600.0));
        assert!(player.rect().bottom() <= ground_line(600.0));
    }

    #[test]
    fn test_replant_after_resize() {
        let mut state = GameState::new(7, test_view());
        state.set_viewport(Vec2::new(800.0, 450.0));
        assert_eq!(state.player.rect().bottom(), ground_line(450.0));
    }

    #[test]
    fn test_start_only_from_ready() {
        let mut state = GameState::new(7, test_view());
        state.start();
        assert_eq!(state.phase, GamePhase::Running);

        state.phase = GamePhase::GameOver;
        state.start();
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_day_night_boundaries() {
        let mut state = GameState::new(7, test_view());
        for (score, day) in [(0, true), (349, true), (350, false), (699, false), (700, true)] {
            state.score = score as f32;
            assert_eq!(state.is_day(), day, "score {score}");
        }
    }

    #[test]
    fn test_bird_tiers_above_ground() {
        let view = test_view();
        let b0 = Obstacle::bird(800.0, 0, view);
        let b2 = Obstacle::bird(800.0, 2, view);
        assert_eq!(b0.rect.bottom(), ground_line(view.y) - BIRD_TIER_OFFSETS[0]);
        assert!(b2.rect.bottom() < b0.rect.bottom());
    }
}
