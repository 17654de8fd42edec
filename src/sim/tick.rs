//! Per-frame simulation step
//!
//! Advances one variable-dt frame: score and speed accrual, player
//! commands and physics, the spawn countdown, scrolling, and collision.
//! The caller clamps dt (see `consts::MAX_FRAME_DT`); everything here
//! trusts the value it is given.

use glam::Vec2;
use rand::Rng;

use super::state::{DecorSymbol, Decoration, GamePhase, GameState, Obstacle};
use crate::consts::*;
use crate::ground_line;

/// Input commands for a single frame (edge-triggered)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump key/button went down this frame
    pub jump_press: bool,
    /// Jump key/button went up this frame
    pub jump_release: bool,
    /// Duck key/button went down this frame
    pub duck_press: bool,
    /// Duck key/button went up this frame
    pub duck_release: bool,
    /// Demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Running {
        return;
    }

    // Demo mode - the autopilot overlays its own commands
    let mut input = input.clone();
    if input.idle_mode {
        drive_idle(state, &mut input);
    }
    let input = &input;

    // Survival score and monotone speed ramp
    state.score += dt * SCORE_RATE;
    state.speed += SPEED_INCREMENT * dt;

    // Player commands, then physics. Out-of-context commands (duck while
    // airborne, release with no active jump) are ignored inside Player.
    if input.jump_press {
        state.player.press_jump();
    }
    if input.jump_release {
        state.player.release_jump();
    }
    if input.duck_press {
        state.player.press_duck();
    }
    if input.duck_release {
        state.player.release_duck();
    }
    state.player.integrate(dt, state.view);

    // Obstacle spawn countdown, scaled down as the world speeds up
    state.spawn_timer -= dt;
    if state.spawn_timer <= 0.0 {
        spawn_obstacle(state);
        state.spawn_timer =
            spawn_interval_secs(state.score_display()) / (state.speed / BASE_SCROLL_SPEED);
    }

    if state.rng.random::<f32>() < DECOR_SPAWN_CHANCE {
        spawn_decoration(state);
    }

    // Scroll and collide. The first overlap ends the run immediately and
    // freezes the rest of the world mid-frame.
    let hitbox = state.player.rect();
    let speed = state.speed;
    for obstacle in &mut state.obstacles {
        obstacle.rect.pos.x -= speed * dt;
        if hitbox.overlaps(&obstacle.rect) {
            state.phase = GamePhase::GameOver;
            return;
        }
    }
    // Single retain pass, so several same-frame exits can't skip each other
    state.obstacles.retain(|o| o.rect.right() > 0.0);

    for decor in &mut state.decorations {
        decor.pos.x -= speed * decor.speed_factor * dt;
    }
    state.decorations.retain(|d| d.pos.x + DECOR_SIZE > 0.0);
}

/// Probability that a spawn stays on the ground; birds fill the remainder
/// and become more common as the score grows
fn ground_only_chance(score: u32) -> f32 {
    if score > AIRBORNE_SCORE_LATE {
        GROUND_ONLY_LATE
    } else if score > AIRBORNE_SCORE_MID {
        GROUND_ONLY_MID
    } else {
        GROUND_ONLY_BASE
    }
}

/// Seconds between spawns at nominal speed: linear decay, floored
fn spawn_interval_secs(score: u32) -> f32 {
    (SPAWN_INTERVAL_BASE - score as f32 * SPAWN_INTERVAL_DECAY).max(SPAWN_INTERVAL_MIN)
}

/// Spawn one obstacle group at the right edge of the view
fn spawn_obstacle(state: &mut GameState) {
    let score = state.score_display();
    let x = state.view.x;

    if state.rng.random::<f32>() > ground_only_chance(score) {
        let tier = state.rng.random_range(0..BIRD_TIER_OFFSETS.len());
        state.obstacles.push(Obstacle::bird(x, tier, state.view));
        return;
    }

    let first = Obstacle::cactus(x, state.view);
    let mut right = first.rect.right();
    state.obstacles.push(first);

    // Clusters: past one threshold a second cactus may trail the first,
    // past a higher one a third may trail the second
    if score > CHAIN_SCORE_SECOND && state.rng.random::<f32>() < CHAIN_CHANCE_SECOND {
        let gap = state.rng.random_range(CHAIN_GAP_MIN..CHAIN_GAP_MAX);
        let second = Obstacle::cactus(right + gap, state.view);
        right = second.rect.right();
        state.obstacles.push(second);

        if score > CHAIN_SCORE_THIRD && state.rng.random::<f32>() < CHAIN_CHANCE_THIRD {
            let gap = state.rng.random_range(CHAIN_GAP_MIN..CHAIN_GAP_MAX);
            state.obstacles.push(Obstacle::cactus(right + gap, state.view));
        }
    }
}

/// Spawn one background glyph in the top third of the view
fn spawn_decoration(state: &mut GameState) {
    let symbol = if state.is_day() {
        DecorSymbol::Cloud
    } else {
        DecorSymbol::Sparkle
    };
    let y = state.rng.random::<f32>() * state.view.y / 3.0;
    let speed_factor = state.rng.random_range(DECOR_SPEED_MIN..DECOR_SPEED_MAX);
    state.decorations.push(Decoration {
        pos: Vec2::new(state.view.x, y),
        symbol,
        speed_factor,
    });
}

/// Scripted pilot for demo mode: jump cacti and low birds, duck mid-tier
/// birds, ignore the high ones
fn drive_idle(state: &GameState, input: &mut TickInput) {
    let player = &state.player;
    let gl = ground_line(state.view.y);
    // React when the next obstacle is within about half a second of travel
    let lead = state.speed * 0.45;

    let next = state
        .obstacles
        .iter()
        .filter(|o| o.rect.right() > player.x)
        .min_by(|a, b| a.rect.pos.x.total_cmp(&b.rect.pos.x));

    let Some(obstacle) = next else {
        input.duck_release = true;
        return;
    };

    let gap = obstacle.rect.pos.x - (player.x + player.width);
    if gap > lead {
        input.duck_release = true;
        return;
    }

    let bottom = obstacle.rect.bottom();
    if bottom > gl - PLAYER_DUCK_HEIGHT {
        // Cactus or a low bird: over the top
        input.jump_press = true;
    } else if bottom > gl - PLAYER_STAND_HEIGHT {
        // Mid-tier bird: fits under while ducking
        input.duck_press = true;
    }
}
