//! The per-frame draw pass

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::assets::{AssetRegistry, SpriteKey};
use crate::Settings;
use crate::consts::*;
use crate::ground_line;
use crate::sim::{DecorSymbol, GameState, ObstacleKind, Posture, Rect};

/// Palette
const DAY_SKY: &str = "#87ceeb";
const NIGHT_SKY: &str = "#191970";
const GROUND_COLOR: &str = "#7cfc00";
const PLAYER_FALLBACK: &str = "#1e90ff";
const PLAYER_DUCK_FALLBACK: &str = "#ffa500";
const CACTUS_FALLBACK: &str = "#32cd32";
const BIRD_FALLBACK: &str = "#ff4500";

/// Owns the 2D context and the sprite registry
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    assets: AssetRegistry,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let assets = AssetRegistry::load()?;
        Ok(Self { ctx, assets })
    }

    /// Paint one frame. Strictly read-only with respect to the state.
    pub fn render(&self, state: &GameState, settings: &Settings) {
        self.draw_sky(state, settings);
        if settings.effective_decorations() {
            self.draw_decorations(state);
        }
        self.draw_ground(state);
        self.draw_player(state);
        self.draw_obstacles(state);
    }

    fn draw_sky(&self, state: &GameState, settings: &Settings) {
        // Reduced motion keeps the palette stable instead of flipping at
        // every half-cycle
        let day = settings.reduced_motion || state.is_day();
        self.ctx
            .set_fill_style_str(if day { DAY_SKY } else { NIGHT_SKY });
        self.ctx
            .fill_rect(0.0, 0.0, state.view.x as f64, state.view.y as f64);
    }

    fn draw_decorations(&self, state: &GameState) {
        self.ctx.set_font("32px serif");
        for decor in &state.decorations {
            let glyph = match decor.symbol {
                DecorSymbol::Cloud => "\u{2601}\u{fe0f}",
                DecorSymbol::Sparkle => "\u{2728}",
            };
            let _ = self
                .ctx
                .fill_text(glyph, decor.pos.x as f64, decor.pos.y as f64);
        }
    }

    fn draw_ground(&self, state: &GameState) {
        self.ctx.set_fill_style_str(GROUND_COLOR);
        self.ctx.fill_rect(
            0.0,
            ground_line(state.view.y) as f64,
            state.view.x as f64,
            GROUND_HEIGHT as f64,
        );
    }

    fn draw_player(&self, state: &GameState) {
        let player = &state.player;
        let (key, fallback) = match player.posture {
            Posture::Ducking => (SpriteKey::Duck, PLAYER_DUCK_FALLBACK),
            Posture::Airborne { .. } => (SpriteKey::Jump, PLAYER_FALLBACK),
            Posture::Standing => (SpriteKey::Run, PLAYER_FALLBACK),
        };
        self.draw_sprite(key, &player.rect(), fallback);
    }

    fn draw_obstacles(&self, state: &GameState) {
        for obstacle in &state.obstacles {
            let (key, fallback) = match obstacle.kind {
                ObstacleKind::Cactus => (SpriteKey::Cactus, CACTUS_FALLBACK),
                ObstacleKind::Bird => (SpriteKey::Bird, BIRD_FALLBACK),
            };
            self.draw_sprite(key, &obstacle.rect, fallback);
        }
    }

    /// Sprite if ready, flat rectangle otherwise
    fn draw_sprite(&self, key: SpriteKey, rect: &Rect, fallback: &str) {
        let (x, y) = (rect.pos.x as f64, rect.pos.y as f64);
        let (w, h) = (rect.size.x as f64, rect.size.y as f64);
        match self.assets.drawable(key) {
            Some(img) => {
                let _ = self
                    .ctx
                    .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h);
            }
            None => {
                self.ctx.set_fill_style_str(fallback);
                self.ctx.fill_rect(x, y, w, h);
            }
        }
    }
}
