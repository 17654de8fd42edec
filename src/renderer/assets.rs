//! Sprite asset registry
//!
//! Images load asynchronously in the browser; the simulation never waits
//! on them. The registry hands the renderer a drawable only once the
//! underlying image has actually arrived, and the renderer paints a flat
//! fallback until then.

use web_sys::HtmlImageElement;

/// Keys for every sprite the renderer can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKey {
    /// Player, standing/running
    Run,
    /// Player, airborne
    Jump,
    /// Player, ducking
    Duck,
    /// Ground obstacle
    Cactus,
    /// Airborne obstacle
    Bird,
}

/// Holds one `HtmlImageElement` per sprite, loading in the background
pub struct AssetRegistry {
    run: HtmlImageElement,
    jump: HtmlImageElement,
    duck: HtmlImageElement,
    cactus: HtmlImageElement,
    bird: HtmlImageElement,
}

impl AssetRegistry {
    /// Kick off loading for every sprite. The browser fetches them in the
    /// background; readiness is polled per draw via `drawable`.
    pub fn load() -> Result<Self, wasm_bindgen::JsValue> {
        let make = |src: &str| -> Result<HtmlImageElement, wasm_bindgen::JsValue> {
            let img = HtmlImageElement::new()?;
            img.set_src(src);
            Ok(img)
        };

        Ok(Self {
            run: make("walk.png")?,
            jump: make("jump.png")?,
            duck: make("sit.png")?,
            cactus: make("cactus.png")?,
            bird: make("bird.png")?,
        })
    }

    /// The image for `key` if it is ready to draw, `None` for fallback
    pub fn drawable(&self, key: SpriteKey) -> Option<&HtmlImageElement> {
        let img = match key {
            SpriteKey::Run => &self.run,
            SpriteKey::Jump => &self.jump,
            SpriteKey::Duck => &self.duck,
            SpriteKey::Cactus => &self.cactus,
            SpriteKey::Bird => &self.bird,
        };
        // complete() is also true for failed loads; natural_width sorts
        // those out
        (img.complete() && img.natural_width() > 0).then_some(img)
    }
}
