//! Game settings and preferences
//!
//! Persisted in LocalStorage, separately from any run state.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Visuals ===
    /// Background decorations (clouds, sparkles)
    pub decorations: bool,

    // === Accessibility ===
    /// Reduced motion (pins the sky palette, hides decorations)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: true,
            decorations: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective decorations toggle (respects reduced_motion)
    pub fn effective_decorations(&self) -> bool {
        self.decorations && !self.reduced_motion
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dash_runner_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_overrides_decorations() {
        let mut settings = Settings::default();
        assert!(settings.effective_decorations());

        settings.reduced_motion = true;
        assert!(!settings.effective_decorations());

        settings.decorations = false;
        settings.reduced_motion = false;
        assert!(!settings.effective_decorations());
    }

    #[test]
    fn test_settings_json_round_trip() {
        let settings = Settings {
            show_fps: false,
            decorations: true,
            reduced_motion: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.show_fps, settings.show_fps);
        assert_eq!(back.decorations, settings.decorations);
        assert_eq!(back.reduced_motion, settings.reduced_motion);
    }
}
