//! Player settings and preferences
//!
//! Stored as JSON next to the binary. Game rules are not settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::platform::{BindingError, KeyBindings};

/// Player settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Display ===
    /// Frame rate the host loop targets
    pub target_fps: u32,

    // === Controls ===
    pub bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            target_fps: 60,
            bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    ///
    /// A missing or unreadable file falls back to defaults; so do bindings
    /// that fail validation.
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        let mut settings: Settings = match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring corrupt settings file {}: {}", path.display(), e);
                return Self::default();
            }
        };

        if let Err(e) = settings.bindings.validate() {
            log::warn!("Invalid key bindings ({}), restoring defaults", e);
            settings.bindings = KeyBindings::default();
        }
        settings.sanitize();
        log::info!("Loaded settings from {}", path.display());
        settings
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Clamp values into their valid ranges
    pub fn sanitize(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self.target_fps = self.target_fps.clamp(15, 240);
    }

    pub fn validate(&self) -> Result<(), BindingError> {
        self.bindings.validate()
    }

    /// Fixed frame delta for `target_fps`
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }
}
