//! Mole Duel - A two-player local whack-a-mole arcade game
//!
//! Core modules:
//! - `sim`: Deterministic round simulation (slots, mallets, scoring, game flow)
//! - `ui`: Screen layout, named click regions and menu buttons
//! - `platform`: Logical input bindings for the host's keyboard
//! - `audio`: Cue mixing for the external audio collaborator
//! - `assets`: Asset manifest checked before the first tick
//! - `demo`: Autoplay driver for headless sessions

pub mod assets;
pub mod audio;
pub mod demo;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical screen dimensions (all layout coordinates use this space)
    pub const SCREEN_WIDTH: f32 = 1920.0;
    pub const SCREEN_HEIGHT: f32 = 1080.0;

    /// Number of target slots (holes)
    pub const SLOT_COUNT: usize = 5;

    /// Length of a round in seconds
    pub const ROUND_DURATION: f32 = 101.0;

    /// How long a spawned target stays up (seconds)
    pub const TARGET_VISIBLE_TIME: f32 = 1.0;
    /// Spawn check: roll in [0, SPAWN_ROLL_RANGE), spawn when below SPAWN_THRESHOLD
    pub const SPAWN_ROLL_RANGE: u32 = 1000;
    pub const SPAWN_THRESHOLD: u32 = 5;
    /// Category roll range (cumulative bands are defined on `TargetKind`)
    pub const CATEGORY_ROLL_RANGE: u32 = 100;

    /// Mallet easing factor (per second, exponential approach)
    pub const MALLET_EASE_SPEED: f32 = 15.0;
    /// Idle time before a mallet drifts back to its rest position
    pub const MALLET_IDLE_RETURN: f32 = 1.0;
    /// Duration of the strike pose
    pub const MALLET_STRIKE_TIME: f32 = 0.2;
    /// Default mallet sprite footprint when the host does not supply one
    pub const MALLET_FOOTPRINT: (f32, f32) = (128.0, 128.0);

    /// Largest frame delta the host should feed a tick
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Point-in-rectangle test with inclusive edges (`origin` is the top-left corner)
#[inline]
pub fn point_in_rect(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    point.x >= origin.x
        && point.x <= origin.x + size.x
        && point.y >= origin.y
        && point.y <= origin.y + size.y
}

/// Exponential approach of `current` toward `target` over `dt`.
///
/// The blend factor is clamped to 1 so a long frame lands on the target
/// instead of overshooting it.
#[inline]
pub fn ease_toward(current: Vec2, target: Vec2, speed: f32, dt: f32) -> Vec2 {
    let t = (speed * dt).clamp(0.0, 1.0);
    current + (target - current) * t
}
