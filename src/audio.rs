//! Cue mixing for the audio collaborator
//!
//! The simulation only names sounds. This module applies the player's volume
//! settings and hands fire-and-forget playback requests to whatever actually
//! plays audio on the host.

use serde::Serialize;

use crate::settings::Settings;
use crate::sim::Cue;

/// Background music asset
pub const MUSIC_TRACK: &str = "assets/audio/bgm.ogg";
/// Base music level before the player's volume settings
pub const MUSIC_BASE_VOLUME: f32 = 0.3;

/// Sound file played for a cue
pub fn sound_file(cue: Cue) -> &'static str {
    match cue {
        Cue::Spawn => "assets/audio/mole_pop.wav",
        Cue::HitNormal => "assets/audio/hit_normal.wav",
        Cue::HitGolden => "assets/audio/hit_golden.wav",
        Cue::HitBomber => "assets/audio/hit_bomber.wav",
        Cue::HitEmpty => "assets/audio/hit_empty.wav",
        Cue::Button => "assets/audio/button.wav",
        Cue::Victory => "assets/audio/victory.ogg",
    }
}

/// One sound to start now
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackRequest {
    pub cue: Cue,
    pub file: &'static str,
    /// Final gain (0.0 - 1.0)
    pub volume: f32,
}

/// Whatever plays sounds on the host
pub trait CueSink {
    fn play(&mut self, request: PlaybackRequest);
}

/// Sink that records requests (headless hosts and tests)
impl CueSink for Vec<PlaybackRequest> {
    fn play(&mut self, request: PlaybackRequest) {
        self.push(request);
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_music_volume(settings.music_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Gain the host should stream background music at
    pub fn music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            MUSIC_BASE_VOLUME * self.master_volume * self.music_volume
        }
    }

    /// Playback request for a cue, or `None` when silent
    pub fn request(&self, cue: Cue) -> Option<PlaybackRequest> {
        let volume = self.effective_volume();
        if volume <= 0.0 {
            return None;
        }
        Some(PlaybackRequest {
            cue,
            file: sound_file(cue),
            volume,
        })
    }

    /// Send a frame's cues to the sink, in order
    pub fn dispatch<S: CueSink + ?Sized>(&self, cues: &[Cue], sink: &mut S) {
        for &cue in cues {
            if let Some(request) = self.request(cue) {
                sink.play(request);
            }
        }
    }
}
