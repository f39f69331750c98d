//! Round countdown

use serde::{Deserialize, Serialize};

use crate::consts::ROUND_DURATION;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundClock {
    pub remaining: f32,
}

impl Default for RoundClock {
    fn default() -> Self {
        Self {
            remaining: ROUND_DURATION,
        }
    }
}

impl RoundClock {
    pub fn reset(&mut self) {
        self.remaining = ROUND_DURATION;
    }

    /// Count down by `dt`. Returns `true` when the round is over.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.expired()
    }

    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Whole seconds left, truncated, for the HUD
    pub fn display_seconds(&self) -> u32 {
        self.remaining.max(0.0) as u32
    }
}
