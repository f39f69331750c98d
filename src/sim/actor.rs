//! Player mallets
//!
//! A mallet rests at its home position, jumps toward a slot when its player
//! strikes, and drifts back home after a second without strikes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::scoreboard::Side;
use crate::consts::*;
use crate::ease_toward;

/// Where a strike sends the mallet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeCommand {
    pub side: Side,
    /// Top-left sprite position that centers the mallet on the slot
    pub target: Vec2,
}

/// A player's mallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mallet {
    pub side: Side,
    /// Current sprite position (top-left)
    pub pos: Vec2,
    pub rest_pos: Vec2,
    pub target_pos: Vec2,
    /// Sprite size, used to center on a slot
    pub footprint: Vec2,
    pub striking: bool,
    pub strike_elapsed: f32,
    pub idle_elapsed: f32,
}

impl Mallet {
    pub fn new(side: Side, rest_pos: Vec2, footprint: Vec2) -> Self {
        Self {
            side,
            pos: rest_pos,
            rest_pos,
            target_pos: rest_pos,
            footprint,
            striking: false,
            strike_elapsed: 0.0,
            idle_elapsed: 0.0,
        }
    }

    /// Snap back home and drop any animation in flight
    pub fn reset(&mut self) {
        self.pos = self.rest_pos;
        self.target_pos = self.rest_pos;
        self.striking = false;
        self.strike_elapsed = 0.0;
        self.idle_elapsed = 0.0;
    }

    /// Build the strike command that centers this mallet on `slot_pos`
    pub fn aim_at(&self, slot_pos: Vec2) -> StrikeCommand {
        StrikeCommand {
            side: self.side,
            target: slot_pos - self.footprint / 2.0,
        }
    }

    /// Apply a strike command
    pub fn strike(&mut self, cmd: &StrikeCommand) {
        debug_assert_eq!(cmd.side, self.side, "strike routed to the wrong mallet");
        self.target_pos = cmd.target;
        self.idle_elapsed = 0.0;
        self.striking = true;
    }

    /// Advance one frame of idle timing, easing and strike pose
    pub fn advance(&mut self, dt: f32) {
        self.idle_elapsed += dt;
        if self.idle_elapsed > MALLET_IDLE_RETURN {
            self.target_pos = self.rest_pos;
        }

        self.pos = ease_toward(self.pos, self.target_pos, MALLET_EASE_SPEED, dt);

        if self.striking {
            self.strike_elapsed += dt;
            if self.strike_elapsed > MALLET_STRIKE_TIME {
                self.striking = false;
                self.strike_elapsed = 0.0;
            }
        }
    }
}
