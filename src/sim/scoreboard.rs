//! Two-team scoreboard

use serde::{Deserialize, Serialize};

/// Player side
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Red, Side::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Blue => "Blue",
        }
    }
}

/// Result of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Winner(Side),
    Draw,
}

impl MatchOutcome {
    /// Banner text for the victory screen
    pub fn banner(&self) -> &'static str {
        match self {
            MatchOutcome::Winner(Side::Red) => "Red Team Wins!",
            MatchOutcome::Winner(Side::Blue) => "Blue Team Wins!",
            MatchOutcome::Draw => "Match Draw!",
        }
    }
}

/// Running scores. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub red: u32,
    pub blue: u32,
}

impl Scoreboard {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Red => self.red,
            Side::Blue => self.blue,
        }
    }

    fn get_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Red => &mut self.red,
            Side::Blue => &mut self.blue,
        }
    }

    /// Apply a signed delta, flooring at zero. Returns the new score.
    pub fn apply(&mut self, side: Side, delta: i32) -> u32 {
        let score = self.get_mut(side);
        *score = score.saturating_add_signed(delta);
        *score
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Higher score wins, equal scores draw
    pub fn outcome(&self) -> MatchOutcome {
        use std::cmp::Ordering;
        match self.red.cmp(&self.blue) {
            Ordering::Greater => MatchOutcome::Winner(Side::Red),
            Ordering::Less => MatchOutcome::Winner(Side::Blue),
            Ordering::Equal => MatchOutcome::Draw,
        }
    }
}
