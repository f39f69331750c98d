//! Autoplay driver
//!
//! Two bots that play a session through the same key bindings a human uses.
//! They only see what the renderer sees (a [`FrameSnapshot`]), so decoys are
//! invisible to them too.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::platform::{Key, KeyBindings};
use crate::sim::{FrameSnapshot, GamePhase, Side, SlotIndex, Strike, TargetKind, TickInput};

/// Per-side reaction chance per frame for a visible target
const REACTION_CHANCE: [f64; 2] = [0.08, 0.07];
/// Chance of deliberately leaving a bomber alone
const HAZARD_AVOIDANCE: f64 = 0.85;
/// Chance per frame of swinging at a random hole
const WHIFF_CHANCE: f64 = 0.002;

/// How a demo session runs
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Rounds to play before choosing Exit
    pub rounds: u32,
    /// Pause when the clock shows this many seconds, go to the main menu,
    /// then Resume from there
    pub pause_detour_at: Option<u32>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rounds: 1,
            pause_detour_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Detour {
    Pending(u32),
    ToMenu,
    Resume,
    Done,
}

/// Bot pair driving both sides
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    rounds_left: u32,
    detour: Detour,
}

impl Autopilot {
    pub fn new(seed: u64, config: &DemoConfig) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed ^ 0x5eed_b075),
            rounds_left: config.rounds.max(1),
            detour: config.pause_detour_at.map_or(Detour::Done, Detour::Pending),
        }
    }

    /// Keys to press this frame, given last frame's snapshot
    pub fn keys(&mut self, snap: &FrameSnapshot, bindings: &KeyBindings) -> Vec<Key> {
        match snap.phase {
            GamePhase::Menu => {
                if self.detour == Detour::Resume {
                    self.detour = Detour::Done;
                    vec![bindings.menu[1]]
                } else {
                    vec![bindings.menu[0]]
                }
            }
            GamePhase::Paused => {
                if self.detour == Detour::ToMenu {
                    self.detour = Detour::Resume;
                    vec![bindings.menu[1]]
                } else {
                    vec![bindings.menu[0]]
                }
            }
            GamePhase::Victory { outcome } => {
                self.rounds_left = self.rounds_left.saturating_sub(1);
                log::info!(
                    "Demo round finished: {} ({} - {})",
                    outcome.banner(),
                    snap.scores.red,
                    snap.scores.blue
                );
                if self.rounds_left > 0 {
                    vec![bindings.menu[0]]
                } else {
                    vec![bindings.menu[2]]
                }
            }
            GamePhase::Playing => {
                if let Detour::Pending(at) = self.detour {
                    if snap.time_left <= at {
                        self.detour = Detour::ToMenu;
                        return vec![bindings.pause];
                    }
                }
                self.swing(snap, bindings)
            }
        }
    }

    /// Full tick input for this frame
    pub fn input(&mut self, snap: &FrameSnapshot, bindings: &KeyBindings) -> TickInput {
        let keys = self.keys(snap, bindings);
        bindings.translate(&keys, None, false)
    }

    fn swing(&mut self, snap: &FrameSnapshot, bindings: &KeyBindings) -> Vec<Key> {
        let mut keys = Vec::new();
        for side in Side::BOTH {
            let chance = REACTION_CHANCE[side as usize];
            let target = snap
                .slots
                .iter()
                .filter(|s| s.visible && !s.struck)
                .find(|s| {
                    let avoid = s.kind == TargetKind::Hazard && self.rng.random_bool(HAZARD_AVOIDANCE);
                    !avoid && self.rng.random_bool(chance)
                })
                .map(|s| s.index);

            let target = target.or_else(|| {
                self.rng
                    .random_bool(WHIFF_CHANCE)
                    .then(|| SlotIndex::new(self.rng.random_range(0..SlotIndex::ALL.len())))
            });

            if let Some(slot) = target {
                keys.push(bindings.strike_key(Strike::new(slot, side)));
            }
        }
        keys
    }
}
