//! Session state and core simulation types
//!
//! Everything the round simulation mutates lives in [`RoundSession`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Mallet;
use super::clock::RoundClock;
use super::scoreboard::{MatchOutcome, Scoreboard, Side};
use super::slot::{Slot, SlotIndex};
use crate::ui::Layout;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Main menu (startup, or after leaving a paused or finished round)
    #[default]
    Menu,
    /// Round running
    Playing,
    /// Round frozen, pause menu shown
    Paused,
    /// Round over; outcome fixed when the clock ran out
    Victory { outcome: MatchOutcome },
}

impl GamePhase {
    pub fn name(&self) -> &'static str {
        match self {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::Victory { .. } => "victory",
        }
    }
}

/// Sound cue requests for the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cue {
    /// A target popped up
    Spawn,
    HitNormal,
    HitGolden,
    HitBomber,
    /// Empty hole or decoy struck
    HitEmpty,
    /// Menu or pause button pressed
    Button,
    /// Round finished
    Victory,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Spawn => "spawn",
            Cue::HitNormal => "hit-normal",
            Cue::HitGolden => "hit-golden",
            Cue::HitBomber => "hit-bomber",
            Cue::HitEmpty => "hit-empty",
            Cue::Button => "button",
            Cue::Victory => "victory",
        }
    }
}

/// Complete session state: flow phase plus the round in memory
#[derive(Debug, Clone)]
pub struct RoundSession {
    /// Seed the RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub layout: Layout,
    pub slots: [Slot; crate::consts::SLOT_COUNT],
    /// Red then Blue
    pub mallets: [Mallet; 2],
    pub scores: Scoreboard,
    pub clock: RoundClock,
    /// Hover flags of the active menu, recomputed every tick
    pub menu_hover: [bool; 3],
    /// Ticks run since the session was created
    pub frame: u64,
    rng: Pcg32,
    cues: Vec<Cue>,
}

impl RoundSession {
    /// Create a session on the main menu with the default screen layout
    pub fn new(seed: u64) -> Self {
        Self::with_layout(seed, Layout::default())
    }

    pub fn with_layout(seed: u64, layout: Layout) -> Self {
        let slots = SlotIndex::ALL.map(|index| Slot::new(index, layout.slot_position(index)));
        let mallets = Side::BOTH
            .map(|side| Mallet::new(side, layout.mallet_rest(side), layout.mallet_footprint));

        let mut session = Self {
            seed,
            phase: GamePhase::Menu,
            layout,
            slots,
            mallets,
            scores: Scoreboard::default(),
            clock: RoundClock::default(),
            menu_hover: [false; 3],
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
            cues: Vec::new(),
        };
        // A fresh session already holds a playable round, so Resume works from startup
        session.reset_round();
        session
    }

    /// Reset scores, clock, slots and mallets for a new round.
    /// The RNG keeps its stream so consecutive rounds differ.
    pub fn reset_round(&mut self) {
        self.scores.reset();
        self.clock.reset();
        for slot in &mut self.slots {
            slot.clear();
        }
        for mallet in &mut self.mallets {
            mallet.reset();
        }
    }

    pub fn mallet(&self, side: Side) -> &Mallet {
        &self.mallets[side as usize]
    }

    pub fn mallet_mut(&mut self, side: Side) -> &mut Mallet {
        &mut self.mallets[side as usize]
    }

    pub fn slot(&self, index: SlotIndex) -> &Slot {
        &self.slots[index.index()]
    }

    /// Queue a cue for this frame
    pub fn push_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    /// Drain the cues queued since the last call, in emission order
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Split borrow for the slot update loop
    pub(crate) fn slots_and_rng(&mut self) -> (&mut [Slot], &mut Pcg32) {
        (&mut self.slots, &mut self.rng)
    }
}
