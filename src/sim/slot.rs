//! Target slots (the holes moles pop out of)
//!
//! Each slot owns at most one target at a time. Empty slots roll a spawn
//! check every frame; active slots count down their visibility window.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Cue;
use crate::consts::*;

/// Logical slot identifier. The only way to address a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SlotIndex {
    S0,
    S1,
    S2,
    S3,
    S4,
}

impl SlotIndex {
    pub const ALL: [SlotIndex; SLOT_COUNT] = [
        SlotIndex::S0,
        SlotIndex::S1,
        SlotIndex::S2,
        SlotIndex::S3,
        SlotIndex::S4,
    ];

    /// Slot for a raw index. Panics when `index` is outside the fixed slot set,
    /// which is always an integration bug.
    pub fn new(index: usize) -> Self {
        assert!(
            index < SLOT_COUNT,
            "slot index {index} out of range (0..{SLOT_COUNT})"
        );
        Self::ALL[index]
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Target categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetKind {
    #[default]
    Normal,
    /// Golden mole
    Bonus,
    /// Bomber mole
    Hazard,
    /// Occupies the slot but is never drawn
    Decoy,
}

impl TargetKind {
    /// Map a category roll in [0, CATEGORY_ROLL_RANGE) to a kind
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..60 => TargetKind::Normal,
            60..80 => TargetKind::Hazard,
            80..85 => TargetKind::Bonus,
            _ => TargetKind::Decoy,
        }
    }

    /// Score change for striking this target
    pub fn score_delta(self) -> i32 {
        match self {
            TargetKind::Normal => 5,
            TargetKind::Bonus => 10,
            TargetKind::Hazard => -5,
            TargetKind::Decoy => -1,
        }
    }

    /// Sound cue for striking this target
    pub fn hit_cue(self) -> Cue {
        match self {
            TargetKind::Normal => Cue::HitNormal,
            TargetKind::Bonus => Cue::HitGolden,
            TargetKind::Hazard => Cue::HitBomber,
            TargetKind::Decoy => Cue::HitEmpty,
        }
    }

    /// Whether the renderer should draw a sprite for this kind
    pub fn is_visible(self) -> bool {
        self != TargetKind::Decoy
    }
}

/// One physical target position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub index: SlotIndex,
    /// Screen position of the hole center (static)
    pub pos: Vec2,
    pub active: bool,
    pub kind: TargetKind,
    /// Seconds left while active; stale otherwise
    pub remaining: f32,
    /// Set by the first strike of this activation
    pub struck: bool,
}

impl Slot {
    pub fn new(index: SlotIndex, pos: Vec2) -> Self {
        Self {
            index,
            pos,
            active: false,
            kind: TargetKind::Normal,
            remaining: 0.0,
            struck: false,
        }
    }

    /// Return the slot to its empty round-start state
    pub fn clear(&mut self) {
        self.active = false;
        self.struck = false;
        self.remaining = 0.0;
    }

    /// Activate with the given kind
    pub fn spawn(&mut self, kind: TargetKind) {
        self.active = true;
        self.kind = kind;
        self.struck = false;
        self.remaining = TARGET_VISIBLE_TIME;
    }

    /// Advance one frame. Returns `true` when a target spawned this frame.
    pub fn advance<R: Rng>(&mut self, dt: f32, rng: &mut R) -> bool {
        if self.active {
            self.remaining -= dt;
            if self.remaining <= 0.0 {
                self.active = false;
            }
            return false;
        }

        if rng.random_range(0..SPAWN_ROLL_RANGE) < SPAWN_THRESHOLD {
            let kind = TargetKind::from_roll(rng.random_range(0..CATEGORY_ROLL_RANGE));
            self.spawn(kind);
            log::debug!("slot {:?} spawned {:?}", self.index, kind);
            return true;
        }
        false
    }

    /// A target the renderer should draw
    pub fn shows_target(&self) -> bool {
        self.active && self.kind.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_category_bands() {
        assert_eq!(TargetKind::from_roll(0), TargetKind::Normal);
        assert_eq!(TargetKind::from_roll(59), TargetKind::Normal);
        assert_eq!(TargetKind::from_roll(60), TargetKind::Hazard);
        assert_eq!(TargetKind::from_roll(79), TargetKind::Hazard);
        assert_eq!(TargetKind::from_roll(80), TargetKind::Bonus);
        assert_eq!(TargetKind::from_roll(84), TargetKind::Bonus);
        assert_eq!(TargetKind::from_roll(85), TargetKind::Decoy);
        assert_eq!(TargetKind::from_roll(99), TargetKind::Decoy);
    }

    #[test]
    fn test_active_slot_expires() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut slot = Slot::new(SlotIndex::S0, Vec2::ZERO);
        slot.spawn(TargetKind::Normal);

        assert!(!slot.advance(0.6, &mut rng));
        assert!(slot.active);
        assert!(!slot.advance(0.4, &mut rng));
        assert!(!slot.active);
    }

    #[test]
    fn test_spawn_resets_struck() {
        let mut slot = Slot::new(SlotIndex::S2, Vec2::ZERO);
        slot.spawn(TargetKind::Hazard);
        slot.struck = true;
        slot.spawn(TargetKind::Bonus);
        assert!(!slot.struck);
        assert_eq!(slot.kind, TargetKind::Bonus);
        assert_eq!(slot.remaining, TARGET_VISIBLE_TIME);
    }

    #[test]
    fn test_empty_slot_eventually_spawns() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut slot = Slot::new(SlotIndex::S1, Vec2::ZERO);
        // 0.5% per frame: 10k frames without a spawn would be astronomically unlikely
        let spawned = (0..10_000).any(|_| slot.advance(1.0 / 60.0, &mut rng));
        assert!(spawned);
        assert!(slot.active);
    }

    #[test]
    fn test_decoy_is_not_drawn() {
        let mut slot = Slot::new(SlotIndex::S3, Vec2::ZERO);
        slot.spawn(TargetKind::Decoy);
        assert!(slot.active);
        assert!(!slot.shows_target());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_slot_index_out_of_range_panics() {
        let _ = SlotIndex::new(SLOT_COUNT);
    }
}
