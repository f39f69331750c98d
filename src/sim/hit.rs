//! Hit resolution
//!
//! Turns one discrete strike (side + slot) into a score change, a sound cue
//! and a mallet move. This is the only place scores change.

use serde::{Deserialize, Serialize};

use super::actor::StrikeCommand;
use super::scoreboard::Side;
use super::slot::{Slot, SlotIndex};
use super::state::{Cue, RoundSession};

/// Penalty for striking an empty hole
pub const EMPTY_HIT_DELTA: i32 = -1;

/// A strike input: one side hitting one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Strike {
    pub slot: SlotIndex,
    pub side: Side,
}

impl Strike {
    pub fn new(slot: SlotIndex, side: Side) -> Self {
        Self { slot, side }
    }
}

/// What a strike produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitOutcome {
    /// Requested score change (the scoreboard floors the result at zero)
    pub delta: i32,
    pub cue: Option<Cue>,
    pub strike: Option<StrikeCommand>,
}

impl HitOutcome {
    /// Repeated strike on an already struck target
    pub fn ignored() -> Self {
        Self {
            delta: 0,
            cue: None,
            strike: None,
        }
    }

    pub fn is_ignored(&self) -> bool {
        self.strike.is_none()
    }
}

/// Decide the outcome of a strike and mark the slot.
///
/// Does not touch scores or mallets; see [`apply_strike`].
pub fn resolve(slot: &mut Slot, cmd: StrikeCommand) -> HitOutcome {
    if !slot.active {
        return HitOutcome {
            delta: EMPTY_HIT_DELTA,
            cue: Some(Cue::HitEmpty),
            strike: Some(cmd),
        };
    }

    if slot.struck {
        return HitOutcome::ignored();
    }
    slot.struck = true;

    HitOutcome {
        delta: slot.kind.score_delta(),
        cue: Some(slot.kind.hit_cue()),
        strike: Some(cmd),
    }
}

/// Resolve a strike against the session and apply its effects:
/// score, mallet move and cue.
pub fn apply_strike(session: &mut RoundSession, strike: Strike) -> HitOutcome {
    let slot_pos = session.slots[strike.slot.index()].pos;
    let cmd = session.mallet(strike.side).aim_at(slot_pos);
    let outcome = resolve(&mut session.slots[strike.slot.index()], cmd);

    if outcome.is_ignored() {
        log::debug!("{:?} strike on {:?} ignored (already struck)", strike.side, strike.slot);
        return outcome;
    }

    let score = session.scores.apply(strike.side, outcome.delta);
    if let Some(cmd) = &outcome.strike {
        session.mallet_mut(strike.side).strike(cmd);
    }
    if let Some(cue) = outcome.cue {
        session.push_cue(cue);
    }
    log::debug!(
        "{} hit {:?}: delta {} -> {}",
        strike.side.as_str(),
        strike.slot,
        outcome.delta,
        score
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::slot::TargetKind;
    use glam::Vec2;

    fn cmd() -> StrikeCommand {
        StrikeCommand {
            side: Side::Red,
            target: Vec2::new(10.0, 20.0),
        }
    }

    #[test]
    fn test_empty_slot_penalty() {
        let mut slot = Slot::new(SlotIndex::S2, Vec2::ZERO);
        let outcome = resolve(&mut slot, cmd());
        assert_eq!(outcome.delta, -1);
        assert_eq!(outcome.cue, Some(Cue::HitEmpty));
        assert!(outcome.strike.is_some());
        assert!(!slot.active);
        assert!(!slot.struck);
    }

    #[test]
    fn test_category_deltas() {
        let cases = [
            (TargetKind::Normal, 5, Cue::HitNormal),
            (TargetKind::Bonus, 10, Cue::HitGolden),
            (TargetKind::Hazard, -5, Cue::HitBomber),
            (TargetKind::Decoy, -1, Cue::HitEmpty),
        ];
        for (kind, delta, cue) in cases {
            let mut slot = Slot::new(SlotIndex::S0, Vec2::ZERO);
            slot.spawn(kind);
            let outcome = resolve(&mut slot, cmd());
            assert_eq!(outcome.delta, delta, "{kind:?}");
            assert_eq!(outcome.cue, Some(cue), "{kind:?}");
            assert!(slot.struck);
        }
    }

    #[test]
    fn test_second_strike_is_ignored() {
        let mut slot = Slot::new(SlotIndex::S1, Vec2::ZERO);
        slot.spawn(TargetKind::Bonus);
        assert!(!resolve(&mut slot, cmd()).is_ignored());
        let second = resolve(&mut slot, cmd());
        assert!(second.is_ignored());
        assert_eq!(second.delta, 0);
        assert_eq!(second.cue, None);
    }

    #[test]
    fn test_apply_strike_updates_session() {
        let mut session = RoundSession::new(42);
        session.slots[0].spawn(TargetKind::Normal);

        let outcome = apply_strike(&mut session, Strike::new(SlotIndex::S0, Side::Red));
        assert_eq!(outcome.delta, 5);
        assert_eq!(session.scores.red, 5);
        assert_eq!(session.scores.blue, 0);

        let red = session.mallet(Side::Red);
        assert!(red.striking);
        assert_eq!(red.target_pos, session.slots[0].pos - red.footprint / 2.0);
        assert!(!session.mallet(Side::Blue).striking);
        assert_eq!(session.take_cues(), vec![Cue::HitNormal]);
    }

    #[test]
    fn test_both_sides_share_one_activation() {
        let mut session = RoundSession::new(42);
        session.slots[3].spawn(TargetKind::Normal);

        apply_strike(&mut session, Strike::new(SlotIndex::S3, Side::Red));
        let blue = apply_strike(&mut session, Strike::new(SlotIndex::S3, Side::Blue));
        assert!(blue.is_ignored());
        assert_eq!(session.scores, crate::sim::Scoreboard { red: 5, blue: 0 });
        assert!(!session.mallet(Side::Blue).striking);
    }
}
