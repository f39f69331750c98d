//! Per-frame update
//!
//! One call to [`tick`] per rendered frame. The active phase's handler runs,
//! then the host drains cues and captures a snapshot.

use std::collections::BTreeSet;

use glam::Vec2;

use super::hit::{Strike, apply_strike};
use super::snapshot::FrameSnapshot;
use super::state::{Cue, GamePhase, RoundSession};
use crate::ui::{MenuAction, MenuKind, hover_flags};

/// Logical inputs collected during one frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Slot keys pressed this frame
    pub strikes: Vec<Strike>,
    /// Pause key pressed
    pub pause: bool,
    /// Numbered menu key pressed (0-based: key "1" is 0)
    pub menu_key: Option<usize>,
    /// Pointer position in screen space
    pub pointer: Option<Vec2>,
    /// Primary button pressed this frame
    pub click: bool,
}

impl TickInput {
    /// Pointer position when it was clicked this frame
    fn click_pos(&self) -> Option<Vec2> {
        if self.click { self.pointer } else { None }
    }
}

/// What the host loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Exit was selected: tear down and stop ticking
    Exit,
}

/// Result of [`step`]: the outcome plus everything the collaborators need
#[derive(Debug, Clone)]
pub struct Frame {
    pub outcome: TickOutcome,
    pub snapshot: FrameSnapshot,
    pub cues: Vec<Cue>,
}

/// Advance the session by one frame
pub fn tick(session: &mut RoundSession, input: &TickInput, dt: f32) -> TickOutcome {
    session.frame += 1;
    session.menu_hover = [false; 3];

    match MenuKind::for_phase(session.phase) {
        Some(kind) => update_menu(session, kind, input),
        None => {
            update_playing(session, input, dt);
            TickOutcome::Continue
        }
    }
}

/// Tick, then drain cues and capture the render snapshot
pub fn step(session: &mut RoundSession, input: &TickInput, dt: f32) -> Frame {
    let outcome = tick(session, input, dt);
    let cues = session.take_cues();
    Frame {
        outcome,
        snapshot: FrameSnapshot::capture(session),
        cues,
    }
}

fn update_menu(session: &mut RoundSession, kind: MenuKind, input: &TickInput) -> TickOutcome {
    let hover = hover_flags(&session.layout, input.pointer);
    session.menu_hover = hover;

    let clicked = if input.click {
        hover.iter().position(|&h| h)
    } else {
        None
    };
    if clicked.is_some() {
        session.push_cue(Cue::Button);
    }

    let Some(button) = input.menu_key.filter(|&k| k < 3).or(clicked) else {
        return TickOutcome::Continue;
    };

    match kind.action(button) {
        MenuAction::NewRound => {
            session.reset_round();
            enter(session, GamePhase::Playing);
            log::info!("New round started (seed {}, frame {})", session.seed, session.frame);
        }
        MenuAction::Resume => enter(session, GamePhase::Playing),
        MenuAction::ToMenu => enter(session, GamePhase::Menu),
        MenuAction::Exit => {
            log::info!("Exit selected from {:?} menu", kind);
            return TickOutcome::Exit;
        }
    }
    TickOutcome::Continue
}

fn update_playing(session: &mut RoundSession, input: &TickInput, dt: f32) {
    if session.clock.advance(dt) {
        let outcome = session.scores.outcome();
        enter(session, GamePhase::Victory { outcome });
        session.push_cue(Cue::Victory);
        log::info!(
            "Round over: red {} blue {} - {}",
            session.scores.red,
            session.scores.blue,
            outcome.banner()
        );
        return;
    }

    // Slots
    let mut spawned = 0;
    {
        let (slots, rng) = session.slots_and_rng();
        for slot in slots.iter_mut() {
            if slot.advance(dt, rng) {
                spawned += 1;
            }
        }
    }
    for _ in 0..spawned {
        session.push_cue(Cue::Spawn);
    }

    // Strikes: keys and edge buttons, deduplicated, slot order then red before blue
    let mut strikes: BTreeSet<Strike> = input.strikes.iter().copied().collect();
    if let Some(strike) = input.click_pos().and_then(|p| session.layout.strike_at(p)) {
        strikes.insert(strike);
    }
    for strike in strikes {
        apply_strike(session, strike);
    }

    // Mallets
    for mallet in &mut session.mallets {
        mallet.advance(dt);
    }

    let pause_clicked = input
        .click_pos()
        .is_some_and(|p| session.layout.pause_button.contains(p));
    if input.pause || pause_clicked {
        session.push_cue(Cue::Button);
        enter(session, GamePhase::Paused);
    }
}

fn enter(session: &mut RoundSession, phase: GamePhase) {
    if session.phase != phase {
        log::info!("{} -> {}", session.phase.name(), phase.name());
    }
    session.phase = phase;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ROUND_DURATION;
    use crate::sim::{Side, SlotIndex, TargetKind};

    const DT: f32 = 1.0 / 60.0;

    fn key(menu_key: usize) -> TickInput {
        TickInput {
            menu_key: Some(menu_key),
            ..Default::default()
        }
    }

    fn playing(seed: u64) -> RoundSession {
        let mut session = RoundSession::new(seed);
        tick(&mut session, &key(0), DT);
        assert_eq!(session.phase, GamePhase::Playing);
        session
    }

    #[test]
    fn test_menu_to_playing() {
        let mut session = RoundSession::new(12345);
        assert_eq!(session.phase, GamePhase::Menu);

        // No input: stay on the menu
        assert_eq!(tick(&mut session, &TickInput::default(), DT), TickOutcome::Continue);
        assert_eq!(session.phase, GamePhase::Menu);
        assert_eq!(session.clock.remaining, ROUND_DURATION);

        tick(&mut session, &key(0), DT);
        assert_eq!(session.phase, GamePhase::Playing);
        // The transition frame does not run the round
        assert_eq!(session.clock.remaining, ROUND_DURATION);
    }

    #[test]
    fn test_exit_from_every_menu() {
        let mut session = RoundSession::new(1);
        assert_eq!(tick(&mut session, &key(2), DT), TickOutcome::Exit);

        let mut session = playing(1);
        session.phase = GamePhase::Paused;
        assert_eq!(tick(&mut session, &key(2), DT), TickOutcome::Exit);

        session.phase = GamePhase::Victory {
            outcome: session.scores.outcome(),
        };
        assert_eq!(tick(&mut session, &key(2), DT), TickOutcome::Exit);
    }

    #[test]
    fn test_pause_freezes_round() {
        let mut session = playing(7);
        for _ in 0..30 {
            tick(&mut session, &TickInput::default(), DT);
        }
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut session, &pause, DT);
        assert_eq!(session.phase, GamePhase::Paused);
        assert!(session.take_cues().contains(&Cue::Button));

        let clock = session.clock;
        let slots: Vec<_> = session.slots.iter().map(|s| (s.active, s.remaining)).collect();
        for _ in 0..120 {
            tick(&mut session, &TickInput::default(), DT);
        }
        assert_eq!(session.clock, clock);
        let after: Vec<_> = session.slots.iter().map(|s| (s.active, s.remaining)).collect();
        assert_eq!(slots, after);

        tick(&mut session, &key(0), DT);
        assert_eq!(session.phase, GamePhase::Playing);
    }

    #[test]
    fn test_strikes_ignored_outside_playing() {
        let mut session = RoundSession::new(5);
        session.slots[0].spawn(TargetKind::Normal);
        let input = TickInput {
            strikes: vec![Strike::new(SlotIndex::S0, Side::Red)],
            ..Default::default()
        };
        tick(&mut session, &input, DT);
        assert_eq!(session.scores.red, 0);
        assert!(!session.slots[0].struck);
    }

    #[test]
    fn test_key_and_click_on_same_slot_strike_once() {
        let mut session = playing(9);
        session.slots[2].spawn(TargetKind::Hazard);
        session.scores.red = 10;
        let button = session.layout.strike_button(Strike::new(SlotIndex::S2, Side::Red));
        let input = TickInput {
            strikes: vec![
                Strike::new(SlotIndex::S2, Side::Red),
                Strike::new(SlotIndex::S2, Side::Red),
            ],
            pointer: Some(button.origin + button.size / 2.0),
            click: true,
            ..Default::default()
        };
        tick(&mut session, &input, DT);
        assert_eq!(session.scores.red, 5);
        let cues = session.take_cues();
        assert_eq!(cues.iter().filter(|c| **c == Cue::HitBomber).count(), 1);
    }

    #[test]
    fn test_same_frame_strikes_resolve_red_first() {
        let mut session = playing(11);
        session.slots[4].spawn(TargetKind::Bonus);
        let input = TickInput {
            strikes: vec![
                Strike::new(SlotIndex::S4, Side::Blue),
                Strike::new(SlotIndex::S4, Side::Red),
            ],
            ..Default::default()
        };
        tick(&mut session, &input, DT);
        assert_eq!(session.scores.red, 10);
        assert_eq!(session.scores.blue, 0);
    }

    #[test]
    fn test_pause_button_click() {
        let mut session = playing(2);
        let rect = session.layout.pause_button;
        let input = TickInput {
            pointer: Some(rect.origin + Vec2::new(5.0, 5.0)),
            click: true,
            ..Default::default()
        };
        tick(&mut session, &input, DT);
        assert_eq!(session.phase, GamePhase::Paused);
    }

    #[test]
    fn test_menu_click_plays_button_cue() {
        let mut session = RoundSession::new(4);
        let rect = session.layout.menu_buttons[1];
        let input = TickInput {
            pointer: Some(rect.origin + Vec2::new(10.0, 10.0)),
            click: true,
            ..Default::default()
        };
        tick(&mut session, &input, DT);
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.take_cues(), vec![Cue::Button]);
    }

    #[test]
    fn test_hover_recomputed_each_frame() {
        let mut session = RoundSession::new(4);
        let rect = session.layout.menu_buttons[0];
        let hovering = TickInput {
            pointer: Some(rect.origin + Vec2::new(1.0, 1.0)),
            ..Default::default()
        };
        tick(&mut session, &hovering, DT);
        assert_eq!(session.menu_hover, [true, false, false]);

        tick(&mut session, &TickInput::default(), DT);
        assert_eq!(session.menu_hover, [false; 3]);
    }

    #[test]
    fn test_hover_in_pause_and_victory_menus() {
        let mut session = playing(4);
        let rect = session.layout.menu_buttons[2];
        let hovering = TickInput {
            pointer: Some(rect.origin + rect.size / 2.0),
            ..Default::default()
        };

        // No menu while playing
        tick(&mut session, &hovering, DT);
        assert_eq!(session.menu_hover, [false; 3]);

        session.phase = GamePhase::Paused;
        tick(&mut session, &hovering, DT);
        assert_eq!(session.menu_hover, [false, false, true]);
        tick(&mut session, &TickInput::default(), DT);
        assert_eq!(session.menu_hover, [false; 3]);

        session.phase = GamePhase::Victory {
            outcome: session.scores.outcome(),
        };
        tick(&mut session, &hovering, DT);
        assert_eq!(session.menu_hover, [false, false, true]);
        assert!(matches!(session.phase, GamePhase::Victory { .. }));
    }

    #[test]
    fn test_spawn_cue_per_spawn() {
        let mut session = playing(9);
        let mut spawns = 0;
        let mut spawn_cues = 0;
        for _ in 0..3000 {
            let before = session.slots.clone().map(|s| s.active);
            let frame = step(&mut session, &TickInput::default(), DT);
            let spawned = session
                .slots
                .iter()
                .zip(before)
                .filter(|(slot, was_active)| slot.active && !was_active)
                .count();
            let cues = frame.cues.iter().filter(|&&c| c == Cue::Spawn).count();
            assert_eq!(spawned, cues, "frame {}", session.frame);
            spawns += spawned;
            spawn_cues += cues;
        }
        assert!(spawns > 0);
        assert_eq!(spawns, spawn_cues);
    }

    #[test]
    fn test_clock_expiry_enters_victory_once() {
        let mut session = playing(3);
        session.clock.remaining = 0.01;
        session.scores.red = 20;
        session.scores.blue = 15;

        let frame = step(&mut session, &TickInput::default(), DT);
        assert_eq!(
            session.phase,
            GamePhase::Victory {
                outcome: crate::sim::MatchOutcome::Winner(Side::Red)
            }
        );
        assert_eq!(frame.cues, vec![Cue::Victory]);

        let frame = step(&mut session, &TickInput::default(), DT);
        assert!(frame.cues.is_empty());
        assert!(matches!(session.phase, GamePhase::Victory { .. }));
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs stay identical
        let mut a = playing(99999);
        let mut b = playing(99999);
        let inputs = [
            TickInput::default(),
            TickInput {
                strikes: vec![Strike::new(SlotIndex::S1, Side::Blue)],
                ..Default::default()
            },
            TickInput::default(),
        ];
        for _ in 0..200 {
            for input in &inputs {
                tick(&mut a, input, DT);
                tick(&mut b, input, DT);
            }
        }
        assert_eq!(a.scores, b.scores);
        assert_eq!(a.clock, b.clock);
        for (sa, sb) in a.slots.iter().zip(&b.slots) {
            assert_eq!((sa.active, sa.kind, sa.struck), (sb.active, sb.kind, sb.struck));
        }
    }
}
