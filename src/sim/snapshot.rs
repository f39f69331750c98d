//! Render-ready view of a session, captured once per frame

use glam::Vec2;
use serde::Serialize;

use super::scoreboard::{MatchOutcome, Scoreboard, Side};
use super::slot::{SlotIndex, TargetKind};
use super::state::{GamePhase, RoundSession};
use crate::ui::{MenuKind, MenuView};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub index: SlotIndex,
    pub pos: Vec2,
    pub active: bool,
    pub kind: TargetKind,
    pub struck: bool,
    /// False for empty slots and decoys
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MalletView {
    pub side: Side,
    pub pos: Vec2,
    pub striking: bool,
}

/// Everything the renderer draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub phase: GamePhase,
    pub scores: Scoreboard,
    /// Whole seconds left in the round
    pub time_left: u32,
    pub slots: Vec<SlotView>,
    pub mallets: Vec<MalletView>,
    /// Menu overlay, when one is showing
    pub menu: Option<MenuView>,
    pub outcome: Option<MatchOutcome>,
}

impl FrameSnapshot {
    pub fn capture(session: &RoundSession) -> Self {
        let outcome = match session.phase {
            GamePhase::Victory { outcome } => Some(outcome),
            _ => None,
        };
        let menu = MenuKind::for_phase(session.phase).map(|kind| {
            let title = outcome.map_or(kind.title(), |o| o.banner());
            MenuView::new(kind, title, session.menu_hover)
        });

        Self {
            frame: session.frame,
            phase: session.phase,
            scores: session.scores,
            time_left: session.clock.display_seconds(),
            slots: session
                .slots
                .iter()
                .map(|s| SlotView {
                    index: s.index,
                    pos: s.pos,
                    active: s.active,
                    kind: s.kind,
                    struck: s.struck,
                    visible: s.shows_target(),
                })
                .collect(),
            mallets: session
                .mallets
                .iter()
                .map(|m| MalletView {
                    side: m.side,
                    pos: m.pos,
                    striking: m.striking,
                })
                .collect(),
            menu,
            outcome,
        }
    }
}
