//! The three button menus (main, pause, victory)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::Layout;
use crate::sim::GamePhase;

/// Which menu is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuKind {
    Main,
    Pause,
    Victory,
}

/// What picking a menu entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    /// Reset the round and play (New Game / Replay)
    NewRound,
    /// Continue the round in memory
    Resume,
    /// Back to the main menu, round retained
    ToMenu,
    /// Hand control back to the host for shutdown
    Exit,
}

impl MenuKind {
    /// Menu shown in `phase`, if any
    pub fn for_phase(phase: GamePhase) -> Option<Self> {
        match phase {
            GamePhase::Menu => Some(MenuKind::Main),
            GamePhase::Paused => Some(MenuKind::Pause),
            GamePhase::Victory { .. } => Some(MenuKind::Victory),
            GamePhase::Playing => None,
        }
    }

    pub fn labels(&self) -> [&'static str; 3] {
        match self {
            MenuKind::Main => ["1. New Game", "2. Resume", "3. Exit"],
            MenuKind::Pause => ["1. Resume", "2. Menu", "3. Exit"],
            MenuKind::Victory => ["1. Replay", "2. Menu", "3. Exit"],
        }
    }

    pub fn actions(&self) -> [MenuAction; 3] {
        match self {
            MenuKind::Main => [MenuAction::NewRound, MenuAction::Resume, MenuAction::Exit],
            MenuKind::Pause => [MenuAction::Resume, MenuAction::ToMenu, MenuAction::Exit],
            MenuKind::Victory => [MenuAction::NewRound, MenuAction::ToMenu, MenuAction::Exit],
        }
    }

    pub fn action(&self, button: usize) -> MenuAction {
        self.actions()[button]
    }

    /// Title drawn above the buttons (victory uses the outcome banner instead)
    pub fn title(&self) -> &'static str {
        match self {
            MenuKind::Main => "Whac-A-Mole",
            MenuKind::Pause => "PAUSED",
            MenuKind::Victory => "",
        }
    }
}

/// Per-button state for the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonView {
    pub label: &'static str,
    pub hovered: bool,
}

/// The active menu as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuView {
    pub kind: MenuKind,
    pub title: &'static str,
    pub buttons: [ButtonView; 3],
}

impl MenuView {
    pub fn new(kind: MenuKind, title: &'static str, hover: [bool; 3]) -> Self {
        let labels = kind.labels();
        Self {
            kind,
            title,
            buttons: std::array::from_fn(|i| ButtonView {
                label: labels[i],
                hovered: hover[i],
            }),
        }
    }
}

/// Hover flags for the menu buttons, from the pointer position
pub fn hover_flags(layout: &Layout, pointer: Option<Vec2>) -> [bool; 3] {
    let mut hover = [false; 3];
    if let Some(idx) = pointer.and_then(|p| layout.menu_button_at(p)) {
        hover[idx] = true;
    }
    hover
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_actions() {
        assert_eq!(MenuKind::Main.action(1), MenuAction::Resume);
        assert_eq!(MenuKind::Pause.action(1), MenuAction::ToMenu);
        assert_eq!(MenuKind::Victory.action(0), MenuAction::NewRound);
        for kind in [MenuKind::Main, MenuKind::Pause, MenuKind::Victory] {
            assert_eq!(kind.action(2), MenuAction::Exit);
        }
    }

    #[test]
    fn test_hover_flags() {
        let layout = Layout::default();
        assert_eq!(hover_flags(&layout, None), [false; 3]);
        assert_eq!(
            hover_flags(&layout, Some(Vec2::new(900.0, 510.0))),
            [false, false, true]
        );
    }

    #[test]
    fn test_menu_view_labels() {
        let view = MenuView::new(MenuKind::Pause, MenuKind::Pause.title(), [true, false, false]);
        assert_eq!(view.buttons[0].label, "1. Resume");
        assert!(view.buttons[0].hovered);
        assert_eq!(view.title, "PAUSED");
    }
}
