//! Screen layout: slot positions, mallet homes and clickable regions
//!
//! Coordinates are in the 1920x1080 logical screen space.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::point_in_rect;
use crate::sim::{Side, SlotIndex, Strike};

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point_in_rect(point, self.origin, self.size)
    }

    fn overlaps(&self, other: &Rect) -> bool {
        self.origin.x < other.origin.x + other.size.x
            && other.origin.x < self.origin.x + self.size.x
            && self.origin.y < other.origin.y + other.size.y
            && other.origin.y < self.origin.y + self.size.y
    }
}

/// Hole centers, left-to-right by slot index
const SLOT_POSITIONS: [(f32, f32); SLOT_COUNT] = [
    (707.0, 510.0),
    (1133.0, 510.0),
    (376.0, 640.0),
    (940.0, 700.0),
    (1490.0, 640.0),
];

/// Edge strike buttons. The vertical order does not follow slot order.
const STRIKE_BUTTON_SIZE: f32 = 120.0;
const RED_BUTTON_Y: [f32; SLOT_COUNT] = [330.0, 480.0, 180.0, 630.0, 780.0];
const BLUE_BUTTON_Y: [f32; SLOT_COUNT] = [630.0, 480.0, 780.0, 330.0, 180.0];
const RED_BUTTON_X: f32 = 50.0;
const BLUE_BUTTON_X: f32 = SCREEN_WIDTH - 170.0;

/// Menu buttons stack at y = 300 + i * 100
const MENU_BUTTON_SIZE: (f32, f32) = (400.0, 60.0);
const MENU_BUTTON_TOP: f32 = 300.0;
const MENU_BUTTON_SPACING: f32 = 100.0;

/// Layout problems found by [`Layout::validate`]
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Two strike buttons overlap, so one click would hit both
    OverlappingStrikeButtons { a: Strike, b: Strike },
    /// A strike button covers the pause button
    StrikeButtonCoversPause { strike: Strike },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::OverlappingStrikeButtons { a, b } => write!(
                f,
                "strike buttons {:?}/{:?} and {:?}/{:?} overlap",
                a.side, a.slot, b.side, b.slot
            ),
            LayoutError::StrikeButtonCoversPause { strike } => write!(
                f,
                "strike button {:?}/{:?} covers the pause button",
                strike.side, strike.slot
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Everything positional the simulation needs to know about the screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub slots: [Vec2; SLOT_COUNT],
    pub red_rest: Vec2,
    pub blue_rest: Vec2,
    /// Mallet sprite size (supplied by the host from its texture)
    pub mallet_footprint: Vec2,
    pub red_buttons: [Rect; SLOT_COUNT],
    pub blue_buttons: [Rect; SLOT_COUNT],
    pub pause_button: Rect,
    pub menu_buttons: [Rect; 3],
}

impl Default for Layout {
    fn default() -> Self {
        let (fw, fh) = MALLET_FOOTPRINT;
        let mid_y = SCREEN_HEIGHT / 2.0 - 100.0;
        Self {
            slots: SLOT_POSITIONS.map(|(x, y)| Vec2::new(x, y)),
            red_rest: Vec2::new(SCREEN_WIDTH - 1750.0, mid_y),
            blue_rest: Vec2::new(SCREEN_WIDTH - 350.0, mid_y),
            mallet_footprint: Vec2::new(fw, fh),
            red_buttons: RED_BUTTON_Y
                .map(|y| Rect::new(RED_BUTTON_X, y, STRIKE_BUTTON_SIZE, STRIKE_BUTTON_SIZE)),
            blue_buttons: BLUE_BUTTON_Y
                .map(|y| Rect::new(BLUE_BUTTON_X, y, STRIKE_BUTTON_SIZE, STRIKE_BUTTON_SIZE)),
            pause_button: Rect::new(SCREEN_WIDTH / 2.0 - 100.0, SCREEN_HEIGHT - 150.0, 200.0, 80.0),
            menu_buttons: std::array::from_fn(|i| {
                Rect::new(
                    SCREEN_WIDTH / 2.0 - MENU_BUTTON_SIZE.0 / 2.0,
                    MENU_BUTTON_TOP + i as f32 * MENU_BUTTON_SPACING,
                    MENU_BUTTON_SIZE.0,
                    MENU_BUTTON_SIZE.1,
                )
            }),
        }
    }
}

impl Layout {
    /// Layout with the mallet footprint taken from the host's sprite
    pub fn with_mallet_footprint(footprint: Vec2) -> Self {
        Self {
            mallet_footprint: footprint,
            ..Self::default()
        }
    }

    pub fn slot_position(&self, slot: SlotIndex) -> Vec2 {
        self.slots[slot.index()]
    }

    pub fn mallet_rest(&self, side: Side) -> Vec2 {
        match side {
            Side::Red => self.red_rest,
            Side::Blue => self.blue_rest,
        }
    }

    pub fn strike_button(&self, strike: Strike) -> Rect {
        match strike.side {
            Side::Red => self.red_buttons[strike.slot.index()],
            Side::Blue => self.blue_buttons[strike.slot.index()],
        }
    }

    /// Strike buttons in slot-then-side order
    pub fn strike_buttons(&self) -> impl Iterator<Item = (Strike, Rect)> + '_ {
        SlotIndex::ALL.into_iter().flat_map(move |slot| {
            Side::BOTH.into_iter().map(move |side| {
                let strike = Strike::new(slot, side);
                (strike, self.strike_button(strike))
            })
        })
    }

    /// Strike button under the pointer, if any
    pub fn strike_at(&self, point: Vec2) -> Option<Strike> {
        self.strike_buttons()
            .find(|(_, rect)| rect.contains(point))
            .map(|(strike, _)| strike)
    }

    /// Menu button index under the pointer, if any
    pub fn menu_button_at(&self, point: Vec2) -> Option<usize> {
        self.menu_buttons.iter().position(|rect| rect.contains(point))
    }

    /// Check that clickable regions never overlap
    pub fn validate(&self) -> Result<(), LayoutError> {
        let buttons: Vec<_> = self.strike_buttons().collect();
        for (i, (a, rect_a)) in buttons.iter().enumerate() {
            if rect_a.overlaps(&self.pause_button) {
                return Err(LayoutError::StrikeButtonCoversPause { strike: *a });
            }
            for (b, rect_b) in &buttons[i + 1..] {
                if rect_a.overlaps(rect_b) {
                    return Err(LayoutError::OverlappingStrikeButtons { a: *a, b: *b });
                }
            }
        }
        Ok(())
    }
}
