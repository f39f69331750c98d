//! Screen-space UI model
//!
//! Named rectangles the pointer can hit and the menus drawn on top of the
//! playfield. Drawing itself belongs to the host.

pub mod layout;
pub mod menu;

pub use layout::{Layout, LayoutError, Rect};
pub use menu::{ButtonView, MenuAction, MenuKind, MenuView, hover_flags};
