//! Platform abstraction layer
//!
//! Turns what the host reports (pressed keys, pointer, clicks) into the
//! logical inputs the simulation understands.

pub mod input;

pub use input::{BindingError, Key, KeyBindings};
