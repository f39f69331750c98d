//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Delta time supplied by the host only
//! - Seeded RNG only
//! - Stable iteration order (slot index, then red before blue)
//! - No rendering, audio or platform dependencies

pub mod actor;
pub mod clock;
pub mod hit;
pub mod scoreboard;
pub mod slot;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use actor::{Mallet, StrikeCommand};
pub use clock::RoundClock;
pub use hit::{EMPTY_HIT_DELTA, HitOutcome, Strike, apply_strike, resolve};
pub use scoreboard::{MatchOutcome, Scoreboard, Side};
pub use slot::{Slot, SlotIndex, TargetKind};
pub use snapshot::{FrameSnapshot, MalletView, SlotView};
pub use state::{Cue, GamePhase, RoundSession};
pub use tick::{Frame, TickInput, TickOutcome, step, tick};
