//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed per-step deltas only (no wall-clock time)
//! - Seeded RNG only, and only for serve direction
//! - No rendering, audio or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use state::{Cue, GameEvent, MatchState, Side, clamp_paddle_y};
pub use tick::{TickInput, tick};
