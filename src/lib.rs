//! Rally Pong - a classic two-paddle ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle motion, ball physics, scoring)
//! - `config`: Match configuration (mode, difficulty, colors)
//! - `input`: Held-key sampling fed by discrete key events
//! - `session`: The boundary object a presentation layer drives
//! - `render`: Pure projection of a state snapshot into draw primitives
//! - `audio`: Cue routing with a live mute gate
//!
//! The presentation layer (windowing, widgets, rasterization, actual audio
//! playback) lives outside this crate. It feeds a `MatchSession` key events
//! and a tick clock, and consumes state snapshots, draw commands and cues.

pub mod audio;
pub mod config;
pub mod input;
pub mod render;
pub mod session;
pub mod sim;

pub use audio::{AudioManager, Cue, CueSink};
pub use config::{Difficulty, MatchConfig, Mode, PaletteColor};
pub use input::InputSampler;
pub use session::{MatchSession, RunState, TickOutput};

/// Game contract constants
///
/// All values are logical units; the presentation layer scales them to the
/// actual surface. They are part of the observable contract and must not
/// drift.
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;

    /// Ball bounding box (square)
    pub const BALL_SIZE: f32 = 15.0;

    /// Serve speed magnitude, per axis, units per step
    pub const INITIAL_SPEED: f32 = 5.0;

    /// Human paddle travel per tick while a key is held
    pub const PADDLE_STEP: f32 = 8.0;

    /// Horizontal speed amplification on every paddle hit (uncapped:
    /// the ball ratchets faster each volley until someone misses)
    pub const PADDLE_BOOST: f32 = 1.1;
}
