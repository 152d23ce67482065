//! Match state and simulation events
//!
//! Everything the engine mutates lives here; mutation happens only inside
//! [`super::tick::tick`]. The RNG is seeded per match so a match replays
//! identically given the same seed and input sequence.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which paddle / which player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Player 1, defends the left goal line
    Left,
    /// Player 2 (or the heuristic opponent), defends the right
    Right,
}

/// Audio cue kinds the presentation layer may play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Ball met a paddle or a wall
    Hit,
    /// A point was scored
    Score,
}

/// Events emitted by a single simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PaddleHit(Side),
    WallHit,
    PointScored(Side),
}

impl GameEvent {
    /// The audio cue this event triggers
    pub fn cue(&self) -> Cue {
        match self {
            GameEvent::PaddleHit(_) | GameEvent::WallHit => Cue::Hit,
            GameEvent::PointScored(_) => Cue::Score,
        }
    }
}

/// Clamp a paddle's top edge to the field
pub fn clamp_paddle_y(y: f32) -> f32 {
    y.clamp(0.0, FIELD_HEIGHT - PADDLE_HEIGHT)
}

/// Complete mutable match state
///
/// Paddle positions are the top edge of each paddle and hold
/// `[0, FIELD_HEIGHT - PADDLE_HEIGHT]` after every step. The ball position
/// is the top-left of its bounding box and is unconstrained between steps:
/// it may leave the field by up to one step's travel before the next step
/// sees it as a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Match seed, kept for reproducibility
    pub seed: u64,
    /// Serve-direction RNG
    pub rng: Pcg32,
    /// Steps advanced since match start
    pub time_ticks: u64,
    pub paddle1_y: f32,
    pub paddle2_y: f32,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub score1: u32,
    pub score2: u32,
}

impl MatchState {
    /// Fresh state: paddles centered, ball served from center with a
    /// randomized direction.
    pub fn new(seed: u64) -> Self {
        let paddle_center = (FIELD_HEIGHT - PADDLE_HEIGHT) / 2.0;
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            paddle1_y: paddle_center,
            paddle2_y: paddle_center,
            ball_pos: Vec2::ZERO,
            ball_vel: Vec2::ZERO,
            score1: 0,
            score2: 0,
        };
        state.reset_ball();
        state
    }

    /// Re-center the ball and re-draw both velocity signs independently,
    /// so the serve angle changes after every point. Paddles and scores
    /// are untouched.
    pub fn reset_ball(&mut self) {
        self.ball_pos = Vec2::new(
            (FIELD_WIDTH - BALL_SIZE) / 2.0,
            (FIELD_HEIGHT - BALL_SIZE) / 2.0,
        );
        let vx = if self.rng.random_bool(0.5) {
            INITIAL_SPEED
        } else {
            -INITIAL_SPEED
        };
        let vy = if self.rng.random_bool(0.5) {
            INITIAL_SPEED
        } else {
            -INITIAL_SPEED
        };
        self.ball_vel = Vec2::new(vx, vy);
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.score1,
            Side::Right => self.score2,
        }
    }
}
