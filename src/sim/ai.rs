//! Heuristic opponent for single-player mode
//!
//! A stateless reflex controller, re-evaluated every step from the current
//! ball and paddle positions only. No trajectory memory, no prediction.

use crate::config::Difficulty;
use crate::consts::PADDLE_HEIGHT;

/// New y for the opponent paddle.
///
/// Pursues `ball_y - PADDLE_HEIGHT / 2` (paddle centered on the ball) at a
/// constant per-step speed set by the difficulty. Within one step of the
/// target the paddle holds still — the dead zone keeps tracking slightly
/// imperfect on purpose.
///
/// The result is not clamped here; the engine clamps both paddles
/// uniformly.
pub fn decide(ball_y: f32, paddle_y: f32, difficulty: Difficulty) -> f32 {
    let speed = difficulty.paddle_speed();
    let target = ball_y - PADDLE_HEIGHT / 2.0;
    let delta = target - paddle_y;
    if delta.abs() > speed {
        paddle_y + speed * delta.signum()
    } else {
        paddle_y
    }
}
