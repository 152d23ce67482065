//! Hit predicates for the rectangular court
//!
//! The tests compare the ball's top-left corner against the goal-side
//! paddle faces and the ball's bounding box against the top/bottom walls.
//! Ball extent is ignored on the horizontal axis, matching the scoring
//! tests at the goal lines.

use glam::Vec2;

use crate::consts::*;

/// Ball's y within the paddle's vertical span `[paddle_y, paddle_y + PADDLE_HEIGHT]`
fn within_paddle_span(ball_y: f32, paddle_y: f32) -> bool {
    ball_y >= paddle_y && ball_y <= paddle_y + PADDLE_HEIGHT
}

/// Contact with the left paddle's face at `x = PADDLE_WIDTH`
pub fn hits_left_paddle(ball_pos: Vec2, paddle_y: f32) -> bool {
    ball_pos.x <= PADDLE_WIDTH && within_paddle_span(ball_pos.y, paddle_y)
}

/// Contact with the right paddle's face at `x = FIELD_WIDTH - PADDLE_WIDTH`
pub fn hits_right_paddle(ball_pos: Vec2, paddle_y: f32) -> bool {
    ball_pos.x >= FIELD_WIDTH - PADDLE_WIDTH && within_paddle_span(ball_pos.y, paddle_y)
}

/// Contact with the top wall (`y <= 0`) or the bottom wall
/// (`y >= FIELD_HEIGHT - BALL_SIZE`)
pub fn hits_wall(ball_y: f32) -> bool {
    ball_y <= 0.0 || ball_y >= FIELD_HEIGHT - BALL_SIZE
}
