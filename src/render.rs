//! Frame projection
//!
//! Turns a [`MatchState`] snapshot plus the match colors into an ordered
//! list of draw primitives. Purely a projection: no state here, nothing
//! feeds back into the simulation. The presentation layer rasterizes the
//! commands onto its surface in order.

use glam::Vec2;

use crate::config::MatchConfig;
use crate::consts::*;
use crate::sim::MatchState;

/// Court background fill
pub const BACKGROUND: [f32; 4] = [0.04, 0.04, 0.07, 1.0];
/// Centerline dashes
const CENTERLINE_COLOR: [f32; 4] = [0.55, 0.55, 0.60, 1.0];
const CENTERLINE_WIDTH: f32 = 4.0;
const DASH_LEN: f32 = 18.0;
const DASH_GAP: f32 = 14.0;

/// One draw primitive, in field coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear { color: [f32; 4] },
    /// Axis-aligned filled rectangle, `min` is the top-left corner
    FillRect {
        min: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
}

fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> DrawCommand {
    DrawCommand::FillRect { min, size, color }
}

/// Project the current match state into draw commands
pub fn render_frame(state: &MatchState, config: &MatchConfig) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    commands.push(DrawCommand::Clear { color: BACKGROUND });

    // Dashed vertical centerline
    let line_x = (FIELD_WIDTH - CENTERLINE_WIDTH) / 2.0;
    let mut y = 0.0;
    while y < FIELD_HEIGHT {
        let len = DASH_LEN.min(FIELD_HEIGHT - y);
        commands.push(rect(
            Vec2::new(line_x, y),
            Vec2::new(CENTERLINE_WIDTH, len),
            CENTERLINE_COLOR,
        ));
        y += DASH_LEN + DASH_GAP;
    }

    // Paddles flush against their goal lines
    let paddle_size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
    let paddle_color = config.paddle_color.rgba();
    commands.push(rect(Vec2::new(0.0, state.paddle1_y), paddle_size, paddle_color));
    commands.push(rect(
        Vec2::new(FIELD_WIDTH - PADDLE_WIDTH, state.paddle2_y),
        paddle_size,
        paddle_color,
    ));

    // Ball as a filled square
    commands.push(rect(
        state.ball_pos,
        Vec2::splat(BALL_SIZE),
        config.ball_color.rgba(),
    ));

    commands
}
