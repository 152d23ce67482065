//! Rally Pong entry point
//!
//! Headless reference host: runs a fixed-timestep match loop, drives
//! player 1 with a simple follow heuristic (demo mode) so the whole
//! key-event path is exercised, and logs cues instead of playing audio.
//! A real presentation layer replaces everything in this file.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rally_pong::consts::*;
use rally_pong::input::keys;
use rally_pong::render::render_frame;
use rally_pong::{AudioManager, Cue, MatchConfig, MatchSession};

const TICK_RATE: f32 = 60.0;
/// Demo runs first-to-five, then exits
const DEMO_POINTS: u32 = 5;

fn main() {
    env_logger::init();

    let config = load_config();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    log::info!("Rally Pong demo starting (seed {seed})");

    let mut session = MatchSession::new(config, seed);
    session.start();

    let mut audio = AudioManager::with_sink(|cue| match cue {
        Cue::Hit => log::debug!("cue: hit"),
        Cue::Score => log::info!("cue: score"),
    });
    audio.set_muted(config.muted);

    let tick_dt = Duration::from_secs_f32(1.0 / TICK_RATE);
    let mut last = Instant::now();
    let mut accumulator = Duration::ZERO;

    loop {
        let now = Instant::now();
        accumulator += now - last;
        last = now;

        while accumulator >= tick_dt {
            accumulator -= tick_dt;

            drive_demo_player(&mut session);
            let out = session.tick();
            for event in &out.events {
                audio.trigger(event.cue());
            }
            // A real host rasterizes this list; the demo only builds it.
            let _frame = render_frame(session.state(), session.config());

            let (p1, p2) = out.scores;
            if p1.max(p2) >= DEMO_POINTS {
                log::info!(
                    "final score {p1} - {p2} after {} ticks",
                    session.state().time_ticks
                );
                return;
            }
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}

/// Demo mode: player 1 chases the ball through its own key bindings
fn drive_demo_player(session: &mut MatchSession) {
    let diff = {
        let state = session.state();
        let paddle_center = state.paddle1_y + PADDLE_HEIGHT / 2.0;
        let ball_center = state.ball_pos.y + BALL_SIZE / 2.0;
        ball_center - paddle_center
    };

    session.key_up(keys::P1_UP);
    session.key_up(keys::P1_DOWN);
    if diff < -PADDLE_STEP {
        session.key_down(keys::P1_UP);
    } else if diff > PADDLE_STEP {
        session.key_down(keys::P1_DOWN);
    }
}

/// Optional JSON match config as the first argument; anything unreadable
/// falls back to defaults.
fn load_config() -> MatchConfig {
    let Some(path) = std::env::args().nth(1) else {
        return MatchConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(config) => {
                log::info!("loaded match config from {path}");
                config
            }
            Err(err) => {
                log::warn!("bad match config {path}: {err}; using defaults");
                MatchConfig::default()
            }
        },
        Err(err) => {
            log::warn!("cannot read {path}: {err}; using defaults");
            MatchConfig::default()
        }
    }
}
