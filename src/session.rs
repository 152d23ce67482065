//! Match session
//!
//! The object a presentation layer owns for the lifetime of one match. It
//! composes the input sampler, the engine state and the run state, and
//! enforces the per-tick ordering: sample input, simulate, hand back a
//! render-ready snapshot. Dropping the session is teardown; nothing
//! persists.

use crate::config::MatchConfig;
use crate::input::InputSampler;
use crate::sim::{GameEvent, MatchState, TickInput, tick};

/// Where the match is in its lifecycle. No terminal state: scoring is
/// unbounded and a match only ends when the host tears it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    NotStarted,
    Running,
    Paused,
}

/// What one tick hands back to the host
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutput {
    /// Cue/score events in emission order; empty while not running
    pub events: Vec<GameEvent>,
    /// (player 1, player 2) after this tick
    pub scores: (u32, u32),
}

/// One running (or paused) match
pub struct MatchSession {
    config: MatchConfig,
    input: InputSampler,
    state: MatchState,
    run_state: RunState,
}

impl MatchSession {
    /// Build a session; call [`start`](Self::start) to begin ticking.
    pub fn new(config: MatchConfig, seed: u64) -> Self {
        Self {
            config,
            input: InputSampler::new(),
            state: MatchState::new(seed),
            run_state: RunState::NotStarted,
        }
    }

    pub fn start(&mut self) {
        if self.run_state == RunState::NotStarted {
            log::info!(
                "match started: mode={:?} difficulty={:?} seed={}",
                self.config.mode,
                self.config.difficulty,
                self.state.seed
            );
        }
        self.run_state = RunState::Running;
    }

    /// Forward a key-down event; the pause key flips running/paused on its
    /// press edge.
    pub fn key_down(&mut self, key: &str) {
        if self.input.key_down(key) {
            self.toggle_pause();
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Explicit pause toggle (e.g. a pause button). Always flips, so two
    /// calls are a net no-op.
    pub fn toggle_pause(&mut self) {
        self.run_state = match self.run_state {
            RunState::Running => {
                log::info!("match paused");
                RunState::Paused
            }
            RunState::Paused => {
                log::info!("match resumed");
                RunState::Running
            }
            RunState::NotStarted => RunState::NotStarted,
        };
    }

    /// Advance one frame: sample the held keys, step the engine, report
    /// events. While not running this is a no-op that leaves the match
    /// state untouched.
    pub fn tick(&mut self) -> TickOutput {
        if self.run_state != RunState::Running {
            return TickOutput {
                events: Vec::new(),
                scores: (self.state.score1, self.state.score2),
            };
        }

        let input = TickInput::sample(&self.input);
        let events = tick(&mut self.state, &self.config, &input);
        for event in &events {
            if let GameEvent::PointScored(side) = event {
                log::debug!(
                    "point for {side:?}: {} - {}",
                    self.state.score1,
                    self.state.score2
                );
            }
        }
        TickOutput {
            events,
            scores: (self.state.score1, self.state.score2),
        }
    }

    /// Render-ready snapshot of the current state
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }
}
