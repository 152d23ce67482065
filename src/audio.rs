//! Audio cue routing
//!
//! The engine only emits cue events; whatever actually makes noise lives in
//! the presentation layer and registers here as a [`CueSink`]. The mute
//! flag is sampled at the moment a cue fires — toggling mute never reaches
//! back into cues already delivered, and a missing sink drops cues without
//! disturbing the simulation.

pub use crate::sim::Cue;

/// Receiver for fire-and-forget cues. Implemented for closures.
pub trait CueSink {
    fn play(&mut self, cue: Cue);
}

impl<F: FnMut(Cue)> CueSink for F {
    fn play(&mut self, cue: Cue) {
        self(cue)
    }
}

/// Routes cues to the presentation layer's sink, gated by the live mute flag
pub struct AudioManager {
    muted: bool,
    sink: Option<Box<dyn CueSink>>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    /// No sink attached yet; cues are dropped until one registers.
    pub fn new() -> Self {
        Self {
            muted: false,
            sink: None,
        }
    }

    pub fn with_sink(sink: impl CueSink + 'static) -> Self {
        Self {
            muted: false,
            sink: Some(Box::new(sink)),
        }
    }

    pub fn set_sink(&mut self, sink: impl CueSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// Live mute toggle; affects only cues fired after the call.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Fire a cue. Muted or sink-less triggers are dropped silently.
    pub fn trigger(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        match &mut self.sink {
            Some(sink) => sink.play(cue),
            None => log::debug!("cue {cue:?} dropped: no sink attached"),
        }
    }
}
