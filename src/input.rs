//! Input sampling
//!
//! The presentation layer forwards raw key-down/key-up events here; the
//! simulation reads the resulting held-set once per tick. Key identifiers
//! are normalized to lowercase so `"W"`, `"w"` and `"ArrowUp"`/`"arrowup"`
//! collapse to one entry. Unrecognized keys are stored and simply never
//! queried by the engine.

use std::collections::HashSet;

/// Canonical key bindings (part of the observable contract)
pub mod keys {
    pub const P1_UP: &str = "w";
    pub const P1_DOWN: &str = "s";
    pub const P2_UP: &str = "arrowup";
    pub const P2_DOWN: &str = "arrowdown";
    pub const PAUSE: &str = "p";
}

/// Live set of currently-held keys
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    held: HashSet<String>,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event.
    ///
    /// Returns `true` when this event is a pause edge: the pause key going
    /// from released to held. OS key auto-repeat re-delivers key-down for a
    /// held key, so the transition check keeps a held `p` from re-toggling.
    pub fn key_down(&mut self, key: &str) -> bool {
        let key = key.to_lowercase();
        let pause_edge = key == keys::PAUSE && !self.held.contains(keys::PAUSE);
        self.held.insert(key);
        pause_edge
    }

    /// Record a key-up event.
    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&key.to_lowercase());
    }

    /// Pure query; no side effects.
    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Drop all held keys (match teardown / focus loss).
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
