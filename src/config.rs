//! Match configuration
//!
//! Filled in by the presentation layer (setup screen) before a match
//! starts. Everything here is fixed for the duration of the match except
//! `muted`, whose live value is owned by [`crate::audio::AudioManager`].

use serde::{Deserialize, Serialize};

/// Player count / opponent selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mode {
    /// One human on the left, heuristic opponent on the right
    #[default]
    Single,
    /// Two humans
    Multi,
}

/// Opponent strength; ignored in [`Mode::Multi`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Opponent paddle travel per step, logical units
    pub fn paddle_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 3.0,
            Difficulty::Medium => 5.0,
            Difficulty::Hard => 7.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// The fixed four-color palette offered by the setup screen's pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaletteColor {
    #[default]
    White,
    Red,
    Green,
    Blue,
}

impl PaletteColor {
    /// RGBA for the renderer
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            PaletteColor::White => [0.95, 0.95, 0.95, 1.0],
            PaletteColor::Red => [0.90, 0.22, 0.21, 1.0],
            PaletteColor::Green => [0.30, 0.82, 0.38, 1.0],
            PaletteColor::Blue => [0.25, 0.52, 0.95, 1.0],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteColor::White => "white",
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "white" => Some(PaletteColor::White),
            "red" => Some(PaletteColor::Red),
            "green" => Some(PaletteColor::Green),
            "blue" => Some(PaletteColor::Blue),
            _ => None,
        }
    }
}

/// Per-match configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatchConfig {
    pub mode: Mode,
    /// Only consulted when `mode == Single`
    pub difficulty: Difficulty,
    pub paddle_color: PaletteColor,
    pub ball_color: PaletteColor,
    /// Initial mute state; toggles live through the audio manager
    #[serde(default)]
    pub muted: bool,
}
