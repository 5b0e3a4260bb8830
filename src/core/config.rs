//! Game configuration.
//!
//! A game is configured once at startup:
//! - `seed`: dice RNG seed
//! - `first_to_move`: the side that rolls first
//! - `layout`: the starting position (canonical unless overridden)

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::board::Layout;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Dice RNG seed.
    pub seed: u64,

    /// Side that takes the first turn.
    pub first_to_move: Color,

    /// Starting position, also used by `reset`.
    pub layout: Layout,
}

impl GameConfig {
    /// Create a configuration with the canonical layout and White first.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            first_to_move: Color::White,
            layout: Layout::standard(),
        }
    }

    /// Set the side that moves first.
    #[must_use]
    pub fn with_first_to_move(mut self, color: Color) -> Self {
        self.first_to_move = color;
        self
    }

    /// Start from a custom layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
