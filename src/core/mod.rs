//! Core types: colors, points, actions, RNG, configuration.
//!
//! Everything here is a plain value type. Rules live in `board` and `turn`.

pub mod color;
pub mod point;
pub mod rng;
pub mod config;
pub mod action;

pub use color::{Color, ColorMap, ParseColorError, CHECKERS_PER_COLOR, QUADRANT_SIZE};
pub use point::{Point, POINT_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use action::{Action, ActionRecord, Destination, ParseDestinationError};
