//! # rust-backgammon
//!
//! A backgammon rule engine: board state, move legality, turn sequencing,
//! bar entry, bearing off and win detection for two players.
//!
//! ## Design Principles
//!
//! 1. **One Authority Per Concern**: `Board` alone mutates checker positions;
//!    `TurnCoordinator` alone decides which requests reach it.
//!
//! 2. **Invalid States Unrepresentable**: a point holds one color or none,
//!    colors are an enum, and move endpoints are a `Destination` rather than
//!    sentinel numbers.
//!
//! 3. **Rejections Change Nothing**: every request is either one complete
//!    transition or an error with the state untouched.
//!
//! ## Architecture
//!
//! - **Deterministic Dice**: `RandomDice` draws from a seeded ChaCha8 RNG, so
//!   a seed replays a whole game. `ScriptedDice` replays fixed rolls.
//!
//! - **Persistent History**: the action history is an `im::Vector`, so cloning
//!   a game for analysis is cheap.
//!
//! ## Modules
//!
//! - `core`: colors, points, actions, RNG, configuration
//! - `board`: the board and validated starting layouts
//! - `dice`: rolls, move-lengths and dice sources
//! - `turn`: turn coordinator and legal-action enumeration
//! - `rules`: game results
//! - `game`: the handle that ties a coordinator to its dice

pub mod core;
pub mod board;
pub mod dice;
pub mod turn;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap, Point, POINT_COUNT, CHECKERS_PER_COLOR,
    GameRng, GameRngState, GameConfig,
    Action, ActionRecord, Destination,
};

pub use crate::board::{Board, Layout, LayoutError, RuleViolation};

pub use crate::dice::{DiceError, DiceSource, MoveLengths, RandomDice, Roll, ScriptedDice};

pub use crate::turn::{MoveError, MoveOutcome, TurnCoordinator, TurnPhase};

pub use crate::rules::{GameResult, WinKind};

pub use crate::game::Game;
