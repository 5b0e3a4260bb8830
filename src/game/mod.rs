//! A playable game: configuration, turn coordinator and dice in one handle.

pub mod session;

pub use session::Game;
