//! End-of-game rules.
//!
//! A side wins when all 15 of its checkers are borne off. The result also
//! records how badly the other side lost.

pub mod result;

pub use result::{GameResult, WinKind};
