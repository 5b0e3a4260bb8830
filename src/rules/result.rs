//! Game results.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Color, CHECKERS_PER_COLOR, POINT_COUNT};

/// How decisive a win was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinKind {
    /// The loser bore off at least one checker.
    Single,
    /// The loser bore off nothing.
    Gammon,
    /// The loser bore off nothing and still has a checker on the bar or in
    /// the winner's home quadrant.
    Backgammon,
}

impl WinKind {
    /// Points scored at a cube value of one.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            WinKind::Single => 1,
            WinKind::Gammon => 2,
            WinKind::Backgammon => 3,
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Color,
    pub kind: WinKind,
}

impl GameResult {
    /// Read the result off a board, or `None` while nobody has borne off all 15.
    #[must_use]
    pub fn from_board(board: &Board) -> Option<Self> {
        let winner = Color::ALL
            .into_iter()
            .find(|&c| board.borne_off(c) == CHECKERS_PER_COLOR)?;
        let loser = winner.opposite();

        let kind = if board.borne_off(loser) > 0 {
            WinKind::Single
        } else {
            let trapped = board.bar(loser) > 0
                || (0..POINT_COUNT).any(|i| winner.is_home(i) && board.points()[i].is_owned_by(loser));
            if trapped {
                WinKind::Backgammon
            } else {
                WinKind::Gammon
            }
        };

        Some(Self { winner, kind })
    }

    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        self.winner == color
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.kind.points()
    }
}
