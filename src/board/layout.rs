//! Starting layouts.
//!
//! A `Layout` is a description of a position: checker placements plus bar
//! and borne-off counts. It is the only way to build a `Board` that is not
//! the canonical opening, which keeps point manipulation out of the board's
//! public API.
//!
//! ## Canonical layout
//!
//! | Point | 0 | 5 | 7 | 11 | 12 | 16 | 18 | 23 |
//! |---|---|---|---|---|---|---|---|---|
//! | Checkers | B2 | W5 | W3 | W5 | B5 | B3 | B5 | W2 |
//!
//! Each side's set is the other's mirrored across the board's midpoint
//! (point `p` ↔ point `23 - p`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::position::Board;
use crate::core::{Color, ColorMap, Point, CHECKERS_PER_COLOR, POINT_COUNT};

/// Reasons a layout cannot be turned into a board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("point {0} is off the board")]
    PointOutOfRange(usize),
    #[error("point {0} would hold checkers of both colors")]
    MixedPoint(usize),
    #[error("placement on point {0} has no checkers")]
    EmptyPlacement(usize),
    #[error("{color} would have {count} checkers, more than 15")]
    TooManyCheckers { color: Color, count: u32 },
}

/// `count` checkers of `color` on `point`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub point: usize,
    pub color: Color,
    pub count: u8,
}

const STANDARD: [Placement; 8] = [
    Placement { point: 0, color: Color::Black, count: 2 },
    Placement { point: 5, color: Color::White, count: 5 },
    Placement { point: 7, color: Color::White, count: 3 },
    Placement { point: 11, color: Color::White, count: 5 },
    Placement { point: 12, color: Color::Black, count: 5 },
    Placement { point: 16, color: Color::Black, count: 3 },
    Placement { point: 18, color: Color::Black, count: 5 },
    Placement { point: 23, color: Color::White, count: 2 },
];

/// Description of a position, validated when built into a `Board`.
///
/// Partial layouts (fewer than 15 checkers for a side) are accepted so that
/// endgame positions can be set up directly.
///
/// ```
/// use rust_backgammon::board::Layout;
/// use rust_backgammon::core::Color;
///
/// let board = Layout::empty()
///     .with_checkers(20, Color::White, 10)
///     .with_checkers(22, Color::White, 5)
///     .build()
///     .unwrap();
///
/// assert!(board.can_bear_off(Color::White));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    placements: Vec<Placement>,
    bar: ColorMap<u8>,
    borne_off: ColorMap<u8>,
}

impl Layout {
    /// A layout with nothing on it.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The canonical opening position.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            placements: STANDARD.to_vec(),
            ..Self::default()
        }
    }

    /// Add `count` checkers of `color` on `point`.
    ///
    /// Repeated placements of the same color on a point add up.
    #[must_use]
    pub fn with_checkers(mut self, point: usize, color: Color, count: u8) -> Self {
        self.placements.push(Placement { point, color, count });
        self
    }

    /// Put `count` checkers of `color` on the bar.
    #[must_use]
    pub fn with_bar(mut self, color: Color, count: u8) -> Self {
        self.bar[color] = count;
        self
    }

    /// Mark `count` checkers of `color` as already borne off.
    #[must_use]
    pub fn with_borne_off(mut self, color: Color, count: u8) -> Self {
        self.borne_off[color] = count;
        self
    }

    /// The same position seen from the other side: colors swapped and
    /// point `p` moved to `23 - p`.
    ///
    /// Points off the board keep their index so `build` still rejects them.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self {
            placements: self
                .placements
                .iter()
                .map(|p| Placement {
                    point: (POINT_COUNT - 1).checked_sub(p.point).unwrap_or(p.point),
                    color: p.color.opposite(),
                    count: p.count,
                })
                .collect(),
            bar: ColorMap::new(self.bar[Color::Black], self.bar[Color::White]),
            borne_off: ColorMap::new(self.borne_off[Color::Black], self.borne_off[Color::White]),
        }
    }

    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Total checkers accounted for by `color`: board, bar and borne off.
    #[must_use]
    pub fn checker_count(&self, color: Color) -> u32 {
        let on_board: u32 = self
            .placements
            .iter()
            .filter(|p| p.color == color)
            .map(|p| u32::from(p.count))
            .sum();
        on_board + u32::from(self.bar[color]) + u32::from(self.borne_off[color])
    }

    /// Check that both sides account for exactly 15 checkers.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Color::ALL
            .iter()
            .all(|&c| self.checker_count(c) == u32::from(CHECKERS_PER_COLOR))
    }

    /// Validate the layout and build the board it describes.
    pub fn build(&self) -> Result<Board, LayoutError> {
        let mut points = [Point::EMPTY; POINT_COUNT];

        for p in &self.placements {
            if p.point >= POINT_COUNT {
                return Err(LayoutError::PointOutOfRange(p.point));
            }
            if p.count == 0 {
                return Err(LayoutError::EmptyPlacement(p.point));
            }
            let slot = &mut points[p.point];
            if slot.owner().is_some_and(|owner| owner != p.color) {
                return Err(LayoutError::MixedPoint(p.point));
            }
            let total = slot.count().saturating_add(p.count);
            *slot = Point::with_checkers(p.color, total);
        }

        for color in Color::ALL {
            check_checker_limit(color, self.checker_count(color))?;
        }

        Ok(Board::from_parts(points, self.bar, self.borne_off))
    }
}

/// Reject a side that would own more than 15 checkers.
pub(crate) fn check_checker_limit(color: Color, count: u32) -> Result<(), LayoutError> {
    if count > u32::from(CHECKERS_PER_COLOR) {
        return Err(LayoutError::TooManyCheckers { color, count });
    }
    Ok(())
}
