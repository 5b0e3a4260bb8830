//! The board: 24 points, the bar and the borne-off trays.
//!
//! `Board` is the only thing allowed to change where checkers are. Every
//! mutating operation is guarded by a `check_*` predicate that names the
//! violated rule; the boolean forms (`is_legal_move`, `move_checker`, ...)
//! are thin wrappers over those checks. A rejected operation never leaves a
//! partial change behind.
//!
//! The board is direction-agnostic for ordinary moves: which way a color
//! travels and how far a die reaches are decided by the turn coordinator.
//! Home quadrants and entry ranges come from [`Color`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::layout::{check_checker_limit, Layout, LayoutError};
use crate::core::{Color, ColorMap, Point, CHECKERS_PER_COLOR, POINT_COUNT};

/// Board-level rule a request broke.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("point {0} is off the board")]
    OutOfRange(usize),
    #[error("{0} must enter from the bar first")]
    BarNotEmpty(Color),
    #[error("point {point} holds no {color} checker")]
    NotOwned { point: usize, color: Color },
    #[error("point {0} is blocked")]
    Blocked(usize),
    #[error("source and destination are the same point")]
    SamePoint,
    #[error("{0} has no checker on the bar")]
    NothingOnBar(Color),
    #[error("point {point} is outside {color}'s entry quadrant")]
    OutsideEntryRange { point: usize, color: Color },
    #[error("{0} still has checkers outside the home quadrant")]
    NotAllHome(Color),
}

/// Complete checker position.
///
/// Deserialization applies the same checker limit as `Layout::build`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    points: [Point; POINT_COUNT],
    bar: ColorMap<u8>,
    borne_off: ColorMap<u8>,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    points: [Point; POINT_COUNT],
    bar: ColorMap<u8>,
    borne_off: ColorMap<u8>,
}

impl TryFrom<RawBoard> for Board {
    type Error = LayoutError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let board = Self::from_parts(raw.points, raw.bar, raw.borne_off);
        for color in Color::ALL {
            check_checker_limit(color, board.checker_total(color))?;
        }
        Ok(board)
    }
}

impl Board {
    /// A board in the canonical opening position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// A board with no checkers anywhere.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_parts([Point::EMPTY; POINT_COUNT], ColorMap::default(), ColorMap::default())
    }

    /// Build a board from a validated layout.
    pub fn from_layout(layout: &Layout) -> Result<Self, LayoutError> {
        layout.build()
    }

    pub(crate) fn from_parts(
        points: [Point; POINT_COUNT],
        bar: ColorMap<u8>,
        borne_off: ColorMap<u8>,
    ) -> Self {
        Self {
            points,
            bar,
            borne_off,
        }
    }

    /// Return to the canonical opening position.
    pub fn reset(&mut self) {
        self.points = [Point::EMPTY; POINT_COUNT];
        for p in Layout::standard().placements() {
            self.points[p.point] = Point::with_checkers(p.color, p.count);
        }
        self.bar = ColorMap::default();
        self.borne_off = ColorMap::default();
    }

    // === Queries ===

    /// Contents of point `index`, or `None` off the board.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    #[must_use]
    pub fn points(&self) -> &[Point; POINT_COUNT] {
        &self.points
    }

    /// Checkers of `color` waiting on the bar.
    #[must_use]
    pub fn bar(&self, color: Color) -> u8 {
        self.bar[color]
    }

    /// Checkers of `color` already removed from the board.
    #[must_use]
    pub fn borne_off(&self, color: Color) -> u8 {
        self.borne_off[color]
    }

    /// Checkers of `color` standing on points.
    #[must_use]
    pub fn checkers_on_board(&self, color: Color) -> u32 {
        self.points
            .iter()
            .filter(|p| p.is_owned_by(color))
            .map(|p| u32::from(p.count()))
            .sum()
    }

    /// Checkers of `color` on points, on the bar and borne off.
    #[must_use]
    pub fn checker_total(&self, color: Color) -> u32 {
        self.checkers_on_board(color) + u32::from(self.bar[color]) + u32::from(self.borne_off[color])
    }

    /// Check if moving `color` onto `to` would send an opposing blot to the bar.
    #[must_use]
    pub fn would_hit(&self, to: usize, color: Color) -> bool {
        self.point(to).is_some_and(|p| p.is_blot_of(color.opposite()))
    }

    /// Occupied point of `color` farthest from its exit.
    #[must_use]
    pub fn farthest_checker(&self, color: Color) -> Option<usize> {
        (0..POINT_COUNT)
            .filter(|&i| self.points[i].is_owned_by(color))
            .max_by_key(|&i| color.pips_to_exit(i))
    }

    /// Total pips `color` needs to bear everything off.
    ///
    /// A checker on the bar counts as 25 pips.
    #[must_use]
    pub fn pip_count(&self, color: Color) -> u32 {
        let on_points: usize = (0..POINT_COUNT)
            .filter(|&i| self.points[i].is_owned_by(color))
            .map(|i| usize::from(self.points[i].count()) * color.pips_to_exit(i))
            .sum();
        on_points as u32 + 25 * u32::from(self.bar[color])
    }

    /// Check that every point holds checkers of a single color.
    ///
    /// This can never return `false`: `Point` has no way to represent a
    /// mixed stack. It stays as a test assertion.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.points.iter().all(|p| p.is_empty() == p.owner().is_none())
    }

    /// Check that each side accounts for exactly 15 checkers.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Color::ALL
            .iter()
            .all(|&c| self.checker_total(c) == u32::from(CHECKERS_PER_COLOR))
    }

    // === Ordinary moves ===

    /// Check a point-to-point move for `color`, ignoring direction and distance.
    ///
    /// Rules are checked in order: both points on the board, bar empty,
    /// source owned by `color`, destination not blocked.
    pub fn check_move(&self, from: usize, to: usize, color: Color) -> Result<(), RuleViolation> {
        let source = self.points.get(from).ok_or(RuleViolation::OutOfRange(from))?;
        let target = self.points.get(to).ok_or(RuleViolation::OutOfRange(to))?;

        if self.bar[color] > 0 {
            return Err(RuleViolation::BarNotEmpty(color));
        }
        if !source.is_owned_by(color) {
            return Err(RuleViolation::NotOwned { point: from, color });
        }
        if !target.is_open_to(color) {
            return Err(RuleViolation::Blocked(to));
        }
        if from == to {
            return Err(RuleViolation::SamePoint);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_legal_move(&self, from: usize, to: usize, color: Color) -> bool {
        self.check_move(from, to, color).is_ok()
    }

    /// Move one checker of `color` from `from` to `to`.
    ///
    /// Returns whether an opposing blot was hit.
    pub fn try_move_checker(&mut self, from: usize, to: usize, color: Color) -> Result<bool, RuleViolation> {
        self.check_move(from, to, color)?;
        self.points[from].pop();
        Ok(self.land(to, color))
    }

    /// Move one checker; `false` and no change if the move is illegal.
    pub fn move_checker(&mut self, from: usize, to: usize, color: Color) -> bool {
        self.try_move_checker(from, to, color).is_ok()
    }

    // === Bar ===

    /// Check whether a checker of `color` could land on `point` from the bar.
    ///
    /// Only occupancy is checked here, not the entry quadrant.
    pub fn check_entry(&self, color: Color, point: usize) -> Result<(), RuleViolation> {
        let target = self.points.get(point).ok_or(RuleViolation::OutOfRange(point))?;
        if !target.is_open_to(color) {
            return Err(RuleViolation::Blocked(point));
        }
        Ok(())
    }

    #[must_use]
    pub fn can_enter_from_bar(&self, color: Color, point: usize) -> bool {
        self.check_entry(color, point).is_ok()
    }

    /// Bring one checker of `color` in from the bar onto `to`.
    ///
    /// Returns whether an opposing blot was hit.
    pub fn try_enter_from_bar(&mut self, to: usize, color: Color) -> Result<bool, RuleViolation> {
        if self.bar[color] == 0 {
            return Err(RuleViolation::NothingOnBar(color));
        }
        if !color.entry_range().contains(&to) {
            return Err(RuleViolation::OutsideEntryRange { point: to, color });
        }
        self.check_entry(color, to)?;

        self.bar[color] -= 1;
        Ok(self.land(to, color))
    }

    pub fn move_checker_from_bar(&mut self, to: usize, color: Color) -> bool {
        self.try_enter_from_bar(to, color).is_ok()
    }

    // === Bearing off ===

    /// Check that `color` has nothing on the bar and nothing outside home.
    pub fn check_bear_off_ready(&self, color: Color) -> Result<(), RuleViolation> {
        if self.bar[color] > 0 {
            return Err(RuleViolation::NotAllHome(color));
        }
        let straggler = (0..POINT_COUNT).any(|i| self.points[i].is_owned_by(color) && !color.is_home(i));
        if straggler {
            return Err(RuleViolation::NotAllHome(color));
        }
        Ok(())
    }

    #[must_use]
    pub fn can_bear_off(&self, color: Color) -> bool {
        self.check_bear_off_ready(color).is_ok()
    }

    /// Remove one checker of `color` from `point`.
    pub fn try_bear_off(&mut self, color: Color, point: usize) -> Result<(), RuleViolation> {
        self.check_bear_off_ready(color)?;
        let source = self.points.get_mut(point).ok_or(RuleViolation::OutOfRange(point))?;
        if !source.is_owned_by(color) {
            return Err(RuleViolation::NotOwned { point, color });
        }

        source.pop();
        self.borne_off[color] += 1;
        Ok(())
    }

    pub fn bear_off(&mut self, color: Color, point: usize) -> bool {
        self.try_bear_off(color, point).is_ok()
    }

    /// Place one checker of `color` on an already-checked point, hitting a blot.
    fn land(&mut self, to: usize, color: Color) -> bool {
        let opponent = color.opposite();
        let hit = self.points[to].is_blot_of(opponent);
        if hit {
            self.points[to].take();
            self.bar[opponent] += 1;
        }
        let placed = self.points[to].push(color);
        debug_assert!(placed, "landing point was checked open");
        hit
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Two rows of twelve points, top row 12-23 and bottom row 11-0.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cell = |i: usize| match self.points[i].owner() {
            Some(color) => format!("{}{:<2}", color.symbol(), self.points[i].count()),
            None => " . ".to_string(),
        };
        let row = |indices: &mut dyn Iterator<Item = usize>| {
            indices
                .map(|i| if i == 17 || i == 6 { format!("{} |", cell(i)) } else { cell(i) })
                .collect::<Vec<_>>()
                .join(" ")
        };
        let labels = |indices: &mut dyn Iterator<Item = usize>| {
            indices
                .map(|i| if i == 17 || i == 6 { format!("{:<3} |", i) } else { format!("{:<3}", i) })
                .collect::<Vec<_>>()
                .join(" ")
        };

        writeln!(f, "{}", labels(&mut (12..24)))?;
        writeln!(f, "{}", row(&mut (12..24)))?;
        writeln!(f, "{}", row(&mut (0..12).rev()))?;
        writeln!(f, "{}", labels(&mut (0..12).rev()))?;
        write!(
            f,
            "bar W:{} B:{}  off W:{} B:{}",
            self.bar[Color::White],
            self.bar[Color::Black],
            self.borne_off[Color::White],
            self.borne_off[Color::Black]
        )
    }
}
