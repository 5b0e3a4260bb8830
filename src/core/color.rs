//! Checker colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of the board. Everything that differs between the sides
//! (direction of travel, home quadrant, bar entry point, distance to the
//! exit) is derived from the color rather than stored.
//!
//! | | White | Black |
//! |---|---|---|
//! | Home quadrant | 18..=23 | 0..=5 |
//! | Direction | low → high | high → low |
//! | Entry point for die `d` | `24 - d` | `d - 1` |
//! | Pips to exit from `p` | `24 - p` | `p + 1` |
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, RangeInclusive};
use std::str::FromStr;

use super::point::POINT_COUNT;

/// Number of checkers each side owns.
pub const CHECKERS_PER_COLOR: u8 = 15;

/// Width of a quadrant in points.
pub const QUADRANT_SIZE: usize = 6;

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Slot index used by `ColorMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Single-letter tag used in board renderings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    /// The six points a color must gather on before bearing off.
    #[must_use]
    pub const fn home_quadrant(self) -> RangeInclusive<usize> {
        match self {
            Color::White => (POINT_COUNT - QUADRANT_SIZE)..=(POINT_COUNT - 1),
            Color::Black => 0..=(QUADRANT_SIZE - 1),
        }
    }

    /// Check if a point lies in this color's home quadrant.
    #[must_use]
    pub fn is_home(self, point: usize) -> bool {
        self.home_quadrant().contains(&point)
    }

    /// Points a checker coming off the bar may land on.
    ///
    /// Same six points as the home quadrant.
    #[must_use]
    pub const fn entry_range(self) -> RangeInclusive<usize> {
        self.home_quadrant()
    }

    /// Entry point reached from the bar with a die of `die` pips.
    ///
    /// Returns `None` for die values outside 1-6.
    #[must_use]
    pub fn entry_point(self, die: u8) -> Option<usize> {
        if !(1..=6).contains(&die) {
            return None;
        }
        Some(match self {
            Color::White => POINT_COUNT - usize::from(die),
            Color::Black => usize::from(die) - 1,
        })
    }

    /// Die value needed to enter from the bar onto `point`.
    ///
    /// Inverse of [`Color::entry_point`]; `None` outside the entry range.
    #[must_use]
    pub fn entry_die(self, point: usize) -> Option<u8> {
        if !self.entry_range().contains(&point) {
            return None;
        }
        let die = match self {
            Color::White => POINT_COUNT - point,
            Color::Black => point + 1,
        };
        u8::try_from(die).ok()
    }

    /// Check that `from -> to` travels in this color's direction.
    #[must_use]
    pub const fn is_forward(self, from: usize, to: usize) -> bool {
        match self {
            Color::White => to > from,
            Color::Black => to < from,
        }
    }

    /// Point reached by advancing `pips` from `from`, if it is still on the board.
    #[must_use]
    pub fn advance(self, from: usize, pips: u8) -> Option<usize> {
        let pips = usize::from(pips);
        let to = match self {
            Color::White => from.checked_add(pips)?,
            Color::Black => from.checked_sub(pips)?,
        };
        (to < POINT_COUNT).then_some(to)
    }

    /// Pips a checker on `point` needs to leave the board.
    #[must_use]
    pub const fn pips_to_exit(self, point: usize) -> usize {
        match self {
            Color::White => POINT_COUNT - point,
            Color::Black => point + 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Error returned when parsing a color tag fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown color `{0}`")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `W`/`B` and `white`/`black`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Color::White),
            "b" | "black" => Ok(Color::Black),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_backgammon::core::{Color, ColorMap};
///
/// let mut bar: ColorMap<u8> = ColorMap::default();
/// bar[Color::Black] += 1;
///
/// assert_eq!(bar[Color::White], 0);
/// assert_eq!(bar[Color::Black], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map from explicit White and Black values.
    pub const fn new(white: T, black: T) -> Self {
        Self { data: [white, black] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Iterate over (Color, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite().opposite(), Color::White);
    }

    #[test]
    fn test_home_quadrants_are_mirrored() {
        assert_eq!(Color::White.home_quadrant(), 18..=23);
        assert_eq!(Color::Black.home_quadrant(), 0..=5);

        for p in 0..POINT_COUNT {
            assert_eq!(Color::White.is_home(p), Color::Black.is_home(23 - p));
        }
    }

    #[test]
    fn test_entry_point_and_die_are_inverse() {
        assert_eq!(Color::White.entry_point(1), Some(23));
        assert_eq!(Color::White.entry_point(6), Some(18));
        assert_eq!(Color::Black.entry_point(1), Some(0));
        assert_eq!(Color::Black.entry_point(6), Some(5));
        assert_eq!(Color::White.entry_point(0), None);
        assert_eq!(Color::Black.entry_point(7), None);

        for color in Color::ALL {
            for die in 1..=6 {
                let point = color.entry_point(die).unwrap();
                assert!(color.entry_range().contains(&point));
                assert_eq!(color.entry_die(point), Some(die));
            }
        }

        assert_eq!(Color::White.entry_die(17), None);
        assert_eq!(Color::Black.entry_die(6), None);
    }

    #[test]
    fn test_direction() {
        assert!(Color::White.is_forward(5, 7));
        assert!(!Color::White.is_forward(7, 5));
        assert!(Color::Black.is_forward(12, 9));
        assert!(!Color::Black.is_forward(9, 12));
        assert!(!Color::White.is_forward(4, 4));
        assert!(!Color::Black.is_forward(4, 4));
    }

    #[test]
    fn test_advance_stays_on_board() {
        assert_eq!(Color::White.advance(5, 3), Some(8));
        assert_eq!(Color::White.advance(21, 3), None);
        assert_eq!(Color::Black.advance(5, 3), Some(2));
        assert_eq!(Color::Black.advance(2, 3), None);
    }

    #[test]
    fn test_pips_to_exit() {
        assert_eq!(Color::White.pips_to_exit(23), 1);
        assert_eq!(Color::White.pips_to_exit(18), 6);
        assert_eq!(Color::Black.pips_to_exit(0), 1);
        assert_eq!(Color::Black.pips_to_exit(5), 6);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("W".parse::<Color>(), Ok(Color::White));
        assert_eq!("black".parse::<Color>(), Ok(Color::Black));
        assert_eq!(" White ".parse::<Color>(), Ok(Color::White));
        assert!("red".parse::<Color>().is_err());

        assert_eq!(format!("{}", Color::Black), "Black");
        assert_eq!(Color::White.symbol(), 'W');
    }

    #[test]
    fn test_color_map() {
        let mut map = ColorMap::new(1, 2);
        assert_eq!(map[Color::White], 1);
        assert_eq!(map[Color::Black], 2);

        map[Color::White] += 10;
        assert_eq!(map[Color::White], 11);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Color::White, &11), (Color::Black, &2)]);
    }

    #[test]
    fn test_color_map_serialization() {
        let map = ColorMap::new(3u8, 4u8);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: ColorMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
