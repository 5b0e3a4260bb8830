//! A single board point.
//!
//! A point is either empty or a homogeneous stack of one color. The owner and
//! the count live in one `Option`, so a mixed-color point cannot be built.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;

use super::color::Color;

/// Number of points on the board.
pub const POINT_COUNT: usize = 24;

/// Contents of one point: nothing, or `count` checkers of one color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    stack: Option<(Color, NonZeroU8)>,
}

impl Point {
    /// An empty point.
    pub const EMPTY: Point = Point { stack: None };

    /// A point holding `count` checkers of `color`. Zero yields an empty point.
    #[must_use]
    pub fn with_checkers(color: Color, count: u8) -> Self {
        Self {
            stack: NonZeroU8::new(count).map(|n| (color, n)),
        }
    }

    /// Owner of the checkers on this point, if any.
    #[must_use]
    pub fn owner(&self) -> Option<Color> {
        self.stack.map(|(color, _)| color)
    }

    /// Number of checkers on this point.
    #[must_use]
    pub fn count(&self) -> u8 {
        self.stack.map_or(0, |(_, n)| n.get())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_none()
    }

    /// Check if `color` owns this point.
    #[must_use]
    pub fn is_owned_by(&self, color: Color) -> bool {
        self.owner() == Some(color)
    }

    /// Check if this point is a single checker of `color` (a blot).
    #[must_use]
    pub fn is_blot_of(&self, color: Color) -> bool {
        matches!(self.stack, Some((c, n)) if c == color && n.get() == 1)
    }

    /// Check if `color` may land here: empty, own stack, or an opposing blot.
    #[must_use]
    pub fn is_open_to(&self, color: Color) -> bool {
        match self.stack {
            None => true,
            Some((owner, n)) => owner == color || n.get() == 1,
        }
    }

    /// Add one checker of `color`.
    ///
    /// Callers clear an opposing blot first; pushing onto a point owned by
    /// the other color is refused and returns `false`.
    pub(crate) fn push(&mut self, color: Color) -> bool {
        match self.stack {
            None => {
                self.stack = Some((color, NonZeroU8::MIN));
                true
            }
            Some((owner, n)) if owner == color => match n.checked_add(1) {
                Some(next) => {
                    self.stack = Some((owner, next));
                    true
                }
                None => false,
            },
            Some(_) => false,
        }
    }

    /// Remove one checker and return its color.
    pub(crate) fn pop(&mut self) -> Option<Color> {
        let (color, n) = self.stack?;
        self.stack = NonZeroU8::new(n.get() - 1).map(|rest| (color, rest));
        Some(color)
    }

    /// Empty the point, returning what was on it.
    pub(crate) fn take(&mut self) -> Point {
        Point {
            stack: self.stack.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_point() {
        let p = Point::EMPTY;
        assert!(p.is_empty());
        assert_eq!(p.count(), 0);
        assert_eq!(p.owner(), None);
        assert!(p.is_open_to(Color::White));
        assert!(p.is_open_to(Color::Black));
        assert_eq!(Point::with_checkers(Color::White, 0), Point::EMPTY);
    }

    #[test]
    fn test_open_to() {
        let blot = Point::with_checkers(Color::Black, 1);
        assert!(blot.is_blot_of(Color::Black));
        assert!(blot.is_open_to(Color::White));

        let made = Point::with_checkers(Color::Black, 2);
        assert!(!made.is_blot_of(Color::Black));
        assert!(!made.is_open_to(Color::White));
        assert!(made.is_open_to(Color::Black));
    }

    #[test]
    fn test_push_pop() {
        let mut p = Point::EMPTY;
        assert!(p.push(Color::White));
        assert!(p.push(Color::White));
        assert_eq!(p.count(), 2);
        assert!(p.is_owned_by(Color::White));

        assert_eq!(p.pop(), Some(Color::White));
        assert_eq!(p.pop(), Some(Color::White));
        assert_eq!(p.pop(), None);
        assert!(p.is_empty());
    }

    #[test]
    fn test_push_refuses_other_color() {
        let mut p = Point::with_checkers(Color::Black, 1);
        assert!(!p.push(Color::White));
        assert_eq!(p, Point::with_checkers(Color::Black, 1));

        let hit = p.take();
        assert!(hit.is_blot_of(Color::Black));
        assert!(p.is_empty());
        assert!(p.push(Color::White));
        assert!(p.is_blot_of(Color::White));
    }

    #[test]
    fn test_point_serialization() {
        let p = Point::with_checkers(Color::White, 5);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }
}
