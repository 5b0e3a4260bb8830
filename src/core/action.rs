//! Action representation: where checkers come from and go to.
//!
//! A move request names two endpoints. An endpoint is a board point, the bar
//! or the bear-off tray, so a request is a pair of [`Destination`]s. Only three
//! shapes are meaningful and they map onto [`Action`]:
//!
//! - point → point: `Action::Move`
//! - bar → point: `Action::Enter`
//! - point → off: `Action::BearOff`
//!
//! `Action::EndTurn` covers giving up the remaining dice.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::color::Color;
use super::point::POINT_COUNT;

/// One endpoint of a move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// A board point, 0-23.
    OnBoard(usize),
    /// The bar, where hit checkers wait.
    Bar,
    /// The bear-off tray.
    BearOff,
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::OnBoard(p) => write!(f, "{}", p),
            Destination::Bar => write!(f, "bar"),
            Destination::BearOff => write!(f, "off"),
        }
    }
}

/// Error returned when parsing a destination fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a point (0-23), `bar` or `off`")]
pub struct ParseDestinationError(pub String);

impl FromStr for Destination {
    type Err = ParseDestinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        match token.as_str() {
            "bar" => Ok(Destination::Bar),
            "off" => Ok(Destination::BearOff),
            _ => token
                .parse::<usize>()
                .ok()
                .filter(|&p| p < POINT_COUNT)
                .map(Destination::OnBoard)
                .ok_or_else(|| ParseDestinationError(s.to_string())),
        }
    }
}

/// A single request against the turn coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move one checker between two points.
    Move { from: usize, to: usize },
    /// Bring one checker in from the bar.
    Enter { to: usize },
    /// Remove one checker from the board.
    BearOff { from: usize },
    /// Give up the remaining move-lengths.
    EndTurn,
}

impl Action {
    /// Build an action from a pair of endpoints.
    ///
    /// Returns `None` for shapes that never describe a move
    /// (bar → bar, off → anything, point → bar, ...).
    ///
    /// ```
    /// use rust_backgammon::core::{Action, Destination};
    ///
    /// let enter = Action::from_endpoints(Destination::Bar, Destination::OnBoard(20));
    /// assert_eq!(enter, Some(Action::Enter { to: 20 }));
    ///
    /// let off = Action::from_endpoints(Destination::OnBoard(22), Destination::BearOff);
    /// assert_eq!(off, Some(Action::BearOff { from: 22 }));
    ///
    /// assert_eq!(Action::from_endpoints(Destination::Bar, Destination::BearOff), None);
    /// ```
    #[must_use]
    pub fn from_endpoints(from: Destination, to: Destination) -> Option<Self> {
        match (from, to) {
            (Destination::OnBoard(from), Destination::OnBoard(to)) => Some(Action::Move { from, to }),
            (Destination::Bar, Destination::OnBoard(to)) => Some(Action::Enter { to }),
            (Destination::OnBoard(from), Destination::BearOff) => Some(Action::BearOff { from }),
            _ => None,
        }
    }

    /// The endpoints of this action, or `None` for `EndTurn`.
    #[must_use]
    pub fn endpoints(&self) -> Option<(Destination, Destination)> {
        match *self {
            Action::Move { from, to } => Some((Destination::OnBoard(from), Destination::OnBoard(to))),
            Action::Enter { to } => Some((Destination::Bar, Destination::OnBoard(to))),
            Action::BearOff { from } => Some((Destination::OnBoard(from), Destination::BearOff)),
            Action::EndTurn => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.endpoints() {
            Some((from, to)) => write!(f, "{}/{}", from, to),
            None => write!(f, "end turn"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging. `die` is the move-length consumed
/// (0 for `EndTurn`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that acted.
    pub color: Color,

    /// The action taken.
    pub action: Action,

    /// Move-length consumed by the action.
    pub die: u8,

    /// Whether an opposing blot was sent to the bar.
    pub hit: bool,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_destination() {
        assert_eq!("bar".parse::<Destination>(), Ok(Destination::Bar));
        assert_eq!("OFF".parse::<Destination>(), Ok(Destination::BearOff));
        assert_eq!("17".parse::<Destination>(), Ok(Destination::OnBoard(17)));
        assert_eq!("0".parse::<Destination>(), Ok(Destination::OnBoard(0)));
        assert!("24".parse::<Destination>().is_err());
        assert!("-1".parse::<Destination>().is_err());
        assert!("home".parse::<Destination>().is_err());
    }

    #[test]
    fn test_from_endpoints() {
        assert_eq!(
            Action::from_endpoints(Destination::OnBoard(5), Destination::OnBoard(9)),
            Some(Action::Move { from: 5, to: 9 })
        );
        assert_eq!(Action::from_endpoints(Destination::Bar, Destination::Bar), None);
        assert_eq!(Action::from_endpoints(Destination::BearOff, Destination::OnBoard(3)), None);
        assert_eq!(Action::from_endpoints(Destination::OnBoard(3), Destination::Bar), None);
    }

    #[test]
    fn test_endpoints_inverse() {
        let actions = [
            Action::Move { from: 1, to: 4 },
            Action::Enter { to: 20 },
            Action::BearOff { from: 2 },
        ];
        for action in actions {
            let (from, to) = action.endpoints().unwrap();
            assert_eq!(Action::from_endpoints(from, to), Some(action));
        }
        assert_eq!(Action::EndTurn.endpoints(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::Move { from: 5, to: 9 }.to_string(), "5/9");
        assert_eq!(Action::Enter { to: 20 }.to_string(), "bar/20");
        assert_eq!(Action::BearOff { from: 22 }.to_string(), "22/off");
        assert_eq!(Action::EndTurn.to_string(), "end turn");
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord {
            color: Color::Black,
            action: Action::Move { from: 12, to: 9 },
            die: 3,
            hit: true,
            turn: 4,
            sequence: 1,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
