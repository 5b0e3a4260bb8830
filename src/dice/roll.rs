//! Dice rolls and the move-lengths they grant.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Reasons a pair of die values is not a roll.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DiceError {
    #[error("die value {0} is outside 1-6")]
    OutOfRange(u8),
}

/// Two die values, each in 1-6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Roll {
    first: u8,
    second: u8,
}

impl Roll {
    /// Create a roll, rejecting values outside 1-6.
    pub fn new(first: u8, second: u8) -> Result<Self, DiceError> {
        for value in [first, second] {
            if !(1..=6).contains(&value) {
                return Err(DiceError::OutOfRange(value));
            }
        }
        Ok(Self { first, second })
    }

    #[must_use]
    pub fn values(self) -> (u8, u8) {
        (self.first, self.second)
    }

    #[must_use]
    pub fn is_double(self) -> bool {
        self.first == self.second
    }

    /// Move-lengths granted: `[d1, d2]`, or `[d, d, d, d]` on a double.
    ///
    /// ```
    /// use rust_backgammon::dice::Roll;
    ///
    /// assert_eq!(Roll::new(3, 5).unwrap().move_lengths().as_slice(), &[3, 5]);
    /// assert_eq!(Roll::new(4, 4).unwrap().move_lengths().as_slice(), &[4, 4, 4, 4]);
    /// ```
    #[must_use]
    pub fn move_lengths(self) -> MoveLengths {
        let lengths = if self.is_double() {
            SmallVec::from_slice(&[self.first; 4])
        } else {
            SmallVec::from_slice(&[self.first, self.second])
        };
        MoveLengths { lengths }
    }
}

impl TryFrom<(u8, u8)> for Roll {
    type Error = DiceError;

    fn try_from((first, second): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(first, second)
    }
}

impl From<Roll> for (u8, u8) {
    fn from(roll: Roll) -> Self {
        roll.values()
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Multiset of move-lengths still unused this turn.
///
/// SmallVec keeps the usual 2 or 4 entries inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveLengths {
    lengths: SmallVec<[u8; 4]>,
}

impl MoveLengths {
    /// No lengths left.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.lengths
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    #[must_use]
    pub fn contains(&self, length: u8) -> bool {
        self.lengths.contains(&length)
    }

    /// Remove one instance of `length`. Returns false if none was left.
    pub fn take(&mut self, length: u8) -> bool {
        match self.lengths.iter().position(|&l| l == length) {
            Some(pos) => {
                self.lengths.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Distinct lengths in ascending order.
    #[must_use]
    pub fn distinct(&self) -> SmallVec<[u8; 4]> {
        let mut out: SmallVec<[u8; 4]> = self.lengths.clone();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Smallest length strictly greater than `pips`.
    #[must_use]
    pub fn smallest_above(&self, pips: usize) -> Option<u8> {
        self.lengths
            .iter()
            .copied()
            .filter(|&l| usize::from(l) > pips)
            .min()
    }

    pub fn clear(&mut self) {
        self.lengths.clear();
    }
}

impl From<Roll> for MoveLengths {
    fn from(roll: Roll) -> Self {
        roll.move_lengths()
    }
}
