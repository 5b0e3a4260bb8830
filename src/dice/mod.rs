//! Dice: rolls, unused move-lengths, and roll sources.
//!
//! A roll of two dice grants two move-lengths, or four on a double. The
//! rule engine only ever sees `Roll` and `MoveLengths`; how the numbers are
//! produced is behind `DiceSource`.

pub mod roll;
pub mod source;

pub use roll::{DiceError, MoveLengths, Roll};
pub use source::{DiceSource, RandomDice, ScriptedDice};
