//! Where rolls come from.
//!
//! The turn coordinator never generates randomness itself; it is handed a
//! `Roll`. `DiceSource` is the seam between the two.

use std::collections::VecDeque;

use super::roll::Roll;
use crate::core::{GameRng, GameRngState};

/// Something that produces rolls.
pub trait DiceSource {
    /// Produce the next roll.
    fn roll(&mut self) -> Roll;
}

/// Uniform dice backed by a seeded `GameRng`.
#[derive(Clone, Debug)]
pub struct RandomDice {
    rng: GameRng,
}

impl RandomDice {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    /// Capture the RNG position so the same rolls can be replayed.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self) -> Roll {
        let first = self.rng.roll_die();
        let second = self.rng.roll_die();
        Roll::new(first, second).expect("roll_die yields 1-6")
    }
}

/// Replays a fixed sequence of rolls, starting over when it runs out.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    script: VecDeque<Roll>,
}

impl ScriptedDice {
    /// Returns `None` for an empty script.
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = Roll>) -> Option<Self> {
        let script: VecDeque<Roll> = rolls.into_iter().collect();
        (!script.is_empty()).then_some(Self { script })
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> Roll {
        let next = self.script[0];
        self.script.rotate_left(1);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_dice_deterministic() {
        let mut a = RandomDice::new(11);
        let mut b = RandomDice::new(11);
        for _ in 0..50 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_random_dice_restore() {
        let mut dice = RandomDice::new(5);
        dice.roll();
        let state = dice.state();
        let expected: Vec<_> = (0..5).map(|_| dice.roll()).collect();

        let mut restored = RandomDice::from_state(&state);
        let actual: Vec<_> = (0..5).map(|_| restored.roll()).collect();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_random_dice_rolls_doubles_sometimes() {
        let mut dice = RandomDice::new(1);
        let doubles = (0..600).filter(|_| dice.roll().is_double()).count();
        assert!(doubles > 50 && doubles < 170, "doubles: {}", doubles);
    }

    #[test]
    fn test_scripted_dice_cycles() {
        let a = Roll::new(1, 2).unwrap();
        let b = Roll::new(6, 6).unwrap();
        let mut dice = ScriptedDice::new([a, b]).unwrap();

        assert_eq!(dice.roll(), a);
        assert_eq!(dice.roll(), b);
        assert_eq!(dice.roll(), a);
    }

    #[test]
    fn test_scripted_dice_rejects_empty() {
        assert!(ScriptedDice::new(Vec::new()).is_none());
    }
}
