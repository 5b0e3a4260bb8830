//! Turn sequencing.
//!
//! `TurnCoordinator` owns the board and decides which requests reach it:
//! the mover must have rolled, must use a die that is still unused, must
//! travel in its own direction and must clear the bar before anything else.
//! A successful request consumes exactly one move-length and is appended to
//! the action history. A rejected request changes nothing.
//!
//! ## Turn lifecycle
//!
//! ```text
//! AwaitingRoll --start_turn--> Moving --last length used / switch_turn--> AwaitingRoll (other color)
//!                                 |
//!                                 +--15th checker borne off--> Finished
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::movegen;
use crate::board::{Board, LayoutError, RuleViolation};
use crate::core::{Action, ActionRecord, Color, GameConfig, POINT_COUNT};
use crate::dice::{DiceSource, MoveLengths, Roll};
use crate::rules::GameResult;

/// Why a turn-level request was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("roll the dice before moving")]
    NotRolled,
    #[error("the dice were already rolled this turn")]
    AlreadyRolled,
    #[error("the game is over")]
    GameOver,
    #[error("no unused die of {0}")]
    DieUnavailable(usize),
    #[error("{color} cannot move from {from} to {to}")]
    WrongDirection { color: Color, from: usize, to: usize },
    #[error("no unused die bears a checker off from point {0}")]
    NoMatchingBearOffDie(usize),
    #[error("legal moves remain")]
    MovesAvailable,
    #[error(transparent)]
    Rule(#[from] RuleViolation),
}

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The current color has not rolled yet.
    AwaitingRoll,
    /// Dice are rolled; move-lengths may remain.
    Moving,
    /// Someone bore off all 15 checkers.
    Finished(GameResult),
}

/// What an accepted request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Move-length consumed (0 when a turn is given up).
    pub die: u8,
    /// Whether an opposing blot went to the bar.
    pub hit: bool,
    /// Whether the turn passed to the other color.
    pub turn_ended: bool,
    /// Set when this request finished the game.
    pub result: Option<GameResult>,
}

/// Owner of the board and of the current turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCoordinator {
    board: Board,
    current: Color,
    phase: TurnPhase,
    unused: MoveLengths,
    turn_number: u32,
    sequence: u32,
    history: Vector<ActionRecord>,
}

impl TurnCoordinator {
    /// Start a game on `board` with `first` to roll.
    #[must_use]
    pub fn new(board: Board, first: Color) -> Self {
        let phase = match GameResult::from_board(&board) {
            Some(result) => TurnPhase::Finished(result),
            None => TurnPhase::AwaitingRoll,
        };
        Self {
            board,
            current: first,
            phase,
            unused: MoveLengths::new(),
            turn_number: 1,
            sequence: 0,
            history: Vector::new(),
        }
    }

    /// Start a game from a configuration's layout and first mover.
    pub fn from_config(config: &GameConfig) -> Result<Self, LayoutError> {
        Ok(Self::new(config.layout.build()?, config.first_to_move))
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color whose turn it is.
    #[must_use]
    pub fn current_color(&self) -> Color {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Move-lengths not yet used this turn.
    #[must_use]
    pub fn unused_lengths(&self) -> &MoveLengths {
        &self.unused
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every accepted request so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            TurnPhase::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Actions the current color may take now.
    ///
    /// While moving, a turn with no playable length offers only
    /// `Action::EndTurn`. Outside the moving phase the list is empty.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.phase != TurnPhase::Moving {
            return Vec::new();
        }
        let actions = movegen::legal_actions(&self.board, self.current, &self.unused);
        if actions.is_empty() {
            vec![Action::EndTurn]
        } else {
            actions
        }
    }

    // === Turn control ===

    /// Load the move-lengths of `roll` for the current color.
    pub fn start_turn(&mut self, roll: Roll) -> Result<(), MoveError> {
        match self.phase {
            TurnPhase::Finished(_) => Err(MoveError::GameOver),
            TurnPhase::Moving => Err(MoveError::AlreadyRolled),
            TurnPhase::AwaitingRoll => {
                self.unused = roll.move_lengths();
                self.phase = TurnPhase::Moving;
                Ok(())
            }
        }
    }

    /// Roll `dice` and start the turn with the result.
    ///
    /// The dice are not touched when a roll is not allowed.
    pub fn roll_with<D: DiceSource + ?Sized>(&mut self, dice: &mut D) -> Result<Roll, MoveError> {
        match self.phase {
            TurnPhase::Finished(_) => Err(MoveError::GameOver),
            TurnPhase::Moving => Err(MoveError::AlreadyRolled),
            TurnPhase::AwaitingRoll => {
                let roll = dice.roll();
                self.start_turn(roll)?;
                Ok(roll)
            }
        }
    }

    /// Give up the rest of the turn unconditionally.
    ///
    /// Recorded as `Action::EndTurn` when dice were rolled.
    pub fn switch_turn(&mut self) -> Result<(), MoveError> {
        match self.phase {
            TurnPhase::Finished(_) => Err(MoveError::GameOver),
            TurnPhase::AwaitingRoll => {
                self.hand_off();
                Ok(())
            }
            TurnPhase::Moving => {
                self.record(Action::EndTurn, 0, false);
                self.hand_off();
                Ok(())
            }
        }
    }

    /// End the turn, allowed only when no remaining length can be played.
    pub fn skip_turn(&mut self) -> Result<MoveOutcome, MoveError> {
        self.ensure_moving()?;
        if movegen::has_legal_action(&self.board, self.current, &self.unused) {
            return Err(MoveError::MovesAvailable);
        }
        self.switch_turn()?;
        Ok(MoveOutcome {
            die: 0,
            hit: false,
            turn_ended: true,
            result: None,
        })
    }

    // === Moves ===

    /// Dispatch an action to the matching request.
    pub fn apply(&mut self, action: Action) -> Result<MoveOutcome, MoveError> {
        match action {
            Action::Move { from, to } => self.attempt_move(from, to),
            Action::Enter { to } => self.move_checker_from_bar(to),
            Action::BearOff { from } => self.bear_off(from),
            Action::EndTurn => self.skip_turn(),
        }
    }

    /// Move a checker of the current color from `from` to `to`.
    ///
    /// The distance must match an unused length and the move must go the
    /// current color's way.
    pub fn attempt_move(&mut self, from: usize, to: usize) -> Result<MoveOutcome, MoveError> {
        self.ensure_moving()?;
        let color = self.current;

        if self.board.bar(color) > 0 {
            return Err(RuleViolation::BarNotEmpty(color).into());
        }
        for point in [from, to] {
            if point >= POINT_COUNT {
                return Err(RuleViolation::OutOfRange(point).into());
            }
        }

        let distance = from.abs_diff(to);
        let die = self.unused_die(distance)?;
        if !color.is_forward(from, to) {
            return Err(MoveError::WrongDirection { color, from, to });
        }

        let hit = self.board.try_move_checker(from, to, color)?;
        Ok(self.finish(Action::Move { from, to }, die, hit))
    }

    /// Bring a checker of the current color in from the bar onto `to`.
    ///
    /// The die used is the one whose entry point is `to`.
    pub fn move_checker_from_bar(&mut self, to: usize) -> Result<MoveOutcome, MoveError> {
        self.ensure_moving()?;
        let color = self.current;

        if self.board.bar(color) == 0 {
            return Err(RuleViolation::NothingOnBar(color).into());
        }
        let die = color
            .entry_die(to)
            .ok_or(RuleViolation::OutsideEntryRange { point: to, color })?;
        let die = self.unused_die(usize::from(die))?;

        let hit = self.board.try_enter_from_bar(to, color)?;
        Ok(self.finish(Action::Enter { to }, die, hit))
    }

    /// Bear off a checker of the current color from `point`.
    pub fn bear_off(&mut self, point: usize) -> Result<MoveOutcome, MoveError> {
        self.ensure_moving()?;
        let color = self.current;

        self.board.check_bear_off_ready(color)?;
        let source = self.board.point(point).ok_or(RuleViolation::OutOfRange(point))?;
        if !source.is_owned_by(color) {
            return Err(RuleViolation::NotOwned { point, color }.into());
        }
        let die = movegen::bear_off_die(&self.board, color, point, &self.unused)
            .ok_or(MoveError::NoMatchingBearOffDie(point))?;

        self.board.try_bear_off(color, point)?;
        Ok(self.finish(Action::BearOff { from: point }, die, false))
    }

    // === Internals ===

    fn ensure_moving(&self) -> Result<(), MoveError> {
        match self.phase {
            TurnPhase::Moving => Ok(()),
            TurnPhase::AwaitingRoll => Err(MoveError::NotRolled),
            TurnPhase::Finished(_) => Err(MoveError::GameOver),
        }
    }

    fn unused_die(&self, distance: usize) -> Result<u8, MoveError> {
        u8::try_from(distance)
            .ok()
            .filter(|&d| self.unused.contains(d))
            .ok_or(MoveError::DieUnavailable(distance))
    }

    /// Consume `die`, record the action and settle the turn.
    fn finish(&mut self, action: Action, die: u8, hit: bool) -> MoveOutcome {
        let consumed = self.unused.take(die);
        debug_assert!(consumed, "die was checked unused");
        self.record(action, die, hit);

        if let Some(result) = GameResult::from_board(&self.board) {
            self.unused.clear();
            self.phase = TurnPhase::Finished(result);
            return MoveOutcome {
                die,
                hit,
                turn_ended: true,
                result: Some(result),
            };
        }

        let turn_ended = self.unused.is_empty();
        if turn_ended {
            self.hand_off();
        }
        MoveOutcome {
            die,
            hit,
            turn_ended,
            result: None,
        }
    }

    fn record(&mut self, action: Action, die: u8, hit: bool) {
        self.history.push_back(ActionRecord {
            color: self.current,
            action,
            die,
            hit,
            turn: self.turn_number,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    fn hand_off(&mut self) {
        self.unused.clear();
        self.current = self.current.opposite();
        self.phase = TurnPhase::AwaitingRoll;
        self.turn_number += 1;
        self.sequence = 0;
    }
}
