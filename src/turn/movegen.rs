//! Enumeration of single-checker actions.
//!
//! Used to decide whether a turn may be skipped and to drive random play.
//! Every action returned here would be accepted by the turn coordinator for
//! the same board, color and remaining lengths.

use crate::board::Board;
use crate::core::{Action, Color, POINT_COUNT};
use crate::dice::MoveLengths;

/// Die that bears a checker of `color` off from `point`, if any.
///
/// An exact match is preferred. Failing that, a larger die may be used, the
/// smallest one available, but only for the checker farthest from the exit.
#[must_use]
pub fn bear_off_die(board: &Board, color: Color, point: usize, lengths: &MoveLengths) -> Option<u8> {
    if !board.can_bear_off(color) || !board.point(point)?.is_owned_by(color) {
        return None;
    }

    let needed = color.pips_to_exit(point);
    if let Ok(exact) = u8::try_from(needed) {
        if lengths.contains(exact) {
            return Some(exact);
        }
    }

    if board.farthest_checker(color) == Some(point) {
        lengths.smallest_above(needed)
    } else {
        None
    }
}

/// All single-checker actions `color` may take with `lengths`.
///
/// While the bar is occupied only entries are listed. The result never
/// contains `Action::EndTurn`.
#[must_use]
pub fn legal_actions(board: &Board, color: Color, lengths: &MoveLengths) -> Vec<Action> {
    let mut actions = Vec::new();

    if board.bar(color) > 0 {
        for die in lengths.distinct() {
            if let Some(to) = color.entry_point(die) {
                if board.can_enter_from_bar(color, to) {
                    actions.push(Action::Enter { to });
                }
            }
        }
        return actions;
    }

    let occupied: Vec<usize> = (0..POINT_COUNT)
        .filter(|&i| board.points()[i].is_owned_by(color))
        .collect();

    for die in lengths.distinct() {
        for &from in &occupied {
            if let Some(to) = color.advance(from, die) {
                if board.is_legal_move(from, to, color) {
                    actions.push(Action::Move { from, to });
                }
            }
        }
    }

    for &from in &occupied {
        if bear_off_die(board, color, from, lengths).is_some() {
            actions.push(Action::BearOff { from });
        }
    }

    actions
}

/// Check if `color` has any legal action with `lengths`.
#[must_use]
pub fn has_legal_action(board: &Board, color: Color, lengths: &MoveLengths) -> bool {
    !legal_actions(board, color, lengths).is_empty()
}
