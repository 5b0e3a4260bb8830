//! Turn sequencing and move enumeration.
//!
//! - `TurnCoordinator`: gatekeeper between move requests and the board
//! - `movegen`: every single-checker action a color may take right now

pub mod coordinator;
pub mod movegen;

pub use coordinator::{MoveError, MoveOutcome, TurnCoordinator, TurnPhase};
pub use movegen::{bear_off_die, has_legal_action, legal_actions};
