//! Board state and starting layouts.
//!
//! - `Board`: the sole authority on checker positions; legality checks and
//!   the moves, bar entries and bear-offs that pass them
//! - `Layout`: validated descriptions of positions used to build boards

pub mod layout;
pub mod position;

pub use layout::{Layout, LayoutError, Placement};
pub use position::{Board, RuleViolation};
