//! Game rules.
//!
//! - `movement`: move resolution, shortcuts, captures and movability
//! - `result`: how a game ends
//!
//! These are plain functions over `GameState`. Turn order and bonus throws
//! live in the `game` module.

pub mod movement;
pub mod result;

pub use movement::{
    check_steps, destination, movable_pieces, preview_move, resolve_move, Destination,
    MoveOutcome, MAX_STEPS, MIN_STEPS,
};
pub use result::GameResult;
