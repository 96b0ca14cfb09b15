//! Error type for caller contract violations.
//!
//! The engine itself has no recoverable runtime failures: throws and position
//! arithmetic are total. Every error here means the caller asked for something
//! the rules do not allow, and the engine refuses instead of clamping.

use crate::core::{PieceId, PlayerId};

/// Errors returned by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum YutError {
    #[error("player count must be between 2 and 4, got {0}")]
    InvalidPlayerCount(usize),

    #[error("expected {expected} player names, got {actual}")]
    NameCountMismatch { expected: usize, actual: usize },

    #[error("{player} does not exist in a {player_count}-player game")]
    PlayerOutOfRange { player: PlayerId, player_count: usize },

    #[error("piece index {0} is out of range (0-3)")]
    PieceOutOfRange(u8),

    #[error("step count {0} is out of range (1-5)")]
    StepsOutOfRange(u8),

    #[error("{player}'s {piece} has already finished")]
    PieceFinished { player: PlayerId, piece: PieceId },

    #[error("{piece} cannot move this throw (movable: {movable:?})")]
    PieceNotMovable { piece: PieceId, movable: Vec<PieceId> },

    #[error("cannot {action} while {phase}")]
    UnexpectedAction {
        action: &'static str,
        phase: &'static str,
    },

    #[error("the game is already over")]
    GameOver,
}

/// Result alias used throughout the crate.
pub type YutResult<T> = Result<T, YutError>;
