//! External actions that drive a game.
//!
//! The presentation layer translates input into one of these and hands it to
//! `YutGame::apply`. The engine never blocks waiting for input.

use serde::{Deserialize, Serialize};

use super::piece::PieceId;

/// A discrete input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Throw the sticks.
    Throw,
    /// Move this piece with the pending throw.
    Select(PieceId),
    /// Abandon the game.
    Quit,
}

impl Action {
    /// Short verb phrase used in error messages.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Action::Throw => "throw",
            Action::Select(_) => "select a piece",
            Action::Quit => "quit",
        }
    }
}
