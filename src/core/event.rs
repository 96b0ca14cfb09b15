//! Game events and the event log.
//!
//! Every state change appends a `LogEntry`: the structured event plus the
//! human-readable line rendered when it happened. The log only grows; showing
//! the last few lines is up to the caller (see `GameState::recent_events`).

use serde::{Deserialize, Serialize};

use super::piece::{PieceId, Position};
use super::player::{Player, PlayerId, PlayerMap};
use crate::throw::Throw;

/// Why a player throws again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusReason {
    /// Threw "yut" or "mo".
    Throw(Throw),
    /// Captured at least one opposing piece.
    Capture,
}

/// Something that happened during play. The acting player is stored on the
/// surrounding `LogEntry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Threw { throw: Throw },
    /// No piece could move; the throw is wasted.
    NoMove { throw: Throw },
    Entered { piece: PieceId, to: u8 },
    EnteredAndFinished { piece: PieceId },
    Moved { piece: PieceId, from: u8, to: u8 },
    Shortcut { piece: PieceId, from: u8 },
    Finished { piece: PieceId },
    Captured { owner: PlayerId, piece: PieceId },
    BonusTurn { reason: BonusReason },
    Won,
    Quit,
}

impl GameEvent {
    /// Render the display line for this event.
    #[must_use]
    pub fn describe(&self, actor: &Player, players: &PlayerMap<Player>) -> String {
        let who = actor.label();
        match *self {
            GameEvent::Threw { throw } => {
                format!("{who} threw {throw} ({} spaces)", throw.value())
            }
            GameEvent::NoMove { throw } => format!("{who} threw {throw} but couldn't move"),
            GameEvent::Entered { piece, to } => format!(
                "{who} entered {piece} and moved to position {}",
                Position::Track(to)
            ),
            GameEvent::EnteredAndFinished { piece } => {
                format!("{who} entered {piece} and finished immediately!")
            }
            GameEvent::Moved { piece, from, to } => format!(
                "{who} moved {piece} from {} to {}",
                Position::Track(from),
                Position::Track(to)
            ),
            GameEvent::Shortcut { piece, from } => format!(
                "{who} took shortcut with {piece} from {} to {}",
                Position::Track(from),
                Position::Finished
            ),
            GameEvent::Finished { piece } => format!("{who}'s {piece} finished!"),
            GameEvent::Captured { owner, piece } => {
                let victim = players
                    .get(owner)
                    .map_or_else(|| owner.to_string(), Player::label);
                format!("Captured {victim}'s {piece}!")
            }
            GameEvent::BonusTurn { reason: BonusReason::Throw(throw) } => {
                format!("{throw}! {who} gets another turn!")
            }
            GameEvent::BonusTurn { reason: BonusReason::Capture } => {
                format!("Captured opponent's piece! {who} gets another turn!")
            }
            GameEvent::Won => format!("{who} WINS!"),
            GameEvent::Quit => format!("Game ended by {who}."),
        }
    }
}

/// One line of game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Turn number the event happened in (starts at 1).
    pub turn: u32,
    /// The acting player.
    pub player: PlayerId,
    pub event: GameEvent,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PlayerMap<Player> {
        PlayerMap::new(2, |id| {
            let (name, marker) = if id.index() == 0 { ("Alice", "🐴") } else { ("Bob", "🐑") };
            Player::new(id, name, marker)
        })
    }

    #[test]
    fn test_move_messages() {
        let players = table();
        let alice = &players[PlayerId(0)];

        let entered = GameEvent::Entered { piece: PieceId(0), to: 4 };
        assert_eq!(
            entered.describe(alice, &players),
            "🐴 Alice entered Piece 0 and moved to position 04"
        );

        let moved = GameEvent::Moved { piece: PieceId(1), from: 7, to: 10 };
        assert_eq!(moved.describe(alice, &players), "🐴 Alice moved Piece 1 from 07 to 10");

        let shortcut = GameEvent::Shortcut { piece: PieceId(2), from: 5 };
        assert_eq!(
            shortcut.describe(alice, &players),
            "🐴 Alice took shortcut with Piece 2 from 05 to FIN"
        );

        let finished = GameEvent::Finished { piece: PieceId(2) };
        assert_eq!(finished.describe(alice, &players), "🐴 Alice's Piece 2 finished!");
    }

    #[test]
    fn test_entry_straight_to_finish_message() {
        let players = table();
        let event = GameEvent::EnteredAndFinished { piece: PieceId(0) };
        assert_eq!(
            event.describe(&players[PlayerId(0)], &players),
            "🐴 Alice entered Piece 0 and finished immediately!"
        );
        assert_eq!(
            event.describe(&players[PlayerId(1)], &players),
            "🐑 Bob entered Piece 0 and finished immediately!"
        );
    }

    #[test]
    fn test_capture_names_the_victim() {
        let players = table();
        let event = GameEvent::Captured { owner: PlayerId(1), piece: PieceId(3) };
        assert_eq!(
            event.describe(&players[PlayerId(0)], &players),
            "Captured 🐑 Bob's Piece 3!"
        );
    }

    #[test]
    fn test_throw_messages() {
        let players = table();
        let bob = &players[PlayerId(1)];

        assert_eq!(
            GameEvent::Threw { throw: Throw::Geol }.describe(bob, &players),
            "🐑 Bob threw geol (3 spaces)"
        );
        assert_eq!(
            GameEvent::NoMove { throw: Throw::Do }.describe(bob, &players),
            "🐑 Bob threw do but couldn't move"
        );
        assert_eq!(
            GameEvent::BonusTurn { reason: BonusReason::Throw(Throw::Mo) }.describe(bob, &players),
            "mo! 🐑 Bob gets another turn!"
        );
    }
}
