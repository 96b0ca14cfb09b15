//! Game state snapshot.
//!
//! `GameState` holds everything a renderer needs: every player's pieces,
//! whose turn it is, the result once the game ends, and the event log.
//! Only the rules and the turn state machine mutate it.
//!
//! The log is an `im::Vector`, so cloning a snapshot for display is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::event::{GameEvent, LogEntry};
use super::piece::{Piece, PieceId, Position};
use super::player::{Player, PlayerId, PlayerMap};
use crate::error::{YutError, YutResult};
use crate::rules::GameResult;

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    players: PlayerMap<Player>,

    /// Player whose turn it is.
    pub current_player: PlayerId,

    /// Turn number (starts at 1). Bonus throws stay within a turn.
    pub turn_number: u32,

    /// Set once the game ends, by a win or a quit.
    pub result: Option<GameResult>,

    log: Vector<LogEntry>,
}

impl GameState {
    /// Fresh state: all pieces waiting, player 0 to move.
    #[must_use]
    pub fn new(players: PlayerMap<Player>) -> Self {
        Self {
            players,
            current_player: PlayerId::new(0),
            turn_number: 1,
            result: None,
            log: Vector::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Look up a player, failing on an unknown seat.
    pub fn player(&self, player: PlayerId) -> YutResult<&Player> {
        self.players.get(player).ok_or(YutError::PlayerOutOfRange {
            player,
            player_count: self.player_count(),
        })
    }

    pub(crate) fn player_mut(&mut self, player: PlayerId) -> YutResult<&mut Player> {
        let player_count = self.player_count();
        self.players
            .get_mut(player)
            .ok_or(YutError::PlayerOutOfRange { player, player_count })
    }

    pub(crate) fn players_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut Player)> {
        self.players.iter_mut()
    }

    /// Look up a piece, failing on an unknown seat or piece index.
    pub fn piece(&self, player: PlayerId, piece: PieceId) -> YutResult<&Piece> {
        self.player(player)?
            .piece(piece)
            .ok_or(YutError::PieceOutOfRange(piece.0))
    }

    /// Non-finished pieces sitting on `position`, in seat then piece order.
    #[must_use]
    pub fn pieces_at(&self, position: Position) -> Vec<(PlayerId, PieceId)> {
        self.players
            .iter()
            .flat_map(|(owner, player)| {
                player
                    .pieces()
                    .iter()
                    .filter(move |piece| !piece.is_finished() && piece.position() == position)
                    .map(move |piece| (owner, piece.id))
            })
            .collect()
    }

    /// True iff all four of the player's pieces have finished.
    pub fn is_winner(&self, player: PlayerId) -> YutResult<bool> {
        Ok(self.player(player)?.has_won())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Pass the turn to the next seat.
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.next(self.player_count());
        self.turn_number += 1;
    }

    // === Event Log ===

    /// Append an event acted by `player`, rendering its message now.
    pub(crate) fn record(&mut self, player: PlayerId, event: GameEvent) {
        let message = match self.players.get(player) {
            Some(actor) => event.describe(actor, &self.players),
            None => format!("{event:?}"),
        };
        self.log.push_back(LogEntry {
            turn: self.turn_number,
            player,
            event,
            message,
        });
    }

    /// The whole log, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<LogEntry> {
        &self.log
    }

    /// The last `count` entries, oldest first.
    pub fn recent_events(&self, count: usize) -> impl Iterator<Item = &LogEntry> {
        self.log.iter().skip(self.log.len().saturating_sub(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::throw::Throw;

    fn two_player_state() -> GameState {
        GameState::new(PlayerMap::new(2, |id| Player::new(id, format!("P{}", id.0), "🐰")))
    }

    #[test]
    fn test_new_state() {
        let state = two_player_state();

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.current_player, PlayerId(0));
        assert_eq!(state.turn_number, 1);
        assert!(!state.is_over());
        assert!(state.log().is_empty());
        assert_eq!(state.pieces_at(Position::Waiting).len(), 8);
    }

    #[test]
    fn test_lookup_errors() {
        let state = two_player_state();

        assert_eq!(
            state.player(PlayerId(2)).unwrap_err(),
            YutError::PlayerOutOfRange { player: PlayerId(2), player_count: 2 }
        );
        assert_eq!(
            state.piece(PlayerId(0), PieceId(4)).unwrap_err(),
            YutError::PieceOutOfRange(4)
        );
        assert!(state.is_winner(PlayerId(5)).is_err());
    }

    #[test]
    fn test_pieces_at_skips_finished() {
        let mut state = two_player_state();
        {
            let p0 = state.player_mut(PlayerId(0)).unwrap();
            p0.piece_mut(PieceId(0)).unwrap().place(6);
            p0.piece_mut(PieceId(1)).unwrap().finish();
        }
        state
            .player_mut(PlayerId(1))
            .unwrap()
            .piece_mut(PieceId(2))
            .unwrap()
            .place(6);

        assert_eq!(
            state.pieces_at(Position::Track(6)),
            vec![(PlayerId(0), PieceId(0)), (PlayerId(1), PieceId(2))]
        );
        assert!(state.pieces_at(Position::Finished).is_empty());
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut state = two_player_state();
        state.advance_turn();
        assert_eq!(state.current_player, PlayerId(1));
        state.advance_turn();
        assert_eq!(state.current_player, PlayerId(0));
        assert_eq!(state.turn_number, 3);
    }

    #[test]
    fn test_recent_events_keeps_full_log() {
        let mut state = two_player_state();
        for _ in 0..8 {
            state.record(PlayerId(0), GameEvent::Threw { throw: Throw::Do });
        }
        state.record(PlayerId(1), GameEvent::Threw { throw: Throw::Mo });

        assert_eq!(state.log().len(), 9);
        let recent: Vec<_> = state.recent_events(5).collect();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[4].message, "🐰 P1 threw mo (5 spaces)");
        assert_eq!(state.recent_events(100).count(), 9);
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut state = two_player_state();
        state.record(PlayerId(0), GameEvent::Entered { piece: PieceId(0), to: 3 });

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }
}
