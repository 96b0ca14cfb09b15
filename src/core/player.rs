//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe 0-based seat index. Turn order follows the index.
//!
//! ## PlayerMap
//!
//! `Vec`-backed storage with one entry per seat, indexable by `PlayerId`.
//!
//! ## Player
//!
//! A seat at the table: display name, marker, and its four pieces.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::PIECES_PER_PLAYER;
use super::piece::{Piece, PieceId};

/// Seat index of a player (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around the table.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats of a `player_count`-player game.
    ///
    /// ```
    /// use yut_nori::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build a map with one entry per seat from a factory.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Entry for `player`, or `None` if the seat does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Mutable entry for `player`, or `None` if the seat does not exist.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Display-only marker; the rules never read it.
    pub marker: String,
    pieces: [Piece; PIECES_PER_PLAYER],
}

/// Where a player's pieces currently are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSummary {
    pub waiting: usize,
    pub on_board: usize,
    pub finished: usize,
}

impl Player {
    /// A player with all four pieces waiting off the board.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            marker: marker.into(),
            pieces: std::array::from_fn(|i| Piece::new(PieceId(i as u8))),
        }
    }

    /// Marker and name, as shown in event messages.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.marker, self.name)
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[must_use]
    pub fn piece(&self, piece: PieceId) -> Option<&Piece> {
        self.pieces.get(piece.index())
    }

    pub(crate) fn piece_mut(&mut self, piece: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(piece.index())
    }

    pub(crate) fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.pieces.iter_mut()
    }

    /// A player wins once every piece has finished.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.pieces.iter().all(Piece::is_finished)
    }

    #[must_use]
    pub fn summary(&self) -> PieceSummary {
        self.pieces
            .iter()
            .fold(PieceSummary::default(), |mut acc, piece| {
                if piece.is_finished() {
                    acc.finished += 1;
                } else if piece.is_waiting() {
                    acc.waiting += 1;
                } else {
                    acc.on_board += 1;
                }
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId(0).next(2), PlayerId(1));
        assert_eq!(PlayerId(1).next(2), PlayerId(0));
        assert_eq!(PlayerId(3).next(4), PlayerId(0));
    }

    #[test]
    fn test_player_map_access() {
        let mut map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32 * 10);

        assert_eq!(map.player_count(), 3);
        assert_eq!(map[PlayerId(2)], 20);
        assert_eq!(map.get(PlayerId(3)), None);

        map[PlayerId(1)] = 99;
        assert_eq!(map.get(PlayerId(1)), Some(&99));
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 + 1);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId(0), &1), (PlayerId(1), &2)]);
    }

    #[test]
    fn test_new_player_has_four_waiting_pieces() {
        let player = Player::new(PlayerId(0), "Alice", "🐴");

        assert_eq!(player.pieces().len(), 4);
        for (i, piece) in player.pieces().iter().enumerate() {
            assert_eq!(piece.id, PieceId(i as u8));
            assert_eq!(piece.position(), Position::Waiting);
        }
        assert_eq!(
            player.summary(),
            PieceSummary { waiting: 4, on_board: 0, finished: 0 }
        );
        assert!(!player.has_won());
        assert_eq!(player.label(), "🐴 Alice");
    }

    #[test]
    fn test_summary_and_win() {
        let mut player = Player::new(PlayerId(1), "Bob", "🐑");
        player.piece_mut(PieceId(0)).unwrap().finish();
        player.piece_mut(PieceId(1)).unwrap().place(7);

        assert_eq!(
            player.summary(),
            PieceSummary { waiting: 2, on_board: 1, finished: 1 }
        );

        for piece in player.pieces_mut() {
            piece.finish();
        }
        assert!(player.has_won());
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId(1), "Bob", "🐑");
        let json = serde_json::to_string(&player).unwrap();
        let restored: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, restored);
    }
}
