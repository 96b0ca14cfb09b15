//! Pieces and track positions.
//!
//! The track is one shared loop of squares numbered 0-19 with the finish at
//! 20. Pieces that have not entered sit off the board at index -1.
//!
//! `Position` makes the finished state a variant rather than a flag, so a
//! finished piece is always at the finish square.

use serde::{Deserialize, Serialize};

use super::config::{FINISH_SQUARE, PIECES_PER_PLAYER};

/// Piece index within its owner (0-3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True for ids 0-3.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.index() < PIECES_PER_PLAYER
    }

    pub fn all() -> impl Iterator<Item = PieceId> {
        (0..PIECES_PER_PLAYER as u8).map(PieceId)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece {}", self.0)
    }
}

/// Where a piece is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Not yet entered (index -1).
    Waiting,
    /// On a track square, 0-19.
    Track(u8),
    /// Reached the finish (index 20). Terminal.
    Finished,
}

impl Position {
    /// Numeric index: -1 off board, 0-19 on the track, 20 finished.
    ///
    /// A `Track` square past the finish reports 20.
    #[must_use]
    pub fn index(self) -> i8 {
        match self {
            Position::Waiting => -1,
            Position::Track(square) => square.min(FINISH_SQUARE) as i8,
            Position::Finished => FINISH_SQUARE as i8,
        }
    }

    /// Inverse of [`Position::index`]. `None` outside [-1, 20].
    #[must_use]
    pub fn from_index(index: i8) -> Option<Self> {
        match index {
            -1 => Some(Position::Waiting),
            i if (0..FINISH_SQUARE as i8).contains(&i) => Some(Position::Track(i as u8)),
            i if i == FINISH_SQUARE as i8 => Some(Position::Finished),
            _ => None,
        }
    }

    /// Board label: "00".."19", "FIN", or "--" when off the board.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Position::Waiting => "--".to_string(),
            Position::Track(square) => format!("{:02}", square),
            Position::Finished => "FIN".to_string(),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// A single piece. Created waiting, never destroyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    position: Position,
}

impl Piece {
    #[must_use]
    pub fn new(id: PieceId) -> Self {
        Self {
            id,
            position: Position::Waiting,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position == Position::Finished
    }

    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.position == Position::Waiting
    }

    /// Put the piece on a track square (< 20).
    pub(crate) fn place(&mut self, square: u8) {
        debug_assert!(square < FINISH_SQUARE, "square {square} is not a track square");
        self.position = Position::Track(square);
    }

    pub(crate) fn finish(&mut self) {
        self.position = Position::Finished;
    }

    /// Captured: back off the board.
    pub(crate) fn send_back(&mut self) {
        self.position = Position::Waiting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_index_round_trip_bounds() {
        assert_eq!(Position::from_index(-1), Some(Position::Waiting));
        assert_eq!(Position::from_index(0), Some(Position::Track(0)));
        assert_eq!(Position::from_index(19), Some(Position::Track(19)));
        assert_eq!(Position::from_index(20), Some(Position::Finished));
        assert_eq!(Position::from_index(21), None);
        assert_eq!(Position::from_index(-2), None);

        assert_eq!(Position::Waiting.index(), -1);
        assert_eq!(Position::Finished.index(), 20);
    }

    #[test]
    fn test_out_of_range_track_index_clamps() {
        assert_eq!(Position::Track(20).index(), 20);
        assert_eq!(Position::Track(200).index(), 20);
        assert_eq!(Position::Track(u8::MAX).index(), 20);
    }

    #[test]
    fn test_position_labels() {
        assert_eq!(Position::Track(0).label(), "00");
        assert_eq!(Position::Track(7).label(), "07");
        assert_eq!(Position::Track(15).label(), "15");
        assert_eq!(Position::Finished.label(), "FIN");
        assert_eq!(Position::Waiting.to_string(), "--");
    }

    #[test]
    fn test_piece_lifecycle() {
        let mut piece = Piece::new(PieceId(3));
        assert!(piece.is_waiting());
        assert!(!piece.is_finished());

        piece.place(4);
        assert_eq!(piece.position(), Position::Track(4));

        piece.send_back();
        assert!(piece.is_waiting());

        piece.finish();
        assert!(piece.is_finished());
        assert_eq!(piece.position().index(), 20);
    }

    #[test]
    fn test_piece_id_validity() {
        assert!(PieceId(0).is_valid());
        assert!(PieceId(3).is_valid());
        assert!(!PieceId(4).is_valid());
        assert_eq!(PieceId::all().count(), 4);
        assert_eq!(PieceId(2).to_string(), "Piece 2");
    }
}
