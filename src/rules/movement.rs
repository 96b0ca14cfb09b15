//! Piece movement: where a throw takes a piece, which pieces may move, and
//! applying a move with shortcuts and captures.
//!
//! ## Rules
//!
//! - A waiting piece enters at square `0 + steps`.
//! - A piece reaching square 20 or beyond finishes and leaves the board.
//! - A forward move that *starts* on a shortcut square (5 or 10) goes
//!   straight to the finish. Landing on 5 or 10 does nothing special.
//! - Landing on a square captures every opposing piece there; they go back
//!   off the board. Finishing never captures.
//! - A piece on the board may not overshoot: it can move only if
//!   `position + steps <= 20`. Waiting pieces can always move.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::config::{shortcut_from, FINISH_SQUARE};
use crate::core::{GameEvent, GameState, PieceId, PlayerId, Position};
use crate::error::{YutError, YutResult};

/// Smallest and largest step count a throw can produce.
pub const MIN_STEPS: u8 = 1;
pub const MAX_STEPS: u8 = 5;

/// Where a move would take a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub to: Position,
    /// The move starts on a shortcut square and is redirected.
    pub shortcut: bool,
}

/// Everything a resolved move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub player: PlayerId,
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    pub shortcut: bool,
    /// Opposing pieces sent back off the board.
    pub captured: SmallVec<[(PlayerId, PieceId); 3]>,
    /// Events appended to the log, in order.
    pub events: Vec<GameEvent>,
}

impl MoveOutcome {
    /// At least one opposing piece was captured.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    #[must_use]
    pub fn is_finish(&self) -> bool {
        self.to == Position::Finished
    }
}

/// Fail unless `steps` is a possible throw value.
pub fn check_steps(steps: u8) -> YutResult<()> {
    if (MIN_STEPS..=MAX_STEPS).contains(&steps) {
        Ok(())
    } else {
        Err(YutError::StepsOutOfRange(steps))
    }
}

/// Pure destination arithmetic. `None` for a finished piece.
///
/// Any step count is accepted; anything reaching square 20 or beyond
/// finishes.
#[must_use]
pub fn destination(from: Position, steps: u8) -> Option<Destination> {
    let (target, shortcut) = match from {
        Position::Finished => return None,
        Position::Waiting => (u16::from(steps), false),
        Position::Track(old) => {
            let advanced = u16::from(old) + u16::from(steps);
            match shortcut_from(old) {
                Some(target) if steps > 0 => (u16::from(target), true),
                _ => (advanced, false),
            }
        }
    };
    let to = if target >= u16::from(FINISH_SQUARE) {
        Position::Finished
    } else {
        Position::Track(target as u8)
    };
    Some(Destination { to, shortcut })
}

/// Pieces of `player` that may move `steps` squares, in piece order.
///
/// An empty result means the throw is wasted.
pub fn movable_pieces(
    state: &GameState,
    player: PlayerId,
    steps: u8,
) -> YutResult<SmallVec<[PieceId; 4]>> {
    check_steps(steps)?;
    let movable = state
        .player(player)?
        .pieces()
        .iter()
        .filter(|piece| match piece.position() {
            Position::Finished => false,
            Position::Waiting => true,
            Position::Track(square) => {
                u16::from(square) + u16::from(steps) <= u16::from(FINISH_SQUARE)
            }
        })
        .map(|piece| piece.id)
        .collect();
    Ok(movable)
}

/// Where `piece` would end up, without moving it.
pub fn preview_move(
    state: &GameState,
    player: PlayerId,
    piece: PieceId,
    steps: u8,
) -> YutResult<Destination> {
    check_steps(steps)?;
    let from = state.piece(player, piece)?.position();
    destination(from, steps).ok_or(YutError::PieceFinished { player, piece })
}

/// Move `piece` of `player` by `steps`, applying shortcut, finish and
/// capture rules, and append the resulting events to the log.
///
/// Movability (overshoot) is not checked here; callers choose from
/// [`movable_pieces`].
pub fn resolve_move(
    state: &mut GameState,
    player: PlayerId,
    piece: PieceId,
    steps: u8,
) -> YutResult<MoveOutcome> {
    let Destination { to, shortcut } = preview_move(state, player, piece, steps)?;
    let from = state.piece(player, piece)?.position();

    let mut events = Vec::with_capacity(2);
    match (from, to) {
        (Position::Waiting, Position::Finished) => {
            events.push(GameEvent::EnteredAndFinished { piece });
        }
        (Position::Waiting, Position::Track(square)) => {
            events.push(GameEvent::Entered { piece, to: square });
        }
        (Position::Track(old), Position::Finished) => {
            if shortcut {
                events.push(GameEvent::Shortcut { piece, from: old });
            }
            events.push(GameEvent::Finished { piece });
        }
        (Position::Track(old), Position::Track(square)) => {
            events.push(GameEvent::Moved { piece, from: old, to: square });
        }
        (Position::Finished, _) | (_, Position::Waiting) => {
            return Err(YutError::PieceFinished { player, piece });
        }
    }

    let moving = state
        .player_mut(player)?
        .piece_mut(piece)
        .ok_or(YutError::PieceOutOfRange(piece.0))?;
    match to {
        Position::Track(square) => moving.place(square),
        _ => moving.finish(),
    }

    let mut captured: SmallVec<[(PlayerId, PieceId); 3]> = SmallVec::new();
    if let Position::Track(_) = to {
        for (owner, other) in state.players_mut() {
            if owner == player {
                continue;
            }
            for victim in other.pieces_mut() {
                if !victim.is_finished() && victim.position() == to {
                    victim.send_back();
                    captured.push((owner, victim.id));
                }
            }
        }
    }
    events.extend(
        captured
            .iter()
            .map(|&(owner, piece)| GameEvent::Captured { owner, piece }),
    );

    for event in &events {
        state.record(player, *event);
    }
    debug!(
        %player,
        %piece,
        from = from.index(),
        to = to.index(),
        shortcut,
        captures = captured.len(),
        "resolved move"
    );

    Ok(MoveOutcome {
        player,
        piece,
        from,
        to,
        shortcut,
        captured,
        events,
    })
}
