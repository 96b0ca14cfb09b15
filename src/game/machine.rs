//! Turn state machine.
//!
//! ```text
//!            throw              select piece
//! AwaitingThrow ──▶ AwaitingSelection ──▶ (turn resolved)
//!      ▲   │ no movable piece                  │
//!      │   └──────────────────▶ (turn resolved)│
//!      │                                       ▼
//!      └── same player if yut/mo or capture ◀──┤
//!      └── next player otherwise           ◀──┤
//!                         GameOver on a win ◀──┘
//! ```
//!
//! Quit is accepted while awaiting a throw or a selection and ends the game
//! without a winner. A win is checked before any bonus throw.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use crate::core::config::ANIMAL_MARKERS;
use crate::core::{
    Action, BonusReason, GameConfig, GameEvent, GameRng, GameState, LogEntry, PieceId, Player,
    PlayerId, PlayerMap,
};
use crate::error::{YutError, YutResult};
use crate::rules::{self, Destination, GameResult, MoveOutcome};
use crate::throw::{Throw, ThrowSource};

/// Where the current turn stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingThrow,
    /// A throw is pending; one of `movable` must be selected.
    AwaitingSelection {
        throw: Throw,
        movable: SmallVec<[PieceId; 4]>,
    },
    GameOver,
}

impl TurnPhase {
    fn describe(&self) -> &'static str {
        match self {
            TurnPhase::AwaitingThrow => "awaiting a throw",
            TurnPhase::AwaitingSelection { .. } => "awaiting a piece selection",
            TurnPhase::GameOver => "the game is over",
        }
    }
}

/// How a resolved turn hands over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEnd {
    /// The same player throws again.
    BonusThrow(BonusReason),
    /// Play passes to this player.
    NextPlayer(PlayerId),
    /// The acting player finished all pieces.
    Won(PlayerId),
}

/// Result of a throw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowReport {
    pub player: PlayerId,
    pub throw: Throw,
    /// Pieces the player may now select.
    pub movable: SmallVec<[PieceId; 4]>,
    /// Set when nothing could move and the turn already resolved.
    pub turn_end: Option<TurnEnd>,
}

impl ThrowReport {
    #[must_use]
    pub fn is_wasted(&self) -> bool {
        self.movable.is_empty()
    }
}

/// Result of moving the selected piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub outcome: MoveOutcome,
    pub turn_end: TurnEnd,
}

/// What applying an `Action` did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    Thrown(ThrowReport),
    Moved(TurnReport),
    Quit,
}

/// A game in progress: state, turn phase and throw source.
#[derive(Clone, Debug)]
pub struct YutGame<S = GameRng> {
    state: GameState,
    phase: TurnPhase,
    source: S,
}

impl YutGame<GameRng> {
    /// New game throwing from a `GameRng` seeded per `config`.
    pub fn new(config: GameConfig) -> YutResult<Self> {
        let rng = seeded_rng(&config);
        Self::with_source(config, rng)
    }
}

impl<S: ThrowSource> YutGame<S> {
    /// New game drawing throws from `source`.
    ///
    /// Markers are still drawn from the configured seed so that a scripted
    /// game and a seeded game of the same config look alike.
    pub fn with_source(config: GameConfig, source: S) -> YutResult<Self> {
        config.validate()?;
        let markers = draw_markers(&seeded_rng(&config), config.player_count());
        let players = PlayerMap::new(config.player_count(), |id| {
            Player::new(id, config.player_names[id.index()].clone(), markers[id.index()])
        });
        debug!(players = config.player_count(), "new game");
        Ok(Self {
            state: GameState::new(players),
            phase: TurnPhase::AwaitingThrow,
            source,
        })
    }

    // === Accessors ===

    /// Snapshot for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    /// The throw waiting for a piece selection, if any.
    #[must_use]
    pub fn pending_throw(&self) -> Option<Throw> {
        match self.phase {
            TurnPhase::AwaitingSelection { throw, .. } => Some(throw),
            _ => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    pub fn is_winner(&self, player: PlayerId) -> YutResult<bool> {
        self.state.is_winner(player)
    }

    pub fn recent_events(&self, count: usize) -> impl Iterator<Item = &LogEntry> {
        self.state.recent_events(count)
    }

    pub fn movable_pieces(&self, player: PlayerId, steps: u8) -> YutResult<SmallVec<[PieceId; 4]>> {
        rules::movable_pieces(&self.state, player, steps)
    }

    pub fn preview_move(&self, player: PlayerId, piece: PieceId, steps: u8) -> YutResult<Destination> {
        rules::preview_move(&self.state, player, piece, steps)
    }

    /// Resolve a move directly, outside the turn sequence.
    ///
    /// Only allowed between turns (awaiting a throw), so a pending selection
    /// cannot be bypassed. Turn order is left untouched, but a move that
    /// finishes the player's last piece ends the game. Normal play goes
    /// through [`YutGame::throw_yut`] and [`YutGame::select_piece`].
    pub fn resolve_move(&mut self, player: PlayerId, piece: PieceId, steps: u8) -> YutResult<MoveOutcome> {
        self.expect_phase("resolve a move directly", |phase| {
            matches!(phase, TurnPhase::AwaitingThrow)
        })?;
        let outcome = rules::resolve_move(&mut self.state, player, piece, steps)?;
        self.check_win(player);
        Ok(outcome)
    }

    // === Transitions ===

    /// Dispatch an external action.
    pub fn apply(&mut self, action: Action) -> YutResult<Transition> {
        match action {
            Action::Throw => self.throw_yut().map(Transition::Thrown),
            Action::Select(piece) => self.select_piece(piece).map(Transition::Moved),
            Action::Quit => self.quit().map(|()| Transition::Quit),
        }
    }

    /// Throw the sticks for the current player.
    ///
    /// If no piece can move the throw is wasted and the turn resolves
    /// immediately; a wasted "yut" or "mo" still earns the bonus throw.
    #[instrument(level = "debug", skip(self), fields(player = %self.state.current_player))]
    pub fn throw_yut(&mut self) -> YutResult<ThrowReport> {
        self.expect_phase(Action::Throw.describe(), |phase| {
            matches!(phase, TurnPhase::AwaitingThrow)
        })?;

        let player = self.state.current_player;
        let throw = self.source.throw();
        let movable = rules::movable_pieces(&self.state, player, throw.value())?;
        debug!(%throw, movable = movable.len(), "threw");

        if movable.is_empty() {
            self.state.record(player, GameEvent::NoMove { throw });
            let turn_end = self.finish_turn(player, throw, false);
            return Ok(ThrowReport {
                player,
                throw,
                movable,
                turn_end: Some(turn_end),
            });
        }

        self.state.record(player, GameEvent::Threw { throw });
        self.phase = TurnPhase::AwaitingSelection {
            throw,
            movable: movable.clone(),
        };
        Ok(ThrowReport {
            player,
            throw,
            movable,
            turn_end: None,
        })
    }

    /// Move `piece` with the pending throw and resolve the turn.
    #[instrument(level = "debug", skip(self), fields(player = %self.state.current_player))]
    pub fn select_piece(&mut self, piece: PieceId) -> YutResult<TurnReport> {
        let action = Action::Select(piece).describe();
        self.expect_phase(action, |phase| matches!(phase, TurnPhase::AwaitingSelection { .. }))?;
        let TurnPhase::AwaitingSelection { throw, movable } = &self.phase else {
            return Err(self.unexpected(action));
        };
        let throw = *throw;
        if !movable.contains(&piece) {
            return Err(YutError::PieceNotMovable {
                piece,
                movable: movable.to_vec(),
            });
        }

        let player = self.state.current_player;
        let outcome = rules::resolve_move(&mut self.state, player, piece, throw.value())?;
        let turn_end = self.finish_turn(player, throw, outcome.is_capture());
        Ok(TurnReport { outcome, turn_end })
    }

    /// Abandon the game.
    #[instrument(level = "debug", skip(self))]
    pub fn quit(&mut self) -> YutResult<()> {
        self.expect_phase(Action::Quit.describe(), |phase| phase != &TurnPhase::GameOver)?;
        let player = self.state.current_player;
        self.state.record(player, GameEvent::Quit);
        self.state.result = Some(GameResult::Abandoned);
        self.phase = TurnPhase::GameOver;
        info!(%player, "game abandoned");
        Ok(())
    }

    /// Win check first, then one bonus throw for yut/mo or a capture,
    /// otherwise pass to the next seat.
    fn finish_turn(&mut self, player: PlayerId, throw: Throw, captured: bool) -> TurnEnd {
        if self.check_win(player) {
            return TurnEnd::Won(player);
        }

        self.phase = TurnPhase::AwaitingThrow;
        let bonus = if throw.grants_bonus() {
            Some(BonusReason::Throw(throw))
        } else if captured {
            Some(BonusReason::Capture)
        } else {
            None
        };

        match bonus {
            Some(reason) => {
                self.state.record(player, GameEvent::BonusTurn { reason });
                TurnEnd::BonusThrow(reason)
            }
            None => {
                self.state.advance_turn();
                TurnEnd::NextPlayer(self.state.current_player)
            }
        }
    }

    /// End the game if `player` has finished every piece.
    fn check_win(&mut self, player: PlayerId) -> bool {
        if !self.state.player(player).is_ok_and(Player::has_won) {
            return false;
        }
        self.state.record(player, GameEvent::Won);
        self.state.result = Some(GameResult::Winner(player));
        self.phase = TurnPhase::GameOver;
        info!(%player, turn = self.state.turn_number, "game won");
        true
    }

    fn expect_phase(&self, action: &'static str, allowed: impl Fn(&TurnPhase) -> bool) -> YutResult<()> {
        if self.phase == TurnPhase::GameOver {
            return Err(YutError::GameOver);
        }
        if allowed(&self.phase) {
            Ok(())
        } else {
            Err(self.unexpected(action))
        }
    }

    fn unexpected(&self, action: &'static str) -> YutError {
        YutError::UnexpectedAction {
            action,
            phase: self.phase.describe(),
        }
    }
}

fn seeded_rng(config: &GameConfig) -> GameRng {
    config.seed.map_or_else(GameRng::from_entropy, GameRng::new)
}

/// Distinct markers for `count` players, from a stream separate from throws.
fn draw_markers(rng: &GameRng, count: usize) -> Vec<&'static str> {
    let mut pool = ANIMAL_MARKERS;
    rng.for_context("markers").shuffle(&mut pool);
    pool[..count].to_vec()
}
