//! # yut-nori
//!
//! Rules engine for Yut Nori, the Korean racing board game for 2-4 players.
//!
//! Each player races four pieces around a shared 20-square track. Throws of
//! the yut sticks decide how far a piece moves; landing on an opponent sends
//! it back, and squares 5 and 10 are shortcuts to the finish. The first
//! player to bring all four pieces home wins.
//!
//! ## Design
//!
//! - **Explicit state machine**: `YutGame` is driven by discrete actions
//!   (throw, select, quit) and never blocks on input.
//! - **Injectable randomness**: throws come from a `ThrowSource`, either a
//!   seeded `GameRng` or a fixed script.
//! - **Fail fast**: illegal requests return `YutError` instead of being
//!   clamped; rendering and input are left to the caller.
//!
//! ## Modules
//!
//! - `core`: players, pieces, RNG, configuration, actions, events, state
//! - `throw`: throw outcomes and sources
//! - `rules`: move resolution, movability, game result
//! - `game`: turn state machine
//!
//! ```
//! use yut_nori::{Action, Transition, YutGameBuilder};
//!
//! let mut game = YutGameBuilder::new().names(["Ana", "Ben"]).seed(42).build()?;
//! if let Transition::Thrown(report) = game.apply(Action::Throw)? {
//!     if let Some(&piece) = report.movable.first() {
//!         game.apply(Action::Select(piece))?;
//!     }
//! }
//! for entry in game.recent_events(5) {
//!     println!("{}", entry.message);
//! }
//! # Ok::<(), yut_nori::YutError>(())
//! ```

pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod throw;

// Re-export commonly used types
pub use crate::core::{
    Action, BonusReason, GameConfig, GameEvent, GameRng, GameRngState, GameState, LogEntry,
    Piece, PieceId, PieceSummary, Player, PlayerId, PlayerMap, Position,
};

pub use crate::error::{YutError, YutResult};

pub use crate::game::{
    ThrowReport, Transition, TurnEnd, TurnPhase, TurnReport, YutGame, YutGameBuilder,
};

pub use crate::rules::{Destination, GameResult, MoveOutcome};

pub use crate::throw::{ScriptedThrows, Throw, ThrowSource};
