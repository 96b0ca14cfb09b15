//! Core types: players, pieces, RNG, configuration, actions, events, state.

pub mod action;
pub mod config;
pub mod event;
pub mod piece;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Action;
pub use config::GameConfig;
pub use event::{BonusReason, GameEvent, LogEntry};
pub use piece::{Piece, PieceId, Position};
pub use player::{PieceSummary, Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
