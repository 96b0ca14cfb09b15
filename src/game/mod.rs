//! Playing a game: the turn state machine and its builder.
//!
//! `YutGame` owns the state and the throw source and is driven one
//! `Action` at a time by the presentation layer.

mod builder;
mod machine;

pub use builder::YutGameBuilder;
pub use machine::{ThrowReport, Transition, TurnEnd, TurnPhase, TurnReport, YutGame};
