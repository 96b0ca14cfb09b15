//! Throwing the yut sticks.
//!
//! - `Throw`: the five named outcomes with step values and odds
//! - `ThrowSource`: injectable source of outcomes (seeded RNG or a script)

pub mod outcome;
pub mod source;

pub use outcome::Throw;
pub use source::{ScriptedThrows, ThrowSource};
