//! Throw sources: where outcomes come from.
//!
//! The engine draws from a `ThrowSource`, so games can run on a seeded
//! `GameRng` or on a fixed script of outcomes.

use serde::{Deserialize, Serialize};

use super::outcome::Throw;
use crate::core::GameRng;

/// Produces throw outcomes, one per call.
pub trait ThrowSource {
    fn throw(&mut self) -> Throw;
}

impl ThrowSource for GameRng {
    fn throw(&mut self) -> Throw {
        Throw::from_percent(self.gen_percent())
    }
}

impl<S: ThrowSource + ?Sized> ThrowSource for Box<S> {
    fn throw(&mut self) -> Throw {
        (**self).throw()
    }
}

/// Replays a fixed sequence of outcomes, looping at the end.
///
/// ```
/// use yut_nori::throw::{ScriptedThrows, Throw, ThrowSource};
///
/// let mut script = ScriptedThrows::new(vec![Throw::Mo, Throw::Do]);
/// assert_eq!(script.throw(), Throw::Mo);
/// assert_eq!(script.throw(), Throw::Do);
/// assert_eq!(script.throw(), Throw::Mo);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedThrows {
    script: Vec<Throw>,
    cursor: usize,
}

impl ScriptedThrows {
    /// An empty script yields `Do` forever.
    #[must_use]
    pub fn new(script: Vec<Throw>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Throws not yet replayed in the current pass.
    #[must_use]
    pub fn remaining(&self) -> &[Throw] {
        &self.script[self.cursor..]
    }
}

impl ThrowSource for ScriptedThrows {
    fn throw(&mut self) -> Throw {
        let Some(&next) = self.script.get(self.cursor) else {
            return Throw::Do;
        };
        self.cursor = (self.cursor + 1) % self.script.len();
        next
    }
}
