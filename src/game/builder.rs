//! Fluent construction of a `YutGame`.

use crate::core::{GameConfig, GameRng};
use crate::error::YutResult;
use crate::throw::ThrowSource;

use super::machine::YutGame;

/// Builder for creating a `YutGame`.
///
/// ```
/// use yut_nori::game::YutGameBuilder;
///
/// let game = YutGameBuilder::new()
///     .player_count(3)
///     .names(["Ana", "Ben", ""])
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(game.state().player_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct YutGameBuilder {
    player_count: usize,
    names: Option<Vec<String>>,
    seed: Option<u64>,
}

impl Default for YutGameBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            names: None,
            seed: None,
        }
    }
}

impl YutGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resolve the builder into a validated config.
    pub fn config(&self) -> YutResult<GameConfig> {
        let mut config = GameConfig::new(self.player_count)?;
        if let Some(names) = &self.names {
            config = config.with_names(names)?;
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }

    /// Build a game that throws from a seeded `GameRng`.
    pub fn build(self) -> YutResult<YutGame<GameRng>> {
        YutGame::new(self.config()?)
    }

    /// Build a game that throws from `source`.
    pub fn build_with_source<S: ThrowSource>(self, source: S) -> YutResult<YutGame<S>> {
        YutGame::with_source(self.config()?, source)
    }
}
