//! Game configuration and fixed board constants.
//!
//! The board itself is not configurable: 20 track squares, four pieces per
//! player, shortcuts from 5 and 10 straight to the finish. A game is
//! configured only by who is playing and how the RNG is seeded.

use serde::{Deserialize, Serialize};

use crate::error::{YutError, YutResult};

/// Index of the finish square. Track squares are `0..FINISH_SQUARE`.
pub const FINISH_SQUARE: u8 = 20;

/// Pieces each player races home.
pub const PIECES_PER_PLAYER: usize = 4;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Shortcut trigger squares and where they lead.
pub const SHORTCUTS: [(u8, u8); 2] = [(5, FINISH_SQUARE), (10, FINISH_SQUARE)];

/// Markers handed out to players at game start.
pub const ANIMAL_MARKERS: [&str; 12] = [
    "🐴", "🐑", "🐱", "🐰", "🐶", "🐷", "🐼", "🦊", "🐻", "🐯", "🦁", "🐮",
];

/// Shortcut destination for a move that starts on `square`, if any.
#[must_use]
pub fn shortcut_from(square: u8) -> Option<u8> {
    SHORTCUTS
        .iter()
        .find(|(trigger, _)| *trigger == square)
        .map(|(_, target)| *target)
}

/// Who plays and how randomness is seeded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// One name per player, in seat order.
    pub player_names: Vec<String>,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Configuration for `player_count` players with default names.
    pub fn new(player_count: usize) -> YutResult<Self> {
        check_player_count(player_count)?;
        Ok(Self {
            player_names: (0..player_count).map(default_name).collect(),
            seed: None,
        })
    }

    /// Replace the player names. Blank names fall back to "Player {i}".
    pub fn with_names<S: AsRef<str>>(mut self, names: &[S]) -> YutResult<Self> {
        if names.len() != self.player_names.len() {
            return Err(YutError::NameCountMismatch {
                expected: self.player_names.len(),
                actual: names.len(),
            });
        }
        self.player_names = names
            .iter()
            .enumerate()
            .map(|(i, name)| match name.as_ref().trim() {
                "" => default_name(i),
                trimmed => trimmed.to_string(),
            })
            .collect();
        Ok(self)
    }

    /// Fix the RNG seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check a configuration that may have been deserialized or edited.
    pub fn validate(&self) -> YutResult<()> {
        check_player_count(self.player_count())
    }
}

fn check_player_count(player_count: usize) -> YutResult<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(YutError::InvalidPlayerCount(player_count))
    }
}

fn default_name(index: usize) -> String {
    format!("Player {}", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_table() {
        assert_eq!(shortcut_from(5), Some(20));
        assert_eq!(shortcut_from(10), Some(20));
        assert_eq!(shortcut_from(0), None);
        assert_eq!(shortcut_from(15), None);
    }

    #[test]
    fn test_player_count_bounds() {
        assert_eq!(GameConfig::new(1), Err(YutError::InvalidPlayerCount(1)));
        assert_eq!(GameConfig::new(5), Err(YutError::InvalidPlayerCount(5)));
        for count in 2..=4 {
            assert_eq!(GameConfig::new(count).unwrap().player_count(), count);
        }
    }

    #[test]
    fn test_default_and_custom_names() {
        let config = GameConfig::new(3).unwrap();
        assert_eq!(config.player_names, vec!["Player 0", "Player 1", "Player 2"]);

        let config = config.with_names(&["Alice", "  ", " Carol "]).unwrap();
        assert_eq!(config.player_names, vec!["Alice", "Player 1", "Carol"]);
    }

    #[test]
    fn test_name_count_mismatch() {
        let err = GameConfig::new(2).unwrap().with_names(&["Solo"]).unwrap_err();
        assert_eq!(err, YutError::NameCountMismatch { expected: 2, actual: 1 });
    }

    #[test]
    fn test_validate_deserialized_config() {
        let json = r#"{"player_names":["a","b","c","d","e"],"seed":7}"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.validate(), Err(YutError::InvalidPlayerCount(5)));
    }

    #[test]
    fn test_markers_are_distinct() {
        let mut markers = ANIMAL_MARKERS.to_vec();
        markers.sort();
        markers.dedup();
        assert_eq!(markers.len(), ANIMAL_MARKERS.len());
    }
}
