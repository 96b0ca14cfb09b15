//! The five throw outcomes and their odds.

use serde::{Deserialize, Serialize};

/// Result of throwing the four yut sticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Throw {
    Do,
    Gae,
    Geol,
    Yut,
    Mo,
}

/// Cumulative upper bounds (percent) of each outcome's sampling range.
const THRESHOLDS: [(f64, Throw); 5] = [
    (32.8, Throw::Do),
    (62.5, Throw::Gae),
    (89.1, Throw::Geol),
    (96.9, Throw::Yut),
    (100.0, Throw::Mo),
];

impl Throw {
    pub const ALL: [Throw; 5] = [Throw::Do, Throw::Gae, Throw::Geol, Throw::Yut, Throw::Mo];

    /// Map a uniform sample in [0, 100) to an outcome.
    ///
    /// Samples at or above 100 map to `Mo`.
    #[must_use]
    pub fn from_percent(sample: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(bound, _)| sample < *bound)
            .map_or(Throw::Mo, |(_, throw)| *throw)
    }

    /// Outcome with the given step count (1-5).
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.value() == value)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Throw::Do => "do",
            Throw::Gae => "gae",
            Throw::Geol => "geol",
            Throw::Yut => "yut",
            Throw::Mo => "mo",
        }
    }

    /// Squares moved.
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Throw::Do => 1,
            Throw::Gae => 2,
            Throw::Geol => 3,
            Throw::Yut => 4,
            Throw::Mo => 5,
        }
    }

    /// Probability of this outcome, in percent.
    #[must_use]
    pub fn probability(self) -> f64 {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        let lower = if index == 0 { 0.0 } else { THRESHOLDS[index - 1].0 };
        THRESHOLDS[index].0 - lower
    }

    /// "yut" and "mo" earn another throw.
    #[must_use]
    pub fn grants_bonus(self) -> bool {
        matches!(self, Throw::Yut | Throw::Mo)
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Throw::from_percent(0.0), Throw::Do);
        assert_eq!(Throw::from_percent(32.79), Throw::Do);
        assert_eq!(Throw::from_percent(32.8), Throw::Gae);
        assert_eq!(Throw::from_percent(62.5), Throw::Geol);
        assert_eq!(Throw::from_percent(89.1), Throw::Yut);
        assert_eq!(Throw::from_percent(96.9), Throw::Mo);
        assert_eq!(Throw::from_percent(99.999), Throw::Mo);
    }

    #[test]
    fn test_names_and_values() {
        let table: Vec<_> = Throw::ALL.iter().map(|t| (t.name(), t.value())).collect();
        assert_eq!(
            table,
            vec![("do", 1), ("gae", 2), ("geol", 3), ("yut", 4), ("mo", 5)]
        );
        assert_eq!(Throw::from_value(3), Some(Throw::Geol));
        assert_eq!(Throw::from_value(6), None);
    }

    #[test]
    fn test_probabilities_sum_to_100() {
        let total: f64 = Throw::ALL.iter().map(|t| t.probability()).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!((Throw::Do.probability() - 32.8).abs() < 1e-9);
        assert!((Throw::Mo.probability() - 3.1).abs() < 1e-9);
    }

    #[test]
    fn test_bonus_outcomes() {
        let bonus: Vec<_> = Throw::ALL.iter().filter(|t| t.grants_bonus()).collect();
        assert_eq!(bonus, vec![&Throw::Yut, &Throw::Mo]);
    }
}
