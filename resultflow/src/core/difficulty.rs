//! Test difficulties and their fixed scores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// The difficulty of the test a result was taken from.
///
/// Each difficulty maps to one fixed score, see [`Difficulty::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// The easy test.
    Easy,
    /// The medium test.
    #[default]
    Medium,
    /// The hard test.
    Hard,
}

impl Difficulty {
    /// All difficulties in table order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the score recorded for this difficulty.
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Easy => 23.8,
            Self::Medium => 49.9,
            Self::Hard => 105.1,
        }
    }

    /// Returns the lowercase name used on the command line and in config.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Names are matched exactly: "EASY" is not a difficulty.
impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_test_type(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("easy", Difficulty::Easy)]
    #[case("medium", Difficulty::Medium)]
    #[case("hard", Difficulty::Hard)]
    fn test_parse_known_names(#[case] name: &str, #[case] expected: Difficulty) {
        assert_eq!(name.parse::<Difficulty>(), Ok(expected));
    }

    #[rstest]
    #[case("EASY")]
    #[case("mdium")]
    #[case("Junk")]
    #[case("")]
    fn test_parse_rejects_unknown_names(#[case] name: &str) {
        assert_eq!(
            name.parse::<Difficulty>(),
            Err(ValidationError::unknown_test_type(name))
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
