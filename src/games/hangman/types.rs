//! Core domain types for hangman.

use serde::{Deserialize, Serialize};

/// Number of wrong guesses a player may spend before the round is lost.
pub const MAX_LIVES: u8 = 6;

/// Word category for a round.
///
/// The catalog is a closed set; each topic owns a fixed uppercase word list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Topic {
    /// Animal names.
    Animals,
    /// Sports and athletics.
    Sports,
    /// Computing and software.
    Technology,
}

impl Topic {
    /// Returns the candidate secret words for this topic.
    ///
    /// Every entry is fully uppercase ASCII.
    pub fn word_list(self) -> &'static [&'static str] {
        match self {
            Topic::Animals => &[
                "ELEPHANT",
                "GIRAFFE",
                "TIGER",
                "PENGUIN",
                "KANGAROO",
                "BUTTERFLY",
                "DOLPHIN",
                "CHIMPANZEE",
                "SQUIRREL",
                "ZEBRA",
            ],
            Topic::Sports => &[
                "BASKETBALL",
                "FOOTBALL",
                "SOCCER",
                "HOCKEY",
                "TENNIS",
                "GOLFER",
                "SWIMMING",
                "MARATHON",
                "TOUCHDOWN",
                "VOLLEYBALL",
            ],
            Topic::Technology => &[
                "PYTHON",
                "FLASK",
                "JAVASCRIPT",
                "DATABASE",
                "ALGORITHM",
                "SERVER",
                "SESSION",
                "API",
                "CLOUD",
                "SOFTWARE",
            ],
        }
    }

    /// Returns the display name of this topic.
    pub fn name(self) -> &'static str {
        match self {
            Topic::Animals => "Animals",
            Topic::Sports => "Sports",
            Topic::Technology => "Technology",
        }
    }

    /// Parses a topic from its display name.
    ///
    /// Returns `None` for unknown names; callers fall back to a random
    /// topic rather than erroring.
    pub fn parse(name: &str) -> Option<Self> {
        Topic::all().find(|topic| topic.name() == name)
    }

    /// Iterates the topic catalog in display order.
    pub fn all() -> impl Iterator<Item = Topic> {
        <Topic as strum::IntoEnumIterator>::iter()
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of applying a guess - explicit state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input was not a single A-Z letter; the round is untouched.
    Invalid,
    /// Letter was already guessed; the round is untouched.
    Repeat(char),
    /// Letter occurs in the secret word.
    Hit(char),
    /// Letter does not occur in the secret word; one life spent.
    Miss {
        /// The rejected letter.
        letter: char,
        /// Lives remaining after the miss.
        lives_left: u8,
    },
}
