//! Derived views over a round: masked word, outcome, gallows art.

use super::round::Round;
use super::types::{MAX_LIVES, Topic};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::instrument;

/// Renders the secret word with unguessed letters replaced by `_`.
///
/// Letters are space-separated; pure function of its two inputs.
pub fn masked_word(secret: &str, guessed: &BTreeSet<char>) -> String {
    secret
        .chars()
        .map(|c| if guessed.contains(&c) { c } else { '_' })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Terminal status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundOutcome {
    /// Guesses are still being accepted.
    InProgress,
    /// Every letter of the secret word has been guessed.
    Won,
    /// Lives are spent and the word is incomplete.
    Lost,
}

impl RoundOutcome {
    /// Derives the outcome from the raw state.
    ///
    /// Word completion is evaluated before lives exhaustion, so a guess that
    /// completes the word is scored as a win regardless of the counter.
    pub fn of(secret: &str, guessed: &BTreeSet<char>, lives: u8) -> Self {
        if secret.chars().all(|c| guessed.contains(&c)) {
            return RoundOutcome::Won;
        }
        if lives == 0 {
            return RoundOutcome::Lost;
        }
        RoundOutcome::InProgress
    }

    /// True once the round has reached Won or Lost.
    pub fn is_over(self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }
}

const GALLOWS_STAGES: [&str; MAX_LIVES as usize + 1] = [
    r"
   -----
   |   |
       |
       |
       |
       |
---------
",
    r"
   -----
   |   |
   O   |
       |
       |
       |
---------
",
    r"
   -----
   |   |
   O   |
   |   |
       |
       |
---------
",
    r"
   -----
   |   |
   O   |
  /|   |
       |
       |
---------
",
    r"
   -----
   |   |
   O   |
  /|\  |
       |
       |
---------
",
    r"
   -----
   |   |
   O   |
  /|\  |
  /    |
       |
---------
",
    r"
   -----
   |   |
   O   |
  /|\  |
  / \  |
       |
---------
",
];

/// Selects the gallows illustration for the given lives counter.
///
/// Stages are indexed by cumulative wrong-guess count and clamped to the
/// valid range.
pub fn gallows_stage(lives: u8, max_lives: u8) -> &'static str {
    let index = max_lives.saturating_sub(lives) as usize;
    GALLOWS_STAGES[index.min(GALLOWS_STAGES.len() - 1)]
}

/// Everything the page needs to render one round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundView {
    /// Secret word with unguessed letters masked.
    pub masked_word: String,
    /// Lives remaining.
    pub lives: u8,
    /// Lives a fresh round starts with.
    pub max_lives: u8,
    /// Guessed letters in sorted order.
    pub guessed_letters: Vec<char>,
    /// Status line; terminal outcomes override the per-turn message.
    pub message: String,
    /// Derived round status.
    pub outcome: RoundOutcome,
    /// True once the round has ended.
    pub game_over: bool,
    /// Gallows illustration for the current miss count.
    pub art: &'static str,
    /// Topic catalog for the selector.
    pub topics: Vec<&'static str>,
    /// Topic of the current round.
    pub current_topic: &'static str,
}

impl RoundView {
    /// Derives the view model for a round.
    #[instrument(skip(round), fields(topic = %round.topic()))]
    pub fn of(round: &Round) -> Self {
        let outcome = round.outcome();
        let message = match outcome {
            RoundOutcome::Won => format!("🎉 YOU WON! The word was {}.", round.secret_word()),
            RoundOutcome::Lost => format!("💀 GAME OVER. The word was {}.", round.secret_word()),
            RoundOutcome::InProgress => round.message().to_string(),
        };

        Self {
            masked_word: round.masked_word(),
            lives: round.lives(),
            max_lives: MAX_LIVES,
            guessed_letters: round.guessed_letters().iter().copied().collect(),
            message,
            outcome,
            game_over: outcome.is_over(),
            art: gallows_stage(round.lives(), MAX_LIVES),
            topics: Topic::all().map(Topic::name).collect(),
            current_topic: round.topic().name(),
        }
    }
}
