//! Round state and the guess transition.

use super::types::{GuessOutcome, MAX_LIVES, Topic};
use super::view::{self, RoundOutcome};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// One player's current round.
///
/// This is the whole session record: the web layer loads it, applies one
/// event, and stores it back. All mutation goes through [`Round::apply_guess`];
/// starting over means constructing a fresh `Round`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Selected category.
    topic: Topic,
    /// The word to guess, fully uppercase, fixed for the round's lifetime.
    secret_word: String,
    /// Uppercase letters submitted so far.
    guessed_letters: BTreeSet<char>,
    /// Wrong guesses remaining, in `[0, MAX_LIVES]`.
    lives: u8,
    /// Status line recomputed each turn; display only.
    message: String,
}

impl Round {
    /// Starts a new round.
    ///
    /// A missing topic is substituted with one drawn uniformly at random
    /// from the catalog; the secret word is drawn uniformly from the topic's
    /// list. The generator is explicit so callers can seed it for
    /// deterministic play.
    #[instrument(skip(rng))]
    pub fn new<R: Rng>(topic: Option<Topic>, rng: &mut R) -> Self {
        let topic = topic.unwrap_or_else(|| {
            let catalog: Vec<Topic> = Topic::all().collect();
            *catalog.choose(rng).expect("topic catalog is non-empty")
        });
        let secret_word = topic
            .word_list()
            .choose(rng)
            .expect("every topic has at least one word")
            .to_string();

        info!(%topic, word_len = secret_word.len(), "Starting new round");

        Self {
            topic,
            secret_word,
            guessed_letters: BTreeSet::new(),
            lives: MAX_LIVES,
            message: format!("New game! Topic: {}. Guess a letter to start!", topic),
        }
    }

    /// Starts a round with a known secret word, uppercased.
    ///
    /// Deterministic counterpart of [`Round::new`] for tests and tooling.
    pub fn with_secret(topic: Topic, word: &str) -> Self {
        Self {
            topic,
            secret_word: word.to_uppercase(),
            guessed_letters: BTreeSet::new(),
            lives: MAX_LIVES,
            message: format!("New game! Topic: {}. Guess a letter to start!", topic),
        }
    }

    /// Applies one letter guess and returns the transition that occurred.
    ///
    /// Input is trimmed and uppercased first. Nothing here rejects or raises:
    /// malformed and repeated input are absorbed into the status message, and
    /// the lives counter saturates at zero. Guesses arriving after the round
    /// is over are processed the same way; the win-before-loss ordering in
    /// [`RoundOutcome::of`] keeps terminal outcomes stable.
    #[instrument(skip(self), fields(topic = %self.topic, lives = self.lives))]
    pub fn apply_guess(&mut self, raw: &str) -> GuessOutcome {
        let guess = raw.trim().to_uppercase();
        let mut chars = guess.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c,
            _ => {
                debug!(raw, "Rejected malformed guess");
                self.message = "Invalid input. Please enter a single letter (A-Z).".to_string();
                return GuessOutcome::Invalid;
            }
        };

        if self.guessed_letters.contains(&letter) {
            debug!(%letter, "Repeated guess");
            self.message = format!("You already guessed '{}'. Try a new letter.", letter);
            return GuessOutcome::Repeat(letter);
        }

        self.guessed_letters.insert(letter);

        if self.secret_word.contains(letter) {
            info!(%letter, "Correct guess");
            self.message = format!("Good guess! '{}' is in the word.", letter);
            GuessOutcome::Hit(letter)
        } else {
            self.lives = self.lives.saturating_sub(1);
            info!(%letter, lives = self.lives, "Wrong guess");
            self.message = format!("'{}' is NOT in the word. Lives left: {}.", letter, self.lives);
            GuessOutcome::Miss {
                letter,
                lives_left: self.lives,
            }
        }
    }

    /// Returns the selected topic.
    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// Returns the secret word.
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// Returns the letters guessed so far, in sorted order.
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    /// Returns the lives remaining.
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Returns the current status line.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Derives the round outcome from the current state.
    pub fn outcome(&self) -> RoundOutcome {
        RoundOutcome::of(&self.secret_word, &self.guessed_letters, self.lives)
    }

    /// Renders the secret word with unguessed letters masked.
    pub fn masked_word(&self) -> String {
        view::masked_word(&self.secret_word, &self.guessed_letters)
    }
}
