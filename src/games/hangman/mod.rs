//! Hangman: round state machine and derived views.

mod round;
mod types;
mod view;

pub use round::Round;
pub use types::{GuessOutcome, MAX_LIVES, Topic};
pub use view::{RoundOutcome, RoundView, gallows_stage, masked_word};
