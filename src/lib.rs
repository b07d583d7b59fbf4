//! Gallows - single-player hangman served over HTTP.
//!
//! A player picks a topic, the server draws a secret word, and letters are
//! guessed one at a time until the word is revealed or the lives run out.
//!
//! # Architecture
//!
//! - **games::hangman**: the round state machine and its derived views,
//!   pure functions over a small per-player record
//! - **session**: in-memory per-player round storage behind an opaque token
//! - **server**: axum routes and cookie-based session resolution
//! - **render**: server-side HTML for the single game page
//!
//! # Example
//!
//! ```
//! use gallows::{Round, RoundOutcome, Topic};
//!
//! let mut round = Round::with_secret(Topic::Animals, "ZEBRA");
//! for letter in ["Z", "E", "B", "R", "A"] {
//!     round.apply_guess(letter);
//! }
//! assert_eq!(round.outcome(), RoundOutcome::Won);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod games;
pub mod render;
pub mod server;
pub mod session;

// Crate-level exports - game core
pub use games::hangman::{GuessOutcome, MAX_LIVES, Round, RoundOutcome, RoundView, Topic};

// Crate-level exports - configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - web layer
pub use server::{AppState, router};

// Crate-level exports - session management
pub use session::{SessionId, SessionManager};
