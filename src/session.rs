//! Per-player round storage for the web layer.

use crate::games::hangman::Round;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Opaque token identifying one player's browsing session.
///
/// Issued by the server, held by the client in a cookie. Sessions expire
/// implicitly when the token stops arriving; nothing here reaps them.
pub type SessionId = String;

/// Stores each player's current round, keyed by session token.
///
/// Cheap to clone and share across handlers. The interior mutex serializes
/// access; concurrent events from the same session are last-write-wins.
#[derive(Debug, Clone)]
pub struct SessionManager {
    rounds: Arc<Mutex<HashMap<SessionId, Round>>>,
}

impl SessionManager {
    /// Creates an empty session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self {
            rounds: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns a copy of the round for the given session, if one exists.
    #[instrument(skip(self))]
    pub fn get_round(&self, id: &str) -> Option<Round> {
        let rounds = self.rounds.lock().unwrap();
        let round = rounds.get(id).cloned();

        if round.is_none() {
            debug!(session_id = id, "No round for session");
        }

        round
    }

    /// Stores the round for the given session, replacing any previous one.
    #[instrument(skip(self, round), fields(topic = %round.topic()))]
    pub fn upsert_round(&self, id: SessionId, round: Round) {
        let mut rounds = self.rounds.lock().unwrap();
        rounds.insert(id, round);
        debug!("Round stored");
    }

    /// Returns the number of live sessions.
    #[instrument(skip(self))]
    pub fn count(&self) -> usize {
        self.rounds.lock().unwrap().len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
