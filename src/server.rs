//! HTTP surface: routing, session cookies, request handlers.

use crate::config::ServerConfig;
use crate::games::hangman::{Round, RoundView, Topic};
use crate::render;
use crate::session::{SessionId, SessionManager};
use axum::Router;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Cookie carrying the session token.
const SESSION_COOKIE: &str = "gallows_sid";

/// Shared state behind every handler: the session store and the word
/// generator.
#[derive(Debug, Clone)]
pub struct AppState {
    sessions: SessionManager,
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Creates state with an entropy-seeded generator.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates state with the given generator; seed it for deterministic
    /// word selection in tests.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            sessions: SessionManager::new(),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Returns the session store.
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    fn new_round(&self, topic: Option<Topic>) -> Round {
        let mut rng = self.rng.lock().unwrap();
        Round::new(topic, &mut *rng)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Form body for the two POST events on `/`.
///
/// A topic selection starts a new round; a letter is applied as a guess.
/// Topic takes precedence when both arrive.
#[derive(Debug, Deserialize)]
pub struct PlayForm {
    /// Topic name from the selector.
    pub topic: Option<String>,
    /// Single-letter guess.
    pub letter: Option<String>,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(play))
        .route("/restart", get(restart))
        .route("/healthz", get(health))
        .with_state(state)
}

/// Binds and serves the game until the process is stopped.
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

/// Renders the current round; starts one if the session has none.
#[instrument(skip(state, headers))]
async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (sid, round, created) = resolve_round(&state, &headers);
    let view = RoundView::of(&round);

    let mut response = Html(render::page(&view)).into_response();
    if created {
        set_session_cookie(&mut response, &sid);
    }
    response
}

/// Handles both POST events: topic selection and letter guess.
#[instrument(skip(state, headers, form))]
async fn play(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PlayForm>,
) -> Response {
    let (sid, mut round, created) = resolve_round(&state, &headers);

    // Topic selection replaces the round, then redirects so a refresh
    // does not resubmit the form.
    if let Some(name) = form.topic.as_deref() {
        let topic = Topic::parse(name);
        if topic.is_none() {
            debug!(name, "Unknown topic, falling back to random");
        }
        let fresh = state.new_round(topic);
        state.sessions.upsert_round(sid.clone(), fresh);

        let mut response = Redirect::to("/").into_response();
        if created {
            set_session_cookie(&mut response, &sid);
        }
        return response;
    }

    if let Some(letter) = form.letter.as_deref() {
        let outcome = round.apply_guess(letter);
        debug!(session_id = %sid, ?outcome, "Applied guess");
        state.sessions.upsert_round(sid.clone(), round.clone());
    }

    let view = RoundView::of(&round);
    let mut response = Html(render::page(&view)).into_response();
    if created {
        set_session_cookie(&mut response, &sid);
    }
    response
}

/// Starts a new round reusing the session's current topic.
#[instrument(skip(state, headers))]
async fn restart(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (sid, round, created) = resolve_round(&state, &headers);
    let fresh = state.new_round(Some(round.topic()));
    state.sessions.upsert_round(sid.clone(), fresh);

    let mut response = Redirect::to("/").into_response();
    if created {
        set_session_cookie(&mut response, &sid);
    }
    response
}

/// Loads the session's round, creating session and round as needed.
///
/// Returns the session id, the round, and whether a cookie still has to be
/// issued to the client.
fn resolve_round(state: &AppState, headers: &HeaderMap) -> (SessionId, Round, bool) {
    if let Some(sid) = session_id(headers) {
        if let Some(round) = state.sessions.get_round(&sid) {
            return (sid, round, false);
        }
        // Known token, no round: the process restarted under the client.
        let round = state.new_round(None);
        state.sessions.upsert_round(sid.clone(), round.clone());
        info!(session_id = %sid, "Recreated round for returning session");
        return (sid, round, false);
    }

    let sid = Uuid::new_v4().to_string();
    let round = state.new_round(None);
    state.sessions.upsert_round(sid.clone(), round.clone());
    info!(session_id = %sid, "Created session");
    (sid, round, true)
}

/// Extracts the session token from the request cookies.
fn session_id(headers: &HeaderMap) -> Option<SessionId> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}

fn set_session_cookie(response: &mut Response, sid: &str) {
    let value = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, sid);
    if let Ok(value) = value.parse() {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
}
