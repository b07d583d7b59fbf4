//! HTTP surface tests driving the router in-process.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use gallows::{AppState, router};
use http_body_util::BodyExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tower::ServiceExt;

fn test_app() -> Router {
    router(AppState::with_rng(StdRng::seed_from_u64(1)))
}

async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Extracts the `name=value` pair from a Set-Cookie header.
fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response sets the session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_index_starts_round_and_sets_cookie() {
    let app = test_app();

    let response = app.oneshot(get("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = session_cookie(&response);
    assert!(cookie.starts_with("gallows_sid="));

    let body = body_string(response).await;
    assert!(body.contains("Lives remaining: 6/6"));
    assert!(body.contains("Guessed letters: None"));
    assert!(body.contains("_"));
    assert!(body.contains("New game! Topic:"));
}

#[tokio::test]
async fn test_index_reuses_existing_session() {
    let app = test_app();

    let first = app.clone().oneshot(get("/", None)).await.unwrap();
    let cookie = session_cookie(&first);
    let first_body = body_string(first).await;

    let second = app.oneshot(get("/", Some(&cookie))).await.unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    // Re-rendering without an event must not issue a new cookie or change
    // the round.
    assert!(second.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(body_string(second).await, first_body);
}

#[tokio::test]
async fn test_topic_selection_redirects() {
    let app = test_app();

    let first = app.clone().oneshot(get("/", None)).await.unwrap();
    let cookie = session_cookie(&first);

    let response = app
        .clone()
        .oneshot(post_form("topic=Animals", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    let page = app.oneshot(get("/", Some(&cookie))).await.unwrap();
    let body = body_string(page).await;
    assert!(body.contains("New game! Topic: Animals."));
    assert!(body.contains("<option value=\"Animals\" selected>"));
}

#[tokio::test]
async fn test_unknown_topic_falls_back_to_random() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_form("topic=Dinosaurs", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookie = session_cookie(&response);
    let page = app.oneshot(get("/", Some(&cookie))).await.unwrap();
    let body = body_string(page).await;
    // Still a valid round on a catalog topic, not an error page.
    assert!(body.contains("New game! Topic:"));
    assert!(body.contains("Lives remaining: 6/6"));
}

#[tokio::test]
async fn test_letter_guess_rerenders_with_updated_state() {
    let app = test_app();

    let first = app.clone().oneshot(get("/", None)).await.unwrap();
    let cookie = session_cookie(&first);

    let response = app
        .clone()
        .oneshot(post_form("letter=E", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    // Either a hit or a miss, but the guess is recorded and reported.
    assert!(body.contains("'E'"));
    assert!(body.contains("Guessed letters: E"));

    // The guess survives a plain re-render.
    let page = app.oneshot(get("/", Some(&cookie))).await.unwrap();
    assert!(body_string(page).await.contains("Guessed letters: E"));
}

#[tokio::test]
async fn test_invalid_guess_is_absorbed() {
    let app = test_app();

    let first = app.clone().oneshot(get("/", None)).await.unwrap();
    let cookie = session_cookie(&first);

    let response = app
        .oneshot(post_form("letter=ab", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Invalid input"));
    assert!(body.contains("Lives remaining: 6/6"));
    assert!(body.contains("Guessed letters: None"));
}

#[tokio::test]
async fn test_restart_keeps_topic_and_redirects() {
    let app = test_app();

    let first = app.clone().oneshot(get("/", None)).await.unwrap();
    let cookie = session_cookie(&first);

    let select = app
        .clone()
        .oneshot(post_form("topic=Sports", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(select.status(), StatusCode::SEE_OTHER);

    let guess = app
        .clone()
        .oneshot(post_form("letter=Q", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(guess.status(), StatusCode::OK);

    let restart = app
        .clone()
        .oneshot(get("/restart", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(restart.status(), StatusCode::SEE_OTHER);
    assert_eq!(restart.headers().get(header::LOCATION).unwrap(), "/");

    let page = app.oneshot(get("/", Some(&cookie))).await.unwrap();
    let body = body_string(page).await;
    assert!(body.contains("New game! Topic: Sports."));
    assert!(body.contains("Lives remaining: 6/6"));
    assert!(body.contains("Guessed letters: None"));
}

#[tokio::test]
async fn test_healthz() {
    let app = test_app();

    let response = app.oneshot(get("/healthz", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}
