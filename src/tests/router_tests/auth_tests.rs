use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, get_authed, guest, make_app, post_form, FakeStore,
};

#[test]
fn login_page_offers_the_provider() {
    let app = make_app(FakeStore::new());
    let resp = handle(get("/login"), &app).unwrap();
    let body = body_string(resp);
    assert!(body.contains("Continue with Google"));
}

#[test]
fn account_requires_a_session() {
    let app = make_app(FakeStore::new());
    match handle(get("/account"), &app) {
        Err(ServerError::Unauthorized) => {}
        other => panic!("expected Unauthorized, got: {other:?}"),
    }
}

#[test]
fn garbage_cookie_is_no_session() {
    let app = make_app(FakeStore::new());
    match handle(get_authed("/account", "not-a-real-token"), &app) {
        Err(ServerError::Unauthorized) => {}
        other => panic!("expected Unauthorized, got: {other:?}"),
    }
}

#[test]
fn session_cookie_round_trips() {
    let app = make_app(FakeStore::new());
    let g = guest(7, "grace@example.com", "Grace Hopper");
    let token = crate::tests::utils::sign_in(&app, &g);

    let resp = handle(get_authed("/account", &token), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Grace Hopper"));
}

#[test]
fn provider_redirect_carries_client_and_state() {
    let app = make_app(FakeStore::new());

    let resp = handle(get("/auth/google"), &app).unwrap();
    assert_eq!(resp.status(), 303);

    let location = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(location.starts_with("https://accounts.google.com/"));
    assert!(location.contains("client_id=test-client"));
    assert!(location.contains("state="));
}

#[test]
fn callback_rejects_unknown_state() {
    let app = make_app(FakeStore::new());
    match handle(get("/auth/callback?state=forged&code=abc"), &app) {
        Err(ServerError::AuthError(_)) => {}
        other => panic!("expected AuthError, got: {other:?}"),
    }
}

#[test]
fn logout_revokes_the_session() {
    let app = make_app(FakeStore::new());
    let g = guest(7, "grace@example.com", "Grace Hopper");
    let token = crate::tests::utils::sign_in(&app, &g);

    let resp = handle(post_form("/logout", &token, ""), &app).unwrap();
    assert_eq!(resp.status(), 303);
    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(cookie.contains("Max-Age=0"));

    match handle(get_authed("/account", &token), &app) {
        Err(ServerError::Unauthorized) => {}
        other => panic!("expected Unauthorized after logout, got: {other:?}"),
    }
}
