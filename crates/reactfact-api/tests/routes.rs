use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use reactfact_api::{AppStateInner, router};
use reactfact_db::{KeyValueStore, MemoryStore};
use reactfact_gif::{FallbackGifs, GifLookup, GifSelector};
use reactfact_state::{Catalogue, Context};

fn app() -> Router {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let ctx = Context::open(storage, Catalogue::seeded()).unwrap();
    router(Arc::new(AppStateInner {
        ctx,
        gifs: GifSelector::new(GifLookup::Fallback(FallbackGifs)),
    }))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    send(app, builder.body(body).unwrap()).await
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn sign_in(app: &Router, username: &str) -> Value {
    let (status, body) = call(
        app,
        Method::POST,
        "/auth/login",
        Some(json!({ "username": username })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["user"].clone()
}

#[tokio::test]
async fn feed_lists_seeded_facts() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["isAuthenticated"], json!(false));
    let facts = body["facts"].as_array().unwrap();
    assert_eq!(facts.len(), 5);
    assert_eq!(facts[0]["fact"]["id"], "1");
    assert_eq!(facts[0]["reactionCount"], 1);
    assert_eq!(facts[3]["reactionCount"], 0);
}

#[tokio::test]
async fn protected_routes_require_a_session() {
    let app = app();

    let (status, body) = call(
        &app,
        Method::POST,
        "/facts/1/reactions",
        Some(json!({ "text": "hi" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());

    let (status, _) = call(&app, Method::GET, "/profile", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = call(&app, Method::GET, "/friends", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Reading a fact's reactions stays public on the same path.
    let (status, body) = call(&app, Method::GET, "/facts/1/reactions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn signed_in_user_can_react() {
    let app = app();
    let user = sign_in(&app, "  alice ").await;
    assert_eq!(user["username"], "alice");

    let (status, reaction) = call(
        &app,
        Method::POST,
        "/facts/1/reactions",
        Some(json!({ "text": " hello " })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(reaction["text"], "hello");
    assert_eq!(reaction["likes"], 0);
    assert_eq!(reaction["userId"], user["id"]);
    assert!(reaction.get("gifUrl").is_none());

    let (_, list) = call(&app, Method::GET, "/facts/1/reactions", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], reaction["id"]);

    let (_, mine) = call(&app, Method::GET, "/my-reactions", None).await;
    assert_eq!(mine["reactions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn gif_only_reaction_is_accepted() {
    let app = app();
    sign_in(&app, "alice").await;

    let (status, reaction) = call(
        &app,
        Method::POST,
        "/facts/4/reactions",
        Some(json!({ "gifUrl": "https://media.tenor.com/x.gif" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(reaction.get("text").is_none());
    assert_eq!(reaction["gifUrl"], "https://media.tenor.com/x.gif");
}

#[tokio::test]
async fn blank_reaction_is_refused() {
    let app = app();
    sign_in(&app, "alice").await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/facts/1/reactions",
        Some(json!({ "text": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, all) = call(&app, Method::GET, "/reactions", None).await;
    assert_eq!(all["reactions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn reacting_to_unknown_fact_is_not_found() {
    let app = app();
    sign_in(&app, "alice").await;

    let (status, _) = call(
        &app,
        Method::POST,
        "/facts/nope/reactions",
        Some(json!({ "text": "hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, Method::GET, "/facts/nope/reactions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn global_reactions_sort_orders() {
    let app = app();

    let (_, newest) = call(&app, Method::GET, "/reactions", None).await;
    assert_eq!(newest["sort"], "newest");
    let ids: Vec<&str> = newest["reactions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["reaction"]["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["r1", "r3", "r2"]);

    let (_, popular) = call(&app, Method::GET, "/reactions?sort=popular", None).await;
    let reactions = popular["reactions"].as_array().unwrap();
    let likes: Vec<u64> = reactions
        .iter()
        .map(|r| r["reaction"]["likes"].as_u64().unwrap())
        .collect();
    assert_eq!(likes, vec![54, 42, 27]);
    assert_eq!(
        reactions[0]["factTitle"],
        "A Day on Venus is Longer Than a Year on Venus"
    );
}

#[tokio::test]
async fn comments_and_likes() {
    let app = app();
    sign_in(&app, "alice").await;

    let (status, comment) = call(
        &app,
        Method::POST,
        "/reactions/r1/comments",
        Some(json!({ "text": "nice" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(comment["reactionId"], "r1");

    let (status, like) = call(&app, Method::POST, "/reactions/r1/like", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(like, json!({ "likes": 43, "isLiked": true }));

    let (_, unlike) = call(&app, Method::POST, "/reactions/r1/like", None).await;
    assert_eq!(unlike, json!({ "likes": 42, "isLiked": false }));

    let uri = format!("/reactions/r1/comments/{}/like", comment["id"].as_str().unwrap());
    let (_, like) = call(&app, Method::POST, &uri, None).await;
    assert_eq!(like, json!({ "likes": 1, "isLiked": true }));

    let (status, _) = call(&app, Method::POST, "/reactions/zzz/like", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn friend_request_flow() {
    let app = app();
    sign_in(&app, "alice").await;

    let (_, view) = call(
        &app,
        Method::POST,
        "/friends/incoming",
        Some(json!({ "userId": "77", "username": "seven" })),
    )
    .await;
    assert_eq!(view["pendingRequests"].as_array().unwrap().len(), 1);

    let (_, view) = call(&app, Method::POST, "/friends/77/accept", None).await;
    assert_eq!(view["pendingRequests"], json!([]));
    assert_eq!(view["friends"][0]["id"], "77");
    assert_eq!(view["friends"][0]["status"], "accepted");

    // Accepting something that was never requested changes nothing.
    let (status, again) = call(&app, Method::POST, "/friends/ghost/accept", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again, view);

    let (_, view) = call(
        &app,
        Method::POST,
        "/friends",
        Some(json!({ "userId": "abcdefgh" })),
    )
    .await;
    assert_eq!(view["sentRequests"][0]["username"], "user_abcdef");
    assert_eq!(view["sentRequests"][0]["status"], "requested");

    let (_, view) = call(&app, Method::DELETE, "/friends/77", None).await;
    assert_eq!(view["friends"], json!([]));
}

#[tokio::test]
async fn profile_edit_keeps_identity() {
    let app = app();
    let user = sign_in(&app, "alice").await;

    let (status, profile) = call(
        &app,
        Method::PUT,
        "/profile",
        Some(json!({
            "username": "alice2",
            "avatar": "https://api.dicebear.com/7.x/avataaars/svg?seed=profile3"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["user"]["id"], user["id"]);
    assert_eq!(profile["user"]["username"], "alice2");
    assert_eq!(profile["avatarChoices"].as_array().unwrap().len(), 6);
    assert_eq!(profile["friends"], json!([]));
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = app();
    sign_in(&app, "alice").await;

    let (status, body) = call(&app, Method::POST, "/auth/logout", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, session) = call(&app, Method::GET, "/auth/session", None).await;
    assert_eq!(session["isAuthenticated"], json!(false));
    let (status, _) = call(&app, Method::GET, "/profile", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn guest_login_is_anonymous() {
    let app = app();
    let (status, session) = call(&app, Method::POST, "/auth/guest", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["user"]["isAnonymous"], json!(true));
    assert!(
        session["user"]["username"]
            .as_str()
            .unwrap()
            .starts_with("anonymous-")
    );
}

#[tokio::test]
async fn blank_username_is_refused() {
    let app = app();
    let (status, _) = call(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "username": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn theme_toggles() {
    let app = app();
    let (_, settings) = call(&app, Method::GET, "/settings", None).await;
    assert_eq!(settings["theme"], "light");
    assert_eq!(settings["appName"], "ReactFact");

    let (_, settings) = call(&app, Method::POST, "/settings/theme", None).await;
    assert_eq!(settings["theme"], "dark");
}

#[tokio::test]
async fn gif_tabs_use_fallback_catalogue() {
    let app = app();

    let (status, panel) = call(&app, Method::GET, "/gifs/tabs/science", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(panel["tab"], "science");
    assert_eq!(panel["loading"], json!(false));
    assert_eq!(panel["gifs"][0]["id"], "fb-science-1");

    let (_, panel) = call(&app, Method::GET, "/gifs/search?q=funny", None).await;
    assert_eq!(panel["query"], "funny");
    assert_eq!(panel["gifs"][0]["id"], "fb-funny-1");

    let (_, panel) = call(&app, Method::GET, "/gifs", None).await;
    assert_eq!(panel["gifs"][0]["id"], "fb-funny-1");

    let (status, body) = call(&app, Method::GET, "/gifs/tabs/bogus", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("bogus"));

    // A refused tab leaves the panel as it was.
    let (_, panel) = call(&app, Method::GET, "/gifs", None).await;
    assert_eq!(panel["query"], "funny");
}

#[tokio::test]
async fn malformed_bodies_get_json_errors() {
    let app = app();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"username\": "))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = call(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "username": "alice", "password": "hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("password"));

    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .body(Body::from(r#"{"username":"alice"}"#))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body["error"].is_string());

    let (_, session) = call(&app, Method::GET, "/auth/session", None).await;
    assert_eq!(session["isAuthenticated"], json!(false));
}

#[tokio::test]
async fn bad_sort_query_gets_json_error() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/reactions?sort=loudest", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn blank_friend_ids_are_refused() {
    let app = app();
    sign_in(&app, "alice").await;

    let (status, body) = call(&app, Method::POST, "/friends", Some(json!({ "userId": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "user id must not be empty");

    let (status, _) = call(
        &app,
        Method::POST,
        "/friends/incoming",
        Some(json!({ "userId": "", "username": "nobody" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, view) = call(&app, Method::GET, "/friends", None).await;
    assert_eq!(view["sentRequests"], json!([]));
    assert_eq!(view["pendingRequests"], json!([]));
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "not found" }));
}
