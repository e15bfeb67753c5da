// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scripted fake of the MyDish API for integration tests.

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use mydish_client::models::Credential;
use mydish_client::services::CredentialStore;
use mydish_client::AppState;
use std::sync::{Arc, Mutex};

/// Token stored by `logged_in_app`.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";
/// User ID stored by `logged_in_app`.
#[allow(dead_code)]
pub const TEST_USER_ID: u64 = 7;

/// One request as seen by the fake server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

#[allow(dead_code)]
impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

struct Route {
    method: Method,
    path: String,
    status: StatusCode,
    body: String,
}

/// Canned responses keyed by method and path, plus a request log.
#[derive(Default)]
pub struct FakeApi {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<Recorded>>,
}

#[allow(dead_code)]
impl FakeApi {
    /// Answer `method path` with `status` and `body`.
    ///
    /// A later script for the same route replaces the earlier one.
    pub fn on(&self, method: Method, path: &str, status: u16, body: impl Into<String>) {
        let mut routes = self.routes.lock().unwrap();
        routes.retain(|r| !(r.method == method && r.path == path));
        routes.push(Route {
            method,
            path: path.to_string(),
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
        });
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

async fn scripted(
    State(api): State<Arc<FakeApi>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    api.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        authorization,
        body,
    });

    let routes = api.routes.lock().unwrap();
    match routes.iter().find(|r| r.method == method && r.path == path) {
        Some(route) => (
            route.status,
            [(header::CONTENT_TYPE, "application/json")],
            route.body.clone(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, r#"{"message":"Not found"}"#).into_response(),
    }
}

/// Start a fake API on an ephemeral port. Returns its base URL.
pub async fn spawn_fake_api() -> (String, Arc<FakeApi>) {
    let api = Arc::new(FakeApi::default());
    let app = Router::new().fallback(scripted).with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake API");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), api)
}

/// Base URL of a port nothing listens on.
#[allow(dead_code)]
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Client state with an empty in-memory credential store.
#[allow(dead_code)]
pub fn logged_out_app(base_url: &str) -> AppState {
    AppState::new(base_url, CredentialStore::in_memory())
}

/// Client state holding a valid session for user 7 ("chef").
#[allow(dead_code)]
pub fn logged_in_app(base_url: &str) -> AppState {
    let store = CredentialStore::in_memory();
    store
        .save(&Credential::new(
            TEST_TOKEN,
            Some(TEST_USER_ID),
            Some("chef".to_string()),
        ))
        .unwrap();
    AppState::new(base_url, store)
}

/// Feed card JSON for a recipe.
#[allow(dead_code)]
pub fn recipe_json(id: u64, liked: bool, like_count: u32, comment_count: u32) -> String {
    serde_json::json!({
        "id": id,
        "name": format!("Recipe {}", id),
        "description": "Tasty",
        "authorName": "chef",
        "likeCount": like_count,
        "commentCount": comment_count,
        "likedByCurrentUser": liked,
        "images": [{"id": 1, "imageUrl": "https://img.example/1.jpg"}]
    })
    .to_string()
}

/// Comment JSON.
#[allow(dead_code)]
pub fn comment_json(id: u64, text: &str, liked: bool, like_count: u32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "bodyText": text,
        "userName": "guest",
        "userId": 3,
        "created": "2025-05-14T12:30:00",
        "likeCount": like_count,
        "likedByCurrentUser": liked
    })
}
