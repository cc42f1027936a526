//! Fixture HTTP server for exercising the GET client over real sockets.

use std::collections::BTreeMap;
use std::time::Duration;

use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/ok", get(ok))
        .route("/missing", get(missing))
        .route("/headers", get(echo_headers))
        .route("/users/{id}", get(get_user))
        .route("/slow/{ms}", get(slow))
        .route("/empty", get(empty))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn ok() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn missing() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}

/// Request headers as a JSON object; repeated names are joined with ", ".
async fn echo_headers(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in &headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        seen.entry(name.as_str().to_string())
            .and_modify(|joined| {
                joined.push_str(", ");
                joined.push_str(&value);
            })
            .or_insert(value);
    }
    Json(seen)
}

async fn get_user(Path(id): Path<u32>) -> Json<User> {
    Json(User {
        id,
        name: format!("user-{id}"),
    })
}

async fn slow(Path(ms): Path<u64>) -> Json<Value> {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tracing::debug!(ms, "slow response released");
    Json(json!({ "ok": true }))
}

async fn empty() -> StatusCode {
    StatusCode::NO_CONTENT
}
