use std::collections::BTreeMap;

use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, User};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

#[tokio::test]
async fn ok_returns_json() {
    let resp = app().oneshot(get("/ok")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], br#"{"ok":true}"#);
}

#[tokio::test]
async fn missing_returns_plain_text_404() {
    let resp = app().oneshot(get("/missing")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"not found");
}

#[tokio::test]
async fn headers_are_echoed_and_joined() {
    let req = Request::builder()
        .uri("/headers")
        .header("x-a", "1")
        .header("x-a", "2")
        .header("content-type", "application/json")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let headers: BTreeMap<String, String> = body_json(resp).await;
    assert_eq!(headers["x-a"], "1, 2");
    assert_eq!(headers["content-type"], "application/json");
}

#[tokio::test]
async fn user_is_built_from_path() {
    let resp = app().oneshot(get("/users/7")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let user: User = body_json(resp).await;
    assert_eq!(
        user,
        User {
            id: 7,
            name: "user-7".to_string()
        }
    );
}

#[tokio::test]
async fn user_with_bad_id_returns_400() {
    let resp = app().oneshot(get("/users/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn slow_with_zero_delay_answers() {
    let resp = app().oneshot(get("/slow/0")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_returns_204_without_body() {
    let resp = app().oneshot(get("/empty")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}
