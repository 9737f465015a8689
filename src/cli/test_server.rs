//! In-process users API for CLI integration tests.

use axum::http::{StatusCode, header};
use axum::routing::get;
use axum::{Json, Router, extract::Query};
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::users::UserPage;
use crate::users::fixtures::page_of;

#[derive(Deserialize)]
struct UsersParams {
    limit: Option<u32>,
    skip: Option<u64>,
}

async fn list_users(Query(params): Query<UsersParams>) -> Json<UserPage> {
    Json(page_of(params.limit.unwrap_or(30), params.skip.unwrap_or(0)))
}

pub fn init_crypto() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

async fn serve(app: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (url, handle)
}

/// Serves the 25-user fixture on `GET /users?limit=&skip=`.
pub async fn spawn_test_server() -> (String, tokio::task::JoinHandle<()>) {
    serve(Router::new().route("/users", get(list_users))).await
}

/// Answers every `/users` request with `status` and a plain-text body.
pub async fn spawn_failing_server(status: StatusCode) -> (String, tokio::task::JoinHandle<()>) {
    let app = Router::new().route("/users", get(move || async move { (status, "upstream down") }));
    serve(app).await
}

/// Answers `/users` with JSON that does not match the users shape.
pub async fn spawn_malformed_server() -> (String, tokio::task::JoinHandle<()>) {
    let app = Router::new().route(
        "/users",
        get(|| async { ([(header::CONTENT_TYPE, "application/json")], r#"{"users": 42}"#) }),
    );
    serve(app).await
}
