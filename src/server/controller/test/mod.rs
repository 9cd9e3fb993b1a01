use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use crate::server::{
    router::router,
    service::test::fakes::{pipeline, FakeDemoApi, RecordingNotifier},
    state::AppState,
};

mod query;

fn app(
    db: &DatabaseConnection,
    demo_api: Arc<FakeDemoApi>,
    notifier: Arc<RecordingNotifier>,
) -> Router {
    router().with_state(AppState::new(db.clone(), pipeline(db, demo_api, notifier)))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let test = test_utils::builder::TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db, Default::default(), Default::default())
        .oneshot(get("/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}
