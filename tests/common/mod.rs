#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode},
};
use bucketlist_api::db::SqlitePool;
use serde_json::Value;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

/// A router backed by its own throwaway SQLite file.
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
    path: PathBuf,
}

impl TestApp {
    pub async fn spawn(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "bucketlist-{tag}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let database_url = format!("sqlite:{}", path.display());
        let pool = bucketlist_api::db::connect(&database_url)
            .await
            .expect("failed to open test database");
        bucketlist_api::db::init_schema(&pool)
            .await
            .expect("failed to initialize schema");

        let app = bucketlist_api::app_router(bucketlist_api::AppState::new(pool.clone()));
        Self { app, pool, path }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");

        self.app
            .clone()
            .oneshot(req)
            .await
            .expect("request failed")
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty).
    pub async fn json(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let resp = self.request(method, uri, body).await;
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body was not json")
        };
        (status, value)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub fn texas() -> Value {
    serde_json::json!({
        "user_id": 1,
        "keyword": "Texas",
        "category": "Been There Done That!",
        "rating": 5,
        "cost": 1,
        "currency": "America (United States) Dollars - USD",
        "language": "English",
        "type": "Historical",
        "notes": "test notes, texas",
        "is_public": 1
    })
}

pub fn florida() -> Value {
    serde_json::json!({
        "user_id": 1,
        "keyword": "Florida",
        "category": "On My List!",
        "rating": 4,
        "cost": 2,
        "currency": "America (United States) Dollars - USD",
        "language": "English",
        "type": "Outdoor",
        "notes": "test notes, florida",
        "is_public": 1
    })
}

pub fn new_york() -> Value {
    serde_json::json!({
        "user_id": 2,
        "keyword": "New York",
        "category": "Been There Done That!",
        "rating": 1,
        "cost": 3,
        "currency": "America (United States) Dollars - USD",
        "language": "English",
        "type": "Business",
        "notes": "Ahhh new york. The big apple.",
        "is_public": 0
    })
}

/// Seed the three fixture items through the API and return their ids.
pub async fn seed_items(app: &TestApp) -> Vec<i64> {
    let mut ids = Vec::new();
    for item in [texas(), florida(), new_york()] {
        let (status, body) = app.json("POST", "/api/items", Some(item)).await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(body["id"].as_i64().expect("created item has an id"));
    }
    ids
}
