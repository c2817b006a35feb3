//! Shared harness for the HTTP integration tests

#![allow(dead_code)]

use attractions_service::{config::Config, router::router, state::AppState};
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Executor;
use tower::ServiceExt;

const SCHEMA: &str = r#"
    CREATE TABLE attractions (
        id INTEGER PRIMARY KEY,
        title TEXT NOT NULL,
        location TEXT NOT NULL,
        image BLOB,
        detail_link TEXT UNIQUE,
        page INTEGER,
        address TEXT,
        phone TEXT,
        description TEXT
    );
"#;

const SEED: &str = r#"
    INSERT INTO attractions (id, title, location, detail_link, page, address, phone, description) VALUES
        (1, 'Dunn''s River Falls', 'Ocho Rios', 'https://visit.test/dunns-river', 1,
         'Main Road, Ocho Rios', '876-555-0101', 'Terraced waterfall you can climb'),
        (2, 'Bob Marley Museum', 'Kingston', 'https://visit.test/bob-marley', 1,
         '56 Hope Road, Kingston', '', 'Former home of the reggae legend'),
        (3, 'Blue Hole', 'Ocho Rios', 'https://visit.test/blue-hole', 2,
         '', '', ''),
        (4, 'Rick''s Cafe', 'Negril', 'https://visit.test/ricks-cafe', 2,
         NULL, NULL, 'Cliff diving at 100% sunset');
"#;

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }
}

pub struct Harness {
    pub router: Router,
    pub pool: SqlitePool,
}

/// Router over a seeded single-connection in-memory database
pub async fn harness() -> Harness {
    harness_with(Config::default()).await
}

pub async fn harness_with(config: Config) -> Harness {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    pool.execute(SCHEMA).await.expect("schema");
    pool.execute(SEED).await.expect("seed");

    let state = AppState::new(config, pool.clone());
    Harness {
        router: router(state),
        pool,
    }
}

pub async fn send(router: &Router, method: Method, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("route request");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::GET, uri).await
}
