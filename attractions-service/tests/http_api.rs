//! End-to-end tests for the attractions HTTP API.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use std::io::Write;

use attractions_service::config::Config;
use axum::http::{Method, StatusCode};
use common::{get, harness, harness_with, send};
use serde_json::{json, Value};

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|attraction| attraction["id"].as_i64().expect("numeric id"))
        .collect()
}

#[tokio::test]
async fn list_returns_every_record_in_storage_order() {
    let h = harness().await;

    let response = get(&h.router, "/attractions").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));
    assert_eq!(ids(&response.json()), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn list_is_idempotent() {
    let h = harness().await;

    let first = get(&h.router, "/attractions").await;
    let second = get(&h.router, "/attractions").await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn get_by_id_returns_the_exact_record() {
    let h = harness().await;

    let response = get(&h.router, "/attractions/1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "id": 1,
            "title": "Dunn's River Falls",
            "location": "Ocho Rios",
            "detail_link": "https://visit.test/dunns-river",
            "page": 1,
            "address": "Main Road, Ocho Rios",
            "phone": "876-555-0101",
            "description": "Terraced waterfall you can climb"
        })
    );
}

#[tokio::test]
async fn empty_and_null_details_are_omitted() {
    let h = harness().await;

    let blank = get(&h.router, "/attractions/3").await.json();
    let null = get(&h.router, "/attractions/4").await.json();

    for key in ["address", "phone", "description"] {
        assert!(blank.get(key).is_none(), "{key} present on blank record");
    }
    assert!(null.get("address").is_none());
    assert!(null.get("phone").is_none());
    assert_eq!(null["description"], "Cliff diving at 100% sunset");
}

#[tokio::test]
async fn missing_id_is_404() {
    let h = harness().await;

    let response = get(&h.router, "/attractions/999").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["status"], 404);
}

#[tokio::test]
async fn non_digit_id_is_404_like_an_unknown_route() {
    let h = harness().await;

    for uri in [
        "/attractions/abc",
        "/attractions/-1",
        "/attractions/1abc",
        "/attractions/99999999999999999999",
        "/attractions/abc/location",
    ] {
        let response = get(&h.router, uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(response.json()["code"], "NOT_FOUND", "{uri}");
    }
}

#[tokio::test]
async fn search_requires_q() {
    let h = harness().await;

    for uri in ["/search", "/search?q=", "/search?other=falls"] {
        let response = get(&h.router, uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            response.json()["error"],
            "Query parameter 'q' is required",
            "{uri}"
        );
    }
}

#[tokio::test]
async fn search_uses_the_first_q() {
    let h = harness().await;

    let response = get(&h.router, "/search?q=falls&q=ocho").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.json()), vec![1]);

    let response = get(&h.router, "/search?page=2&q=kingston&q=").await;
    assert_eq!(ids(&response.json()), vec![2]);
}

#[tokio::test]
async fn search_without_matches_is_an_empty_array() {
    let h = harness().await;

    let response = get(&h.router, "/search?q=glacier").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn search_matches_substrings_ignoring_case() {
    let h = harness().await;

    let response = get(&h.router, "/search?q=FALLS").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.json()), vec![1]);

    let response = get(&h.router, "/search?q=ocho%20rios").await;
    assert_eq!(ids(&response.json()), vec![1, 3]);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let h = harness().await;

    let percent = get(&h.router, "/search?q=%25").await;
    assert_eq!(ids(&percent.json()), vec![4]);

    let underscore = get(&h.router, "/search?q=_").await;
    assert_eq!(underscore.json(), json!([]));
}

#[tokio::test]
async fn search_text_is_never_spliced_into_sql() {
    let h = harness().await;

    let response = get(&h.router, "/search?q=%27%20OR%20%271%27%3D%271").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));

    let response = get(
        &h.router,
        "/search?q=x%27%3B%20DROP%20TABLE%20attractions%3B%20--",
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let list = get(&h.router, "/attractions").await;
    assert_eq!(ids(&list.json()), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn allowlisted_column_returns_single_key_object() {
    let h = harness().await;

    let response = get(&h.router, "/attractions/1/location").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "location": "Ocho Rios" }));

    let response = get(&h.router, "/attractions/2/address").await;
    assert_eq!(response.json(), json!({ "address": "56 Hope Road, Kingston" }));
}

#[tokio::test]
async fn column_value_is_always_a_string() {
    let h = harness().await;

    let blank = get(&h.router, "/attractions/3/address").await;
    assert_eq!(blank.status, StatusCode::OK);
    assert_eq!(blank.json(), json!({ "address": "" }));

    let null = get(&h.router, "/attractions/4/address").await;
    assert_eq!(null.status, StatusCode::OK);
    assert_eq!(null.json(), json!({ "address": "" }));
}

#[tokio::test]
async fn column_outside_allowlist_is_400() {
    let h = harness().await;

    for uri in [
        "/attractions/1/phone",
        "/attractions/1/title",
        "/attractions/1/Location",
        "/attractions/1/id%3B%20DROP%20TABLE%20attractions",
        "/attractions/999/phone",
    ] {
        let response = get(&h.router, uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(response.json()["error"], "Invalid column name", "{uri}");
    }
}

#[tokio::test]
async fn column_of_missing_record_is_404() {
    let h = harness().await;

    let response = get(&h.router, "/attractions/999/location").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let h = harness().await;

    for uri in ["/nonexistent", "/attractions/", "/attractions/1/location/extra"] {
        let response = get(&h.router, uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(
            response.content_type.as_deref(),
            Some("application/json"),
            "{uri}"
        );
    }
}

#[tokio::test]
async fn wrong_method_on_known_path_is_405() {
    let h = harness().await;

    for (method, uri) in [
        (Method::POST, "/attractions"),
        (Method::DELETE, "/attractions/1"),
        (Method::PUT, "/attractions/1/location"),
        (Method::POST, "/search"),
    ] {
        let response = send(&h.router, method.clone(), uri).await;
        assert_eq!(
            response.status,
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} {uri}"
        );
        assert_eq!(response.json()["code"], "METHOD_NOT_ALLOWED");
    }

    let response = send(&h.router, Method::POST, "/nonexistent").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_on_non_digit_id_is_404() {
    let h = harness().await;

    for (method, uri) in [
        (Method::POST, "/attractions/abc"),
        (Method::DELETE, "/attractions/abc/location"),
        (Method::PUT, "/attractions/-1"),
    ] {
        let response = send(&h.router, method.clone(), uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(response.json()["code"], "NOT_FOUND", "{method} {uri}");
    }
}

#[tokio::test]
async fn robots_txt_is_served_verbatim() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "User-agent: *\nDisallow: /search\n").expect("write robots");

    let mut config = Config::default();
    config.static_files.robots_txt = file.path().to_path_buf();
    let h = harness_with(config).await;

    let response = get(&h.router, "/robots.txt").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "User-agent: *\nDisallow: /search\n");
}

#[tokio::test]
async fn missing_robots_txt_is_404() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = Config::default();
    config.static_files.robots_txt = dir.path().join("robots.txt");
    let h = harness_with(config).await;

    let response = get(&h.router, "/robots.txt").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn datastore_failure_is_a_generic_500() {
    let h = harness().await;
    h.pool.close().await;

    for uri in [
        "/attractions",
        "/attractions/1",
        "/search?q=falls",
        "/attractions/1/location",
    ] {
        let response = get(&h.router, uri).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(
            response.json(),
            json!({
                "error": "Internal server error",
                "code": "INTERNAL_ERROR",
                "status": 500
            }),
            "{uri}"
        );
    }
}

#[tokio::test]
async fn readiness_tracks_the_datastore() {
    let h = harness().await;

    assert_eq!(get(&h.router, "/health").await.status, StatusCode::OK);
    assert_eq!(get(&h.router, "/ready").await.status, StatusCode::OK);

    h.pool.close().await;

    assert_eq!(get(&h.router, "/health").await.status, StatusCode::OK);
    assert_eq!(
        get(&h.router, "/ready").await.status,
        StatusCode::SERVICE_UNAVAILABLE
    );
}
