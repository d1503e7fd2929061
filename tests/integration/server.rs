//! HTTP routes over the shipped data.

use super::common::DATA_INDEX;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use whisker::server::router;
use whisker::{SearchOptions, SearchService};

fn app(options: SearchOptions) -> Router {
    router(SearchService::with_index((*DATA_INDEX).clone()), options)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_search_response_shape() {
    let (status, body) = get(app(SearchOptions::default()), "/search?q=chatty").await;
    assert_eq!(status, StatusCode::OK);

    let results: Value = serde_json::from_str(&body).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 5);

    let top = &results[0];
    assert_eq!(top["key"], "Siamese");
    assert_eq!(top["spotlight"], "talkative");
    assert!(top["totalScore"].as_f64().unwrap() > 1.0e5);
    assert_eq!(top["did_you_know"], "Siamese cats are very talkative.");
    assert!(top["description"].is_string());
    assert!(top.get("breed").is_none());
    assert_eq!(top["title"]["excerpt"], "... cats are very talkative.");
    assert_eq!(top["title"]["excerpt1"], "... cats are very ");
}

#[tokio::test]
async fn test_url_encoded_query() {
    let (status, body) = get(app(SearchOptions::default()), "/search?q=maine%20coon").await;
    assert_eq!(status, StatusCode::OK);
    let results: Value = serde_json::from_str(&body).unwrap();
    assert!(!results.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_punctuation_query_is_empty_array() {
    let (status, body) = get(app(SearchOptions::default()), "/search?q=%3F%3F").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_query_length_limit() {
    let options = SearchOptions {
        max_query_len: 5,
        ..SearchOptions::default()
    };
    let (status, body) = get(app(options), "/search?q=talkative").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Bad request");
}

#[tokio::test]
async fn test_failed_build_reports_unavailable() {
    let service = SearchService::new();
    service.mark_failed("catalog missing");
    let app = router(service, SearchOptions::default());

    let (status, body) = get(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("failed"));

    let (status, _) = get(app, "/search?q=cats").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
