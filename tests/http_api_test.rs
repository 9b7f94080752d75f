mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{app_with, post_json, send, StubClassifier};
use serde_json::json;

#[tokio::test]
async fn test_home_returns_fixed_message() {
    let app = app_with(StubClassifier::answering("Tech"));

    let (status, body) = send(
        &app,
        Request::builder().uri("/").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello, Flask!"}));
}

#[tokio::test]
async fn test_home_ignores_headers_and_body() {
    let classifier = StubClassifier::answering("Tech");
    let app = app_with(classifier.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .header("content-type", "text/plain")
        .header("x-anything", "whatever")
        .body(Body::from("not json at all"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello, Flask!"}));
    assert_eq!(classifier.calls(), 0);
}

#[tokio::test]
async fn test_persona_echoes_request_body() {
    let classifier = StubClassifier::answering("Beauty");
    let app = app_with(classifier.clone());

    let (status, body) = send(&app, post_json("/create_influencer_persona", r#"{"a": 1}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"a": 1}));
    assert_eq!(classifier.calls(), 1);
}

#[tokio::test]
async fn test_persona_echoes_any_json_value() {
    let app = app_with(StubClassifier::answering("Gaming"));

    for payload in [
        json!({"influencer_persona": "Speedrunner", "platforms": ["twitch", "youtube"]}),
        json!([1, 2, 3]),
        json!("just a string"),
        json!(null),
        json!({"nested": {"deep": {"value": 1.5}}}),
    ] {
        let (status, body) = send(
            &app,
            post_json("/create_influencer_persona", &payload.to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, payload);
    }
}

#[tokio::test]
async fn test_advert_response_has_exactly_category_and_message() {
    let app = app_with(StubClassifier::answering("Travel"));

    let (status, body) = send(&app, post_json("/create_advert", r#"{"anything": true}"#)).await;

    assert_eq!(status, StatusCode::OK);
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["category"], "Travel");
    assert_eq!(object["message"], "Advert category assigned successfully.");
}

#[tokio::test]
async fn test_advert_category_is_trimmed() {
    let app = app_with(StubClassifier::answering("\n  Business/Finance  \n"));

    let (_, body) = send(
        &app,
        post_json("/create_advert", r#"{"advert_text": "Index funds explained"}"#),
    )
    .await;

    assert_eq!(body["category"], "Business/Finance");
}

#[tokio::test]
async fn test_backend_failure_is_server_error_on_both_endpoints() {
    let app = app_with(StubClassifier::failing());

    for uri in ["/create_advert", "/create_influencer_persona"] {
        let (status, body) = send(&app, post_json(uri, "{}")).await;
        assert!(status.is_server_error(), "{} returned {}", uri, status);
        assert_eq!(body["error"], true);
        assert_eq!(body["error_code"], "BACKEND_UNAVAILABLE");
        assert!(body.get("category").is_none());
    }
}

#[tokio::test]
async fn test_identical_requests_produce_identical_responses() {
    let classifier = StubClassifier::answering("Food");
    let app = app_with(classifier.clone());
    let payload = r#"{"advert_text": "Best ramen in town"}"#;

    let first = send(&app, post_json("/create_advert", payload)).await;
    let second = send(&app, post_json("/create_advert", payload)).await;

    assert_eq!(first, second);
    assert_eq!(classifier.calls(), 2);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let classifier = StubClassifier::answering("Tech");
    let app = app_with(classifier.clone());

    let (status, body) = send(&app, post_json("/create_advert", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "INVALID_REQUEST");
    assert_eq!(classifier.calls(), 0);
}

#[tokio::test]
async fn test_non_string_advert_text_is_bad_request() {
    let app = app_with(StubClassifier::answering("Tech"));

    let (status, body) = send(&app, post_json("/create_advert", r#"{"advert_text": ["a"]}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("advert_text"));
}

#[tokio::test]
async fn test_categories_endpoint_lists_taxonomy() {
    let app = app_with(StubClassifier::answering("Tech"));

    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/categories")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 12);
    assert!(categories.contains(&json!("Fitness & Health")));
    assert!(categories.contains(&json!("Other")));
}
