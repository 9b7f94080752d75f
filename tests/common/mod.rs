#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use persona_tagger::core::{BackendReply, Classifier, ClassificationPrompt};
use persona_tagger::{router, AppState, ClassificationGateway, Result, TaggerError};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Deterministic classifier stub: answers with a fixed label or always fails.
pub struct StubClassifier {
    label: Option<String>,
    calls: AtomicUsize,
}

impl StubClassifier {
    pub fn answering(label: &str) -> Arc<Self> {
        Arc::new(Self {
            label: Some(label.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            label: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for StubClassifier {
    async fn classify(&self, _prompt: &ClassificationPrompt) -> Result<BackendReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.label {
            Some(label) => Ok(BackendReply {
                text: label.clone(),
                raw: json!({"output": [{"type": "message", "content": [{"text": label}]}]}),
            }),
            None => Err(TaggerError::backend_unavailable("stubbed outage")),
        }
    }
}

pub fn app_with(classifier: Arc<StubClassifier>) -> axum::Router {
    router(AppState::new(ClassificationGateway::new(classifier)))
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}
