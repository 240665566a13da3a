//! Server test utilities.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use gamedex_core::config::AppConfig;
use gamedex_server::{AppState, create_router};
use gamedex_store::{MemoryStore, RecordStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// A test server wrapper over the in-memory record store.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: axum::Router,
    pub state: AppState,
}

#[allow(dead_code)]
impl TestServer {
    /// Create a new test server with an empty store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Create a test server over the given store.
    pub fn with_store(store: Arc<dyn RecordStore>) -> Self {
        let state = AppState::new(AppConfig::for_testing(), store);
        let router = create_router(state.clone());

        Self { router, state }
    }

    /// Send a request and decode the JSON response body.
    ///
    /// Empty or non-JSON bodies decode to `Value::Null`.
    pub async fn json_request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(v) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(serde_json::to_vec(&v).unwrap())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).unwrap()).await
    }

    /// Send a prepared request and decode the JSON response body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}
