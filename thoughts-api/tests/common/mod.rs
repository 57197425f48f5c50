//! Common test utilities for integration tests
//!
//! This module provides shared infrastructure for integration tests:
//! - A router over a fresh in-memory store per test
//! - Request helpers returning status plus parsed JSON body
//! - Signup helper yielding a bearer token

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use thoughts_api::app::{build_router, AppState};
use thoughts_api::config::{ApiConfig, Config, SeedConfig};
use thoughts_shared::store::memory::MemoryStore;
use tower::ServiceExt;

/// Test context containing all necessary resources
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a context over an empty in-memory store
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::with_stores(store.clone(), store.clone(), test_config());

        Self {
            store,
            app: build_router(state),
        }
    }

    /// Sends a request and returns the status and JSON body
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let body = body.map(|b| b.to_string());
        self.raw_request(method, uri, token.map(|t| format!("Bearer {}", t)), body)
            .await
    }

    /// Sends a request with a verbatim Authorization header and body text
    pub async fn raw_request(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<String>,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(authorization) = authorization {
            builder = builder.header(header::AUTHORIZATION, authorization);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                panic!(
                    "Response body is not JSON ({}): {}",
                    e,
                    String::from_utf8_lossy(&bytes)
                )
            })
        };

        (status, json)
    }

    /// Signs up a user and returns their access token
    pub async fn signup(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/user/signup",
                None,
                Some(serde_json::json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "signup failed: {}", body);

        body["response"]["accessToken"]
            .as_str()
            .expect("accessToken missing")
            .to_string()
    }

    /// Creates a thought and returns its id
    pub async fn create_thought(&self, token: &str, message: &str) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/thoughts",
                Some(token),
                Some(serde_json::json!({ "message": message })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);

        body["response"]["id"]
            .as_str()
            .expect("id missing")
            .to_string()
    }
}

pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
        },
        database: None,
        seed: SeedConfig::default(),
    }
}

/// Asserts the envelope shape shared by every response
pub fn assert_envelope(body: &Value, success: bool) {
    assert_eq!(body["success"], Value::Bool(success), "body: {}", body);
    assert!(body["message"].is_string(), "body: {}", body);
    assert!(body.get("response").is_some(), "body: {}", body);
}
