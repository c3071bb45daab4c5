//! Application test fixture
//!
//! Every `TestApp` owns a private in-memory SQLite database with the
//! migrations applied, so tests run in parallel without cleanup.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use onechat::backend::server::config::in_memory_database;
use onechat::backend::{create_app_with_pool, ServerConfig};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Configuration with a cheap bcrypt cost and no mailer
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(TEST_JWT_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("valid test configuration")
}

/// Router plus direct access to its database
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub config: ServerConfig,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = test_config();
        let pool = in_memory_database().await.expect("in-memory database");
        let router = create_app_with_pool(config.clone(), pool.clone()).expect("app");
        Self { router, pool, config }
    }

    /// Send one request and decode the JSON response body
    ///
    /// An empty body decodes as `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self.router.clone().oneshot(request).await.expect("infallible router");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, None).await
    }
}
