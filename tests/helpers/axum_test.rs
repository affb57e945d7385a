// ABOUTME: In-process HTTP client for exercising the full router in integration tests
// ABOUTME: Sends requests with tower oneshot and decodes JSON bodies and error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use next_good_day::resources::ServerResources;
use next_good_day::server::build_router;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tower::ServiceExt;

/// Router-backed client; every request runs against a clone of the same router
#[derive(Clone)]
pub struct TestClient {
    router: Router,
}

impl TestClient {
    /// Build the production router over the given resources
    pub fn new(resources: &Arc<ServerResources>) -> Self {
        Self {
            router: build_router(Arc::clone(resources)),
        }
    }

    /// GET `uri`
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    /// POST `body` as JSON to `uri`
    pub async fn post_json<T: Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let body = serde_json::to_string(body).expect("Failed to serialize JSON");
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(Body::from(body.unwrap_or_default()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec();
        TestResponse { status, body }
    }
}

/// Fully buffered response
pub struct TestResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl TestResponse {
    /// Status code as a number for easy assertion
    pub const fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Failed to decode JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    /// `error.code` of an error body, e.g. `RESOURCE_NOT_FOUND`
    pub fn error_code(&self) -> String {
        let body: Value = self.json();
        body["error"]["code"]
            .as_str()
            .unwrap_or_else(|| panic!("Not an error body: {body}"))
            .to_owned()
    }
}
