//! Shared test harness: in-memory database, real router, oneshot requests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use printdesk_server::{AdminCredentials, Config, ServerState, api};

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "test-secret";

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
    // Keeps the blob directory alive for the test's duration
    _work_dir: tempfile::TempDir,
}

pub async fn spawn_app() -> TestApp {
    let work_dir = tempfile::tempdir().unwrap();
    let config = Config {
        work_dir: work_dir.path().to_string_lossy().to_string(),
        http_port: 0,
        environment: "development".to_string(),
        admin: AdminCredentials::new(ADMIN_USER, ADMIN_PASS),
        max_body_bytes: 50 * 1024 * 1024,
    };
    let state = ServerState::initialize_in_memory(&config).await;
    let app = api::build_app(&state).with_state(state.clone());
    TestApp {
        app,
        state,
        _work_dir: work_dir,
    }
}

impl TestApp {
    /// Send a request through the router, returning status and parsed body
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let res = self.app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&bytes).to_string())
            })
        };
        (status, json)
    }

    /// Send a request and return the raw body bytes
    pub async fn send_raw(&self, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let res = self.app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }
}

/// `Authorization` header value for the configured test pair
pub fn admin_auth() -> String {
    format!(
        "Basic {}",
        BASE64.encode(format!("{ADMIN_USER}:{ADMIN_PASS}"))
    )
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn get_admin(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .header(header::AUTHORIZATION, admin_auth())
        .body(Body::empty())
        .unwrap()
}

pub fn delete_admin(path: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(path)
        .header(header::AUTHORIZATION, admin_auth())
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(path: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ── Multipart bodies ────────────────────────────────────────────────

pub const BOUNDARY: &str = "printdesk-test-boundary";

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

pub struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self { body: Vec::new() }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

pub fn post_multipart(path: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, multipart_content_type())
        .body(Body::from(body))
        .unwrap()
}
