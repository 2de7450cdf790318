//! API 路由模块
//!
//! # 结构
//!
//! - [`admin`] - 管理员登录接口
//! - [`orders`] - 打印订单接口 (创建公开, 管理需认证)
//! - [`members`] - 会员注册接口
//! - [`files`] - 文件上传接口
//! - [`blobs`] - Blob 下载接口
//! - [`health`] - 健康检查

pub mod admin;
pub mod blobs;
pub mod files;
pub mod health;
pub mod members;
pub mod orders;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered
///
/// Needs the state up front because the admin gate middleware closes over
/// the configured credentials.
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        // Admin login - public route
        .merge(admin::router())
        // Orders - creation public, management behind the admin gate
        .merge(orders::router(state))
        // Members - public CRUD
        .merge(members::router())
        // File uploads - public CRUD
        .merge(files::router())
        // Blob downloads - public route
        .merge(blobs::router())
        // Health - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router(state)
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // Request size ceiling - transport boundary, not per handler
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
}
