//! Admin gate middleware
//!
//! Decodes the `Authorization: Basic` header and compares the embedded pair
//! against the configured credentials before the wrapped handler runs.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::core::ServerState;
use crate::utils::AppError;

/// Require the admin credential pair on every request through this layer
///
/// # Errors
///
/// | Case | HTTP |
/// |------|------|
/// | 缺少 Authorization 头 / 非 Basic | 401 "Authentication required" |
/// | 凭证不匹配 | 401 "Invalid credentials" |
pub async fn require_admin(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let header = match auth_header {
        Some(h) if h.starts_with("Basic ") => h,
        _ => {
            tracing::warn!(uri = %req.uri(), "Admin gate: missing Basic authorization");
            return Err(AppError::unauthorized("Authentication required"));
        }
    };

    if !state.admin.verify_basic_header(header) {
        tracing::warn!(uri = %req.uri(), "Admin gate: invalid credentials");
        return Err(AppError::unauthorized("Invalid credentials"));
    }

    Ok(next.run(req).await)
}
