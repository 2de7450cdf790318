//! Admin Login Handler

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::extract::Json;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    /// The Basic credential in base64 form; sent back verbatim as
    /// `Authorization: Basic <token>` on privileged requests
    pub token: String,
}

/// POST /api/admin/login - 管理员登录
///
/// Verifies the configured credential pair and hands back the token the
/// admin gate accepts. No session is created; the gate re-verifies the
/// credential on every request.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if !state.admin.verify(&req.username, &req.password) {
        tracing::warn!(username = %req.username, "Admin login failed");
        return Err(AppError::invalid_credentials());
    }

    tracing::info!(username = %req.username, "Admin login");

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token: state.admin.token(),
    }))
}
