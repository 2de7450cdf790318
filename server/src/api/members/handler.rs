//! Member API Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{Member, MemberCreate};
use crate::utils::extract::Json;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Serialize)]
pub struct CreateMemberResponse {
    pub message: String,
    pub id: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/members - 获取所有会员
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Member>>> {
    let members = state.members.find_all().await?;
    Ok(Json(members))
}

/// POST /api/members - 注册会员
///
/// Email uniqueness is backed by the store-level unique index; a duplicate
/// comes back as 400 whether the pre-check or the index catches it.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MemberCreate>,
) -> AppResult<(StatusCode, Json<CreateMemberResponse>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.company, "company", MAX_NAME_LEN)?;

    let member = state.members.create(payload).await?;

    let id = member
        .id
        .as_ref()
        .map(|t| t.to_string())
        .unwrap_or_default();
    tracing::info!(member_id = %id, "Member created");

    Ok((
        StatusCode::CREATED,
        Json(CreateMemberResponse {
            message: "Member created successfully".to_string(),
            id,
        }),
    ))
}

/// DELETE /api/members/:id - 删除会员
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = state.members.delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Member {id}")));
    }

    tracing::info!(member_id = %id, "Member deleted");
    Ok(Json(MessageResponse {
        message: "Member deleted successfully".to_string(),
    }))
}
