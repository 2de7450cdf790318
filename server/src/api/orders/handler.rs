//! Order API Handlers
//!
//! The order intake pipeline: parse the multipart submission, validate,
//! derive pricing, write the two payloads to the blob store, insert one
//! document. One logical write per request, no retries.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{ColorMode, Order, OrderCreate, OrderStatusUpdate, TimeSlot};
use crate::storage::BlobStore;
use crate::utils::extract::Json;
use crate::utils::validation::{
    MAX_FILENAME_LEN, MAX_NAME_LEN, parse_quantity, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// One uploaded multipart file part
struct UploadedPart {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

async fn read_part(field: axum::extract::multipart::Field<'_>) -> Result<UploadedPart, AppError> {
    let file_name = field
        .file_name()
        .unwrap_or("upload")
        .chars()
        .take(MAX_FILENAME_LEN)
        .collect();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = field.bytes().await?.to_vec();
    Ok(UploadedPart {
        file_name,
        content_type,
        bytes,
    })
}

fn parse_time_slot(value: &str) -> Result<TimeSlot, AppError> {
    match value {
        "11:15" => Ok(TimeSlot::EarlySlot),
        "12:15" => Ok(TimeSlot::LateSlot),
        _ => Err(AppError::validation(
            "time must be one of: 11:15, 12:15".to_string(),
        )),
    }
}

fn parse_color_mode(value: &str) -> Result<ColorMode, AppError> {
    match value {
        "color" => Ok(ColorMode::Color),
        "bw" => Ok(ColorMode::Bw),
        _ => Err(AppError::validation(
            "color must be one of: color, bw".to_string(),
        )),
    }
}

#[derive(Serialize)]
pub struct CreateOrderResponse {
    pub message: String,
    pub order: Order,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/orders - 获取所有订单 (admin)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders.find_all().await?;
    Ok(Json(orders))
}

/// POST /api/orders - 顾客提交打印订单 (public)
///
/// Multipart fields: name, major, time, color, copies, file, slip.
pub async fn create(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<CreateOrderResponse>)> {
    let mut name = None;
    let mut major = None;
    let mut time = None;
    let mut color = None;
    let mut copies = None;
    let mut file: Option<UploadedPart> = None;
    let mut slip: Option<UploadedPart> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "name" => name = Some(field.text().await?),
            "major" => major = Some(field.text().await?),
            "time" => time = Some(field.text().await?),
            "color" => color = Some(field.text().await?),
            "copies" => copies = Some(field.text().await?),
            "file" => file = Some(read_part(field).await?),
            "slip" => slip = Some(read_part(field).await?),
            // Unknown parts are drained and ignored
            _ => {
                field.bytes().await?;
            }
        }
    }

    let file = file.ok_or_else(|| AppError::validation("No file uploaded"))?;
    let slip = slip.ok_or_else(|| AppError::validation("No payment slip uploaded"))?;

    let name = name.unwrap_or_default();
    let major = major.unwrap_or_default();
    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    validate_required_text(&major, "major", MAX_NAME_LEN)?;

    let time = parse_time_slot(time.as_deref().unwrap_or(""))?;
    let color = parse_color_mode(color.as_deref().unwrap_or(""))?;
    let copies = parse_quantity(copies.as_deref().unwrap_or(""), "copies")?;

    if file.bytes.is_empty() {
        return Err(AppError::validation("Uploaded file is empty"));
    }
    if slip.bytes.is_empty() {
        return Err(AppError::validation("Uploaded payment slip is empty"));
    }

    let file_hash = state.blobs.store(&file.bytes).await?;
    let slip_hash = state.blobs.store(&slip.bytes).await?;

    let order = state
        .orders
        .create(OrderCreate {
            name,
            major,
            time,
            color,
            copies,
            file_name: file.file_name,
            file_type: file.content_type,
            file_url: BlobStore::url(&file_hash),
            slip_name: slip.file_name,
            slip_type: slip.content_type,
            slip_url: BlobStore::url(&slip_hash),
        })
        .await?;

    tracing::info!(
        name = %order.name,
        file = %order.file_name,
        total_price = order.total_price,
        "New order created (with payment slip)"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            message: "Order received".to_string(),
            order,
        }),
    ))
}

/// PATCH /api/orders/:id - 更新订单状态 (admin)
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = state.orders.update_status(&id, payload.status).await?;
    Ok(Json(order))
}

/// DELETE /api/orders/:id - 删除单个订单 (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = state.orders.delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Order {id}")));
    }

    tracing::info!(order_id = %id, "Order deleted");
    Ok(Json(MessageResponse {
        message: "Order deleted".to_string(),
    }))
}

/// DELETE /api/orders - 清空所有订单 (admin)
///
/// Unconditional at this layer; confirmation lives in the presentation layer.
pub async fn clear_all(State(state): State<ServerState>) -> AppResult<Json<MessageResponse>> {
    let count = state.orders.delete_all().await?;

    tracing::info!(count, "All orders cleared");
    Ok(Json(MessageResponse {
        message: "All orders deleted".to_string(),
    }))
}
