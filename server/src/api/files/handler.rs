//! File Upload API Handlers
//!
//! The simpler submission path: customer metadata plus one print-ready file.
//! No payment slip, no pricing.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{PrintFile, PrintFileCreate};
use crate::storage::BlobStore;
use crate::utils::extract::Json;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_FILENAME_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, parse_quantity,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Serialize)]
pub struct CreateFileResponse {
    pub message: String,
    pub id: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/files - 获取所有上传文件
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PrintFile>>> {
    let files = state.files.find_all().await?;
    Ok(Json(files))
}

/// POST /api/files - 上传打印文件
///
/// Multipart fields: customerName, customerEmail, printType, quantity,
/// paperSize, file.
pub async fn create(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<CreateFileResponse>)> {
    let mut customer_name = None;
    let mut customer_email = None;
    let mut print_type = None;
    let mut quantity = None;
    let mut paper_size = None;
    let mut file_name = None;
    let mut file_type = None;
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "customerName" => customer_name = Some(field.text().await?),
            "customerEmail" => customer_email = Some(field.text().await?),
            "printType" => print_type = Some(field.text().await?),
            "quantity" => quantity = Some(field.text().await?),
            "paperSize" => paper_size = Some(field.text().await?),
            "file" => {
                file_name = Some(
                    field
                        .file_name()
                        .unwrap_or("upload")
                        .chars()
                        .take(MAX_FILENAME_LEN)
                        .collect(),
                );
                file_type = Some(
                    field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string(),
                );
                file_bytes = Some(field.bytes().await?.to_vec());
            }
            _ => {
                field.bytes().await?;
            }
        }
    }

    let bytes = file_bytes.ok_or_else(|| AppError::validation("No file provided"))?;
    if bytes.is_empty() {
        return Err(AppError::validation("Uploaded file is empty"));
    }

    let customer_name = customer_name.unwrap_or_default();
    let customer_email = customer_email.unwrap_or_default();
    let print_type = print_type.unwrap_or_default();
    let paper_size = paper_size.unwrap_or_default();
    validate_required_text(&customer_name, "customerName", MAX_NAME_LEN)?;
    validate_required_text(&customer_email, "customerEmail", MAX_EMAIL_LEN)?;
    validate_required_text(&print_type, "printType", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&paper_size, "paperSize", MAX_SHORT_TEXT_LEN)?;
    let quantity = parse_quantity(quantity.as_deref().unwrap_or(""), "quantity")?;

    let hash = state.blobs.store(&bytes).await?;

    let file = state
        .files
        .create(PrintFileCreate {
            customer_name,
            customer_email,
            file_name: file_name.unwrap_or_else(|| "upload".to_string()),
            file_type: file_type.unwrap_or_else(|| "application/octet-stream".to_string()),
            print_type,
            quantity,
            paper_size,
            file_url: BlobStore::url(&hash),
        })
        .await?;

    let id = file.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    tracing::info!(file_id = %id, file = %file.file_name, "File uploaded");

    Ok((
        StatusCode::CREATED,
        Json(CreateFileResponse {
            message: "File uploaded successfully".to_string(),
            id,
        }),
    ))
}

/// DELETE /api/files/:id - 删除上传文件
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = state.files.delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("File {id}")));
    }

    tracing::info!(file_id = %id, "File deleted");
    Ok(Json(MessageResponse {
        message: "File deleted successfully".to_string(),
    }))
}
