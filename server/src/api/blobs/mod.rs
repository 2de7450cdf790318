//! Blob Download Routes
//!
//! Serves stored payloads back to clients. Documents reference blobs by
//! `/api/blobs/{hash}`; the declared content type lives on the owning
//! document, so blobs themselves are served as opaque bytes.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use http::header;

use crate::core::ServerState;
use crate::utils::AppError;
use crate::utils::error::ErrorBody;

enum BlobResponse {
    Ok(Bytes),
    NotFound,
}

impl IntoResponse for BlobResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            BlobResponse::Ok(content) => (
                http::StatusCode::OK,
                [(header::CONTENT_TYPE, "application/octet-stream")],
                content,
            )
                .into_response(),
            BlobResponse::NotFound => (
                http::StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "Blob not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

async fn serve_blob(
    State(state): State<ServerState>,
    Path(hash): Path<String>,
) -> Result<BlobResponse, AppError> {
    match state.blobs.read(&hash).await? {
        Some(content) => Ok(BlobResponse::Ok(content.into())),
        None => Ok(BlobResponse::NotFound),
    }
}

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/blobs/{hash}", get(serve_blob))
}
