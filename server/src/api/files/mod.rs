//! File Upload API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/files", get(handler::list).post(handler::create))
        .route("/api/files/{id}", delete(handler::delete))
}
