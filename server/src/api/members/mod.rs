//! Member API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/members", get(handler::list).post(handler::create))
        .route("/api/members/{id}", delete(handler::delete))
}
