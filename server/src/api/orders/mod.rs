//! Order API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    // 公开路由：顾客提交订单
    let public_routes = Router::new().route("/api/orders", post(handler::create));

    // 管理路由：查看、改状态、删除，全部经过管理员认证
    let admin_routes = Router::new()
        .route("/api/orders", get(handler::list).delete(handler::clear_all))
        .route(
            "/api/orders/{id}",
            patch(handler::update_status).delete(handler::delete),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_admin));

    public_routes.merge(admin_routes)
}
