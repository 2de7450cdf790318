//! JSON extractor matching the API's error contract
//!
//! axum 自带的 `Json` 提取器在请求体无法反序列化时返回 422 纯文本；
//! 本 API 所有客户端输入错误统一为 400 `{"error": msg}`，
//! 因此 handler 使用这个包装器。响应侧行为与 `axum::Json` 相同。

use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::utils::AppError;

pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Json(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
