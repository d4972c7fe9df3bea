//! HTTP 边界错误处理
//!
//! 存储层和校验器的错误在这里统一映射为状态码，响应体为纯文本错误信息。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use crate::app::users::{StoreError, ValidationError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("user not found")]
    NotFound(u64),
    #[error("invalid id")]
    InvalidArgument(String),
    #[error("invalid data")]
    InvalidPayload(String),
    #[error("failed to encode response")]
    EncodingFailure(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => ApiError::Validation(e),
            StoreError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidArgument(_) | ApiError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::EncodingFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::EncodingFailure(detail) => error!("响应编码失败: {}", detail),
            ApiError::InvalidArgument(raw) => debug!("非法 id: {:?}", raw),
            ApiError::InvalidPayload(detail) => debug!("请求体解码失败: {}", detail),
            ApiError::NotFound(id) => debug!("用户 {} 不存在", id),
            ApiError::Validation(e) => debug!("校验失败: {}", e),
        }

        (status, self.to_string()).into_response()
    }
}
