//! 健康检查

use axum::{http::StatusCode, response::Response};
use serde::Serialize;

use crate::web::{response, ApiError};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn health_check() -> Result<Response, ApiError> {
    response::json(
        StatusCode::OK,
        &HealthStatus {
            status: "OK",
            message: "server is running",
        },
    )
}
