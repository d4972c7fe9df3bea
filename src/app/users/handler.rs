//! 用户处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use tracing::info;

use super::{model::CreateUserRequest, store::UserStore};
use crate::web::{response, ApiError};

#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
}

impl AppState {
    pub fn new(users: UserStore) -> Self {
        Self { users }
    }
}

/// 路径中的 id 必须是正整数
pub fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::InvalidArgument(raw.to_string()))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Response, ApiError> {
    response::json(StatusCode::OK, &state.users.list())
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&raw_id)?;
    let user = state.users.get(id)?;
    response::json(StatusCode::OK, &user)
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(candidate) = payload.map_err(|e| ApiError::InvalidPayload(e.body_text()))?;
    let user = state.users.insert(candidate)?;
    info!("已创建用户 {} ({})", user.id, user.email);
    response::json(StatusCode::CREATED, &user)
}
