//! 路由装配

use axum::{middleware, response::Redirect, routing::get, Router};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::app::health::health_check;
use crate::app::users::{
    handler::{create_user, get_user, list_users, AppState},
    UserStore,
};
use crate::infrastructure::HttpConfig;
use crate::web::middleware::request_logging_middleware;

/// 不带前缀和中间件的 API 路由
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user))
        .route("/health", get(health_check))
        .with_state(state)
}

/// 完整应用：API 挂载到配置的前缀下，根路径重定向到健康检查
pub fn build_app(store: UserStore, config: &HttpConfig) -> Router {
    let api = api_router(AppState::new(store));
    let base = config.base_path();
    let health_path = format!("{}/health", base);

    let router = if base.is_empty() {
        api
    } else {
        Router::new().nest(&base, api)
    };

    router
        .route(
            "/",
            get(move || {
                let target = health_path.clone();
                async move { Redirect::permanent(&target) }
            }),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        // 访问日志由 request_logging_middleware 输出，TraceLayer 只保留 debug 级别
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeout_seconds)))
}
