//! # 内存用户服务
//!
//! 基于 Axum 的用户 CRUD 服务，数据保存在进程内存中：
//! - `app`：用户模型、校验器、内存存储与处理器
//! - `web`：错误映射、JSON 编码、请求日志中间件
//! - `infrastructure`：环境配置与日志初始化
//! - `routes`：路由装配

pub mod app;
pub mod infrastructure;
pub mod routes;
pub mod web;

pub use app::users::{CreateUserRequest, StoreError, User, UserStore, ValidationError};
pub use web::ApiError;
