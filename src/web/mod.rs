//! Web 核心层：错误映射、响应编码、中间件

pub mod error;
pub mod middleware;
pub mod response;

pub use error::ApiError;
