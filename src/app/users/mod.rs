//! 用户资源：模型、校验、内存存储与 HTTP 处理器

pub mod handler;
pub mod model;
pub mod store;
pub mod validator;

pub use model::{CreateUserRequest, User};
pub use store::{StoreError, UserStore};
pub use validator::ValidationError;
