//! 用户内存存储
//!
//! 进程内唯一的可变共享状态。所有读写都经过同一把互斥锁，
//! `insert` 在一次加锁内完成 id 分配与追加，读者不会看到半写入的集合。
//!
//! id 取自当前集合长度 + 1。只要不提供删除操作，这与单调计数器等价；
//! 一旦加入删除，必须改为独立的单调计数器。

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;

use super::model::{CreateUserRequest, User};
use super::validator::{self, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("user not found")]
    NotFound(u64),
}

/// 可克隆的存储句柄，克隆体共享同一份集合
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 带两条固定示例用户的存储
    pub fn with_seed() -> Self {
        let now = Utc::now();
        let users = vec![
            seed_user(1, "João Silva", "joao@example.com", 30, now),
            seed_user(2, "Maria Santos", "maria@example.com", 25, now),
        ];
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    /// 按插入顺序返回全部用户的快照
    pub fn list(&self) -> Vec<User> {
        self.users.lock().clone()
    }

    pub fn get(&self, id: u64) -> Result<User, StoreError> {
        self.users
            .lock()
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// 校验并追加新用户，返回入库后的记录
    ///
    /// 校验在加锁之前完成，失败时集合保持不变。
    pub fn insert(&self, candidate: CreateUserRequest) -> Result<User, StoreError> {
        let candidate = candidate.sanitized();
        validator::validate(&candidate)?;

        let now = Utc::now();
        let mut users = self.users.lock();
        let user = User {
            id: users.len() as u64 + 1,
            name: candidate.name,
            email: candidate.email,
            age: candidate.age,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    pub fn len(&self) -> usize {
        self.users.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.lock().is_empty()
    }
}

fn seed_user(id: u64, name: &str, email: &str, age: i64, now: DateTime<Utc>) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        age: Some(age),
        created_at: now,
        updated_at: now,
    }
}
