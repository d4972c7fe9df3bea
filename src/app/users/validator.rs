//! 用户数据校验
//!
//! 纯函数，无副作用。姓名不能为空白，邮箱需满足 `local@domain.tld` 形状，
//! 不做可达性检查。

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use super::model::CreateUserRequest;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid name")]
    InvalidName,
    #[error("invalid email")]
    InvalidEmail,
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// 校验候选记录，姓名优先于邮箱报告
pub fn validate(candidate: &CreateUserRequest) -> Result<(), ValidationError> {
    if is_blank(&candidate.name) {
        return Err(ValidationError::InvalidName);
    }
    if is_blank(&candidate.email) || !is_valid_email(&candidate.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
