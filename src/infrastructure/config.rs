//! 服务配置
//!
//! 默认值可被环境变量覆盖：`PORT`、`BIND_ADDRESS`、`API_PREFIX`、
//! `HTTP_TIMEOUT_SECONDS`、`LOG_LEVEL`。

use std::env;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("环境变量 {key} 的值无效: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// 服务配置结构
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// API 路由前缀，空字符串表示挂载在根路径
    pub api_prefix: String,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            api_prefix: "/api/v1".to_string(),
            timeout_seconds: 15,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// 规范化后的前缀：以 `/` 开头、不以 `/` 结尾，根路径返回空字符串
    pub fn base_path(&self) -> String {
        let trimmed = self.api_prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }
}

impl AppConfig {
    /// 从进程环境变量加载
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 空值视为未设置，API_PREFIX 除外
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(port) = non_empty("PORT") {
            config.http.port = parse_var("PORT", &port)?;
        }
        if let Some(addr) = non_empty("BIND_ADDRESS") {
            config.http.bind_address = addr.trim().to_string();
        }
        if let Some(prefix) = lookup("API_PREFIX") {
            config.http.api_prefix = prefix;
        }
        if let Some(timeout) = non_empty("HTTP_TIMEOUT_SECONDS") {
            config.http.timeout_seconds = parse_var("HTTP_TIMEOUT_SECONDS", &timeout)?;
            if config.http.timeout_seconds == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "HTTP_TIMEOUT_SECONDS",
                    value: timeout,
                });
            }
        }
        if let Some(level) = non_empty("LOG_LEVEL") {
            config.logging.level = level.trim().to_string();
        }

        Ok(config)
    }
}

/// `.env` 加载结果，加载失败不影响启动
#[derive(Debug)]
pub enum EnvFile {
    Loaded(PathBuf),
    Missing,
    Invalid(dotenvy::Error),
}

impl From<Result<PathBuf, dotenvy::Error>> for EnvFile {
    fn from(result: Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => EnvFile::Loaded(path),
            Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => EnvFile::Missing,
            Err(e) => EnvFile::Invalid(e),
        }
    }
}

/// 加载当前目录（或上级目录）的 `.env` 文件
pub fn load_env_file() -> EnvFile {
    dotenvy::dotenv().into()
}

fn parse_var<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
