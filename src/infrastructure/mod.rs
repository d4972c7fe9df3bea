//! 基础设施层

pub mod config;
pub mod logger;

pub use config::{AppConfig, ConfigError, HttpConfig, LoggingConfig};
pub use logger::Logger;
