// ==========================================
// 排班优化引擎 - 配置层错误类型
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: path={path}, {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: path={path}, {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("环境变量无效: {key}={value}")]
    InvalidEnv { key: String, value: String },

    #[error("配置无效: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
