// ==========================================
// 排班优化引擎 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎错误为用户可读（本地化）的错误消息
// ==========================================

use crate::engine::EngineError;
use crate::i18n::{t, t_with_args};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 客户端错误
    // ==========================================
    /// 请求体无法解析
    #[error("{0}")]
    InvalidInput(String),

    /// 输入校验失败
    #[error("{0}")]
    ValidationError(String),

    // ==========================================
    // 服务端错误
    // ==========================================
    /// 超过请求总时限（毫秒）
    #[error("排班超时: {0}ms")]
    Timeout(u64),

    #[error("{0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 由调用方输入导致的错误（HTTP 400）
    pub fn is_client_error(&self) -> bool {
        matches!(self, ApiError::InvalidInput(_) | ApiError::ValidationError(_))
    }

    /// 请求体解析失败
    pub fn malformed_body(reason: impl std::fmt::Display) -> Self {
        ApiError::InvalidInput(t_with_args(
            "request.malformed_body",
            &[("reason", &reason.to_string())],
        ))
    }

    pub fn internal() -> Self {
        ApiError::InternalError(t("server.internal_error"))
    }

    /// 返回给调用方的消息（本地化）
    ///
    /// 内部错误细节只写日志，不回传
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Timeout(ms) => t_with_args("server.timeout", &[("ms", &ms.to_string())]),
            ApiError::Other(_) => t("server.internal_error"),
            other => other.to_string(),
        }
    }
}

// ==========================================
// 从 EngineError 转换
// 目的: 引擎错误均为输入校验失败，转换为本地化消息
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let message = match &err {
            EngineError::EmptyStaff => t("validation.empty_staff"),
            EngineError::EmptyDates => t("validation.empty_dates"),
            EngineError::InvalidHeadcountRange { min, max } => t_with_args(
                "validation.invalid_headcount",
                &[("min", &min.to_string()), ("max", &max.to_string())],
            ),
            EngineError::MissingStaffKey { index } => t_with_args(
                "validation.missing_staff_key",
                &[("index", &index.to_string())],
            ),
            EngineError::DuplicateStaffKey(key) => {
                t_with_args("validation.duplicate_staff_key", &[("key", key.as_str())])
            }
            EngineError::DatesNotAscending { previous, current } => t_with_args(
                "validation.dates_not_ascending",
                &[
                    ("previous", &previous.to_string()),
                    ("current", &current.to_string()),
                ],
            ),
        };
        ApiError::ValidationError(message)
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
