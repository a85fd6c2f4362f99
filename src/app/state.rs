// ==========================================
// 排班优化引擎 - 应用状态
// ==========================================
// 职责: 管理 HTTP 服务共享的 API 实例与请求时限
// ==========================================

use std::sync::Arc;
use std::time::Duration;

use crate::api::ShiftApi;
use crate::config::AppConfig;

/// 应用状态
///
/// 每个请求克隆一份（内部为 Arc）
#[derive(Debug, Clone)]
pub struct AppState {
    /// 排班API
    pub api: Arc<ShiftApi>,

    /// 单次请求总时限
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(api: ShiftApi, request_timeout: Duration) -> Self {
        Self {
            api: Arc::new(api),
            request_timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            ShiftApi::from_config(config),
            config.server.request_timeout(),
        )
    }
}
