// ==========================================
// 排班优化引擎 - HTTP 路由
// ==========================================
// 路由:
//   POST /api/generate-shift  生成排班
//   GET  /health              存活检查
// 状态码: 200 成功 / 400 请求或校验错误 / 500 内部错误或超时
// ==========================================

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{error, warn};

use crate::api::{ApiError, ApiResult, GenerateShiftRequest, GenerateShiftResponse};
use crate::app::state::AppState;

/// 构建路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-shift", post(generate_shift))
        .route("/health", get(health))
        .with_state(state)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            error!(error = %self, "排班请求处理失败");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(GenerateShiftResponse::failure(self.user_message()))).into_response()
    }
}

// ==========================================
// 处理器
// ==========================================

async fn generate_shift(
    State(state): State<AppState>,
    payload: Result<Json<GenerateShiftRequest>, JsonRejection>,
) -> Result<Json<GenerateShiftResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "请求体解析失败");
        ApiError::malformed_body(rejection.body_text())
    })?;

    let api = state.api.clone();
    let result = run_blocking_with_deadline(state.request_timeout, move || {
        api.generate(&request)
    })
    .await?;
    Ok(Json(result))
}

/// 在阻塞线程池执行计算任务，并施加时限
///
/// # 返回
/// - 任务结果（含任务自身的 ApiError）
/// - Err(Timeout): 超过时限，毫秒数取自 deadline
/// - Err(Other): 任务 panic 或被取消
pub(crate) async fn run_blocking_with_deadline<T, F>(deadline: Duration, job: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> ApiResult<T> + Send + 'static,
{
    // 引擎为 CPU 计算，放到阻塞线程池执行
    let task = tokio::task::spawn_blocking(job);

    match tokio::time::timeout(deadline, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(ApiError::Other(anyhow::anyhow!(
            "排班任务异常终止: {}",
            join_error
        ))),
        Err(_) => Err(ApiError::Timeout(
            u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX),
        )),
    }
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_slow_job_times_out() {
        let result: ApiResult<()> =
            run_blocking_with_deadline(Duration::from_millis(10), || {
                std::thread::sleep(Duration::from_millis(300));
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(ApiError::Timeout(10))));
    }

    #[tokio::test]
    async fn test_panicking_job_is_internal_error() {
        let result: ApiResult<()> =
            run_blocking_with_deadline(Duration::from_secs(5), || panic!("引擎崩溃")).await;

        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Other(_)));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_fast_job_passes_through() {
        let ok = run_blocking_with_deadline(Duration::from_secs(5), || Ok(7u32)).await;
        assert_eq!(ok.unwrap(), 7);

        let failed: ApiResult<u32> = run_blocking_with_deadline(Duration::from_secs(5), || {
            Err(ApiError::InvalidInput("x".to_string()))
        })
        .await;
        assert!(failed.unwrap_err().is_client_error());
    }
}
