// ==========================================
// 排班优化引擎 - 排班 API
// ==========================================
// 职责: 请求 → 日期解析 → 约束合并 → 引擎计算 → 响应
// 红线: 校验失败不做任何计算；任何输入都不 panic
// ==========================================

use tracing::{info, instrument, warn};

use crate::api::dto::{GenerateShiftRequest, GenerateShiftResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::RequestValidator;
use crate::config::{AppConfig, EngineSettings};
use crate::domain::constraints::Constraints;
use crate::engine::{RandomSource, ShiftOptimizer, StdRandomSource};

// ==========================================
// ShiftApi - 排班 API
// ==========================================

/// 排班API
///
/// 职责：
/// 1. 解析请求日期并限制数量
/// 2. 将请求约束叠加到默认约束上
/// 3. 选择随机源（请求 seed → 配置 seed → 系统熵）
/// 4. 调用引擎并组装响应
#[derive(Debug, Clone)]
pub struct ShiftApi {
    defaults: Constraints,
    settings: EngineSettings,
    validator: RequestValidator,
}

impl ShiftApi {
    pub fn new(defaults: Constraints, settings: EngineSettings) -> Self {
        let validator = RequestValidator::new(settings.max_dates);
        Self {
            defaults,
            settings,
            validator,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.defaults, config.engine.clone())
    }

    pub fn defaults(&self) -> &Constraints {
        &self.defaults
    }

    /// 生成排班
    ///
    /// # 返回
    /// - Ok(GenerateShiftResponse): success=true，含班次与统计（人手不足也属于成功）
    /// - Err(ApiError::ValidationError): 输入校验失败
    pub fn generate(&self, request: &GenerateShiftRequest) -> ApiResult<GenerateShiftResponse> {
        let mut rng = StdRandomSource::from_optional_seed(request.seed.or(self.settings.rng_seed));
        self.generate_with_rng(request, &mut rng)
    }

    /// 生成排班（注入随机源）
    #[instrument(skip(self, request, rng), fields(staff_count = request.staff().len()))]
    pub fn generate_with_rng<R: RandomSource>(
        &self,
        request: &GenerateShiftRequest,
        rng: &mut R,
    ) -> ApiResult<GenerateShiftResponse> {
        let dates = self.validator.resolve_dates(request).map_err(|e| {
            warn!(error = %e, "日期解析失败");
            e
        })?;

        let constraints = request.constraint_overrides().resolve(&self.defaults);
        let optimizer =
            ShiftOptimizer::new(constraints).with_key_policy(self.settings.key_policy());

        let outcome = optimizer
            .optimize(request.staff(), &dates, rng)
            .map_err(|e| {
                warn!(error = %e, "输入校验失败");
                ApiError::from(e)
            })?;

        let stats = outcome.stats();
        info!(
            run_id = %stats.run_id,
            total_shifts = stats.total_shifts,
            understaffed_days = stats.understaffed_days.len(),
            "排班生成成功"
        );

        Ok(GenerateShiftResponse::success(outcome.into_shifts(), stats))
    }

    /// 生成排班，错误折叠为 success=false 响应
    pub fn respond(&self, request: &GenerateShiftRequest) -> GenerateShiftResponse {
        match self.generate(request) {
            Ok(response) => response,
            Err(e) => GenerateShiftResponse::failure(e.user_message()),
        }
    }
}

impl Default for ShiftApi {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
