// ==========================================
// 排班优化引擎 - 请求校验器
// ==========================================
// 职责: 解析请求日期（显式列表或区间展开），限制日期数量
// 说明: 人员/约束/日期顺序的校验由引擎完成
// ==========================================

use chrono::NaiveDate;

use crate::api::dto::GenerateShiftRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::calendar::{expand_date_range, range_len};
use crate::i18n::{t, t_with_args};

// ==========================================
// RequestValidator - 请求校验器
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct RequestValidator {
    max_dates: usize,
}

impl RequestValidator {
    pub fn new(max_dates: usize) -> Self {
        Self { max_dates }
    }

    pub fn max_dates(&self) -> usize {
        self.max_dates
    }

    /// 解析本次排班日期
    ///
    /// # 规则
    /// 1. `dates` 非空 → 原样使用（顺序由引擎校验）
    /// 2. 否则 `start_date` 与 `end_date` 同时给出 → 闭区间展开
    /// 3. 只给出区间一端 → 校验失败
    /// 4. 都未给出 → 返回空列表（由引擎报告日期为空）
    ///
    /// # 返回
    /// - Ok(Vec<NaiveDate>): 日期列表
    /// - Err(ApiError::ValidationError): 区间倒置或日期数量超限
    pub fn resolve_dates(&self, request: &GenerateShiftRequest) -> ApiResult<Vec<NaiveDate>> {
        if let Some(dates) = request.dates.as_ref().filter(|d| !d.is_empty()) {
            self.check_count(dates.len())?;
            return Ok(dates.clone());
        }

        match (request.start_date, request.end_date) {
            (Some(start), Some(end)) => {
                if start > end {
                    return Err(ApiError::ValidationError(t_with_args(
                        "validation.inverted_range",
                        &[("start", &start.to_string()), ("end", &end.to_string())],
                    )));
                }
                self.check_count(range_len(start, end))?;
                Ok(expand_date_range(start, end))
            }
            (None, None) => Ok(Vec::new()),
            _ => Err(ApiError::ValidationError(t("validation.missing_dates"))),
        }
    }

    fn check_count(&self, count: usize) -> ApiResult<()> {
        if count > self.max_dates {
            return Err(ApiError::ValidationError(t_with_args(
                "validation.too_many_dates",
                &[
                    ("count", &count.to_string()),
                    ("max", &self.max_dates.to_string()),
                ],
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn range_request(start: Option<NaiveDate>, end: Option<NaiveDate>) -> GenerateShiftRequest {
        GenerateShiftRequest {
            start_date: start,
            end_date: end,
            ..GenerateShiftRequest::default()
        }
    }

    #[test]
    fn test_explicit_dates_win_over_range() {
        let request = GenerateShiftRequest {
            dates: Some(vec![d(1, 5)]),
            ..range_request(Some(d(1, 1)), Some(d(1, 3)))
        };
        let dates = RequestValidator::new(366).resolve_dates(&request).unwrap();
        assert_eq!(dates, vec![d(1, 5)]);
    }

    #[test]
    fn test_range_expanded_inclusive() {
        let request = range_request(Some(d(2, 27)), Some(d(3, 1)));
        let dates = RequestValidator::new(366).resolve_dates(&request).unwrap();
        // 2024 为闰年
        assert_eq!(dates, vec![d(2, 27), d(2, 28), d(2, 29), d(3, 1)]);
    }

    #[test]
    fn test_empty_dates_fall_back_to_range() {
        let request = GenerateShiftRequest {
            dates: Some(vec![]),
            ..range_request(Some(d(1, 1)), Some(d(1, 2)))
        };
        let dates = RequestValidator::new(366).resolve_dates(&request).unwrap();
        assert_eq!(dates.len(), 2);
    }

    #[test]
    fn test_no_dates_at_all_is_empty() {
        let dates = RequestValidator::new(366)
            .resolve_dates(&GenerateShiftRequest::default())
            .unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_range_errors() {
        let validator = RequestValidator::new(3);

        let inverted = validator.resolve_dates(&range_request(Some(d(1, 5)), Some(d(1, 1))));
        assert!(matches!(inverted, Err(ApiError::ValidationError(_))));

        let too_long = validator.resolve_dates(&range_request(Some(d(1, 1)), Some(d(1, 4))));
        assert!(matches!(too_long, Err(ApiError::ValidationError(_))));

        let half_open = validator.resolve_dates(&range_request(Some(d(1, 1)), None));
        assert!(matches!(half_open, Err(ApiError::ValidationError(_))));
    }

    #[test]
    fn test_explicit_dates_count_limited() {
        let request = GenerateShiftRequest {
            dates: Some(vec![d(1, 1), d(1, 2)]),
            ..GenerateShiftRequest::default()
        };
        assert!(RequestValidator::new(1).resolve_dates(&request).is_err());
        assert!(RequestValidator::new(2).resolve_dates(&request).is_ok());
    }
}
