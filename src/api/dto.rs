// ==========================================
// 排班优化引擎 - 请求/响应数据结构
// ==========================================
// 线上格式: JSON，snake_case 字段名
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::constraints::ConstraintOverrides;
use crate::domain::shift::ShiftAssignment;
use crate::domain::staff::StaffRecord;
use crate::engine::ScheduleStats;

/// 排班请求
///
/// `dates` 优先；未提供或为空时使用 `start_date`..=`end_date`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateShiftRequest {
    #[serde(default)]
    pub staff: Option<Vec<StaffRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub constraints: Option<ConstraintOverrides>,
    /// 固定随机种子（可复现）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GenerateShiftRequest {
    pub fn new(staff: Vec<StaffRecord>, dates: Vec<NaiveDate>) -> Self {
        Self {
            staff: Some(staff),
            dates: Some(dates),
            ..Self::default()
        }
    }

    pub fn with_constraints(mut self, constraints: ConstraintOverrides) -> Self {
        self.constraints = Some(constraints);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn staff(&self) -> &[StaffRecord] {
        self.staff.as_deref().unwrap_or_default()
    }

    pub fn constraint_overrides(&self) -> ConstraintOverrides {
        self.constraints.unwrap_or_default()
    }
}

/// 排班响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateShiftResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shifts: Option<Vec<ShiftAssignment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<ScheduleStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateShiftResponse {
    pub fn success(shifts: Vec<ShiftAssignment>, stats: ScheduleStats) -> Self {
        Self {
            success: true,
            shifts: Some(shifts),
            stats: Some(stats),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            shifts: None,
            stats: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_minimal_body() {
        let request: GenerateShiftRequest = serde_json::from_value(json!({
            "staff": [{"id": "a"}],
            "dates": ["2024-01-01"]
        }))
        .unwrap();

        assert_eq!(request.staff().len(), 1);
        assert_eq!(request.constraint_overrides(), ConstraintOverrides::default());
        assert_eq!(request.seed, None);
    }

    #[test]
    fn test_request_null_fields_are_absent() {
        let request: GenerateShiftRequest = serde_json::from_value(json!({
            "staff": null,
            "dates": null,
            "constraints": null
        }))
        .unwrap();

        assert!(request.staff().is_empty());
        assert_eq!(request.dates, None);
    }

    #[test]
    fn test_request_rejects_malformed_date() {
        let result: Result<GenerateShiftRequest, _> = serde_json::from_value(json!({
            "staff": [{"id": "a"}],
            "dates": ["2024-13-01"]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_failure_response_shape() {
        let value = serde_json::to_value(GenerateShiftResponse::failure("boom")).unwrap();
        assert_eq!(value, json!({"success": false, "error": "boom"}));
    }
}
