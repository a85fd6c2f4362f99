// ==========================================
// 排班优化引擎 - 运行报告
// ==========================================
// 职责: 单日报告、人手不足日、人员汇总、总体统计
// 说明: 人手不足是运行结果而非错误，由调用方决定是否提示
// ==========================================

use crate::domain::types::StaffKey;
use crate::engine::eligibility::Exclusion;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 单日报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub date: NaiveDate,
    pub target: u32,
    pub assigned: u32,
    /// 通过硬约束的候选人数
    pub eligible: u32,
    pub exclusions: Vec<Exclusion>,
}

impl DayReport {
    /// 实际人数低于目标人数或最低人数
    pub fn is_understaffed(&self, min_staff_per_day: u32) -> bool {
        self.assigned < self.target || self.assigned < min_staff_per_day
    }
}

/// 人手不足日
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderstaffedDay {
    pub date: NaiveDate,
    pub assigned: u32,
    pub target: u32,
    pub min_required: u32,
}

/// 人员汇总（出勤天数与总工时）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffSummary {
    pub staff_id: StaffKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub shift_count: u32,
    pub total_hours: f64,
}

/// 运行统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub run_id: Uuid,
    pub total_shifts: usize,
    #[serde(default)]
    pub understaffed_days: Vec<UnderstaffedDay>,
    #[serde(default)]
    pub staff_summaries: Vec<StaffSummary>,
}
