// ==========================================
// 排班优化引擎 - 班次分配
// ==========================================
// 创建后不可变；同时写入日程与扁平输出列表
// ==========================================

use crate::domain::pattern::ShiftPattern;
use crate::domain::types::StaffKey;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub staff_id: StaffKey,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "pattern_name")]
    pub pattern: ShiftPattern,
}

impl ShiftAssignment {
    pub fn new(staff_id: StaffKey, date: NaiveDate, pattern: ShiftPattern) -> Self {
        Self {
            staff_id,
            date,
            start_time: pattern.start_time().to_string(),
            end_time: pattern.end_time().to_string(),
            pattern,
        }
    }

    pub fn hours(&self) -> f64 {
        self.pattern.hours()
    }
}
