// ==========================================
// 排班优化引擎 - 班次模板
// ==========================================
// 固定目录: 上午 09:00-13:00 / 下午 13:00-17:00 / 全天 09:00-17:00
// 说明: 模板选择与公平分数、历史班次无关
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftPattern {
    Morning,
    Afternoon,
    FullDay,
}

impl ShiftPattern {
    /// 模板目录（随机选择按此顺序索引）
    pub const ALL: [ShiftPattern; 3] = [
        ShiftPattern::Morning,
        ShiftPattern::Afternoon,
        ShiftPattern::FullDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftPattern::Morning => "morning",
            ShiftPattern::Afternoon => "afternoon",
            ShiftPattern::FullDay => "full_day",
        }
    }

    pub fn start_time(&self) -> &'static str {
        match self {
            ShiftPattern::Morning | ShiftPattern::FullDay => "09:00",
            ShiftPattern::Afternoon => "13:00",
        }
    }

    pub fn end_time(&self) -> &'static str {
        match self {
            ShiftPattern::Morning => "13:00",
            ShiftPattern::Afternoon | ShiftPattern::FullDay => "17:00",
        }
    }

    /// 时长（小时）
    pub fn hours(&self) -> f64 {
        match self {
            ShiftPattern::Morning | ShiftPattern::Afternoon => 4.0,
            ShiftPattern::FullDay => 8.0,
        }
    }
}

impl fmt::Display for ShiftPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShiftPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(ShiftPattern::Morning),
            "afternoon" => Ok(ShiftPattern::Afternoon),
            "full_day" | "full-day" | "full" => Ok(ShiftPattern::FullDay),
            other => Err(format!("未知班次模板: {}", other)),
        }
    }
}
