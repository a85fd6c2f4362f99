// ==========================================
// 排班优化引擎 - 领域类型定义
// ==========================================
// 职责: 人员键、键解析模式、排除原因
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 人员键 (Staff Key)
// ==========================================
// 一个键 = 一个排班单元
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffKey(String);

impl StaffKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StaffKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StaffKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StaffKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// ==========================================
// 键解析模式 (Key Policy)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    /// 必须提供唯一 id，缺失或重复即为输入错误
    #[default]
    Strict,
    /// 兼容模式: id 缺失时回退到 name，重复键合并为同一排班单元
    NameFallback,
}

impl KeyPolicy {
    pub fn from_fallback_flag(allow_name_fallback: bool) -> Self {
        if allow_name_fallback {
            KeyPolicy::NameFallback
        } else {
            KeyPolicy::Strict
        }
    }
}

// ==========================================
// 排除原因 (Exclusion Reason)
// ==========================================
// 依据: 资格过滤 1-3 步，每个被排除的人员都必须给出原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExclusionReason {
    /// 当日不可出勤
    Unavailable,
    /// 本次运行累计出勤已达上限
    WeeklyCapReached { work_count: u32, cap: u32 },
    /// 连续出勤已达上限
    StreakLimit { streak: u32, limit: u32 },
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::Unavailable => write!(f, "UNAVAILABLE"),
            ExclusionReason::WeeklyCapReached { work_count, cap } => {
                write!(f, "WEEKLY_CAP_REACHED: work_count={} >= cap={}", work_count, cap)
            }
            ExclusionReason::StreakLimit { streak, limit } => {
                write!(f, "STREAK_LIMIT: streak={} >= limit={}", streak, limit)
            }
        }
    }
}
