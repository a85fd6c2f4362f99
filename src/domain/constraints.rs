// ==========================================
// 排班优化引擎 - 排班约束
// ==========================================
// 默认值: min_staff_per_day=2, max_staff_per_day=3,
//         max_consecutive_days=3, max_days_per_week=5
// ==========================================

use serde::{Deserialize, Serialize};

/// 已解析的排班约束
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub min_staff_per_day: u32,
    pub max_staff_per_day: u32,
    pub max_consecutive_days: u32,
    /// 本次运行内的累计出勤上限（非自然周）
    pub max_days_per_week: u32,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            min_staff_per_day: 2,
            max_staff_per_day: 3,
            max_consecutive_days: 3,
            max_days_per_week: 5,
        }
    }
}

impl Constraints {
    /// 人数区间是否合法（min <= max）
    pub fn has_valid_headcount_range(&self) -> bool {
        self.min_staff_per_day <= self.max_staff_per_day
    }
}

/// 调用方传入的约束覆写（字段缺失时使用默认值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConstraintOverrides {
    #[serde(default)]
    pub min_staff_per_day: Option<u32>,
    #[serde(default)]
    pub max_staff_per_day: Option<u32>,
    #[serde(default)]
    pub max_consecutive_days: Option<u32>,
    #[serde(default)]
    pub max_days_per_week: Option<u32>,
}

impl ConstraintOverrides {
    /// 叠加到默认约束之上
    pub fn resolve(&self, defaults: &Constraints) -> Constraints {
        Constraints {
            min_staff_per_day: self.min_staff_per_day.unwrap_or(defaults.min_staff_per_day),
            max_staff_per_day: self.max_staff_per_day.unwrap_or(defaults.max_staff_per_day),
            max_consecutive_days: self
                .max_consecutive_days
                .unwrap_or(defaults.max_consecutive_days),
            max_days_per_week: self.max_days_per_week.unwrap_or(defaults.max_days_per_week),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_partial_overrides() {
        let overrides: ConstraintOverrides =
            serde_json::from_str(r#"{"min_staff_per_day":1,"max_staff_per_day":4}"#).unwrap();
        let resolved = overrides.resolve(&Constraints::default());

        assert_eq!(resolved.min_staff_per_day, 1);
        assert_eq!(resolved.max_staff_per_day, 4);
        assert_eq!(resolved.max_consecutive_days, 3);
        assert_eq!(resolved.max_days_per_week, 5);
    }

    #[test]
    fn test_headcount_range() {
        let mut constraints = Constraints::default();
        assert!(constraints.has_valid_headcount_range());

        constraints.min_staff_per_day = 4;
        assert!(!constraints.has_valid_headcount_range());
    }

    #[test]
    fn test_negative_value_is_rejected_by_serde() {
        let parsed = serde_json::from_str::<ConstraintOverrides>(r#"{"min_staff_per_day":-1}"#);
        assert!(parsed.is_err());
    }
}
