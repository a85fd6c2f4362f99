// ==========================================
// 排班优化引擎 - 人员记录
// ==========================================
// 红线: 引擎只读，不修改调用方传入的人员记录
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// 人员记录（外部输入）
///
/// 调用方可能附带其他字段（如时薪），反序列化时忽略。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StaffRecord {
    /// 唯一标识（数据库导出的数字 id 按十进制文本接收）
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,

    /// 显示名称
    #[serde(default)]
    pub name: Option<String>,

    /// 希望出勤日
    #[serde(default)]
    pub preferred_dates: Vec<NaiveDate>,

    /// 不可出勤日
    #[serde(default)]
    pub unavailable_dates: Vec<NaiveDate>,
}

impl StaffRecord {
    /// 仅带 id 的人员记录
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn prefers(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.preferred_dates.extend(dates);
        self
    }

    pub fn unavailable_on(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.unavailable_dates.extend(dates);
        self
    }

    /// 去除首尾空白后的 id（空串视为缺失）
    pub fn trimmed_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// 去除首尾空白后的 name（空串视为缺失）
    pub fn trimmed_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// id 的线上形态: 字符串或 JSON 数字
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(|id| match id {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"id":"s1","name":"Sato","hourly_wage":1200,"preferred_dates":["2024-01-02"]}"#;
        let staff: StaffRecord = serde_json::from_str(json).unwrap();
        assert_eq!(staff.trimmed_id(), Some("s1"));
        assert_eq!(
            staff.preferred_dates,
            vec![NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()]
        );
        assert!(staff.unavailable_dates.is_empty());
    }

    #[test]
    fn test_blank_id_is_missing() {
        let staff = StaffRecord::with_id("   ").named("Tanaka");
        assert_eq!(staff.trimmed_id(), None);
        assert_eq!(staff.trimmed_name(), Some("Tanaka"));
    }

    #[test]
    fn test_numeric_id_is_accepted_as_text() {
        let staff: StaffRecord = serde_json::from_str(r#"{"id": 12, "name": "Ito"}"#).unwrap();
        assert_eq!(staff.trimmed_id(), Some("12"));

        let staff: StaffRecord = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(staff.id, None);

        assert!(serde_json::from_str::<StaffRecord>(r#"{"id": true}"#).is_err());
        assert!(serde_json::from_str::<StaffRecord>(r#"{"id": {"k": 1}}"#).is_err());
    }
}
