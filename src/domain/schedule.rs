// ==========================================
// 排班优化引擎 - 日程（累积结果）
// ==========================================
// 不变量: 请求中的每个日期都有条目（可能为空）
// 不变量: 按日期升序逐日填充，连续出勤判定依赖已定稿的前序日期
// ==========================================

use crate::domain::shift::ShiftAssignment;
use crate::domain::types::StaffKey;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    days: BTreeMap<NaiveDate, Vec<ShiftAssignment>>,
}

impl Schedule {
    /// 为每个请求日期建立空条目
    pub fn with_dates(dates: &[NaiveDate]) -> Self {
        Self {
            days: dates.iter().map(|d| (*d, Vec::new())).collect(),
        }
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// 当日分配（日期不在范围内时为空）
    pub fn assignments_on(&self, date: NaiveDate) -> &[ShiftAssignment] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn headcount(&self, date: NaiveDate) -> usize {
        self.assignments_on(date).len()
    }

    /// 指定人员当日是否已排班
    pub fn is_assigned(&self, key: &StaffKey, date: NaiveDate) -> bool {
        self.assignments_on(date).iter().any(|s| &s.staff_id == key)
    }

    pub fn push(&mut self, assignment: ShiftAssignment) {
        self.days.entry(assignment.date).or_default().push(assignment);
    }

    /// 按日期升序遍历
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[ShiftAssignment])> {
        self.days.iter().map(|(d, shifts)| (*d, shifts.as_slice()))
    }

    pub fn date_count(&self) -> usize {
        self.days.len()
    }

    pub fn total_shifts(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// 扁平化为按日期排序的分配列表
    pub fn into_shifts(self) -> Vec<ShiftAssignment> {
        self.days.into_values().flatten().collect()
    }
}
