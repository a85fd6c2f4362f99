// ==========================================
// 排班优化引擎 - 人员名册
// ==========================================
// 职责: 将人员输入规范化为每人的运行状态
// 输入: 人员记录列表 + 键解析模式
// 输出: RosterState（work_count 初始为 0，希望日/不可出勤日集合）
// ==========================================
// 红线: work_count 只增不减，运行结束即丢弃
// ==========================================

use crate::domain::staff::StaffRecord;
use crate::domain::types::{KeyPolicy, StaffKey};
use crate::engine::error::{EngineError, EngineResult};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// 单个排班单元的运行状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub key: StaffKey,
    pub name: Option<String>,
    pub work_count: u32,
    preferred_dates: HashSet<NaiveDate>,
    unavailable_dates: HashSet<NaiveDate>,
}

impl RosterEntry {
    fn from_record(key: StaffKey, record: &StaffRecord) -> Self {
        Self {
            key,
            name: record.trimmed_name().map(str::to_string),
            work_count: 0,
            preferred_dates: record.preferred_dates.iter().copied().collect(),
            unavailable_dates: record.unavailable_dates.iter().copied().collect(),
        }
    }

    pub fn is_preferred(&self, date: NaiveDate) -> bool {
        self.preferred_dates.contains(&date)
    }

    pub fn is_unavailable(&self, date: NaiveDate) -> bool {
        self.unavailable_dates.contains(&date)
    }
}

/// 名册状态
///
/// `order` 保留输入顺序，保证固定种子下的洗牌结果可复现。
#[derive(Debug, Clone, Default)]
pub struct RosterState {
    order: Vec<StaffKey>,
    entries: HashMap<StaffKey, RosterEntry>,
}

impl RosterState {
    /// 从人员记录构建名册
    ///
    /// # 规则
    /// - Strict: id 必填且唯一
    /// - NameFallback: id 缺失时使用 name；重复键合并为同一单元，后出现的记录覆盖日期集合
    ///
    /// # 返回
    /// - Err(EmptyStaff): 人员列表为空
    /// - Err(MissingStaffKey / DuplicateStaffKey): 键解析失败
    pub fn build(staff: &[StaffRecord], policy: KeyPolicy) -> EngineResult<Self> {
        if staff.is_empty() {
            return Err(EngineError::EmptyStaff);
        }

        let mut roster = Self {
            order: Vec::with_capacity(staff.len()),
            entries: HashMap::with_capacity(staff.len()),
        };

        for (index, record) in staff.iter().enumerate() {
            let key = Self::derive_key(record, policy)
                .ok_or(EngineError::MissingStaffKey { index })?;

            if roster.entries.contains_key(&key) {
                match policy {
                    KeyPolicy::Strict => {
                        return Err(EngineError::DuplicateStaffKey(key.to_string()));
                    }
                    KeyPolicy::NameFallback => {
                        warn!(staff_key = %key, index, "人员键冲突，合并为同一排班单元");
                    }
                }
            } else {
                roster.order.push(key.clone());
            }

            roster
                .entries
                .insert(key.clone(), RosterEntry::from_record(key, record));
        }

        Ok(roster)
    }

    fn derive_key(record: &StaffRecord, policy: KeyPolicy) -> Option<StaffKey> {
        match policy {
            KeyPolicy::Strict => record.trimmed_id().map(StaffKey::from),
            KeyPolicy::NameFallback => record
                .trimmed_id()
                .or_else(|| record.trimmed_name())
                .map(StaffKey::from),
        }
    }

    /// 按输入顺序的人员键
    pub fn keys(&self) -> &[StaffKey] {
        &self.order
    }

    pub fn get(&self, key: &StaffKey) -> Option<&RosterEntry> {
        self.entries.get(key)
    }

    pub fn work_count(&self, key: &StaffKey) -> u32 {
        self.entries.get(key).map(|e| e.work_count).unwrap_or(0)
    }

    /// 记录一次出勤，返回更新后的 work_count
    pub fn record_assignment(&mut self, key: &StaffKey) -> Option<u32> {
        self.entries.get_mut(key).map(|entry| {
            entry.work_count += 1;
            entry.work_count
        })
    }

    /// 按输入顺序遍历
    pub fn entries(&self) -> impl Iterator<Item = &RosterEntry> {
        self.order.iter().filter_map(|k| self.entries.get(k))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
