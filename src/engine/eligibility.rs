// ==========================================
// 排班优化引擎 - 资格过滤与评分
// ==========================================
// 职责: 针对单一日期，判定可出勤人员并按公平分数排序
// 输入: 当前名册状态 + 已定稿的前序日程 + 洗牌后的人员顺序
// 输出: 候选列表（分数升序）+ 被排除人员及原因
// ==========================================
// 过滤顺序:
// 1) 不可出勤日 → 排除
// 2) work_count >= max_days_per_week → 排除（运行内累计，非自然周）
// 3) 连续出勤 >= max_consecutive_days → 排除（最多回看 7 天）
// ==========================================

use crate::domain::calendar::preceding_days;
use crate::domain::constraints::Constraints;
use crate::domain::schedule::Schedule;
use crate::domain::types::{ExclusionReason, StaffKey};
use crate::engine::random::RandomSource;
use crate::engine::roster::{RosterEntry, RosterState};
use crate::engine::scoring::fairness_score;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// 连续出勤回看天数上限
pub const STREAK_LOOKBACK_DAYS: u32 = 7;

/// 候选人员
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub key: StaffKey,
    pub score: f64,
    pub work_count: u32,
    pub preferred: bool,
}

/// 被排除人员
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exclusion {
    pub key: StaffKey,
    pub reason: ExclusionReason,
}

/// 单日评估结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayEvaluation {
    pub date: NaiveDate,
    /// 分数升序
    pub candidates: Vec<Candidate>,
    pub exclusions: Vec<Exclusion>,
}

/// 计算截至 date 前一天的连续出勤天数
///
/// 从前一天开始倒推，遇到未排班的日期即停止，最多回看 STREAK_LOOKBACK_DAYS 天。
pub fn count_streak(key: &StaffKey, date: NaiveDate, schedule: &Schedule) -> u32 {
    preceding_days(date, STREAK_LOOKBACK_DAYS)
        .take_while(|day| schedule.is_assigned(key, *day))
        .count() as u32
}

pub struct EligibilityFilter {
    constraints: Constraints,
}

impl EligibilityFilter {
    pub fn new(constraints: Constraints) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// 硬约束判定（过滤 1-3）
    pub fn check(
        &self,
        entry: &RosterEntry,
        date: NaiveDate,
        schedule: &Schedule,
    ) -> Result<(), ExclusionReason> {
        if entry.is_unavailable(date) {
            return Err(ExclusionReason::Unavailable);
        }

        if entry.work_count >= self.constraints.max_days_per_week {
            return Err(ExclusionReason::WeeklyCapReached {
                work_count: entry.work_count,
                cap: self.constraints.max_days_per_week,
            });
        }

        let streak = count_streak(&entry.key, date, schedule);
        if streak >= self.constraints.max_consecutive_days {
            return Err(ExclusionReason::StreakLimit {
                streak,
                limit: self.constraints.max_consecutive_days,
            });
        }

        Ok(())
    }

    /// 评估单日候选
    ///
    /// # 参数
    /// - date: 目标日期
    /// - order: 洗牌后的人员顺序（同分时保持该顺序）
    /// - roster: 当前名册状态
    /// - schedule: 已定稿的日程
    /// - rng: 随机源（仅用于抖动）
    pub fn evaluate<R: RandomSource>(
        &self,
        date: NaiveDate,
        order: &[StaffKey],
        roster: &RosterState,
        schedule: &Schedule,
        rng: &mut R,
    ) -> DayEvaluation {
        let mut candidates = Vec::with_capacity(order.len());
        let mut exclusions = Vec::new();

        for key in order {
            let Some(entry) = roster.get(key) else {
                continue;
            };

            if let Err(reason) = self.check(entry, date, schedule) {
                debug!(%date, staff_key = %key, %reason, "排除");
                exclusions.push(Exclusion {
                    key: key.clone(),
                    reason,
                });
                continue;
            }

            let preferred = entry.is_preferred(date);
            candidates.push(Candidate {
                key: key.clone(),
                score: fairness_score(entry.work_count, preferred, rng.next_f64()),
                work_count: entry.work_count,
                preferred,
            });
        }

        // 稳定排序: 同分保持洗牌顺序
        candidates.sort_by(|a, b| a.score.total_cmp(&b.score));

        DayEvaluation {
            date,
            candidates,
            exclusions,
        }
    }
}
