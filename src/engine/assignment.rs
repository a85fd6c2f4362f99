// ==========================================
// 排班优化引擎 - 单日分配
// ==========================================
// 职责: 按候选顺序填充当日人数
// 输入: 已排序候选列表 + 目标人数
// 输出: 当日班次分配，并更新名册 work_count
// ==========================================
// 规则:
// 1) 目标人数在 [min_staff_per_day, max_staff_per_day] 内均匀随机
// 2) 从候选列表头部依次分配，直到达到目标人数或候选耗尽
// 3) 班次模板从固定目录均匀随机选择
// 4) 候选不足即人手不足，不重试、不回溯
// ==========================================

use crate::domain::constraints::Constraints;
use crate::domain::pattern::ShiftPattern;
use crate::domain::schedule::Schedule;
use crate::domain::shift::ShiftAssignment;
use crate::engine::eligibility::Candidate;
use crate::engine::random::RandomSource;
use crate::engine::roster::RosterState;
use chrono::NaiveDate;
use tracing::instrument;

pub struct DayAssigner {
    // 无状态，不需要注入依赖
}

impl DayAssigner {
    pub fn new() -> Self {
        Self {}
    }

    /// 抽取当日目标人数
    ///
    /// 调用方需保证 min <= max（由引擎入口校验）
    pub fn pick_target<R: RandomSource>(&self, constraints: &Constraints, rng: &mut R) -> u32 {
        rng.next_in_range(constraints.min_staff_per_day, constraints.max_staff_per_day)
    }

    /// 抽取班次模板
    pub fn pick_pattern<R: RandomSource>(&self, rng: &mut R) -> ShiftPattern {
        ShiftPattern::ALL[rng.next_index(ShiftPattern::ALL.len())]
    }

    /// 填充单日
    ///
    /// # 参数
    /// - date: 目标日期
    /// - candidates: 已排序候选
    /// - target: 目标人数
    /// - roster: 名册（会被修改）
    /// - schedule: 日程（会被修改）
    ///
    /// # 返回
    /// 实际分配人数
    #[instrument(skip(self, candidates, roster, schedule, rng), fields(
        candidates_count = candidates.len()
    ))]
    pub fn fill_day<R: RandomSource>(
        &self,
        date: NaiveDate,
        candidates: &[Candidate],
        target: u32,
        roster: &mut RosterState,
        schedule: &mut Schedule,
        rng: &mut R,
    ) -> u32 {
        let mut assigned = 0u32;

        for candidate in candidates {
            if assigned >= target {
                break;
            }

            let pattern = self.pick_pattern(rng);
            schedule.push(ShiftAssignment::new(candidate.key.clone(), date, pattern));
            roster.record_assignment(&candidate.key);
            assigned += 1;
        }

        assigned
    }
}

impl Default for DayAssigner {
    fn default() -> Self {
        Self::new()
    }
}
