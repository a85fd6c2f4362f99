// ==========================================
// 排班优化引擎 - 引擎编排器
// ==========================================
// 用途: 校验输入 → 构建名册 → 按日期升序逐日分配
// ==========================================
// 红线: 日期必须严格按时间顺序处理，后续日期的资格依赖前序日期的分配
// 红线: 不回溯，已定稿的日期不再修改
// 说明: 名册与日程作为累加器逐日传递（step_day 可单独测试）
// ==========================================

use crate::domain::calendar::first_out_of_order;
use crate::domain::constraints::Constraints;
use crate::domain::schedule::Schedule;
use crate::domain::shift::ShiftAssignment;
use crate::domain::staff::StaffRecord;
use crate::domain::types::{KeyPolicy, StaffKey};
use crate::engine::assignment::DayAssigner;
use crate::engine::eligibility::EligibilityFilter;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::random::RandomSource;
use crate::engine::report::{DayReport, ScheduleStats, StaffSummary, UnderstaffedDay};
use crate::engine::roster::RosterState;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;


// ==========================================
// OptimizeOutcome - 运行结果
// ==========================================

#[derive(Debug, Clone)]
pub struct OptimizeOutcome {
    pub run_id: Uuid,
    pub constraints: Constraints,
    pub schedule: Schedule,
    pub days: Vec<DayReport>,
    pub roster: RosterState,
}

impl OptimizeOutcome {
    pub fn total_shifts(&self) -> usize {
        self.schedule.total_shifts()
    }

    pub fn understaffed_days(&self) -> Vec<UnderstaffedDay> {
        self.days
            .iter()
            .filter(|day| day.is_understaffed(self.constraints.min_staff_per_day))
            .map(|day| UnderstaffedDay {
                date: day.date,
                assigned: day.assigned,
                target: day.target,
                min_required: self.constraints.min_staff_per_day,
            })
            .collect()
    }

    /// 按名册顺序汇总每人出勤天数与工时（包含未排班人员）
    pub fn staff_summaries(&self) -> Vec<StaffSummary> {
        let mut hours: HashMap<&StaffKey, f64> = HashMap::new();
        for (_, shifts) in self.schedule.days() {
            for shift in shifts {
                *hours.entry(&shift.staff_id).or_insert(0.0) += shift.hours();
            }
        }

        self.roster
            .entries()
            .map(|entry| StaffSummary {
                staff_id: entry.key.clone(),
                name: entry.name.clone(),
                shift_count: entry.work_count,
                total_hours: hours.get(&entry.key).copied().unwrap_or(0.0),
            })
            .collect()
    }

    pub fn stats(&self) -> ScheduleStats {
        ScheduleStats {
            run_id: self.run_id,
            total_shifts: self.total_shifts(),
            understaffed_days: self.understaffed_days(),
            staff_summaries: self.staff_summaries(),
        }
    }

    /// 按日期排序的扁平分配列表
    pub fn into_shifts(self) -> Vec<ShiftAssignment> {
        self.schedule.into_shifts()
    }
}

// ==========================================
// ShiftOptimizer - 排班优化器
// ==========================================

pub struct ShiftOptimizer {
    constraints: Constraints,
    key_policy: KeyPolicy,
    filter: EligibilityFilter,
    assigner: DayAssigner,
}

impl ShiftOptimizer {
    /// 创建优化器（默认 Strict 键模式）
    pub fn new(constraints: Constraints) -> Self {
        Self {
            constraints,
            key_policy: KeyPolicy::Strict,
            filter: EligibilityFilter::new(constraints),
            assigner: DayAssigner::new(),
        }
    }

    pub fn with_key_policy(mut self, key_policy: KeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// 输入校验（不做任何计算）
    ///
    /// # 顺序
    /// 1. 人员为空
    /// 2. 日期为空
    /// 3. min_staff_per_day > max_staff_per_day
    /// 4. 日期未严格升序
    pub fn validate(&self, staff: &[StaffRecord], dates: &[NaiveDate]) -> EngineResult<()> {
        if staff.is_empty() {
            return Err(EngineError::EmptyStaff);
        }
        if dates.is_empty() {
            return Err(EngineError::EmptyDates);
        }
        if !self.constraints.has_valid_headcount_range() {
            return Err(EngineError::InvalidHeadcountRange {
                min: self.constraints.min_staff_per_day,
                max: self.constraints.max_staff_per_day,
            });
        }
        if let Some((previous, current)) = first_out_of_order(dates) {
            return Err(EngineError::DatesNotAscending { previous, current });
        }
        Ok(())
    }

    /// 执行完整排班
    ///
    /// # 参数
    /// - staff: 人员记录
    /// - dates: 升序日期列表
    /// - rng: 随机源
    ///
    /// # 返回
    /// - Ok(OptimizeOutcome): 日程 + 每日报告（可能存在人手不足日）
    /// - Err(EngineError): 输入校验失败
    pub fn optimize<R: RandomSource>(
        &self,
        staff: &[StaffRecord],
        dates: &[NaiveDate],
        rng: &mut R,
    ) -> EngineResult<OptimizeOutcome> {
        self.validate(staff, dates)?;
        let mut roster = RosterState::build(staff, self.key_policy)?;

        let run_id = Uuid::new_v4();
        let span = info_span!("optimize", run_id = %run_id);
        let _guard = span.enter();

        info!(
            staff_count = roster.len(),
            date_count = dates.len(),
            min_staff = self.constraints.min_staff_per_day,
            max_staff = self.constraints.max_staff_per_day,
            max_consecutive_days = self.constraints.max_consecutive_days,
            max_days_per_week = self.constraints.max_days_per_week,
            "开始排班"
        );

        let mut schedule = Schedule::with_dates(dates);
        let mut days = Vec::with_capacity(dates.len());

        for &date in dates {
            days.push(self.step_day(date, &mut roster, &mut schedule, rng)?);
        }

        let outcome = OptimizeOutcome {
            run_id,
            constraints: self.constraints,
            schedule,
            days,
            roster,
        };

        info!(
            total_shifts = outcome.total_shifts(),
            understaffed_days = outcome.understaffed_days().len(),
            "排班完成"
        );

        Ok(outcome)
    }

    /// 单日步骤: 洗牌 → 资格过滤与评分 → 抽取目标人数 → 填充
    ///
    /// 名册与日程在此被修改，后续日期可见。
    ///
    /// # 返回
    /// - Err(InvalidHeadcountRange): min > max，不读取随机源、不修改累加器
    pub fn step_day<R: RandomSource>(
        &self,
        date: NaiveDate,
        roster: &mut RosterState,
        schedule: &mut Schedule,
        rng: &mut R,
    ) -> EngineResult<DayReport> {
        if !self.constraints.has_valid_headcount_range() {
            return Err(EngineError::InvalidHeadcountRange {
                min: self.constraints.min_staff_per_day,
                max: self.constraints.max_staff_per_day,
            });
        }

        let mut order = roster.keys().to_vec();
        rng.shuffle(&mut order);

        let evaluation = self.filter.evaluate(date, &order, roster, schedule, rng);
        let target = self.assigner.pick_target(&self.constraints, rng);
        let assigned =
            self.assigner
                .fill_day(date, &evaluation.candidates, target, roster, schedule, rng);

        let report = DayReport {
            date,
            target,
            assigned,
            eligible: evaluation.candidates.len() as u32,
            exclusions: evaluation.exclusions,
        };

        debug!(
            %date,
            target,
            assigned,
            eligible = report.eligible,
            excluded = report.exclusions.len(),
            "单日分配完成"
        );

        if report.is_understaffed(self.constraints.min_staff_per_day) {
            warn!(
                %date,
                target,
                assigned,
                min_required = self.constraints.min_staff_per_day,
                "人手不足"
            );
        }

        Ok(report)
    }
}
