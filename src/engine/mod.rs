// ==========================================
// 排班优化引擎 - 引擎层
// ==========================================
// 职责: 名册 → 资格过滤与评分 → 单日分配 → 编排
// 红线: 纯内存计算，无 I/O，无全局随机源
// ==========================================

pub mod assignment;
pub mod eligibility;
pub mod error;
pub mod optimizer;
pub mod random;
pub mod report;
pub mod roster;
pub mod scoring;

#[cfg(test)]
pub(crate) mod test_support;

// 重导出核心引擎
pub use assignment::DayAssigner;
pub use eligibility::{count_streak, Candidate, DayEvaluation, EligibilityFilter, Exclusion};
pub use error::{EngineError, EngineResult};
pub use optimizer::{OptimizeOutcome, ShiftOptimizer};
pub use random::{RandomSource, StdRandomSource};
pub use report::{DayReport, ScheduleStats, StaffSummary, UnderstaffedDay};
pub use roster::{RosterEntry, RosterState};
