// ==========================================
// 排班优化引擎 - 领域模型层
// ==========================================
// 职责: 定义人员、约束、班次模板、分配与日程
// 红线: 不含引擎逻辑,不含传输层逻辑
// ==========================================

pub mod calendar;
pub mod constraints;
pub mod pattern;
pub mod schedule;
pub mod shift;
pub mod staff;
pub mod types;

// 重导出核心类型
pub use constraints::{ConstraintOverrides, Constraints};
pub use pattern::ShiftPattern;
pub use schedule::Schedule;
pub use shift::ShiftAssignment;
pub use staff::StaffRecord;
pub use types::{ExclusionReason, KeyPolicy, StaffKey};
