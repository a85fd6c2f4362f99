// ==========================================
// 排班优化引擎 - 引擎层错误类型
// ==========================================
// 红线: 输入校验失败直接返回，不做任何部分计算
// 说明: 人手不足不是错误，属于运行结果（见 report）
// ==========================================

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("人员列表为空")]
    EmptyStaff,

    #[error("日期列表为空")]
    EmptyDates,

    #[error("每日人数区间无效: min={min} > max={max}")]
    InvalidHeadcountRange { min: u32, max: u32 },

    /// index 为人员在输入列表中的下标（从 0 开始）
    #[error("人员缺少唯一标识: index={index}")]
    MissingStaffKey { index: usize },

    #[error("人员标识重复: {0}")]
    DuplicateStaffKey(String),

    #[error("日期未按升序排列: previous={previous}, current={current}")]
    DatesNotAscending {
        previous: NaiveDate,
        current: NaiveDate,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
