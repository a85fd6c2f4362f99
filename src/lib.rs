// ==========================================
// 排班优化引擎 - 核心库
// ==========================================
// 输入: 人员（偏好/不可用日期）、日期列表、排班约束
// 输出: 每日班次分配 + 运行统计
// 策略: 逐日贪心 + 公平性评分（负荷优先、偏好加权、随机抖动）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 排班计算
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - HTTP 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    Constraints, ConstraintOverrides, Schedule, ShiftAssignment, ShiftPattern, StaffKey,
    StaffRecord,
};

// 引擎
pub use engine::{
    EngineError, OptimizeOutcome, RandomSource, ScheduleStats, ShiftOptimizer, StdRandomSource,
};

// API
pub use api::{ApiError, GenerateShiftRequest, GenerateShiftResponse, ShiftApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "排班优化引擎";
