// ==========================================
// 排班优化引擎 - API 层
// ==========================================
// 职责: 提供排班接口，供 HTTP 服务与命令行工具调用
// ==========================================

pub mod dto;
pub mod error;
pub mod shift_api;
pub mod validator;

// 重导出核心类型
pub use dto::{GenerateShiftRequest, GenerateShiftResponse};
pub use error::{ApiError, ApiResult};
pub use shift_api::ShiftApi;
pub use validator::RequestValidator;
