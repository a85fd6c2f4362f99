// ==========================================
// 排班优化引擎 - 应用层
// ==========================================
// 职责: HTTP 集成（axum 路由 + 共享状态）
// ==========================================

pub mod http;
pub mod state;

pub use http::router;
pub use state::AppState;
