// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// ==========================================

use crate::config::LogFormat;
use tracing_subscriber::{fmt, EnvFilter};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化日志系统（文本格式）
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=shift_optimizer=trace
///
/// # 示例
/// ```no_run
/// use shift_optimizer::logging;
/// logging::init();
/// ```
pub fn init() {
    fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// 初始化日志系统（JSON 行格式，供 HTTP 服务采集）
pub fn init_json() {
    fmt()
        .json()
        .with_env_filter(env_filter())
        .with_current_span(true)
        .with_span_list(false)
        .init();
}

/// 按配置选择日志格式
pub fn init_with_format(format: LogFormat) {
    match format {
        LogFormat::Text => init(),
        LogFormat::Json => init_json(),
    }
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试；可重复调用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
