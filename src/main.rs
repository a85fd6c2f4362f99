// ==========================================
// 排班优化引擎 - HTTP 服务主入口
// ==========================================
// 启动顺序: 配置 → 日志 → 语言 → 监听 → 服务
// ==========================================

use anyhow::Context;
use shift_optimizer::app::{router, AppState};
use shift_optimizer::config::ConfigManager;
use shift_optimizer::{i18n, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 日志初始化前加载配置，需要日志格式
    let manager = ConfigManager::load().context("加载配置失败")?;
    let config = manager.into_config();

    logging::init_with_format(config.log_format);
    i18n::set_locale(&config.locale);

    tracing::info!("==================================================");
    tracing::info!("{} - HTTP 服务", shift_optimizer::APP_NAME);
    tracing::info!("系统版本: {}", shift_optimizer::VERSION);
    tracing::info!("==================================================");

    let state = AppState::from_config(&config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("无法监听地址: {}", config.server.bind_addr))?;

    tracing::info!(
        bind_addr = %config.server.bind_addr,
        request_timeout_ms = config.server.request_timeout_ms,
        locale = %config.locale,
        "服务已启动"
    );

    axum::serve(listener, app).await.context("HTTP 服务异常退出")?;
    Ok(())
}
