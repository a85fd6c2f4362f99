// ==========================================
// 排班优化引擎 - 配置层
// ==========================================
// 职责: 默认约束、引擎设置、服务设置
// 存储: JSON 配置文件 + 环境变量覆写
// ==========================================

pub mod config_manager;
pub mod error;

// 重导出核心配置管理器
pub use config_manager::{
    env_keys, AppConfig, ConfigManager, EngineSettings, LogFormat, ServerSettings,
};
pub use error::{ConfigError, ConfigResult};
