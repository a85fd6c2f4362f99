// ==========================================
// 排班优化引擎 - 配置管理器
// ==========================================
// 职责: 配置加载、覆写、校验
// 优先级: 内置默认值 → 配置文件 → 环境变量
// 存储: JSON 文件（SHIFT_OPTIMIZER_CONFIG 或 <config_dir>/shift-optimizer/config.json）
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::constraints::Constraints;
use crate::domain::types::KeyPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

// ==========================================
// 环境变量键
// ==========================================
pub mod env_keys {
    /// 配置文件路径
    pub const CONFIG_PATH: &str = "SHIFT_OPTIMIZER_CONFIG";
    /// HTTP 监听地址
    pub const BIND_ADDR: &str = "SHIFT_OPTIMIZER_BIND";
    /// 请求总超时（毫秒）
    pub const TIMEOUT_MS: &str = "SHIFT_OPTIMIZER_TIMEOUT_MS";
    /// 固定随机种子
    pub const SEED: &str = "SHIFT_OPTIMIZER_SEED";
    /// 消息语言
    pub const LOCALE: &str = "SHIFT_OPTIMIZER_LOCALE";
}

/// 默认配置目录名
pub const APP_DIR_NAME: &str = "shift-optimizer";
/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 3] = ["en", "zh-CN", "ja"];

// ==========================================
// 配置结构
// ==========================================

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// 引擎设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// 兼容模式: id 缺失时回退到 name
    pub allow_name_fallback: bool,
    /// 单次请求最多日期数
    pub max_dates: usize,
    /// 固定随机种子（请求未指定时使用）
    pub rng_seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            allow_name_fallback: false,
            max_dates: 366,
            rng_seed: None,
        }
    }
}

impl EngineSettings {
    pub fn key_policy(&self) -> KeyPolicy {
        KeyPolicy::from_fallback_flag(self.allow_name_fallback)
    }
}

/// HTTP 服务设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_addr: String,
    pub request_timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl ServerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 请求未指定约束时的默认值
    pub defaults: Constraints,
    pub engine: EngineSettings,
    pub server: ServerSettings,
    pub locale: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Constraints::default(),
            engine: EngineSettings::default(),
            server: ServerSettings::default(),
            locale: "en".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// 校验配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.defaults.has_valid_headcount_range() {
            return Err(ConfigError::Invalid(format!(
                "defaults.min_staff_per_day={} > defaults.max_staff_per_day={}",
                self.defaults.min_staff_per_day, self.defaults.max_staff_per_day
            )));
        }
        if self.engine.max_dates == 0 {
            return Err(ConfigError::Invalid("engine.max_dates 必须大于 0".to_string()));
        }
        if self.server.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "server.request_timeout_ms 必须大于 0".to_string(),
            ));
        }
        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "不支持的语言: {}（可选: {}）",
                self.locale,
                SUPPORTED_LOCALES.join(", ")
            )));
        }
        Ok(())
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AppConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 按默认规则加载配置（文件 + 进程环境变量）
    pub fn load() -> ConfigResult<Self> {
        Self::load_with_env(|key| std::env::var(key).ok())
    }

    /// 按默认规则加载配置，环境变量通过 lookup 注入
    ///
    /// # 规则
    /// 1. 指定了 SHIFT_OPTIMIZER_CONFIG → 必须能读取
    /// 2. 否则默认路径存在时读取
    /// 3. 否则使用内置默认值
    pub fn load_with_env<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = lookup(env_keys::CONFIG_PATH)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let mut manager = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("未找到配置文件，使用内置默认值");
                    Self::from_config(AppConfig::default())
                }
            },
        };

        manager.apply_env_overrides(lookup)?;
        manager.config.validate()?;

        info!(
            source = ?manager.source,
            bind_addr = %manager.config.server.bind_addr,
            locale = %manager.config.locale,
            "配置加载完成"
        );

        Ok(manager)
    }

    /// 从 JSON 文件读取（不应用环境变量，不校验）
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    pub fn from_config(config: AppConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// 默认配置文件路径: <config_dir>/shift-optimizer/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 应用环境变量覆写
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(env_keys::BIND_ADDR) {
            self.config.server.bind_addr = addr.trim().to_string();
        }

        if let Some(raw) = lookup(env_keys::TIMEOUT_MS) {
            self.config.server.request_timeout_ms = parse_env(env_keys::TIMEOUT_MS, &raw)?;
        }

        if let Some(raw) = lookup(env_keys::SEED) {
            self.config.engine.rng_seed = Some(parse_env(env_keys::SEED, &raw)?);
        }

        if let Some(locale) = lookup(env_keys::LOCALE) {
            self.config.locale = locale.trim().to_string();
        }

        Ok(())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// 配置来源文件（使用默认值时为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> ConfigResult<T> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidEnv {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.defaults, Constraints::default());
        assert_eq!(config.engine.key_policy(), KeyPolicy::Strict);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"defaults":{"max_staff_per_day":5},"locale":"ja"}"#).unwrap();
        assert_eq!(config.defaults.min_staff_per_day, 2);
        assert_eq!(config.defaults.max_staff_per_day, 5);
        assert_eq!(config.locale, "ja");
        assert_eq!(config.server, ServerSettings::default());
    }

    #[test]
    fn test_env_overrides() {
        let mut manager = ConfigManager::from_config(AppConfig::default());
        manager
            .apply_env_overrides(env(&[
                (env_keys::BIND_ADDR, "0.0.0.0:8080"),
                (env_keys::TIMEOUT_MS, "2500"),
                (env_keys::SEED, "42"),
                (env_keys::LOCALE, "zh-CN"),
            ]))
            .unwrap();

        let config = manager.config();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.server.request_timeout(), Duration::from_millis(2500));
        assert_eq!(config.engine.rng_seed, Some(42));
        assert_eq!(config.locale, "zh-CN");
    }

    #[test]
    fn test_invalid_env_value() {
        let mut manager = ConfigManager::from_config(AppConfig::default());
        let err = manager
            .apply_env_overrides(env(&[(env_keys::SEED, "abc")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));
    }

    #[test]
    fn test_validate_rejects_inverted_defaults() {
        let mut config = AppConfig::default();
        config.defaults.min_staff_per_day = 4;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_locale() {
        let config = AppConfig {
            locale: "fr".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
