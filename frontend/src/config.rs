use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_GLOBAL: &str = "__HARDHAT_CONFIG";
pub const DEFAULT_APP_TITLE: &str = "Welcome Back!";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
    #[error("malformed runtime config: {0}")]
    Malformed(String),
}

/// Optional settings injected by the hosting page as
/// `window.__HARDHAT_CONFIG = { log_level: "debug", app_title: "..." }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
    #[serde(default, alias = "APP_TITLE")]
    pub app_title: Option<String>,
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Malformed(err.to_string()))
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        match self.log_level.as_deref() {
            Some(raw) if !raw.trim().is_empty() => parse_log_level(raw),
            _ => Ok(DEFAULT_LOG_LEVEL),
        }
    }

    pub fn app_title(&self) -> String {
        self.app_title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_APP_TITLE)
            .to_string()
    }
}

pub fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    raw.trim()
        .parse::<log::Level>()
        .map_err(|_| ConfigError::UnknownLogLevel(raw.to_string()))
}

#[cfg(target_arch = "wasm32")]
pub fn load() -> Result<RuntimeConfig, ConfigError> {
    let value = match crate::utils::browser::global(CONFIG_GLOBAL) {
        Ok(Some(value)) => value,
        Ok(None) | Err(_) => return Ok(RuntimeConfig::default()),
    };
    if let Some(raw) = value.as_string() {
        return RuntimeConfig::from_json(&raw);
    }
    let raw = js_sys::JSON::stringify(&value)
        .map_err(|_| ConfigError::Malformed(format!("{} is not serializable", CONFIG_GLOBAL)))?;
    RuntimeConfig::from_json(&String::from(raw))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Result<RuntimeConfig, ConfigError> {
    Ok(RuntimeConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_values() {
        let config = RuntimeConfig::default();
        assert_eq!(config.log_level(), Ok(log::Level::Info));
        assert_eq!(config.app_title(), "Welcome Back!");
    }

    #[test]
    fn parses_json_with_either_key_case() {
        let lower = RuntimeConfig::from_json(r#"{"log_level":"debug","app_title":"Hi"}"#).unwrap();
        assert_eq!(lower.log_level(), Ok(log::Level::Debug));
        assert_eq!(lower.app_title(), "Hi");

        let upper = RuntimeConfig::from_json(r#"{"LOG_LEVEL":"WARN"}"#).unwrap();
        assert_eq!(upper.log_level(), Ok(log::Level::Warn));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = RuntimeConfig::from_json(r#"{"api_base_url":"http://x"}"#).unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = RuntimeConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn unknown_level_is_reported() {
        assert_eq!(
            parse_log_level("loud"),
            Err(ConfigError::UnknownLogLevel("loud".into()))
        );
        assert_eq!(parse_log_level(" trace "), Ok(log::Level::Trace));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = RuntimeConfig {
            log_level: Some("  ".into()),
            app_title: Some("   ".into()),
        };
        assert_eq!(config.log_level(), Ok(log::Level::Info));
        assert_eq!(config.app_title(), DEFAULT_APP_TITLE);
    }
}
