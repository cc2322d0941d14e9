use crate::config::{DEFAULT_OUTPUT_FILE, DEFAULT_OUTPUT_PATH, QUERY_URL};
use crate::core::ConfigProvider;
use crate::domain::model::MapSettings;
use crate::utils::error::{MapError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resolved configuration. Every section is optional in the file and
/// falls back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub feed: FeedConfig,
    pub map: MapSettings,
    pub output: OutputConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub source: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            source: QUERY_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            filename: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MapError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FEED_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MapError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.enabled
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.log_level.as_deref()
    }
}

impl ConfigProvider for TomlConfig {
    fn feed_source(&self) -> &str {
        &self.feed.source
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_file(&self) -> &str {
        &self.output.filename
    }

    fn map_settings(&self) -> MapSettings {
        self.map.clone()
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.feed.timeout_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_feed_source("feed.source", &self.feed.source)?;
        if let Some(timeout) = self.feed.timeout_seconds {
            validation::validate_range("feed.timeout_seconds", timeout, 1, 3600)?;
        }

        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_file_name("output.filename", &self.output.filename)?;

        validation::validate_non_empty_string("map.title", &self.map.title)?;
        validation::validate_range("map.center[0]", self.map.center[0], -90.0, 90.0)?;
        validation::validate_range("map.center[1]", self.map.center[1], -180.0, 180.0)?;
        validation::validate_range("map.zoom", self.map.zoom, 0, 20)?;

        Ok(())
    }
}
