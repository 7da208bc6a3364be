use crate::core::catalog::validate_catalog;
use crate::domain::model::Activity;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    pub roster: Option<RosterConfig>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    pub enforce_capacity: Option<bool>,
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
        let mut config: TomlConfig = toml::from_str(&processed_content)?;

        // TOML 會保留 [[activities]] 的順序；名稱前後空白一律去除
        for activity in &mut config.activities {
            activity.name = activity.name.trim().to_string();
        }
        Ok(config)
    }

    /// 替換環境變數 (例如 ${SCHOOL_DOMAIN})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Seed activities from the file, or `None` when the file defines none.
    pub fn catalog(&self) -> Option<Vec<Activity>> {
        if self.activities.is_empty() {
            None
        } else {
            Some(self.activities.clone())
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.host.as_deref())
    }

    fn port(&self) -> Option<u16> {
        self.server.as_ref().and_then(|s| s.port)
    }

    fn enforce_capacity(&self) -> Option<bool> {
        self.roster.as_ref().and_then(|r| r.enforce_capacity)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(host) = ConfigProvider::host(self) {
            validate_non_empty_string("server.host", host)?;
        }
        validate_catalog(&self.activities)
    }
}
