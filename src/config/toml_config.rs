use crate::utils::error::{RateError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub database: Option<DatabaseSection>,
    pub fixtures: Option<FixturesSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixturesSection {
    pub dir: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
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

        toml::from_str(&processed_content).map_err(|e| RateError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATABASE_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RateError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bind_address(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.bind_address.as_deref())
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database.as_ref().map(|d| d.url.as_str())
    }

    pub fn fixtures_dir(&self) -> Option<&str> {
        self.fixtures.as_ref().map(|f| f.dir.as_str())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(addr) = self.bind_address() {
            validation::validate_socket_addr("server.bind_address", addr)?;
        }
        if let Some(url) = self.database_url() {
            validation::validate_database_url("database.url", url)?;
        }
        if let Some(dir) = self.fixtures_dir() {
            validation::validate_non_empty_string("fixtures.dir", dir)?;
            validation::validate_path("fixtures.dir", dir)?;
        }
        if let Some(level) = self.log_level() {
            validation::validate_log_level("logging.level", level)?;
        }
        if self.database.is_some() && self.fixtures.is_some() {
            return Err(RateError::ConfigError {
                message: "configure either [database] or [fixtures], not both".to_string(),
            });
        }
        Ok(())
    }
}
