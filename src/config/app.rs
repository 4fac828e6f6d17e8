use crate::adapters::{ConfiguredStore, MemoryStore, PostgresStore};
use crate::config::toml_config::TomlConfig;
use crate::utils::error::{RateError, Result};
use crate::utils::validation::{self, Validate};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Postgres { url: String },
    Memory { dir: PathBuf },
}

impl StoreConfig {
    pub fn build(&self) -> Result<ConfiguredStore> {
        match self {
            StoreConfig::Postgres { url } => {
                Ok(ConfiguredStore::Postgres(PostgresStore::from_url(url)?))
            }
            StoreConfig::Memory { dir } => Ok(ConfiguredStore::Memory(MemoryStore::from_csv_dir(dir)?)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            StoreConfig::Postgres { .. } => "postgres".to_string(),
            StoreConfig::Memory { dir } => format!("memory ({})", dir.display()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
    pub level: Option<String>,
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_address: String,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// Values given on the command line (or their environment fallbacks).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub database_url: Option<String>,
    pub fixtures_dir: Option<PathBuf>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl AppConfig {
    /// 命令列參數優先於 TOML 設定；`fixtures_dir` 會覆蓋任何資料庫 URL
    pub fn resolve(file: Option<TomlConfig>, overrides: ConfigOverrides) -> Result<Self> {
        let file = file.unwrap_or_default();
        file.validate()?;

        let bind_address = overrides
            .bind_address
            .or_else(|| file.bind_address().map(String::from))
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let store = if let Some(dir) = overrides.fixtures_dir {
            StoreConfig::Memory { dir }
        } else if let Some(url) = overrides.database_url {
            StoreConfig::Postgres { url }
        } else if let Some(url) = file.database_url() {
            StoreConfig::Postgres {
                url: url.to_string(),
            }
        } else if let Some(dir) = file.fixtures_dir() {
            StoreConfig::Memory {
                dir: PathBuf::from(dir),
            }
        } else {
            return Err(RateError::MissingConfigError {
                field: "database.url (DATABASE_URL) or fixtures.dir".to_string(),
            });
        };

        let logging = LoggingConfig {
            verbose: overrides.verbose,
            json: overrides.json_logs || file.json_logs(),
            level: file.log_level().map(String::from),
        };

        let config = Self {
            bind_address,
            store,
            logging,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        validation::validate_socket_addr("bind_address", &self.bind_address)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        match &self.store {
            StoreConfig::Postgres { url } => validation::validate_database_url("database_url", url)?,
            StoreConfig::Memory { dir } => {
                let dir = dir.to_string_lossy();
                validation::validate_non_empty_string("fixtures_dir", &dir)?;
                validation::validate_path("fixtures_dir", &dir)?;
            }
        }

        if let Some(level) = &self.logging.level {
            validation::validate_log_level("logging.level", level)?;
        }

        Ok(())
    }
}
