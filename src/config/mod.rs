pub mod app;
pub mod toml_config;

pub use app::{AppConfig, ConfigOverrides, StoreConfig};
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Args;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
/// Flags shared by every binary.
#[derive(Debug, Clone, Args)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to listen on (default 0.0.0.0:5000)
    #[arg(long)]
    pub bind: Option<String>,

    /// Postgres connection URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Serve from regions.csv / ports.csv / prices.csv in this directory instead of Postgres
    #[arg(long)]
    pub fixtures_dir: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        AppConfig::resolve(
            file,
            ConfigOverrides {
                bind_address: self.bind.clone(),
                database_url: self.database_url.clone(),
                fixtures_dir: self.fixtures_dir.clone(),
                verbose: self.verbose,
                json_logs: self.json_logs,
            },
        )
    }
}
