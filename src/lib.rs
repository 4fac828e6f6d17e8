pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConfiguredStore, MemoryStore, PostgresStore};
pub use config::{AppConfig, StoreConfig, TomlConfig};
pub use crate::core::engine::RateEngine;
pub use domain::model::{DailyAverage, RateParams, RateQuery};
pub use domain::ports::RateStore;
pub use http::{create_router, AppState};
pub use utils::error::{RateError, Result};
