// Adapters layer: concrete datastore backends behind `RateStore`.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use crate::core::{DailyAverage, RateQuery, RateStore};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The backend chosen by configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredStore {
    Postgres(PostgresStore),
    Memory(MemoryStore),
}

#[async_trait]
impl RateStore for ConfiguredStore {
    async fn daily_averages(&self, query: &RateQuery) -> Result<Vec<DailyAverage>> {
        match self {
            ConfiguredStore::Postgres(store) => store.daily_averages(query).await,
            ConfiguredStore::Memory(store) => store.daily_averages(query).await,
        }
    }

    fn backend_name(&self) -> &'static str {
        match self {
            ConfiguredStore::Postgres(store) => store.backend_name(),
            ConfiguredStore::Memory(store) => store.backend_name(),
        }
    }
}
