use crate::core::{DailyAverage, RateQuery, RateStore};
use crate::utils::error::Result;
use std::time::Instant;

/// Request-scoped rate computation over a [`RateStore`].
///
/// Holds no per-request state; one instance is built at startup and shared by
/// every handler.
pub struct RateEngine<S: RateStore> {
    store: S,
}

impl<S: RateStore> RateEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn daily_rates(&self, query: &RateQuery) -> Result<Vec<DailyAverage>> {
        let started = Instant::now();
        tracing::debug!(
            "Querying {} for {} -> {} between {} and {}",
            self.store.backend_name(),
            query.origin,
            query.destination,
            query.date_from,
            query.date_to
        );

        match self.store.daily_averages(query).await {
            Ok(rows) => {
                tracing::info!(
                    "📈 {} day(s) of rates for {} <-> {} in {:?}",
                    rows.len(),
                    query.origin,
                    query.destination,
                    started.elapsed()
                );
                Ok(rows)
            }
            Err(e) => {
                tracing::debug!(
                    "Query failed after {:?}: {} (Category: {:?})",
                    started.elapsed(),
                    e,
                    e.category()
                );
                Err(e)
            }
        }
    }
}
