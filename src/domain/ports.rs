use crate::domain::model::{DailyAverage, RateQuery};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The relational datastore the rate engine reads from.
///
/// One call is one logical query: closure resolution, port membership and
/// both aggregation legs happen inside the store, and nothing is mutated.
#[async_trait]
pub trait RateStore: Send + Sync {
    async fn daily_averages(&self, query: &RateQuery) -> Result<Vec<DailyAverage>>;

    /// 後端名稱，僅用於日誌
    fn backend_name(&self) -> &'static str;
}

#[async_trait]
impl<S: RateStore + ?Sized> RateStore for Arc<S> {
    async fn daily_averages(&self, query: &RateQuery) -> Result<Vec<DailyAverage>> {
        (**self).daily_averages(query).await
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}
