pub mod aggregate;
pub mod closure;
pub mod engine;
pub mod membership;

pub use crate::domain::model::{DailyAverage, PriceRecord, RateQuery};
pub use crate::domain::ports::RateStore;
pub use crate::utils::error::Result;
