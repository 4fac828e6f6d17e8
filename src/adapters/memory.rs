use crate::core::aggregate::aggregate_daily_averages;
use crate::core::closure::resolve_region_closure;
use crate::core::membership::resolve_port_set;
use crate::core::{DailyAverage, PriceRecord, RateQuery, RateStore};
use crate::domain::model::{Port, Region};
use crate::utils::error::{RateError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;

pub const REGIONS_FILE: &str = "regions.csv";
pub const PORTS_FILE: &str = "ports.csv";
pub const PRICES_FILE: &str = "prices.csv";

/// In-memory [`RateStore`] evaluated as explicit passes:
/// region closure, port membership, then the two aggregation legs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    regions: Vec<Region>,
    ports: Vec<Port>,
    prices: Vec<PriceRecord>,
}

impl MemoryStore {
    pub fn new(regions: Vec<Region>, ports: Vec<Port>, prices: Vec<PriceRecord>) -> Result<Self> {
        ensure_unique("regions.slug", regions.iter().map(|r| r.slug.as_str()))?;
        ensure_unique("ports.code", ports.iter().map(|p| p.code.as_str()))?;

        Ok(Self {
            regions,
            ports,
            prices,
        })
    }

    /// 從資料夾載入 `regions.csv`、`ports.csv`、`prices.csv`
    pub fn from_csv_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let regions: Vec<Region> = read_csv(&dir.join(REGIONS_FILE))?;
        let ports: Vec<Port> = read_csv(&dir.join(PORTS_FILE))?;
        let prices: Vec<PriceRecord> = read_csv(&dir.join(PRICES_FILE))?;

        tracing::info!(
            "📁 Loaded {} regions, {} ports, {} prices from {}",
            regions.len(),
            ports.len(),
            prices.len(),
            dir.display()
        );

        Self::new(regions, ports, prices)
    }

    pub fn port_set(&self, destination: &str) -> HashSet<String> {
        let closure = resolve_region_closure(&self.regions, destination);
        resolve_port_set(&self.ports, &closure, destination)
    }
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let rows = reader.deserialize().collect::<std::result::Result<Vec<T>, _>>()?;
    Ok(rows)
}

fn ensure_unique<'a>(field: &str, keys: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(RateError::DataIntegrityError {
                message: format!("duplicate {} {:?}", field, key),
            });
        }
    }
    Ok(())
}

#[async_trait]
impl RateStore for MemoryStore {
    async fn daily_averages(&self, query: &RateQuery) -> Result<Vec<DailyAverage>> {
        let port_set = self.port_set(&query.destination);
        tracing::debug!("Resolved {} to {} port code(s)", query.destination, port_set.len());
        Ok(aggregate_daily_averages(&self.prices, query, &port_set))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
