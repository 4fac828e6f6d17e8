use crate::core::{DailyAverage, RateQuery, RateStore};
use crate::domain::model::MIN_SAMPLES;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use std::str::FromStr;

/// Closure, membership and both aggregation legs in one statement.
///
/// `$1`/`$2` inclusive day bounds, `$3` origin, `$4` destination slug or port
/// code, `$5` minimum sample count.
pub const DAILY_AVERAGES_SQL: &str = r#"
WITH RECURSIVE region_tree AS (
    SELECT slug FROM regions WHERE slug = $4::text
    UNION
    SELECT r.slug
    FROM regions r
    INNER JOIN region_tree rt ON r.parent_slug = rt.slug
),
port_list AS (
    SELECT p.code
    FROM ports p
    WHERE p.parent_slug IN (SELECT slug FROM region_tree)
    UNION
    SELECT $4::text
)
SELECT day, AVG(price)::numeric AS average_price
FROM prices
WHERE day >= $1 AND day <= $2
  AND orig_code = $3
  AND dest_code IN (SELECT code FROM port_list)
GROUP BY day
HAVING COUNT(price) >= $5
UNION
SELECT day, AVG(price)::numeric AS average_price
FROM prices
WHERE day >= $1 AND day <= $2
  AND orig_code IN (SELECT code FROM port_list)
  AND dest_code = $3
GROUP BY day
HAVING COUNT(price) >= $5
ORDER BY day, average_price
"#;

/// Postgres-backed [`RateStore`].
///
/// Holds connection options only. Every query opens its own connection and
/// closes it before returning, whatever the outcome.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    options: PgConnectOptions,
}

impl PostgresStore {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    pub fn from_url(url: &str) -> Result<Self> {
        let options = PgConnectOptions::from_str(url)?.application_name("freight-rates");
        Ok(Self::new(options))
    }

    async fn run_query(conn: &mut PgConnection, query: &RateQuery) -> Result<Vec<DailyAverage>> {
        let rows: Vec<(NaiveDate, Decimal)> = sqlx::query_as(DAILY_AVERAGES_SQL)
            .bind(query.date_from)
            .bind(query.date_to)
            .bind(&query.origin)
            .bind(&query.destination)
            .bind(MIN_SAMPLES as i64)
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(day, average_price)| DailyAverage { day, average_price })
            .collect())
    }
}

#[async_trait]
impl RateStore for PostgresStore {
    async fn daily_averages(&self, query: &RateQuery) -> Result<Vec<DailyAverage>> {
        let mut conn = PgConnection::connect_with(&self.options).await.map_err(|e| {
            tracing::error!("Database connection failed: {}", e);
            e
        })?;

        let outcome = Self::run_query(&mut conn, query).await;

        // 無論查詢成功與否都關閉連線；future 被取消時 PgConnection 的 Drop 會關閉 socket
        if let Err(e) = conn.close().await {
            tracing::warn!("Failed to close database connection cleanly: {}", e);
        }

        outcome
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
