#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use freight_rates::{create_router, AppState, DailyAverage, RateError, RateQuery, RateStore, Result};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;

/// Starts the router on an ephemeral port and returns its base URL.
pub async fn spawn_app<S: RateStore + 'static>(store: S) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(AppState::new(store)))
            .await
            .unwrap();
    });
    format!("http://{}", addr)
}

pub async fn get_rates(base: &str, params: &[(&str, &str)]) -> (u16, serde_json::Value) {
    let response = reqwest::Client::new()
        .get(format!("{}/rates", base))
        .query(params)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body = response.json::<serde_json::Value>().await.unwrap();
    (status, body)
}

pub fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

/// Returns canned rows and counts how often it was queried.
pub struct StaticStore {
    pub rows: Vec<DailyAverage>,
    pub calls: AtomicUsize,
}

impl StaticStore {
    pub fn new(rows: Vec<DailyAverage>) -> Self {
        Self {
            rows,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateStore for StaticStore {
    async fn daily_averages(&self, _query: &RateQuery) -> Result<Vec<DailyAverage>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.clone())
    }

    fn backend_name(&self) -> &'static str {
        "static"
    }
}

pub struct FailingStore;

#[async_trait]
impl RateStore for FailingStore {
    async fn daily_averages(&self, _query: &RateQuery) -> Result<Vec<DailyAverage>> {
        Err(RateError::DatabaseError(sqlx::Error::Protocol(
            "Database connection failed".to_string(),
        )))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

pub struct BrokenStore;

#[async_trait]
impl RateStore for BrokenStore {
    async fn daily_averages(&self, _query: &RateQuery) -> Result<Vec<DailyAverage>> {
        Err(RateError::Unexpected {
            message: "internal invariant broken at row 17".to_string(),
        })
    }

    fn backend_name(&self) -> &'static str {
        "broken"
    }
}

pub struct PanickingStore;

#[async_trait]
impl RateStore for PanickingStore {
    async fn daily_averages(&self, _query: &RateQuery) -> Result<Vec<DailyAverage>> {
        panic!("store exploded");
    }

    fn backend_name(&self) -> &'static str {
        "panicking"
    }
}
