use crate::utils::error::{RateError, Result};
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 每日平均價格至少需要的樣本數，低於此數的日期不回報
pub const MIN_SAMPLES: usize = 3;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 四位數年份，月與日可不補零 (例如 2024-1-5)
const DATE_SHAPE: &str = r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub slug: String,
    pub parent_slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub code: String,
    pub parent_slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub day: NaiveDate,
    pub orig_code: String,
    pub dest_code: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DailyAverage {
    pub day: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_price: Decimal,
}

/// Which leg of the trade the resolved port set sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// origin -> destination area
    Outbound,
    /// destination area -> origin
    Inbound,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Outbound, Direction::Inbound];
}

/// Raw query string of `GET /rates`, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateParams {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuery {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub origin: String,
    pub destination: String,
}

impl RateQuery {
    pub fn new(
        date_from: NaiveDate,
        date_to: NaiveDate,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            date_from,
            date_to,
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// 驗證請求參數：先檢查缺漏 (空字串視同缺漏)，再檢查日期格式
    pub fn from_params(params: RateParams) -> Result<Self> {
        let (date_from, date_to, origin, destination) = match (
            present(params.date_from),
            present(params.date_to),
            present(params.origin),
            present(params.destination),
        ) {
            (Some(date_from), Some(date_to), Some(origin), Some(destination)) => {
                (date_from, date_to, origin, destination)
            }
            _ => return Err(RateError::MissingParameters),
        };

        Ok(Self {
            date_from: parse_date(&date_from)?,
            date_to: parse_date(&date_to)?,
            origin,
            destination,
        })
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.date_from <= day && day <= self.date_to
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// The shape is checked first: chrono alone would also take a leading sign,
/// leading whitespace or a short year.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let invalid = || RateError::InvalidDateFormat {
        value: value.to_string(),
    };

    let shape = Regex::new(DATE_SHAPE).map_err(|e| RateError::Unexpected {
        message: format!("Invalid date pattern: {}", e),
    })?;
    if !shape.is_match(value) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}
