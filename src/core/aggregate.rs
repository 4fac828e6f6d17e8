use crate::domain::model::{DailyAverage, Direction, PriceRecord, RateQuery, MIN_SAMPLES};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashSet};

#[derive(Debug, Default, Clone, Copy)]
struct DayBucket {
    sum: Decimal,
    count: usize,
}

fn matches_leg(
    record: &PriceRecord,
    direction: Direction,
    origin: &str,
    port_set: &HashSet<String>,
) -> bool {
    match direction {
        Direction::Outbound => record.orig_code == origin && port_set.contains(&record.dest_code),
        Direction::Inbound => port_set.contains(&record.orig_code) && record.dest_code == origin,
    }
}

/// Per-day averages of a single leg, dropping days with fewer than
/// `MIN_SAMPLES` contributing records.
pub fn aggregate_leg(
    prices: &[PriceRecord],
    query: &RateQuery,
    port_set: &HashSet<String>,
    direction: Direction,
) -> Vec<DailyAverage> {
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for record in prices
        .iter()
        .filter(|r| query.contains_day(r.day))
        .filter(|r| matches_leg(r, direction, &query.origin, port_set))
    {
        let bucket = buckets.entry(record.day).or_default();
        bucket.sum += record.price;
        bucket.count += 1;
    }

    buckets
        .into_iter()
        .filter(|(_, bucket)| bucket.count >= MIN_SAMPLES)
        .map(|(day, bucket)| DailyAverage {
            day,
            average_price: bucket.sum / Decimal::from(bucket.count),
        })
        .collect()
}

/// Union of both legs, ascending by day.
///
/// Identical `(day, average)` pairs collapse; a day present in both legs with
/// different averages yields two rows. Legs are never blended.
pub fn aggregate_daily_averages(
    prices: &[PriceRecord],
    query: &RateQuery,
    port_set: &HashSet<String>,
) -> Vec<DailyAverage> {
    let rows: BTreeSet<DailyAverage> = Direction::BOTH
        .into_iter()
        .flat_map(|direction| aggregate_leg(prices, query, port_set, direction))
        .collect();

    rows.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
    }

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn price(d: u32, orig: &str, dest: &str, value: &str) -> PriceRecord {
        PriceRecord {
            day: day(d),
            orig_code: orig.to_string(),
            dest_code: dest.to_string(),
            price: dec(value),
        }
    }

    fn query() -> RateQuery {
        RateQuery::new(day(1), day(10), "CNSGH", "north_europe")
    }

    fn port_set() -> HashSet<String> {
        ["north_europe", "NOOSL", "SEGOT"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_outbound_average_with_enough_samples() {
        let prices = vec![
            price(1, "CNSGH", "NOOSL", "900"),
            price(1, "CNSGH", "SEGOT", "1000"),
            price(1, "CNSGH", "NOOSL", "1100"),
            price(2, "CNSGH", "SEGOT", "1100"),
            price(2, "CNSGH", "SEGOT", "1100"),
            price(2, "CNSGH", "NOOSL", "1100"),
        ];
        let rows = aggregate_daily_averages(&prices, &query(), &port_set());
        assert_eq!(
            rows,
            vec![
                DailyAverage {
                    day: day(1),
                    average_price: dec("1000")
                },
                DailyAverage {
                    day: day(2),
                    average_price: dec("1100")
                },
            ]
        );
    }

    #[test]
    fn test_days_below_threshold_are_suppressed() {
        let prices = vec![
            price(1, "CNSGH", "NOOSL", "900"),
            price(1, "CNSGH", "NOOSL", "1100"),
            price(3, "CNSGH", "NOOSL", "500"),
            price(3, "CNSGH", "NOOSL", "500"),
            price(3, "CNSGH", "NOOSL", "500"),
        ];
        let rows = aggregate_daily_averages(&prices, &query(), &port_set());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].day, day(3));
    }

    #[test]
    fn test_threshold_is_counted_per_direction() {
        // two outbound + two inbound on the same day: neither leg qualifies
        let prices = vec![
            price(1, "CNSGH", "NOOSL", "100"),
            price(1, "CNSGH", "SEGOT", "100"),
            price(1, "NOOSL", "CNSGH", "100"),
            price(1, "SEGOT", "CNSGH", "100"),
        ];
        assert!(aggregate_daily_averages(&prices, &query(), &port_set()).is_empty());
    }

    #[test]
    fn test_inbound_leg_uses_origin_as_destination() {
        let prices = vec![
            price(4, "NOOSL", "CNSGH", "700"),
            price(4, "SEGOT", "CNSGH", "800"),
            price(4, "north_europe", "CNSGH", "900"),
            // not the origin on the receiving side
            price(4, "NOOSL", "USNYC", "5000"),
        ];
        let rows = aggregate_leg(&prices, &query(), &port_set(), Direction::Inbound);
        assert_eq!(
            rows,
            vec![DailyAverage {
                day: day(4),
                average_price: dec("800")
            }]
        );
        assert!(aggregate_leg(&prices, &query(), &port_set(), Direction::Outbound).is_empty());
    }

    #[test]
    fn test_both_directions_on_same_day_yield_two_rows() {
        let prices = vec![
            price(5, "CNSGH", "NOOSL", "1000"),
            price(5, "CNSGH", "NOOSL", "1000"),
            price(5, "CNSGH", "NOOSL", "1000"),
            price(5, "NOOSL", "CNSGH", "400"),
            price(5, "NOOSL", "CNSGH", "400"),
            price(5, "NOOSL", "CNSGH", "400"),
        ];
        let rows = aggregate_daily_averages(&prices, &query(), &port_set());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.day == day(5)));
        assert_eq!(rows[0].average_price, dec("400"));
        assert_eq!(rows[1].average_price, dec("1000"));
    }

    #[test]
    fn test_identical_rows_from_both_directions_collapse() {
        let prices = vec![
            price(6, "CNSGH", "NOOSL", "300"),
            price(6, "CNSGH", "NOOSL", "300"),
            price(6, "CNSGH", "NOOSL", "300"),
            price(6, "NOOSL", "CNSGH", "300"),
            price(6, "NOOSL", "CNSGH", "300"),
            price(6, "NOOSL", "CNSGH", "300"),
        ];
        let rows = aggregate_daily_averages(&prices, &query(), &port_set());
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let mut prices = Vec::new();
        for d in [1, 10, 11] {
            for _ in 0..3 {
                prices.push(price(d, "CNSGH", "SEGOT", "10"));
            }
        }
        let rows = aggregate_daily_averages(&prices, &query(), &port_set());
        let days: Vec<NaiveDate> = rows.iter().map(|r| r.day).collect();
        assert_eq!(days, vec![day(1), day(10)]);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let prices = vec![
            price(5, "CNSGH", "SEGOT", "10"),
            price(5, "CNSGH", "SEGOT", "10"),
            price(5, "CNSGH", "SEGOT", "10"),
        ];
        let reversed = RateQuery::new(day(10), day(1), "CNSGH", "north_europe");
        assert!(aggregate_daily_averages(&prices, &reversed, &port_set()).is_empty());
    }

    #[test]
    fn test_average_keeps_decimal_precision() {
        let prices = vec![
            price(7, "CNSGH", "SEGOT", "10"),
            price(7, "CNSGH", "SEGOT", "10"),
            price(7, "CNSGH", "SEGOT", "11"),
        ];
        let rows = aggregate_daily_averages(&prices, &query(), &port_set());
        let expected = dec("31") / dec("3");
        assert_eq!(rows[0].average_price, expected);
        assert!(rows[0].average_price.scale() > 2);
    }
}
