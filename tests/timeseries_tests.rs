// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fuelclip::analytics::aggregate_by_month;
use fuelclip::analytics::timeseries::{cost_points, volume_points};
use fuelclip::models::FuelEvent;
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn ev(id: i64, date: &str, quantity: &str, total_cost: &str) -> FuelEvent {
    FuelEvent {
        id,
        fuel_type_id: 1,
        date: day(date),
        quantity: d(quantity),
        price_per_unit: d("1"),
        total_cost: d(total_cost),
        odometer: None,
    }
}

#[test]
fn buckets_are_summed_per_month_and_sorted() {
    let points = vec![
        (day("2025-03-10"), d("5")),
        (day("2025-01-02"), d("1")),
        (day("2025-03-28"), d("7")),
        (day("2025-01-31"), d("2")),
    ];
    let buckets = aggregate_by_month(points);
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].month, "2025-01");
    assert_eq!(buckets[0].total, d("3"));
    assert_eq!(buckets[1].month, "2025-03");
    assert_eq!(buckets[1].total, d("12"));
}

#[test]
fn empty_months_produce_no_bucket() {
    let buckets = aggregate_by_month(vec![
        (day("2024-12-31"), d("1")),
        (day("2025-02-01"), d("1")),
    ]);
    let months: Vec<&str> = buckets.iter().map(|b| b.month.as_str()).collect();
    assert_eq!(months, ["2024-12", "2025-02"]);
}

#[test]
fn aggregator_is_parameterized_over_the_summed_field() {
    let events = [
        ev(1, "2025-05-01", "40", "60"),
        ev(2, "2025-05-20", "35", "56"),
    ];
    let by_volume = aggregate_by_month(volume_points(&events));
    let by_cost = aggregate_by_month(cost_points(&events));
    assert_eq!(by_volume[0].total, d("75"));
    assert_eq!(by_cost[0].total, d("116"));
}

#[test]
fn reaggregating_bucket_totals_reproduces_the_buckets() {
    let events = [
        ev(1, "2025-01-05", "10", "15"),
        ev(2, "2025-01-25", "12", "18"),
        ev(3, "2025-04-09", "9", "14"),
    ];
    let first = aggregate_by_month(volume_points(&events));

    // One synthetic event per bucket on the 1st of its month.
    let synthetic: Vec<FuelEvent> = first
        .iter()
        .enumerate()
        .map(|(i, b)| {
            ev(
                i as i64,
                &format!("{}-01", b.month),
                &b.total.to_string(),
                "0.01",
            )
        })
        .collect();
    let second = aggregate_by_month(volume_points(&synthetic));
    assert_eq!(first, second);
}
