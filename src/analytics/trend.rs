// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use super::timeseries::{aggregate_by_month, MonthlyBucket};
use crate::models::FuelEvent;

/// Fuel spend for the reference year against the year before it.
///
/// Both bucket lists always hold exactly 12 entries, January through
/// December, with 0 for months that had no fill-ups. Index i is therefore
/// month i+1 in both lists, so side-by-side consumers can never pair
/// mismatched months no matter which months are missing data.
#[derive(Debug, Clone, Serialize)]
pub struct YearComparison {
    pub current_year: i32,
    pub previous_year: i32,
    pub current_year_buckets: Vec<MonthlyBucket>,
    pub previous_year_buckets: Vec<MonthlyBucket>,
    pub current_year_total: Decimal,
    pub previous_year_total: Decimal,
    pub percent_change: Decimal,
}

fn full_year_buckets(year: i32, buckets: Vec<MonthlyBucket>) -> Vec<MonthlyBucket> {
    let mut by_month: std::collections::BTreeMap<String, Decimal> =
        buckets.into_iter().map(|b| (b.month, b.total)).collect();
    (1..=12u32)
        .map(|m| {
            let month = format!("{:04}-{:02}", year, m);
            let total = by_month.remove(&month).unwrap_or(Decimal::ZERO);
            MonthlyBucket { month, total }
        })
        .collect()
}

/// Compare total fuel cost of the reference date's calendar year against the
/// previous calendar year.
///
/// A previous year with zero spend yields a percent change of exactly 0
/// rather than a division blow-up: no baseline means no signal.
pub fn compare_year_over_year(events: &[FuelEvent], reference_date: NaiveDate) -> YearComparison {
    let current_year = reference_date.year();
    let previous_year = current_year - 1;

    let current: Vec<&FuelEvent> = events
        .iter()
        .filter(|e| e.date.year() == current_year)
        .collect();
    let previous: Vec<&FuelEvent> = events
        .iter()
        .filter(|e| e.date.year() == previous_year)
        .collect();

    // Totals come straight from the filtered lists, not from the buckets.
    let current_year_total: Decimal = current.iter().map(|e| e.total_cost).sum();
    let previous_year_total: Decimal = previous.iter().map(|e| e.total_cost).sum();

    let percent_change = if previous_year_total > Decimal::ZERO {
        ((current_year_total - previous_year_total) / previous_year_total * Decimal::from(100))
            .round_dp(2)
    } else {
        Decimal::ZERO
    };

    YearComparison {
        current_year,
        previous_year,
        current_year_buckets: full_year_buckets(
            current_year,
            aggregate_by_month(current.iter().map(|e| (e.date, e.total_cost))),
        ),
        previous_year_buckets: full_year_buckets(
            previous_year,
            aggregate_by_month(previous.iter().map(|e| (e.date, e.total_cost))),
        ),
        current_year_total,
        previous_year_total,
        percent_change,
    }
}
