// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::FuelEvent;

/// One calendar month's summed value. `month` is a zero-padded `YYYY-MM`
/// key, so lexicographic order is chronological order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    pub month: String,
    pub total: Decimal,
}

/// Sum `(date, value)` points into one bucket per calendar month, ascending.
///
/// Months with no points produce no bucket; callers that need a gap-free
/// series fill the holes themselves (see `trend::compare_year_over_year`).
/// Taking plain points keeps the aggregator usable for fuel volume, fuel
/// cost, and expense series alike.
pub fn aggregate_by_month<I>(points: I) -> Vec<MonthlyBucket>
where
    I: IntoIterator<Item = (NaiveDate, Decimal)>,
{
    let mut map: BTreeMap<String, Decimal> = BTreeMap::new();
    for (date, value) in points {
        *map.entry(date.format("%Y-%m").to_string())
            .or_insert(Decimal::ZERO) += value;
    }
    map.into_iter()
        .map(|(month, total)| MonthlyBucket { month, total })
        .collect()
}

pub fn volume_points(events: &[FuelEvent]) -> impl Iterator<Item = (NaiveDate, Decimal)> + '_ {
    events.iter().map(|e| (e.date, e.quantity))
}

pub fn cost_points(events: &[FuelEvent]) -> impl Iterator<Item = (NaiveDate, Decimal)> + '_ {
    events.iter().map(|e| (e.date, e.total_cost))
}
