// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::FuelEvent;

/// Per-fuel-type efficiency and cost figures derived from a vehicle's fill-up
/// history. The consumption rate is volume per 100 distance units (the
/// L/100km style figure). All fields are exact; rounding to 2 decimal places
/// happens at the display layer.
#[derive(Debug, Clone, Serialize)]
pub struct ConsumptionMetric {
    pub fuel_type_id: i64,
    /// Volume unit label carried from the fuel type, display only.
    pub unit: String,
    pub total_volume: Decimal,
    pub total_distance: i64,
    pub total_cost: Decimal,
    pub average_consumption_rate: Decimal,
    pub average_cost_per_distance: Decimal,
    pub average_cost_per_volume: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverallMetrics {
    pub total_distance: i64,
    pub total_cost: Decimal,
    pub average_cost_per_distance: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsumptionReport {
    pub by_fuel_type: BTreeMap<i64, ConsumptionMetric>,
    pub overall: OverallMetrics,
}

fn ratio(num: Decimal, den: Decimal) -> Decimal {
    if den.is_zero() {
        Decimal::ZERO
    } else {
        num / den
    }
}

/// Compute consumption metrics for one vehicle's fuel events.
///
/// Distance deltas are taken only between consecutive same-fuel-type events
/// that both carry an odometer reading; a delta that is not strictly
/// positive (rollback, duplicate reading, odometer reset) is skipped rather
/// than failing the run, though the event's quantity and cost still count
/// toward the volume/cost totals. Every division is zero-guarded, so this
/// function never errors and never produces NaN.
///
/// `units` maps fuel_type_id to its volume unit label; it is used for
/// display only and never enters the arithmetic.
pub fn compute_consumption_metrics(
    events: &[FuelEvent],
    units: &BTreeMap<i64, String>,
) -> ConsumptionReport {
    let mut groups: BTreeMap<i64, Vec<&FuelEvent>> = BTreeMap::new();
    for e in events {
        groups.entry(e.fuel_type_id).or_default().push(e);
    }

    let mut by_fuel_type = BTreeMap::new();
    let mut overall_distance: i64 = 0;
    let mut overall_cost = Decimal::ZERO;

    for (fuel_type_id, mut group) in groups {
        group.sort_by_key(|e| e.date);

        let mut total_volume = Decimal::ZERO;
        let mut total_cost = Decimal::ZERO;
        let mut total_distance: i64 = 0;

        for pair in group.windows(2) {
            if let (Some(prev), Some(cur)) = (pair[0].odometer, pair[1].odometer) {
                let distance = cur - prev;
                if distance > 0 {
                    total_distance += distance;
                }
            }
        }
        for e in &group {
            total_volume += e.quantity;
            total_cost += e.total_cost;
        }

        let distance_dec = Decimal::from(total_distance);
        by_fuel_type.insert(
            fuel_type_id,
            ConsumptionMetric {
                fuel_type_id,
                unit: units.get(&fuel_type_id).cloned().unwrap_or_default(),
                total_volume,
                total_distance,
                total_cost,
                average_consumption_rate: ratio(total_volume * Decimal::from(100), distance_dec),
                average_cost_per_distance: ratio(total_cost, distance_dec),
                average_cost_per_volume: ratio(total_cost, total_volume),
            },
        );
        overall_distance += total_distance;
        overall_cost += total_cost;
    }

    ConsumptionReport {
        by_fuel_type,
        overall: OverallMetrics {
            total_distance: overall_distance,
            total_cost: overall_cost,
            average_cost_per_distance: ratio(overall_cost, Decimal::from(overall_distance)),
        },
    }
}
