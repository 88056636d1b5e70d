// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelType {
    pub id: i64,
    pub name: String,
    pub unit: String, // "L", "gal" or "kWh"
}

/// One recorded fuel purchase. `total_cost` is trusted as entered and never
/// re-derived from `quantity * price_per_unit` downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelEvent {
    pub id: i64,
    pub fuel_type_id: i64,
    pub date: NaiveDate,
    pub quantity: Decimal,
    pub price_per_unit: Decimal,
    pub total_cost: Decimal,
    /// Cumulative odometer reading at fill-up time. Absent readings exclude
    /// the event from distance-based rates but not from volume/cost sums.
    pub odometer: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,
    pub vehicle_id: i64,
    pub category_id: i64,
    pub amount: Decimal,
    pub note: Option<String>,
}
