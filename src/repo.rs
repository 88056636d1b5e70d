// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::models::FuelEvent;
use crate::utils::{parse_date, parse_decimal};

/// Where the analytics load their input from. The reports construct one
/// implementation up front and hand it to the analysis path; the pure
/// functions themselves never touch storage.
pub trait EventSource {
    /// All fuel events of one vehicle, date ascending.
    fn events_for_vehicle(&self, vehicle_id: i64) -> Result<Vec<FuelEvent>>;

    /// fuel_type_id -> unit label, for display only.
    fn fuel_units(&self) -> Result<BTreeMap<i64, String>>;
}

pub struct SqliteEventSource<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteEventSource<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl EventSource for SqliteEventSource<'_> {
    fn events_for_vehicle(&self, vehicle_id: i64) -> Result<Vec<FuelEvent>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, fuel_type_id, date, quantity, price_per_unit, total_cost, odometer
             FROM fuel_logs WHERE vehicle_id=?1 ORDER BY date, id",
        )?;
        let rows = stmt.query_map(params![vehicle_id], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, i64>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
                r.get::<_, String>(5)?,
                r.get::<_, Option<i64>>(6)?,
            ))
        })?;

        let mut events = Vec::new();
        for row in rows {
            let (id, fuel_type_id, d, qty, price, cost, odometer) = row?;
            events.push(FuelEvent {
                id,
                fuel_type_id,
                date: parse_date(&d).with_context(|| format!("Fuel log {} has bad date", id))?,
                quantity: parse_decimal(&qty)
                    .with_context(|| format!("Fuel log {} has bad quantity", id))?,
                price_per_unit: parse_decimal(&price)
                    .with_context(|| format!("Fuel log {} has bad price", id))?,
                total_cost: parse_decimal(&cost)
                    .with_context(|| format!("Fuel log {} has bad cost", id))?,
                odometer,
            });
        }
        Ok(events)
    }

    fn fuel_units(&self) -> Result<BTreeMap<i64, String>> {
        let mut stmt = self.conn.prepare("SELECT id, unit FROM fuel_types")?;
        let rows = stmt.query_map([], |r| Ok((r.get::<_, i64>(0)?, r.get::<_, String>(1)?)))?;
        let mut units = BTreeMap::new();
        for row in rows {
            let (id, unit) = row?;
            units.insert(id, unit);
        }
        Ok(units)
    }
}
