// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{id_for_vehicle, parse_date, parse_positive_decimal};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use rusqlite::{params, Connection};
use std::collections::{hash_map::Entry, HashMap};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("logs", sub)) => import_logs(conn, sub),
        _ => Ok(()),
    }
}

/// Expected columns: date,fuel_type,quantity,price_per_unit,total_cost,odometer,note
/// with total_cost and odometer optional per row. The whole file imports in
/// one transaction; the first bad row rolls everything back.
fn import_logs(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let vehicle_name = sub.get_one::<String>("vehicle").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let vehicle_id = id_for_vehicle(conn, vehicle_name)?;

    let tx = conn.transaction()?;
    let mut fuel_type_cache: HashMap<String, i64> = HashMap::new();
    let mut imported = 0usize;

    for result in rdr.records() {
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim().to_string();
        let fuel_type = rec.get(1).context("fuel_type missing")?.trim().to_string();
        let quantity_raw = rec.get(2).context("quantity missing")?.trim().to_string();
        let price_raw = rec
            .get(3)
            .context("price_per_unit missing")?
            .trim()
            .to_string();
        let cost_raw = rec.get(4).unwrap_or("").trim().to_string();
        let odometer_raw = rec.get(5).unwrap_or("").trim().to_string();
        let note = rec
            .get(6)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        let date =
            parse_date(&date_raw).with_context(|| format!("Invalid log date '{}'", date_raw))?;
        let quantity = parse_positive_decimal(&quantity_raw, "Quantity")
            .with_context(|| format!("Invalid quantity '{}' on {}", quantity_raw, date_raw))?;
        let price = parse_positive_decimal(&price_raw, "Price")
            .with_context(|| format!("Invalid price '{}' on {}", price_raw, date_raw))?;
        let total_cost = if cost_raw.is_empty() {
            quantity * price
        } else {
            parse_positive_decimal(&cost_raw, "Cost")
                .with_context(|| format!("Invalid cost '{}' on {}", cost_raw, date_raw))?
        };
        let odometer: Option<i64> = if odometer_raw.is_empty() {
            None
        } else {
            let o: i64 = odometer_raw
                .parse()
                .with_context(|| format!("Invalid odometer '{}' on {}", odometer_raw, date_raw))?;
            if o < 0 {
                return Err(anyhow::anyhow!(
                    "Odometer must be non-negative, got {} on {}",
                    o,
                    date_raw
                ));
            }
            Some(o)
        };

        let fuel_type_id: i64 = match fuel_type_cache.entry(fuel_type.clone()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id: i64 = tx
                    .query_row(
                        "SELECT id FROM fuel_types WHERE name=?1",
                        params![&fuel_type],
                        |r| r.get(0),
                    )
                    .with_context(|| format!("Fuel type '{}' not found", fuel_type))?;
                *entry.insert(id)
            }
        };

        tx.execute(
            "INSERT INTO fuel_logs(vehicle_id, fuel_type_id, date, quantity, price_per_unit, total_cost, odometer, note)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                vehicle_id,
                fuel_type_id,
                date.to_string(),
                quantity.to_string(),
                price.to_string(),
                total_cost.to_string(),
                odometer,
                note
            ],
        )?;
        imported += 1;
    }

    tx.commit()?;
    println!("Imported {} fuel logs for '{}'", imported, vehicle_name);
    Ok(())
}
