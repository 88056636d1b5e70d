// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{
    id_for_fuel_type, id_for_vehicle, maybe_print_json, parse_date, parse_positive_decimal,
    pretty_table,
};
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let n = conn.execute("DELETE FROM fuel_logs WHERE id=?1", params![id])?;
            if n == 0 {
                return Err(anyhow::anyhow!("Fuel log {} not found", id));
            }
            println!("Removed fuel log {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let vehicle_name = sub.get_one::<String>("vehicle").unwrap();
    let fuel_type_name = sub.get_one::<String>("fuel-type").unwrap();
    let quantity = parse_positive_decimal(sub.get_one::<String>("quantity").unwrap(), "Quantity")?;
    let price = parse_positive_decimal(sub.get_one::<String>("price").unwrap(), "Price")?;
    // Cost is recorded as entered (or derived once here) and trusted
    // downstream; reports never recompute it from quantity * price.
    let total_cost = match sub.get_one::<String>("cost") {
        Some(c) => parse_positive_decimal(c, "Cost")?,
        None => quantity * price,
    };
    let odometer = sub.get_one::<i64>("odometer").copied();
    if let Some(o) = odometer {
        if o < 0 {
            return Err(anyhow::anyhow!("Odometer must be non-negative, got {}", o));
        }
    }
    let note = sub.get_one::<String>("note").map(|s| s.to_string());

    let vehicle_id = id_for_vehicle(conn, vehicle_name)?;
    let fuel_type_id = id_for_fuel_type(conn, fuel_type_name)?;

    conn.execute(
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
    println!(
        "Recorded {} of '{}' on {} for {} (vehicle: {})",
        quantity, fuel_type_name, date, total_cost, vehicle_name
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.vehicle.clone(),
                    r.fuel_type.clone(),
                    r.quantity.clone(),
                    r.price_per_unit.clone(),
                    r.total_cost.clone(),
                    r.odometer.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Vehicle", "Fuel", "Qty", "Price", "Cost", "Odometer", "Note"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct FuelLogRow {
    pub date: String,
    pub vehicle: String,
    pub fuel_type: String,
    pub quantity: String,
    pub price_per_unit: String,
    pub total_cost: String,
    pub odometer: String,
    pub note: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<FuelLogRow>> {
    let mut sql = String::from(
        "SELECT l.date, v.name, f.name, l.quantity, l.price_per_unit, l.total_cost, l.odometer, l.note
         FROM fuel_logs l
         LEFT JOIN vehicles v ON l.vehicle_id=v.id
         LEFT JOIN fuel_types f ON l.fuel_type_id=f.id WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(l.date,1,7)=?");
        params_vec.push(month.into());
    }
    if let Some(vehicle) = sub.get_one::<String>("vehicle") {
        sql.push_str(" AND v.name=?");
        params_vec.push(vehicle.into());
    }
    if let Some(ft) = sub.get_one::<String>("fuel-type") {
        sql.push_str(" AND f.name=?");
        params_vec.push(ft.into());
    }
    sql.push_str(" ORDER BY l.date DESC, l.id DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let date: String = r.get(0)?;
        let vehicle: Option<String> = r.get(1)?;
        let fuel_type: Option<String> = r.get(2)?;
        let quantity: String = r.get(3)?;
        let price_per_unit: String = r.get(4)?;
        let total_cost: String = r.get(5)?;
        let odometer: Option<i64> = r.get(6)?;
        let note: Option<String> = r.get(7)?;
        data.push(FuelLogRow {
            date,
            vehicle: vehicle.unwrap_or_default(),
            fuel_type: fuel_type.unwrap_or_default(),
            quantity,
            price_per_unit,
            total_cost,
            odometer: odometer.map(|o| o.to_string()).unwrap_or_default(),
            note: note.unwrap_or_default(),
        });
    }
    Ok(data)
}
