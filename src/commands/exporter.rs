// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("logs", sub)) => export_logs(conn, sub),
        _ => Ok(()),
    }
}

fn export_logs(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        return Err(anyhow::anyhow!("Unknown format: {} (use csv|json)", fmt));
    }

    let mut sql = String::from(
        "SELECT l.date, v.name as vehicle, f.name as fuel_type, l.quantity, l.price_per_unit,
                l.total_cost, l.odometer, l.note
         FROM fuel_logs l
         LEFT JOIN vehicles v ON l.vehicle_id=v.id
         LEFT JOIN fuel_types f ON l.fuel_type_id=f.id",
    );
    let vehicle = sub.get_one::<String>("vehicle");
    if vehicle.is_some() {
        sql.push_str(" WHERE v.name=?1");
    }
    sql.push_str(" ORDER BY l.date, l.id");

    let mut stmt = conn.prepare(&sql)?;
    let mut raw = if let Some(v) = vehicle {
        stmt.query([v])?
    } else {
        stmt.query([])?
    };
    let mut rows = Vec::new();
    while let Some(r) = raw.next()? {
        rows.push((
            r.get::<_, String>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
            r.get::<_, Option<i64>>(6)?,
            r.get::<_, Option<String>>(7)?,
        ));
    }

    if fmt == "csv" {
        let mut wtr = csv::Writer::from_path(out)?;
        wtr.write_record([
            "date",
            "fuel_type",
            "quantity",
            "price_per_unit",
            "total_cost",
            "odometer",
            "note",
        ])?;
        for (d, _v, ft, qty, price, cost, odo, note) in rows {
            wtr.write_record([
                d,
                ft,
                qty,
                price,
                cost,
                odo.map(|o| o.to_string()).unwrap_or_default(),
                note.unwrap_or_default(),
            ])?;
        }
        wtr.flush()?;
    } else {
        let mut items = Vec::new();
        for (d, v, ft, qty, price, cost, odo, note) in rows {
            items.push(json!({
                "date": d, "vehicle": v, "fuel_type": ft, "quantity": qty,
                "price_per_unit": price, "total_cost": cost,
                "odometer": odo, "note": note
            }));
        }
        std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
    }
    println!("Exported fuel logs to {}", out);
    Ok(())
}
