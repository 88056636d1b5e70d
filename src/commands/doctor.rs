// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = scan(conn)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

pub fn scan(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    // 1) Recorded cost far from quantity * price. Analytics still trust the
    //    recorded figure; this only flags likely typos. 0.05 absorbs entry
    //    rounding.
    let tolerance = Decimal::new(5, 2);
    let mut stmt = conn.prepare(
        "SELECT id, date, quantity, price_per_unit, total_cost FROM fuel_logs ORDER BY date, id",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let qty = parse_decimal(&r.get::<_, String>(2)?)?;
        let price = parse_decimal(&r.get::<_, String>(3)?)?;
        let cost = parse_decimal(&r.get::<_, String>(4)?)?;
        let diff = (qty * price - cost).abs();
        if diff > tolerance {
            rows.push(vec![
                "cost_mismatch".into(),
                format!("log {} on {} (off by {})", id, date, diff.round_dp(2)),
            ]);
        }
    }

    // 2) Odometer rollbacks within one vehicle + fuel type sequence. These
    //    pairs are skipped by the consumption report.
    let mut stmt2 = conn.prepare(
        "SELECT vehicle_id, fuel_type_id, id, date, odometer FROM fuel_logs
         WHERE odometer IS NOT NULL ORDER BY vehicle_id, fuel_type_id, date, id",
    )?;
    let mut cur2 = stmt2.query([])?;
    let mut last: Option<(i64, i64, i64)> = None;
    while let Some(r) = cur2.next()? {
        let vehicle_id: i64 = r.get(0)?;
        let fuel_type_id: i64 = r.get(1)?;
        let id: i64 = r.get(2)?;
        let date: String = r.get(3)?;
        let odometer: i64 = r.get(4)?;
        if let Some((lv, lf, lo)) = last {
            if lv == vehicle_id && lf == fuel_type_id && odometer <= lo {
                rows.push(vec![
                    "odometer_rollback".into(),
                    format!("log {} on {} ({} after {})", id, date, odometer, lo),
                ]);
            }
        }
        last = Some((vehicle_id, fuel_type_id, odometer));
    }

    // 3) Logs without a reading cannot contribute to distance rates.
    let mut stmt3 =
        conn.prepare("SELECT id, date FROM fuel_logs WHERE odometer IS NULL ORDER BY date, id")?;
    let mut cur3 = stmt3.query([])?;
    while let Some(r) = cur3.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        rows.push(vec![
            "missing_odometer".into(),
            format!("log {} on {}", id, date),
        ]);
    }

    Ok(rows)
}
