// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{
    id_for_category, id_for_vehicle, maybe_print_json, parse_date, parse_positive_decimal,
    pretty_table,
};
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let vehicle_name = sub.get_one::<String>("vehicle").unwrap();
    let category_name = sub.get_one::<String>("category").unwrap();
    let amount = parse_positive_decimal(sub.get_one::<String>("amount").unwrap(), "Amount")?;
    let note = sub.get_one::<String>("note").map(|s| s.to_string());

    let vehicle_id = id_for_vehicle(conn, vehicle_name)?;
    let category_id = id_for_category(conn, category_name)?;

    conn.execute(
        "INSERT INTO expenses(vehicle_id, category_id, date, amount, note)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            vehicle_id,
            category_id,
            date.to_string(),
            amount.to_string(),
            note
        ],
    )?;
    println!(
        "Recorded {} for '{}' on {} (vehicle: {})",
        amount, category_name, date, vehicle_name
    );
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub date: String,
    pub vehicle: String,
    pub category: String,
    pub amount: String,
    pub note: String,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let mut sql = String::from(
        "SELECT e.date, v.name, c.name, e.amount, e.note
         FROM expenses e
         LEFT JOIN vehicles v ON e.vehicle_id=v.id
         LEFT JOIN expense_categories c ON e.category_id=c.id WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(e.date,1,7)=?");
        params_vec.push(month.into());
    }
    if let Some(vehicle) = sub.get_one::<String>("vehicle") {
        sql.push_str(" AND v.name=?");
        params_vec.push(vehicle.into());
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        sql.push_str(" AND c.name=?");
        params_vec.push(cat.into());
    }
    sql.push_str(" ORDER BY e.date DESC, e.id DESC");
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
        let category: Option<String> = r.get(2)?;
        let amount: String = r.get(3)?;
        let note: Option<String> = r.get(4)?;
        data.push(ExpenseRow {
            date,
            vehicle: vehicle.unwrap_or_default(),
            category: category.unwrap_or_default(),
            amount,
            note: note.unwrap_or_default(),
        });
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.vehicle.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Vehicle", "Category", "Amount", "Note"], rows)
        );
    }
    Ok(())
}
