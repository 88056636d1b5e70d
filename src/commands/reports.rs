// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{compare_year_over_year, compute_consumption_metrics};
use crate::analytics::timeseries::{aggregate_by_month, cost_points, volume_points};
use crate::repo::{EventSource, SqliteEventSource};
use crate::utils::{
    get_currency, get_distance_unit, id_for_vehicle, maybe_print_json, parse_month, pretty_table,
};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("consumption", sub)) => consumption(conn, sub)?,
        Some(("monthly", sub)) => monthly(conn, sub)?,
        Some(("trend", sub)) => trend(conn, sub)?,
        Some(("spend-by-category", sub)) => spend_by_category(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn fuel_type_names(conn: &Connection) -> Result<std::collections::BTreeMap<i64, String>> {
    let mut stmt = conn.prepare("SELECT id, name FROM fuel_types")?;
    let rows = stmt.query_map([], |r| Ok((r.get::<_, i64>(0)?, r.get::<_, String>(1)?)))?;
    let mut names = std::collections::BTreeMap::new();
    for row in rows {
        let (id, name) = row?;
        names.insert(id, name);
    }
    Ok(names)
}

fn consumption(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let vehicle = sub.get_one::<String>("vehicle").unwrap();
    let vehicle_id = id_for_vehicle(conn, vehicle)?;

    let source = SqliteEventSource::new(conn);
    let events = source.events_for_vehicle(vehicle_id)?;
    let units = source.fuel_units()?;
    let report = compute_consumption_metrics(&events, &units);

    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    let names = fuel_type_names(conn)?;
    let ccy = get_currency(conn)?;
    let du = get_distance_unit(conn)?;
    let mut data = Vec::new();
    for metric in report.by_fuel_type.values() {
        data.push(vec![
            names
                .get(&metric.fuel_type_id)
                .cloned()
                .unwrap_or_else(|| format!("#{}", metric.fuel_type_id)),
            format!("{} {}", metric.total_volume, metric.unit),
            format!("{} {}", metric.total_distance, du),
            format!(
                "{} {}/100{}",
                metric.average_consumption_rate.round_dp(2),
                metric.unit,
                du
            ),
            format!("{} {}", metric.total_cost, ccy),
            format!(
                "{} {}/{}",
                metric.average_cost_per_distance.round_dp(2),
                ccy,
                du
            ),
            format!(
                "{} {}/{}",
                metric.average_cost_per_volume.round_dp(2),
                ccy,
                metric.unit
            ),
        ]);
    }
    data.push(vec![
        "(overall)".into(),
        String::new(),
        format!("{} {}", report.overall.total_distance, du),
        String::new(),
        format!("{} {}", report.overall.total_cost, ccy),
        format!(
            "{} {}/{}",
            report.overall.average_cost_per_distance.round_dp(2),
            ccy,
            du
        ),
        String::new(),
    ]);
    println!(
        "{}",
        pretty_table(
            &["Fuel", "Volume", "Distance", "Rate", "Cost", "Cost/dist", "Cost/vol"],
            data
        )
    );
    Ok(())
}

fn monthly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let vehicle = sub.get_one::<String>("vehicle").unwrap();
    let metric = sub.get_one::<String>("metric").unwrap();
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&12);
    let vehicle_id = id_for_vehicle(conn, vehicle)?;

    let source = SqliteEventSource::new(conn);
    let events = source.events_for_vehicle(vehicle_id)?;

    let buckets = match metric.as_str() {
        "volume" => aggregate_by_month(volume_points(&events)),
        "cost" => aggregate_by_month(cost_points(&events)),
        other => {
            return Err(anyhow::anyhow!(
                "Unknown metric '{}' (use volume|cost)",
                other
            ))
        }
    };
    let recent: Vec<_> = buckets.into_iter().rev().take(months).collect();

    if !maybe_print_json(json_flag, jsonl_flag, &recent)? {
        let header = if metric == "cost" { "Cost" } else { "Volume" };
        let data = recent
            .iter()
            .map(|b| vec![b.month.clone(), format!("{:.2}", b.total)])
            .collect();
        println!("{}", pretty_table(&["Month", header], data));
    }
    Ok(())
}

fn trend(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let vehicle = sub.get_one::<String>("vehicle").unwrap();
    let vehicle_id = id_for_vehicle(conn, vehicle)?;

    let reference = match sub.get_one::<i32>("year") {
        Some(&y) => chrono::NaiveDate::from_ymd_opt(y, 1, 1)
            .ok_or_else(|| anyhow::anyhow!("Invalid year {}", y))?,
        None => chrono::Utc::now().date_naive(),
    };

    let source = SqliteEventSource::new(conn);
    let events = source.events_for_vehicle(vehicle_id)?;
    let cmp = compare_year_over_year(&events, reference);

    if maybe_print_json(json_flag, jsonl_flag, &cmp)? {
        return Ok(());
    }

    // Both bucket lists are gap-filled to 12 entries, so zipping pairs each
    // calendar month with itself.
    let mut data = Vec::new();
    for (cur, prev) in cmp
        .current_year_buckets
        .iter()
        .zip(cmp.previous_year_buckets.iter())
    {
        let month_no = cur.month.get(5..7).unwrap_or("");
        data.push(vec![
            month_no.to_string(),
            format!("{:.2}", prev.total),
            format!("{:.2}", cur.total),
        ]);
    }
    data.push(vec![
        "Total".into(),
        format!("{:.2}", cmp.previous_year_total),
        format!("{:.2}", cmp.current_year_total),
    ]);
    println!(
        "{}",
        pretty_table(
            &[
                "Month",
                &cmp.previous_year.to_string(),
                &cmp.current_year.to_string(),
            ],
            data
        )
    );
    println!("Change vs {}: {}%", cmp.previous_year, cmp.percent_change);
    Ok(())
}

fn spend_by_category(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;

    let mut sql = String::from(
        "SELECT c.name, printf('%.2f', SUM(e.amount)) AS spent
         FROM expenses e
         LEFT JOIN expense_categories c ON e.category_id=c.id
         LEFT JOIN vehicles v ON e.vehicle_id=v.id
         WHERE substr(e.date,1,7)=?1",
    );
    let mut params_vec: Vec<String> = vec![month.clone()];
    if let Some(vehicle) = sub.get_one::<String>("vehicle") {
        sql.push_str(" AND v.name=?2");
        params_vec.push(vehicle.clone());
    }
    sql.push_str(" GROUP BY c.name ORDER BY spent DESC");

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn rusqlite::ToSql> = params_vec
        .iter()
        .map(|s| s as &dyn rusqlite::ToSql)
        .collect();
    let rows = stmt.query_map(rusqlite::params_from_iter(params), |r| {
        Ok((r.get::<_, Option<String>>(0)?, r.get::<_, String>(1)?))
    })?;

    let mut data = Vec::new();
    for row in rows {
        let (cat, spent) = row?;
        data.push(vec![cat.unwrap_or("(uncategorized)".into()), spent]);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Category", "Spent"], data));
    }
    Ok(())
}
