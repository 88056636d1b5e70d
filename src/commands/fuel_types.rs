// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::{params, Connection};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let unit = sub.get_one::<String>("unit").unwrap();
            if unit != "L" && unit != "gal" && unit != "kWh" {
                return Err(anyhow::anyhow!(
                    "Invalid unit '{}' (use L|gal|kWh)",
                    unit
                ));
            }
            conn.execute(
                "INSERT INTO fuel_types(name, unit) VALUES (?1, ?2)",
                params![name, unit],
            )?;
            println!("Added fuel type '{}' ({})", name, unit);
        }
        Some(("list", _)) => {
            let mut stmt = conn.prepare("SELECT name, unit FROM fuel_types ORDER BY name")?;
            let rows =
                stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?)))?;
            let mut data = Vec::new();
            for row in rows {
                let (n, u) = row?;
                data.push(vec![n, u]);
            }
            println!("{}", pretty_table(&["Fuel Type", "Unit"], data));
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            conn.execute("DELETE FROM fuel_types WHERE name=?1", params![name])?;
            println!("Removed fuel type '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
