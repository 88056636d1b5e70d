// Copyright (c) 2025 Soumyadip Sarkar.
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
            let make = sub.get_one::<String>("make");
            let model = sub.get_one::<String>("model");
            let year = sub.get_one::<i32>("year");
            conn.execute(
                "INSERT INTO vehicles(name, make, model, year) VALUES (?1, ?2, ?3, ?4)",
                params![name, make, model, year],
            )?;
            println!("Added vehicle '{}'", name);
        }
        Some(("list", _)) => {
            let mut stmt = conn.prepare(
                "SELECT name, make, model, year, created_at FROM vehicles ORDER BY name",
            )?;
            let rows = stmt.query_map([], |r| {
                Ok((
                    r.get::<_, String>(0)?,
                    r.get::<_, Option<String>>(1)?,
                    r.get::<_, Option<String>>(2)?,
                    r.get::<_, Option<i32>>(3)?,
                    r.get::<_, String>(4)?,
                ))
            })?;
            let mut data = Vec::new();
            for row in rows {
                let (n, mk, md, y, cr) = row?;
                data.push(vec![
                    n,
                    mk.unwrap_or_default(),
                    md.unwrap_or_default(),
                    y.map(|v| v.to_string()).unwrap_or_default(),
                    cr,
                ]);
            }
            println!(
                "{}",
                pretty_table(&["Name", "Make", "Model", "Year", "Created"], data)
            );
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            conn.execute("DELETE FROM vehicles WHERE name=?1", params![name])?;
            println!("Removed vehicle '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
