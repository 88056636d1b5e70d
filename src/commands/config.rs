// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{
    get_currency, get_distance_unit, pretty_table, set_currency, set_distance_unit,
};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let data = vec![
                vec!["currency".into(), get_currency(conn)?],
                vec!["distance_unit".into(), get_distance_unit(conn)?],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], data));
        }
        Some(("set-currency", sub)) => {
            let ccy = sub.get_one::<String>("currency").unwrap().to_uppercase();
            set_currency(conn, &ccy)?;
            println!("Currency set to {}", ccy);
        }
        Some(("set-distance-unit", sub)) => {
            let unit = sub.get_one::<String>("unit").unwrap();
            set_distance_unit(conn, unit)?;
            println!("Distance unit set to {}", unit);
        }
        _ => {}
    }
    Ok(())
}
