// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fuelclip::{cli, commands::exporter};
use rusqlite::Connection;
use serde_json::json;
use tempfile::tempdir;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE vehicles(id INTEGER PRIMARY KEY, name TEXT, make TEXT, model TEXT, year INTEGER);
        CREATE TABLE fuel_types(id INTEGER PRIMARY KEY, name TEXT, unit TEXT);
        CREATE TABLE fuel_logs(
            id INTEGER PRIMARY KEY,
            vehicle_id INTEGER NOT NULL,
            fuel_type_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            quantity TEXT NOT NULL,
            price_per_unit TEXT NOT NULL,
            total_cost TEXT NOT NULL,
            odometer INTEGER,
            note TEXT
        );
        "#,
    )
    .unwrap();
    conn
}

fn run_export(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["fuelclip", "export", "logs"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_logs_writes_pretty_json() {
    let conn = base_conn();
    conn.execute("INSERT INTO vehicles(id,name) VALUES (1,'Corolla')", [])
        .unwrap();
    conn.execute(
        "INSERT INTO fuel_types(id,name,unit) VALUES (1,'Petrol','L')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer,note)
         VALUES (1,1,'2025-01-02','40','1.50','60.00',12000,'first tank')",
        [],
    )
    .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&conn, &["--format", "json", "--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "date": "2025-01-02",
                "vehicle": "Corolla",
                "fuel_type": "Petrol",
                "quantity": "40",
                "price_per_unit": "1.50",
                "total_cost": "60.00",
                "odometer": 12000,
                "note": "first tank"
            }
        ])
    );
}

#[test]
fn export_logs_filters_by_vehicle_in_csv() {
    let conn = base_conn();
    conn.execute("INSERT INTO vehicles(id,name) VALUES (1,'Corolla')", [])
        .unwrap();
    conn.execute("INSERT INTO vehicles(id,name) VALUES (2,'Van')", [])
        .unwrap();
    conn.execute(
        "INSERT INTO fuel_types(id,name,unit) VALUES (1,'Petrol','L')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer,note)
         VALUES (1,1,'2025-01-02','40','1.50','60.00',NULL,NULL)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer,note)
         VALUES (2,1,'2025-01-03','50','1.40','70.00',NULL,NULL)",
        [],
    )
    .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &conn,
        &["--format", "csv", "--out", &out_str, "--vehicle", "Van"],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "date,fuel_type,quantity,price_per_unit,total_cost,odometer,note"
    );
    assert!(lines[1].starts_with("2025-01-03,Petrol,50,"));
}

#[test]
fn export_logs_rejects_unknown_format() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run_export(&conn, &["--format", "xml", "--out", &out_str]).is_err());
    assert!(!out_path.exists());
}
