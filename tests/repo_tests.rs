// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fuelclip::analytics::compute_consumption_metrics;
use fuelclip::repo::{EventSource, SqliteEventSource};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
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
    conn.execute(
        "INSERT INTO fuel_types(id,name,unit) VALUES (1,'Petrol','L')",
        [],
    )
    .unwrap();
    conn
}

#[test]
fn events_come_back_typed_and_date_ordered() {
    let conn = base_conn();
    // Inserted out of order on purpose.
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (1,1,'2025-02-15','35','1.60','56.00',1500)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (1,1,'2025-02-01','40','1.50','60.00',1000)",
        [],
    )
    .unwrap();
    // Another vehicle's log must not leak in.
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (2,1,'2025-02-02','99','9.99','989.01',5)",
        [],
    )
    .unwrap();

    let source = SqliteEventSource::new(&conn);
    let events = source.events_for_vehicle(1).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].date.to_string(), "2025-02-01");
    assert_eq!(events[0].quantity, d("40"));
    assert_eq!(events[1].odometer, Some(1500));
}

#[test]
fn fuel_units_map_feeds_metric_labels() {
    let conn = base_conn();
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (1,1,'2025-02-01','40','1.50','60.00',1000)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (1,1,'2025-02-15','35','1.60','56.00',1500)",
        [],
    )
    .unwrap();

    let source = SqliteEventSource::new(&conn);
    let events = source.events_for_vehicle(1).unwrap();
    let units = source.fuel_units().unwrap();
    let report = compute_consumption_metrics(&events, &units);

    let m = &report.by_fuel_type[&1];
    assert_eq!(m.unit, "L");
    assert_eq!(m.total_distance, 500);
    assert_eq!(m.total_volume, d("75"));
}

#[test]
fn bad_stored_quantity_surfaces_as_context_error() {
    let conn = base_conn();
    conn.execute(
        "INSERT INTO fuel_logs(id,vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (7,1,1,'2025-02-01','forty','1.50','60.00',1000)",
        [],
    )
    .unwrap();
    let source = SqliteEventSource::new(&conn);
    let err = source.events_for_vehicle(1).unwrap_err();
    assert!(err.to_string().contains("Fuel log 7 has bad quantity"));
}
