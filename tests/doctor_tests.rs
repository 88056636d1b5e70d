// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fuelclip::commands::doctor;
use rusqlite::Connection;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
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

fn issues_of_kind(issues: &[Vec<String>], kind: &str) -> usize {
    issues.iter().filter(|i| i[0] == kind).count()
}

#[test]
fn clean_data_has_no_issues() {
    let conn = base_conn();
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (1,1,'2025-01-02','40','1.50','60.00',1000)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (1,1,'2025-01-20','30','1.50','45.00',1500)",
        [],
    )
    .unwrap();
    assert!(doctor::scan(&conn).unwrap().is_empty());
}

#[test]
fn flags_cost_far_from_quantity_times_price() {
    let conn = base_conn();
    // 40 * 1.50 = 60.00 but 75.00 recorded.
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (1,1,'2025-01-02','40','1.50','75.00',1000)",
        [],
    )
    .unwrap();
    let issues = doctor::scan(&conn).unwrap();
    assert_eq!(issues_of_kind(&issues, "cost_mismatch"), 1);
}

#[test]
fn flags_odometer_rollback_within_fuel_type() {
    let conn = base_conn();
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (1,1,'2025-01-02','40','1.50','60.00',1500)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (1,1,'2025-01-20','30','1.50','45.00',1400)",
        [],
    )
    .unwrap();
    let issues = doctor::scan(&conn).unwrap();
    assert_eq!(issues_of_kind(&issues, "odometer_rollback"), 1);
}

#[test]
fn rollback_not_flagged_across_vehicles() {
    let conn = base_conn();
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (1,1,'2025-01-02','40','1.50','60.00',9000)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (2,1,'2025-01-20','30','1.50','45.00',100)",
        [],
    )
    .unwrap();
    let issues = doctor::scan(&conn).unwrap();
    assert_eq!(issues_of_kind(&issues, "odometer_rollback"), 0);
}

#[test]
fn flags_missing_odometer() {
    let conn = base_conn();
    conn.execute(
        "INSERT INTO fuel_logs(vehicle_id,fuel_type_id,date,quantity,price_per_unit,total_cost,odometer)
         VALUES (1,1,'2025-01-02','40','1.50','60.00',NULL)",
        [],
    )
    .unwrap();
    let issues = doctor::scan(&conn).unwrap();
    assert_eq!(issues_of_kind(&issues, "missing_odometer"), 1);
}
