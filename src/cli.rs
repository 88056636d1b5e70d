// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn vehicle_cmd() -> Command {
    Command::new("vehicle")
        .about("Manage vehicles")
        .subcommand(
            Command::new("add")
                .about("Add a vehicle")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("make").long("make"))
                .arg(Arg::new("model").long("model"))
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(clap::value_parser!(i32)),
                ),
        )
        .subcommand(Command::new("list").about("List vehicles"))
        .subcommand(
            Command::new("rm")
                .about("Remove a vehicle and its logs")
                .arg(Arg::new("name").long("name").required(true)),
        )
}

fn fuel_type_cmd() -> Command {
    Command::new("fuel-type")
        .about("Manage fuel types")
        .subcommand(
            Command::new("add")
                .about("Add a fuel type")
                .arg(Arg::new("name").long("name").required(true))
                .arg(
                    Arg::new("unit")
                        .long("unit")
                        .default_value("L")
                        .help("Volume unit: L, gal or kWh"),
                ),
        )
        .subcommand(Command::new("list").about("List fuel types"))
        .subcommand(
            Command::new("rm")
                .about("Remove a fuel type")
                .arg(Arg::new("name").long("name").required(true)),
        )
}

fn category_cmd() -> Command {
    Command::new("category")
        .about("Manage expense categories")
        .subcommand(
            Command::new("add")
                .about("Add an expense category")
                .arg(Arg::new("name").long("name").required(true)),
        )
        .subcommand(Command::new("list").about("List expense categories"))
        .subcommand(
            Command::new("rm")
                .about("Remove an expense category")
                .arg(Arg::new("name").long("name").required(true)),
        )
}

fn log_cmd() -> Command {
    Command::new("log")
        .about("Record and list fuel fill-ups")
        .subcommand(
            Command::new("add")
                .about("Record a fill-up")
                .arg(Arg::new("date").long("date").required(true))
                .arg(Arg::new("vehicle").long("vehicle").required(true))
                .arg(Arg::new("fuel-type").long("fuel-type").required(true))
                .arg(Arg::new("quantity").long("quantity").required(true))
                .arg(
                    Arg::new("price")
                        .long("price")
                        .required(true)
                        .help("Price per unit"),
                )
                .arg(
                    Arg::new("cost")
                        .long("cost")
                        .help("Total cost; defaults to quantity * price"),
                )
                .arg(
                    Arg::new("odometer")
                        .long("odometer")
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(Arg::new("note").long("note")),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List fill-ups")
                .arg(Arg::new("vehicle").long("vehicle"))
                .arg(Arg::new("fuel-type").long("fuel-type"))
                .arg(Arg::new("month").long("month").help("Filter by YYYY-MM"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(clap::value_parser!(usize)),
                ),
        ))
        .subcommand(
            Command::new("rm")
                .about("Remove a fill-up by id")
                .arg(
                    Arg::new("id")
                        .long("id")
                        .required(true)
                        .value_parser(clap::value_parser!(i64)),
                ),
        )
}

fn expense_cmd() -> Command {
    Command::new("expense")
        .about("Record and list non-fuel vehicle expenses")
        .subcommand(
            Command::new("add")
                .about("Record an expense")
                .arg(Arg::new("date").long("date").required(true))
                .arg(Arg::new("vehicle").long("vehicle").required(true))
                .arg(Arg::new("category").long("category").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("note").long("note")),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List expenses")
                .arg(Arg::new("vehicle").long("vehicle"))
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("month").long("month").help("Filter by YYYY-MM"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(clap::value_parser!(usize)),
                ),
        ))
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Derived analytics")
        .subcommand(json_flags(
            Command::new("consumption")
                .about("Consumption and cost rates per fuel type")
                .arg(Arg::new("vehicle").long("vehicle").required(true)),
        ))
        .subcommand(json_flags(
            Command::new("monthly")
                .about("Monthly fuel volume or cost")
                .arg(Arg::new("vehicle").long("vehicle").required(true))
                .arg(
                    Arg::new("metric")
                        .long("metric")
                        .default_value("volume")
                        .help("volume|cost"),
                )
                .arg(
                    Arg::new("months")
                        .long("months")
                        .value_parser(clap::value_parser!(usize)),
                ),
        ))
        .subcommand(json_flags(
            Command::new("trend")
                .about("Year-over-year fuel cost")
                .arg(Arg::new("vehicle").long("vehicle").required(true))
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(clap::value_parser!(i32))
                        .help("Reference year; defaults to the current year"),
                ),
        ))
        .subcommand(json_flags(
            Command::new("spend-by-category")
                .about("Expense totals per category for a month")
                .arg(Arg::new("month").long("month").required(true))
                .arg(Arg::new("vehicle").long("vehicle")),
        ))
}

fn import_cmd() -> Command {
    Command::new("import").about("Import data").subcommand(
        Command::new("logs")
            .about("Import fill-ups from CSV")
            .arg(Arg::new("path").long("path").required(true))
            .arg(Arg::new("vehicle").long("vehicle").required(true)),
    )
}

fn export_cmd() -> Command {
    Command::new("export").about("Export data").subcommand(
        Command::new("logs")
            .about("Export fill-ups")
            .arg(
                Arg::new("format")
                    .long("format")
                    .required(true)
                    .help("csv|json"),
            )
            .arg(Arg::new("out").long("out").required(true))
            .arg(Arg::new("vehicle").long("vehicle")),
    )
}

fn config_cmd() -> Command {
    Command::new("config")
        .about("Display settings")
        .subcommand(Command::new("show").about("Show current settings"))
        .subcommand(
            Command::new("set-currency")
                .about("Set the display currency label")
                .arg(Arg::new("currency").long("currency").required(true)),
        )
        .subcommand(
            Command::new("set-distance-unit")
                .about("Set the distance unit (km|mi)")
                .arg(Arg::new("unit").long("unit").required(true)),
        )
}

pub fn build_cli() -> Command {
    Command::new("fuelclip")
        .version(crate_version!())
        .about("Vehicle fuel log, expense tracking, and consumption analytics")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(vehicle_cmd())
        .subcommand(fuel_type_cmd())
        .subcommand(category_cmd())
        .subcommand(log_cmd())
        .subcommand(expense_cmd())
        .subcommand(report_cmd())
        .subcommand(import_cmd())
        .subcommand(export_cmd())
        .subcommand(config_cmd())
        .subcommand(Command::new("doctor").about("Check stored data for inconsistencies"))
}
